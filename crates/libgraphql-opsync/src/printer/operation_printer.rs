use crate::operation::DirectiveAnnotation;
use crate::operation::FieldSelection;
use crate::operation::OperationTree;
use crate::operation::Selection;
use crate::Value;
use indexmap::IndexMap;

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PrintOptions {
    /// Print each field's schema description as `#` comment lines above it,
    /// unless the field already carries comments from its source text.
    pub include_descriptions: bool,

    /// The text repeated once per nesting level.
    pub indent: String,
}
impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            include_descriptions: false,
            indent: "  ".to_string(),
        }
    }
}

/// Renders an [`OperationTree`] back to operation text.
///
/// Output is deterministic: printing the same tree twice yields identical
/// text, and the text always ends with a single newline.
#[derive(Clone, Debug, Default)]
pub struct OperationPrinter {
    options: PrintOptions,
}
impl OperationPrinter {
    pub fn new(options: PrintOptions) -> Self {
        Self { options }
    }

    pub fn print(&self, tree: &OperationTree) -> String {
        let mut out = String::new();
        self.print_comments(&mut out, tree.leading_comments(), 0);

        out.push_str(tree.operation_kind().keyword());
        if let Some(name) = tree.name() {
            out.push(' ');
            out.push_str(name);
        }

        if !tree.variables().is_empty() {
            if tree.name().is_none() {
                out.push(' ');
            }
            let var_defs = tree.variables().iter().map(|var_def| {
                let mut var_str = format!("${}: {}", var_def.name(), var_def.type_annotation());
                if let Some(default_value) = var_def.default_value() {
                    var_str.push_str(" = ");
                    var_str.push_str(default_value.to_graphql_string().as_str());
                }
                var_str
            }).collect::<Vec<_>>();
            out.push('(');
            out.push_str(var_defs.join(", ").as_str());
            out.push(')');
        }

        print_directives(&mut out, tree.directives());
        out.push_str(" {\n");
        for selection in tree.selections() {
            self.print_selection(&mut out, selection, 1);
        }
        out.push_str("}\n");
        out
    }

    fn print_comments(&self, out: &mut String, comments: &[String], level: usize) {
        for comment in comments {
            self.push_indent(out, level);
            out.push('#');
            if !comment.is_empty() {
                out.push(' ');
                out.push_str(comment);
            }
            out.push('\n');
        }
    }

    fn print_field_comments(&self, out: &mut String, field: &FieldSelection, level: usize) {
        if !field.comments().is_empty() {
            self.print_comments(out, field.comments(), level);
        } else if self.options.include_descriptions {
            if let Some(description) = field.description() {
                let lines = description.lines()
                    .map(|line| line.trim_end().to_string())
                    .collect::<Vec<_>>();
                self.print_comments(out, &lines, level);
            }
        }
    }

    fn print_selection(&self, out: &mut String, selection: &Selection, level: usize) {
        match selection {
            Selection::Field(field) => {
                self.print_field_comments(out, field, level);
                self.push_indent(out, level);
                if let Some(alias) = field.alias() {
                    out.push_str(alias);
                    out.push_str(": ");
                }
                out.push_str(field.name());
                print_arguments(out, field.arguments());
                print_directives(out, field.directives());
            },

            Selection::Fragment(fragment) => {
                self.print_comments(out, fragment.comments(), level);
                self.push_indent(out, level);
                out.push_str("...");
                if let Some(type_condition) = fragment.type_condition() {
                    out.push_str(" on ");
                    out.push_str(type_condition);
                }
                print_directives(out, fragment.directives());
            },
        }

        if selection.selections().is_empty() {
            out.push('\n');
            return;
        }

        out.push_str(" {\n");
        for child in selection.selections() {
            self.print_selection(out, child, level + 1);
        }
        self.push_indent(out, level);
        out.push_str("}\n");
    }

    fn push_indent(&self, out: &mut String, level: usize) {
        for _ in 0..level {
            out.push_str(self.options.indent.as_str());
        }
    }
}

fn print_arguments(out: &mut String, arguments: &IndexMap<String, Value>) {
    if arguments.is_empty() {
        return;
    }
    out.push('(');
    out.push_str(
        arguments.iter()
            .map(|(name, value)| format!("{name}: {}", value.to_graphql_string()))
            .collect::<Vec<_>>()
            .join(", ")
            .as_str(),
    );
    out.push(')');
}

fn print_directives(out: &mut String, directives: &[DirectiveAnnotation]) {
    for directive in directives {
        out.push_str(" @");
        out.push_str(directive.name());
        print_arguments(out, directive.arguments());
    }
}

impl std::fmt::Display for OperationTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(OperationPrinter::default().print(self).as_str())
    }
}
