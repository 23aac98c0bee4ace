use crate::ast;
use indexmap::IndexMap;

/// An owned GraphQL input value as it appears in an argument position of an
/// operation (or as a variable/parameter default value).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    VarRef(String),
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// If this value is a bare variable reference (`$name`), return the
    /// variable's name.
    pub fn as_var_ref(&self) -> Option<&str> {
        if let Self::VarRef(name) = self {
            Some(name.as_str())
        } else {
            None
        }
    }

    pub(crate) fn from_ast(ast_value: &ast::operation::Value) -> Self {
        match ast_value {
            ast::operation::Value::Variable(var_name) =>
                Value::VarRef(var_name.clone()),

            ast::operation::Value::Int(value) =>
                Value::Int(value.as_i64().unwrap_or_default()),

            ast::operation::Value::Float(value) =>
                Value::Float(*value),

            ast::operation::Value::String(value) =>
                Value::String(value.clone()),

            ast::operation::Value::Boolean(value) =>
                Value::Bool(*value),

            ast::operation::Value::Null =>
                Value::Null,

            ast::operation::Value::Enum(value) =>
                Value::Enum(value.clone()),

            ast::operation::Value::List(values) =>
                Value::List(values.iter().map(Value::from_ast).collect()),

            ast::operation::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(key, ast_value)|
                    (key.clone(), Value::from_ast(ast_value))
                ).collect()),
        }
    }

    /// Rewrite every `$old_name` reference nested anywhere in this value to
    /// `$new_name`. Returns the number of references rewritten.
    pub fn rename_variable(&mut self, old_name: &str, new_name: &str) -> usize {
        match self {
            Value::VarRef(name) if name == old_name => {
                *name = new_name.to_string();
                1
            },

            Value::List(values) =>
                values.iter_mut()
                    .map(|value| value.rename_variable(old_name, new_name))
                    .sum(),

            Value::Object(entries) =>
                entries.values_mut()
                    .map(|value| value.rename_variable(old_name, new_name))
                    .sum(),

            _ => 0,
        }
    }

    pub fn to_graphql_string(&self) -> String {
        match self {
            Value::VarRef(name) => format!("${name}"),
            Value::Int(value) => value.to_string(),
            Value::Float(value) =>
                if value.is_finite() && value.fract() == 0.0 {
                    format!("{value:.1}")
                } else {
                    value.to_string()
                },
            Value::String(value) => quote_string(value),
            Value::Bool(value) => value.to_string(),
            Value::Null => "null".to_string(),
            Value::Enum(value) => value.clone(),
            Value::List(values) => format!(
                "[{}]",
                values.iter()
                    .map(|value| value.to_graphql_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Value::Object(entries) => format!(
                "{{{}}}",
                entries.iter()
                    .map(|(key, value)| format!("{key}: {}", value.to_graphql_string()))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }

    /// Appends the name of every variable referenced anywhere within this
    /// value to `names`, in the order they appear.
    pub fn variable_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Value::VarRef(name) => names.push(name.as_str()),
            Value::List(values) =>
                values.iter().for_each(|value| value.variable_names(names)),
            Value::Object(entries) =>
                entries.values().for_each(|value| value.variable_names(names)),
            _ => (),
        }
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}

fn quote_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{0008}' => quoted.push_str("\\b"),
            '\u{000C}' => quoted.push_str("\\f"),
            ch if ch.is_control() => quoted.push_str(&format!("\\u{:04X}", ch as u32)),
            ch => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::Value;
    use indexmap::IndexMap;

    #[test]
    fn renames_nested_variable_references() {
        let mut value = Value::Object(IndexMap::from([
            ("id".to_string(), Value::VarRef("id".to_string())),
            ("tags".to_string(), Value::List(vec![
                Value::VarRef("id".to_string()),
                Value::VarRef("other".to_string()),
            ])),
        ]));

        assert_eq!(value.rename_variable("id", "userId"), 2);
        assert_eq!(
            value.to_graphql_string(),
            "{id: $userId, tags: [$userId, $other]}",
        );

        let mut names = vec![];
        value.variable_names(&mut names);
        assert_eq!(names, vec!["userId", "userId", "other"]);
    }

    #[test]
    fn prints_scalar_values_as_graphql_literals() {
        assert_eq!(Value::Float(2.0).to_graphql_string(), "2.0");
        assert_eq!(Value::Float(2.5).to_graphql_string(), "2.5");
        assert_eq!(Value::Int(-3).to_graphql_string(), "-3");
        assert_eq!(Value::Enum("ASC".to_string()).to_graphql_string(), "ASC");
        assert_eq!(Value::Null.to_graphql_string(), "null");
        assert_eq!(
            Value::String("say \"hi\"\n".to_string()).to_graphql_string(),
            r#""say \"hi\"\n""#,
        );
    }
}
