/// The stable, path-based identity of a selection within an operation.
///
/// A [`FieldKey`] is built from the *names* (never the aliases) of every field
/// and inline fragment on the path from the operation root (exclusive) down to
/// and including the selection itself. Field names are used verbatim; an
/// inline fragment contributes `[TypeName]` (or `[]` when it has no type
/// condition). Segments are joined with `.`:
///
/// ```text
/// query {
///   search {        # search
///     ... on User { # search.[User]
///       name        # search.[User].name
///     }
///   }
/// }
/// ```
///
/// Two selections with equal keys are the same logical field regardless of
/// alias, argument values, or position.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(transparent)]
pub struct FieldKey(String);
impl FieldKey {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The key of a field named `field_name` selected under `parent` (or at
    /// the root of an operation when `parent` is `None`).
    pub fn for_field(parent: Option<&FieldKey>, field_name: &str) -> Self {
        Self::join(parent, field_name)
    }

    /// The key of an inline fragment selected under `parent`.
    pub fn for_fragment(parent: Option<&FieldKey>, type_condition: Option<&str>) -> Self {
        Self::join(parent, format!("[{}]", type_condition.unwrap_or_default()).as_str())
    }

    /// Indicates whether `self` names `other` or one of its ancestors.
    pub fn is_prefix_of(&self, other: &FieldKey) -> bool {
        other.0 == self.0
            || other.0.strip_prefix(self.0.as_str())
                .is_some_and(|rest| rest.starts_with('.'))
    }

    fn join(parent: Option<&FieldKey>, segment: &str) -> Self {
        match parent {
            Some(parent) => Self(format!("{}.{segment}", parent.0)),
            None => Self(segment.to_string()),
        }
    }

    /// The key of the enclosing field or fragment, if any.
    pub fn parent(&self) -> Option<FieldKey> {
        self.0.rsplit_once('.').map(|(parent, _)| Self(parent.to_string()))
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Renders this key as a suffix usable within a GraphQL variable name:
    /// fragment brackets are stripped and segments are joined with `_`
    /// (`search.[User].posts` becomes `search_User_posts`).
    pub fn to_variable_suffix(&self) -> String {
        self.segments()
            .map(|segment| segment.trim_start_matches('[').trim_end_matches(']'))
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("_")
    }
}
impl std::borrow::Borrow<str> for FieldKey {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}
impl std::convert::From<&str> for FieldKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
impl std::convert::From<String> for FieldKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}
impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::FieldKey;

    #[test]
    fn keys_join_field_and_fragment_segments() {
        let search = FieldKey::for_field(None, "search");
        let user = FieldKey::for_fragment(Some(&search), Some("User"));
        let name = FieldKey::for_field(Some(&user), "name");

        assert_eq!(search.as_str(), "search");
        assert_eq!(user.as_str(), "search.[User]");
        assert_eq!(name.as_str(), "search.[User].name");
        assert_eq!(name.parent(), Some(user.clone()));
        assert_eq!(search.parent(), None);
        assert_eq!(
            FieldKey::for_fragment(Some(&search), None).as_str(),
            "search.[]",
        );
    }

    #[test]
    fn prefix_checks_respect_segment_boundaries() {
        let user = FieldKey::from("user");
        assert!(user.is_prefix_of(&FieldKey::from("user")));
        assert!(user.is_prefix_of(&FieldKey::from("user.friends.name")));
        assert!(!user.is_prefix_of(&FieldKey::from("users.name")));
        assert!(!FieldKey::from("user.name").is_prefix_of(&user));
    }

    #[test]
    fn variable_suffix_strips_fragment_brackets() {
        assert_eq!(
            FieldKey::from("search.[User].posts").to_variable_suffix(),
            "search_User_posts",
        );
        assert_eq!(FieldKey::from("node.[]").to_variable_suffix(), "node");
    }
}
