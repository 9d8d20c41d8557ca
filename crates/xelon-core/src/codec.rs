//! Wire values that may arrive as either a single string or a list.

use serde::{Deserialize, Serialize};

/// A JSON value that is either a string or an array of strings.
///
/// Forwarding rules carry their source and destination addresses this way:
/// the side that accepts several CIDRs is a list, the other a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    /// A single string.
    One(String),
    /// A list of strings.
    Many(Vec<String>),
}

impl OneOrMany {
    /// Pick the wire shape from a scalar and a list representation.
    ///
    /// A non-empty scalar wins, then a non-empty list. Both empty yields
    /// `None`, which callers serialize by omitting the field.
    #[must_use]
    pub fn from_parts(one: &str, many: &[String]) -> Option<Self> {
        if !one.is_empty() {
            Some(Self::One(one.to_owned()))
        } else if !many.is_empty() {
            Some(Self::Many(many.to_vec()))
        } else {
            None
        }
    }

    /// Split into `(scalar, list)`; the representation not received is empty.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<String>) {
        match self {
            Self::One(one) => (one, Vec::new()),
            Self::Many(many) => (String::new(), many),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_either_shape() {
        let one: OneOrMany = serde_json::from_value(json!("10.0.0.1")).unwrap();
        assert_eq!(one.into_parts(), ("10.0.0.1".to_string(), Vec::new()));

        let many: OneOrMany =
            serde_json::from_value(json!(["10.0.0.0/24", "192.168.0.0/16"])).unwrap();
        assert_eq!(
            many.into_parts(),
            (
                String::new(),
                vec!["10.0.0.0/24".to_string(), "192.168.0.0/16".to_string()]
            )
        );
    }

    #[test]
    fn scalar_takes_precedence_over_list() {
        let value = OneOrMany::from_parts("1.1.1.1", &["2.2.2.2".to_string()]);
        assert_eq!(value, Some(OneOrMany::One("1.1.1.1".to_string())));
        assert_eq!(serde_json::to_value(&value).unwrap(), json!("1.1.1.1"));
    }

    #[test]
    fn list_used_when_scalar_empty() {
        let value = OneOrMany::from_parts("", &["0.0.0.0/0".to_string()]);
        assert_eq!(serde_json::to_value(&value).unwrap(), json!(["0.0.0.0/0"]));
    }

    #[test]
    fn both_empty_is_absent() {
        assert_eq!(OneOrMany::from_parts("", &[]), None);
    }
}
