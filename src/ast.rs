use indexmap::IndexMap;
use serde::Serialize;

/// One nesting level of a parsed config, in insertion order.
pub type Group = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(String),
    Group(Group),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Value::Scalar(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        if let Value::Group(items) = self {
            Some(items)
        } else {
            None
        }
    }
}
