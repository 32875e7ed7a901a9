use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a question within its set.
///
/// Question banks are not consistent about id shape: the extracted sets use
/// plain integers while hand-authored sets use strings. Both are accepted
/// and round-tripped untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Num(i64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Num(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Id {
    fn from(v: i64) -> Self {
        Id::Num(v)
    }
}

impl From<&str> for Id {
    fn from(v: &str) -> Self {
        Id::Text(v.to_string())
    }
}

impl From<String> for Id {
    fn from(v: String) -> Self {
        Id::Text(v)
    }
}
