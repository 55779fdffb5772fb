//! Row identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a row within a table.
///
/// Callers supply either a string or an integer key. Rows that arrive without
/// a key (or with a key already taken by an earlier row) are identified by
/// their position in the input list instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowKey {
    /// Integer key supplied by the caller.
    Number(i64),
    /// String key supplied by the caller.
    Text(String),
    /// Synthetic key: index of the record in the input list.
    #[serde(skip)]
    Position(usize),
}

impl RowKey {
    /// Whether this key was assigned by the table rather than the caller.
    pub fn is_synthetic(&self) -> bool {
        matches!(self, RowKey::Position(_))
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Number(n) => write!(f, "{n}"),
            RowKey::Text(s) => f.write_str(s),
            RowKey::Position(i) => write!(f, "#{i}"),
        }
    }
}

impl From<String> for RowKey {
    fn from(value: String) -> Self {
        RowKey::Text(value)
    }
}

impl From<&str> for RowKey {
    fn from(value: &str) -> Self {
        RowKey::Text(value.to_string())
    }
}

impl From<&String> for RowKey {
    fn from(value: &String) -> Self {
        RowKey::Text(value.clone())
    }
}

macro_rules! row_key_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RowKey {
                fn from(value: $ty) -> Self {
                    RowKey::Number(value as i64)
                }
            }
        )*
    };
}

row_key_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for RowKey {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => RowKey::Number(n),
            Err(_) => RowKey::Text(value.to_string()),
        }
    }
}

impl From<usize> for RowKey {
    fn from(value: usize) -> Self {
        RowKey::from(value as u64)
    }
}

impl std::str::FromStr for RowKey {
    type Err = std::convert::Infallible;

    /// Integers parse as `Number`, a leading `#` followed by digits as
    /// `Position`, anything else as `Text`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.parse::<i64>() {
            return Ok(RowKey::Number(n));
        }
        if let Some(rest) = s.strip_prefix('#')
            && let Ok(i) = rest.parse::<usize>()
        {
            return Ok(RowKey::Position(i));
        }
        Ok(RowKey::Text(s.to_string()))
    }
}
