use std::fmt;
use std::str::FromStr;

/// Which comparison pane a request or action belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewSide {
    Left,
    Right,
}

impl fmt::Display for ViewSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewSide::Left => write!(f, "left"),
            ViewSide::Right => write!(f, "right"),
        }
    }
}

/// Rejected side value, reported before any dispatch or controller mutation
/// can happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseViewSideError {
    pub value: String,
}

impl fmt::Display for ParseViewSideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid view side: '{}'", self.value)
    }
}

impl std::error::Error for ParseViewSideError {}

impl FromStr for ViewSide {
    type Err = ParseViewSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(ViewSide::Left),
            "right" => Ok(ViewSide::Right),
            other => Err(ParseViewSideError {
                value: other.to_string(),
            }),
        }
    }
}
