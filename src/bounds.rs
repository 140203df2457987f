// Which endpoints of a range are inclusive, written the way a range
// literal brackets its values: '[' / ']' include, '(' / ')' exclude.
use std::fmt;
use std::str::FromStr;

use crate::error::RangeError;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum BoundSpec {
    /// `[]`
    Closed,
    /// `[)`, the canonical form for discrete domains.
    #[default]
    ClosedOpen,
    /// `(]`
    OpenClosed,
    /// `()`
    Open,
}

impl BoundSpec {
    pub const ALL: [BoundSpec; 4] = [
        BoundSpec::Closed,
        BoundSpec::ClosedOpen,
        BoundSpec::OpenClosed,
        BoundSpec::Open,
    ];

    /// Returns `(lower_inc, upper_inc)`.
    pub const fn inclusivity(self) -> (bool, bool) {
        match self {
            BoundSpec::Closed => (true, true),
            BoundSpec::ClosedOpen => (true, false),
            BoundSpec::OpenClosed => (false, true),
            BoundSpec::Open => (false, false),
        }
    }

    pub const fn from_inclusivity(lower_inc: bool, upper_inc: bool) -> Self {
        match (lower_inc, upper_inc) {
            (true, true) => BoundSpec::Closed,
            (true, false) => BoundSpec::ClosedOpen,
            (false, true) => BoundSpec::OpenClosed,
            (false, false) => BoundSpec::Open,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            BoundSpec::Closed => "[]",
            BoundSpec::ClosedOpen => "[)",
            BoundSpec::OpenClosed => "(]",
            BoundSpec::Open => "()",
        }
    }

    // "\"[]\", \"[)\", \"(]\", \"()\"" for error messages
    pub(crate) fn expected() -> String {
        Self::ALL
            .iter()
            .map(|spec| format!("{:?}", spec.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for BoundSpec {
    type Err = RangeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|spec| spec.as_str() == token)
            .ok_or_else(|| RangeError::InvalidBoundSpec {
                token: token.to_owned(),
            })
    }
}

impl fmt::Display for BoundSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
