use std::fmt;
use std::str::FromStr;

use strum::{Display, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, IntoStaticStr)]
pub enum SortDir {
    #[default]
    #[strum(serialize = "asc")]
    Asc,
    #[strum(serialize = "desc")]
    Desc,
}

impl SortDir {
    #[inline]
    pub fn toggle(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// Comparison strategy of a column.
///
/// Wire codes are `a` (alphabetic) and `n` (numeric).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, IntoStaticStr)]
pub enum SortMode {
    #[default]
    #[strum(serialize = "a")]
    Alpha,
    #[strum(serialize = "n")]
    Numeric,
}

/// A fully specified sort: which column, which direction, which comparison.
///
/// Encoded as `"<column> <asc|desc> <a|n>"`, see [`crate::utils::directive`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortDirective {
    pub column: String,
    pub dir: SortDir,
    pub mode: SortMode,
}

impl SortDirective {
    pub fn new(column: impl Into<String>, dir: SortDir, mode: SortMode) -> Self {
        Self { column: column.into(), dir, mode }
    }
}

impl fmt::Display for SortDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.dir, self.mode)
    }
}

impl FromStr for SortDirective {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::utils::directive::decode(Some(s)).ok_or(())
    }
}
