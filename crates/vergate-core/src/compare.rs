//! Version comparison results.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::version::Version;

/// Outcome of comparing a left version against a right version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Greater,
    Equal,
    Less,
}

impl Comparison {
    /// The outcome with the operands swapped.
    pub fn reverse(self) -> Self {
        match self {
            Comparison::Greater => Comparison::Less,
            Comparison::Equal => Comparison::Equal,
            Comparison::Less => Comparison::Greater,
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Comparison::Greater,
            Ordering::Equal => Comparison::Equal,
            Ordering::Less => Comparison::Less,
        }
    }
}

impl From<Comparison> for Ordering {
    fn from(comparison: Comparison) -> Self {
        match comparison {
            Comparison::Greater => Ordering::Greater,
            Comparison::Equal => Ordering::Equal,
            Comparison::Less => Ordering::Less,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Comparison::Greater => "greater",
            Comparison::Equal => "equal",
            Comparison::Less => "less",
        };
        f.write_str(s)
    }
}

/// An immutable comparison outcome together with the versions that produced
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    outcome: Comparison,
    left: Version,
    right: Version,
}

impl ComparisonResult {
    pub fn outcome(&self) -> Comparison {
        self.outcome
    }

    pub fn left(&self) -> &Version {
        &self.left
    }

    pub fn right(&self) -> &Version {
        &self.right
    }

    /// The result of comparing the same two versions in the other order.
    pub fn reverse(self) -> Self {
        Self {
            outcome: self.outcome.reverse(),
            left: self.right,
            right: self.left,
        }
    }
}

/// Compare `a` against `b`.
///
/// Numeric components are compared left to right with missing trailing
/// components treated as `0`; the first unequal pair decides. Suffixes only
/// matter when every numeric component is equal.
pub fn compare(a: &Version, b: &Version) -> ComparisonResult {
    ComparisonResult {
        outcome: a.cmp_version(b).into(),
        left: a.clone(),
        right: b.clone(),
    }
}
