//! Parsed version strings.
//!
//! A [`Version`] is one or more dot-separated numeric components followed by
//! an optional opaque suffix starting at the first `-` or `+`
//! (e.g. `1.2.0`, `1.2`, `1.2.0.7`, `1.0.0-rc.1`, `1.0.0+build.5`).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ParseError, Result};

/// A version with numeric components and an optional opaque suffix.
///
/// Equality and ordering treat missing trailing components as `0`, so
/// `1.2` and `1.2.0` compare equal. When all numeric components match, the
/// suffixes are compared byte-wise with a missing suffix sorting first.
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<u64>,
    suffix: Option<String>,
}

impl Version {
    /// Numeric components in the order they were written.
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Suffix including its leading separator (`-rc.1`, `+build.5`).
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn major(&self) -> u64 {
        self.component(0)
    }

    pub fn minor(&self) -> u64 {
        self.component(1)
    }

    pub fn patch(&self) -> u64 {
        self.component(2)
    }

    /// Component at `index`, zero when the version is shorter.
    pub fn component(&self, index: usize) -> u64 {
        self.components.get(index).copied().unwrap_or(0)
    }

    /// Zero-padded component-wise comparison, then suffix comparison.
    pub fn cmp_version(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        for i in 0..len {
            match self.component(i).cmp(&other.component(i)) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        let ours = self.suffix.as_deref().unwrap_or("");
        let theirs = other.suffix.as_deref().unwrap_or("");
        ours.cmp(theirs)
    }
}

/// Parse `input` into a [`Version`].
///
/// Only ASCII digits are accepted in numeric segments, so `v1.2.0`, `+1`
/// and ` 1` are rejected rather than coerced. Leading zeros are accepted
/// (`01` parses as `1`).
pub fn parse_version(input: &str) -> Result<Version> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let (numeric, suffix) = match input.find(|c: char| c == '-' || c == '+') {
        Some(at) => (&input[..at], Some(&input[at..])),
        None => (input, None),
    };

    let components = numeric
        .split('.')
        .enumerate()
        .map(|(index, segment)| parse_segment(index + 1, segment))
        .collect::<Result<Vec<u64>>>()?;

    if let Some(suffix) = suffix {
        validate_suffix(suffix)?;
    }

    Ok(Version {
        components,
        suffix: suffix.map(str::to_string),
    })
}

fn parse_segment(position: usize, segment: &str) -> Result<u64> {
    if segment.is_empty() {
        return Err(ParseError::EmptySegment { position });
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::NonNumeric {
            segment: segment.to_string(),
        });
    }
    segment.parse::<u64>().map_err(|_| ParseError::Overflow {
        segment: segment.to_string(),
    })
}

fn validate_suffix(suffix: &str) -> Result<()> {
    // First char is the separator that introduced the suffix.
    let body = &suffix[1..];
    let well_formed = !body.is_empty()
        && body
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+'));
    if well_formed {
        Ok(())
    } else {
        Err(ParseError::MalformedSuffix {
            suffix: suffix.to_string(),
        })
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_version(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in &self.components {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
            first = false;
        }
        if let Some(suffix) = &self.suffix {
            f.write_str(suffix)?;
        }
        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_version(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_version(other)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
