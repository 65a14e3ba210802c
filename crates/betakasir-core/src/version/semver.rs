//! Strict three-part semantic version.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::VersionError;

/// `major.minor.patch`, each a non-negative integer.
///
/// Field order matters: the derived `Ord` compares major, then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SemanticVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a dot-separated version with exactly three numeric segments.
    ///
    /// Leading zeros are accepted (`"1.02.0"` is minor 2). Whitespace
    /// anywhere, signs, empty segments, pre-release or build suffixes are
    /// rejected.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        if input.is_empty() {
            return Err(VersionError::Empty);
        }

        let segments: Vec<&str> = input.split('.').collect();
        if segments.len() != 3 {
            return Err(VersionError::SegmentCount {
                input: input.to_string(),
                found: segments.len(),
            });
        }

        let major = parse_segment(input, segments[0])?;
        let minor = parse_segment(input, segments[1])?;
        let patch = parse_segment(input, segments[2])?;
        Ok(Self::new(major, minor, patch))
    }

    /// Canonical `"major.minor.patch"` form, without leading zeros.
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

fn parse_segment(input: &str, segment: &str) -> Result<u32, VersionError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::NonNumeric {
            input: input.to_string(),
            segment: segment.to_string(),
        });
    }
    // All digits, so the only possible failure is overflow.
    segment.parse::<u32>().map_err(|_| VersionError::Overflow {
        input: input.to_string(),
        segment: segment.to_string(),
    })
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SemanticVersion {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Serialize for SemanticVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemanticVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
