//! Display position of a note within its customer's list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 1-based position in a customer's note list.
///
/// Ranks are always positive. Rank 1 is shown first. Within one customer no
/// two notes share a rank, and after every committed create or reposition
/// the ranks present are exactly `1..=N`.
///
/// # Examples
///
/// ```
/// use clerk::domain::Rank;
///
/// let rank: Rank = "3".parse().unwrap();
/// assert_eq!(rank.get(), 3);
/// assert!("0".parse::<Rank>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u32);

/// Error returned when a rank is zero, negative, or not a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRankError(String);

impl fmt::Display for ParseRankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseRankError {}

impl Rank {
    /// The first position.
    pub const FIRST: Rank = Rank(1);

    /// A position after every real note. Stores clamp it to the end of the list.
    pub const LAST: Rank = Rank(u32::MAX);

    /// Creates a rank, rejecting zero.
    pub fn new(value: u32) -> Result<Self, ParseRankError> {
        if value == 0 {
            return Err(ParseRankError("rank must be a positive integer".to_string()));
        }
        Ok(Self(value))
    }

    /// Converts a value read back from the store.
    pub fn from_i64(value: i64) -> Result<Self, ParseRankError> {
        let value = u32::try_from(value)
            .map_err(|_| ParseRankError(format!("rank out of range: {}", value)))?;
        Self::new(value)
    }

    /// Returns the numeric position.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns the position as the integer type SQLite binds.
    pub fn as_i64(self) -> i64 {
        i64::from(self.0)
    }

    /// Returns the next position down the list.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the lower of this rank and `limit`.
    pub fn clamp_to(self, limit: Rank) -> Self {
        std::cmp::min(self, limit)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value: i64 = s
            .parse()
            .map_err(|_| ParseRankError(format!("invalid rank '{}': expected a positive integer", s)))?;
        Self::from_i64(value)
    }
}

impl TryFrom<u32> for Rank {
    type Error = ParseRankError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Rank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u32::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
