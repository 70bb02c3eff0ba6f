//! Score value object for self-reported 1-10 ratings.
//!
//! Used for emotional intensity on thought records and for mood before and
//! after journaling.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A self-reported rating between 1 and 10 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Midpoint used when nothing has been reported yet.
    pub const NEUTRAL: Self = Self(5);

    /// Creates a Score, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "score",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Signed difference `self - other`.
    pub fn delta(&self, other: Score) -> i8 {
        self.0 as i8 - other.0 as i8
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<u8> for Score {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_accepts_bounds() {
        assert_eq!(Score::try_new(1).unwrap().value(), 1);
        assert_eq!(Score::try_new(10).unwrap().value(), 10);
    }

    #[test]
    fn score_rejects_out_of_range() {
        assert!(Score::try_new(0).is_err());
        assert!(Score::try_new(11).is_err());
    }

    #[test]
    fn delta_is_signed() {
        let seven = Score::try_new(7).unwrap();
        let three = Score::try_new(3).unwrap();
        assert_eq!(seven.delta(three), 4);
        assert_eq!(three.delta(seven), -4);
    }

    #[test]
    fn score_deserialization_validates() {
        assert!(serde_json::from_str::<Score>("4").is_ok());
        assert!(serde_json::from_str::<Score>("0").is_err());
        assert!(serde_json::from_str::<Score>("42").is_err());
    }

    #[test]
    fn score_displays_out_of_ten() {
        assert_eq!(Score::try_new(6).unwrap().to_string(), "6/10");
    }
}
