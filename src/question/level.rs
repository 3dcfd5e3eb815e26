//! # Difficulty Levels
//!
//! Numeric range and precision that questions are generated from.

use crate::utils::round_to_decimals;
use crate::{config, MathdashError, MathdashResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Range and precision of the numbers in a question.
///
/// A level is validated when it is built or deserialized, so every level the
/// engine sees can produce a nonzero divisor.
///
/// # Examples
///
/// ```
/// use mathdash::DifficultyLevel;
///
/// let level = DifficultyLevel::new(1, 0.0, 5.0).unwrap();
/// assert_eq!(level.number_decimals(), 1);
///
/// assert!(DifficultyLevel::new(0, 0.0, 0.0).is_err());
/// assert!(DifficultyLevel::new(0, 9.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDifficultyLevel", into = "RawDifficultyLevel")]
pub struct DifficultyLevel {
    number_decimals: u32,
    minimum_random: f64,
    maximum_random: f64,
}

/// Unvalidated on-disk form of a [`DifficultyLevel`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawDifficultyLevel {
    #[serde(default, alias = "numberDecimals")]
    number_decimals: u32,
    #[serde(alias = "minimumRandom")]
    minimum_random: f64,
    #[serde(alias = "maximumRandom")]
    maximum_random: f64,
}

impl TryFrom<RawDifficultyLevel> for DifficultyLevel {
    type Error = MathdashError;

    fn try_from(raw: RawDifficultyLevel) -> MathdashResult<Self> {
        DifficultyLevel::new(raw.number_decimals, raw.minimum_random, raw.maximum_random)
    }
}

impl From<DifficultyLevel> for RawDifficultyLevel {
    fn from(level: DifficultyLevel) -> Self {
        Self {
            number_decimals: level.number_decimals,
            minimum_random: level.minimum_random,
            maximum_random: level.maximum_random,
        }
    }
}

impl DifficultyLevel {
    /// Creates a validated difficulty level.
    ///
    /// Fails when the bounds are not finite or too far apart to sample, when
    /// `minimum > maximum`, when the precision exceeds
    /// [`config::MAX_NUMBER_DECIMALS`], or when no nonzero value can be drawn
    /// at the requested precision (a division question would never find a
    /// divisor).
    pub fn new(
        number_decimals: u32,
        minimum_random: f64,
        maximum_random: f64,
    ) -> MathdashResult<Self> {
        if !minimum_random.is_finite() || !maximum_random.is_finite() {
            return Err(MathdashError::InvalidLevel(format!(
                "range bounds must be finite, got [{}, {}]",
                minimum_random, maximum_random
            )));
        }

        if minimum_random > maximum_random {
            return Err(MathdashError::InvalidLevel(format!(
                "minimum {} is greater than maximum {}",
                minimum_random, maximum_random
            )));
        }

        if !(maximum_random - minimum_random).is_finite() {
            return Err(MathdashError::InvalidLevel(format!(
                "range [{}, {}] is too wide to sample",
                minimum_random, maximum_random
            )));
        }

        if number_decimals > config::MAX_NUMBER_DECIMALS {
            return Err(MathdashError::InvalidLevel(format!(
                "{} decimals requested, at most {} supported",
                number_decimals,
                config::MAX_NUMBER_DECIMALS
            )));
        }

        let level = Self {
            number_decimals,
            minimum_random,
            maximum_random,
        };

        if !level.has_nonzero_value() {
            return Err(MathdashError::InvalidLevel(format!(
                "range [{}, {}] has no nonzero value at {} decimals",
                minimum_random, maximum_random, number_decimals
            )));
        }

        Ok(level)
    }

    /// Whole numbers from 0 to 10.
    pub fn easy() -> Self {
        Self {
            number_decimals: 0,
            minimum_random: 0.0,
            maximum_random: 10.0,
        }
    }

    /// Whole numbers from -20 to 20.
    pub fn medium() -> Self {
        Self {
            number_decimals: 0,
            minimum_random: -20.0,
            maximum_random: 20.0,
        }
    }

    /// One decimal place from -50 to 50.
    pub fn hard() -> Self {
        Self {
            number_decimals: 1,
            minimum_random: -50.0,
            maximum_random: 50.0,
        }
    }

    /// Parses a level from JSON, accepting snake_case or camelCase keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use mathdash::DifficultyLevel;
    ///
    /// let level = DifficultyLevel::from_json_str(
    ///     r#"{"numberDecimals": 0, "minimumRandom": 2, "maximumRandom": 5}"#,
    /// ).unwrap();
    /// assert_eq!(level.maximum_random(), 5.0);
    /// ```
    pub fn from_json_str(json: &str) -> MathdashResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a level from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> MathdashResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let level = Self::from_json_str(&contents)?;
        debug!("Loaded difficulty level from {}: {:?}", path.display(), level);
        Ok(level)
    }

    /// Number of decimal places operands are drawn with.
    pub fn number_decimals(&self) -> u32 {
        self.number_decimals
    }

    /// Lower bound of the operand range.
    pub fn minimum_random(&self) -> f64 {
        self.minimum_random
    }

    /// Upper bound of the operand range.
    pub fn maximum_random(&self) -> f64 {
        self.maximum_random
    }

    fn has_nonzero_value(&self) -> bool {
        if self.number_decimals == 0 {
            let low = self.minimum_random.floor();
            let high = self.maximum_random.floor();
            return low != 0.0 || high != 0.0;
        }

        let low = round_to_decimals(self.minimum_random, self.number_decimals);
        if self.maximum_random > self.minimum_random {
            let high = round_to_decimals(self.maximum_random, self.number_decimals);
            low != 0.0 || high != 0.0
        } else {
            low != 0.0
        }
    }
}

impl Default for DifficultyLevel {
    fn default() -> Self {
        Self::easy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_creation() {
        let level = DifficultyLevel::new(2, -1.5, 3.0).unwrap();
        assert_eq!(level.number_decimals(), 2);
        assert_eq!(level.minimum_random(), -1.5);
        assert_eq!(level.maximum_random(), 3.0);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result = DifficultyLevel::new(0, 5.0, 2.0);
        assert!(matches!(result, Err(MathdashError::InvalidLevel(_))));
    }

    #[test]
    fn test_zero_only_range_rejected() {
        assert!(DifficultyLevel::new(0, 0.0, 0.0).is_err());
        assert!(DifficultyLevel::new(0, 0.0, 0.9).is_err());
        assert!(DifficultyLevel::new(2, -0.001, 0.001).is_err());
        assert!(DifficultyLevel::new(1, 0.01, 0.01).is_err());
    }

    #[test]
    fn test_ranges_touching_zero_accepted() {
        assert!(DifficultyLevel::new(0, 0.0, 1.0).is_ok());
        assert!(DifficultyLevel::new(0, -1.0, 0.0).is_ok());
        assert!(DifficultyLevel::new(1, 0.0, 0.5).is_ok());
        assert!(DifficultyLevel::new(0, 3.0, 3.0).is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(DifficultyLevel::new(0, f64::NAN, 1.0).is_err());
        assert!(DifficultyLevel::new(0, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_overflowing_width_rejected() {
        let result = DifficultyLevel::new(1, -1e308, 1e308);
        assert!(matches!(result, Err(MathdashError::InvalidLevel(_))));
        assert!(DifficultyLevel::new(1, -1e307, 1e307).is_ok());
    }

    #[test]
    fn test_excessive_precision_rejected() {
        assert!(DifficultyLevel::new(config::MAX_NUMBER_DECIMALS + 1, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_presets_are_valid() {
        let presets = [
            DifficultyLevel::easy(),
            DifficultyLevel::medium(),
            DifficultyLevel::hard(),
        ];
        for preset in presets {
            let rebuilt = DifficultyLevel::new(
                preset.number_decimals(),
                preset.minimum_random(),
                preset.maximum_random(),
            )
            .unwrap();
            assert_eq!(rebuilt, preset);
        }
    }

    #[test]
    fn test_json_snake_case() {
        let level = DifficultyLevel::from_json_str(
            r#"{"number_decimals": 1, "minimum_random": -2.0, "maximum_random": 2.0}"#,
        )
        .unwrap();
        assert_eq!(level, DifficultyLevel::new(1, -2.0, 2.0).unwrap());
    }

    #[test]
    fn test_json_invalid_level_rejected() {
        let result = DifficultyLevel::from_json_str(
            r#"{"numberDecimals": 0, "minimumRandom": 0, "maximumRandom": 0}"#,
        );
        assert!(matches!(result, Err(MathdashError::Serde(_))));
    }

    #[test]
    fn test_json_round_trip_keeps_validation() {
        let level = DifficultyLevel::hard();
        let json = serde_json::to_string(&level).unwrap();
        assert!(json.contains("number_decimals"));
        assert_eq!(DifficultyLevel::from_json_str(&json).unwrap(), level);
    }
}
