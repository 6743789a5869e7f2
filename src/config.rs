//! Generation configuration. All ranges except the step range are half-open.
//! Same config + seed produces the same pair of datasets.

use std::path::PathBuf;

use crate::error::Error;

/// Configuration for one generation run. The `Default` impl carries the
/// reference constants used to produce the canonical test fixtures.
#[derive(Clone, Debug)]
pub struct DatasetConfig {
    /// RNG seed. Same seed ⇒ same datasets.
    pub seed: u64,
    /// Number of rows per dataset.
    pub rows: usize,
    /// Order-type range, half-open `[low, high)`.
    pub order_type_low: i64,
    pub order_type_high: i64,
    /// Order-volume range, half-open `[low, high)`.
    pub volume_low: i64,
    pub volume_high: i64,
    /// Erratic-price range, half-open `[low, high)`.
    pub erratic_low: i64,
    pub erratic_high: i64,
    /// Value written over step 0 before the prefix sum; the walk's first value.
    pub walk_anchor: i64,
    /// Reject any candidate walk whose minimum falls below this.
    pub walk_floor: i64,
    /// Cap on full-sequence redraws before giving up with
    /// [`Error::GenerationExhausted`].
    pub walk_max_attempts: u32,
    /// Output path for the erratic-price dataset.
    pub erratic_path: PathBuf,
    /// Output path for the random-walk-price dataset.
    pub walk_path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            rows: 1_000_000,
            order_type_low: 0,
            order_type_high: 3,
            volume_low: -3000,
            volume_high: 3000,
            erratic_low: 7000,
            erratic_high: 13000,
            walk_anchor: 10_000,
            walk_floor: 10,
            walk_max_attempts: 1000,
            erratic_path: PathBuf::from("RandTestDataErratic.csv"),
            walk_path: PathBuf::from("RandTestDataRW.csv"),
        }
    }
}

impl DatasetConfig {
    /// Checks every field before generation starts. Fails fast with
    /// [`Error::InvalidConfiguration`] so a bad range never reaches the
    /// sampling loops.
    pub fn validate(&self) -> Result<(), Error> {
        if self.rows == 0 {
            return Err(Error::InvalidConfiguration("rows must be > 0".into()));
        }
        if self.walk_max_attempts == 0 {
            return Err(Error::InvalidConfiguration(
                "walk_max_attempts must be > 0".into(),
            ));
        }
        for (name, low, high) in [
            ("order_type", self.order_type_low, self.order_type_high),
            ("order_volume", self.volume_low, self.volume_high),
            ("erratic price", self.erratic_low, self.erratic_high),
        ] {
            if high <= low {
                return Err(Error::InvalidConfiguration(format!(
                    "{} range is empty: [{}, {})",
                    name, low, high
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(DatasetConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_rows_rejected() {
        let config = DatasetConfig {
            rows: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn empty_range_rejected() {
        let config = DatasetConfig {
            volume_low: 3000,
            volume_high: -3000,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("order_volume"));
    }

    #[test]
    fn zero_attempt_cap_rejected() {
        let config = DatasetConfig {
            walk_max_attempts: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
