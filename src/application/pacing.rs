//! Inter-event delay policy

use nutype::nutype;
use rand::Rng;
use std::time::Duration;

use crate::config::DriverSettings;
use crate::{Error, Result};

/// Whole seconds between emissions
///
/// Range: 1 to 3600 (one hour)
#[nutype(
    validate(greater = 0, less_or_equal = 3600),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Display
    )
)]
pub struct DelaySeconds(u64);

/// Uniform integer delay between two inclusive bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    min: DelaySeconds,
    max: DelaySeconds,
}

impl Pacing {
    pub fn new(min: DelaySeconds, max: DelaySeconds) -> Result<Self> {
        if min > max {
            return Err(Error::invalid_settings(format!(
                "minimum delay {min}s exceeds maximum delay {max}s"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn from_settings(settings: &DriverSettings) -> Result<Self> {
        let min = DelaySeconds::try_new(settings.min_delay_secs)
            .map_err(|e| Error::invalid_settings(format!("min_delay_secs: {e}")))?;
        let max = DelaySeconds::try_new(settings.max_delay_secs)
            .map_err(|e| Error::invalid_settings(format!("max_delay_secs: {e}")))?;
        Self::new(min, max)
    }

    pub fn next_delay<R: Rng>(&self, rng: &mut R) -> Duration {
        let secs = rng.random_range(self.min.into_inner()..=self.max.into_inner());
        Duration::from_secs(secs)
    }
}
