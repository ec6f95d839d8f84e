//! Generation parameters

use crate::error::*;
use crate::thinning::BoundPolicy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest accepted `max_rate * total_time`; every candidate is held in memory
pub const MAX_EXPECTED_CANDIDATES: f64 = 1e8;

/// Parameters for thinning-based spike generation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThinningParams {
    /// Dominating rate (events per unit time), an upper bound on the intensity
    pub max_rate: f64,
    /// Length of the observation window `[0, total_time)`
    pub total_time: f64,
    /// Seed for the random source (None = entropy)
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
    /// Handling of intensity values above `max_rate`
    #[cfg_attr(feature = "serde", serde(default))]
    pub bound_policy: BoundPolicy,
}

impl Default for ThinningParams {
    fn default() -> Self {
        Self {
            max_rate: 1.0,
            total_time: 1.0,
            seed: None,
            bound_policy: BoundPolicy::default(),
        }
    }
}

impl ThinningParams {
    /// Create new parameters with validation
    pub fn new(max_rate: f64, total_time: f64) -> Result<Self> {
        check_window(max_rate, total_time)?;

        Ok(Self {
            max_rate,
            total_time,
            ..Default::default()
        })
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the policy for intensities above `max_rate`
    pub fn with_bound_policy(mut self, policy: BoundPolicy) -> Self {
        self.bound_policy = policy;
        self
    }

    /// Mean number of candidates drawn from the dominating process
    pub fn expected_candidates(&self) -> f64 {
        self.max_rate * self.total_time
    }

    /// True when no candidates can be drawn (zero window or zero rate)
    pub fn is_degenerate(&self) -> bool {
        self.expected_candidates() == 0.0
    }

    /// Validate parameters
    pub fn validate(&self) -> Result<()> {
        Self::new(self.max_rate, self.total_time)?;
        Ok(())
    }
}

/// Check both window parameters and bound the expected candidate count
pub(crate) fn check_window(max_rate: f64, total_time: f64) -> Result<f64> {
    check_non_negative("max_rate", max_rate)?;
    check_non_negative("total_time", total_time)?;

    let expected = max_rate * total_time;
    if !(expected <= MAX_EXPECTED_CANDIDATES) {
        return Err(SpikeGenError::invalid_parameter(
            "max_rate * total_time",
            format!("{} (max_rate={}, total_time={})", expected, max_rate, total_time),
            format!("<= {:e}", MAX_EXPECTED_CANDIDATES),
        ));
    }
    Ok(expected)
}

fn check_non_negative(parameter: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SpikeGenError::invalid_parameter(
            parameter,
            value.to_string(),
            "finite",
        ));
    }
    if value < 0.0 {
        return Err(SpikeGenError::invalid_parameter(
            parameter,
            value.to_string(),
            ">= 0.0",
        ));
    }
    Ok(())
}
