//! Error types for spike generation

use thiserror::Error;

/// Result type for spike generation
pub type Result<T> = std::result::Result<T, SpikeGenError>;

/// Errors that can occur while generating a spike train
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpikeGenError {
    /// Invalid parameter value
    #[error("Invalid parameter {parameter}: {value} (expected {constraint})")]
    InvalidParameter {
        /// Parameter name
        parameter: String,
        /// Invalid value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// A caller-supplied function returned the wrong number of values
    #[error("{stage} function returned {actual} values for {expected} candidate times")]
    LengthMismatch {
        /// Which function produced the output
        stage: &'static str,
        /// Number of candidate times passed in
        expected: usize,
        /// Number of values returned
        actual: usize,
    },

    /// Intensity exceeded the dominating rate under `BoundPolicy::Reject`
    #[error("Intensity exceeded max rate {max_rate} at {count} candidate(s) (max observed {max_observed})")]
    RateBoundExceeded {
        /// Number of candidates with rate above the bound
        count: usize,
        /// Largest rate observed
        max_observed: f64,
        /// Dominating rate used for the candidate sample
        max_rate: f64,
    },

    /// Could not construct a sampling distribution
    #[error("Distribution error: {reason}")]
    Distribution {
        /// Reason reported by the distribution
        reason: String,
    },

    /// Numerical computation error
    #[error("Numerical error: {reason}")]
    NumericalError {
        /// Reason for numerical error
        reason: String,
    },

    /// Spike times violate ordering or window bounds
    #[error("Invalid spike train: {reason}")]
    InvalidSpikeTrain {
        /// Reason the train was rejected
        reason: String,
    },
}

impl SpikeGenError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(
        parameter: impl Into<String>,
        value: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            constraint: constraint.into(),
        }
    }

    /// Create a length mismatch error
    pub fn length_mismatch(stage: &'static str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            stage,
            expected,
            actual,
        }
    }

    /// Create a distribution error
    pub fn distribution(reason: impl Into<String>) -> Self {
        Self::Distribution {
            reason: reason.into(),
        }
    }

    /// Create a numerical error
    pub fn numerical_error(reason: impl Into<String>) -> Self {
        Self::NumericalError {
            reason: reason.into(),
        }
    }

    /// Create an invalid spike train error
    pub fn invalid_spike_train(reason: impl Into<String>) -> Self {
        Self::InvalidSpikeTrain {
            reason: reason.into(),
        }
    }
}

impl From<rand_distr::PoissonError> for SpikeGenError {
    fn from(err: rand_distr::PoissonError) -> Self {
        Self::distribution(err.to_string())
    }
}
