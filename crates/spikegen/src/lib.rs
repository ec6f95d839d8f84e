//! Inhomogeneous Poisson spike generation by thinning
//!
//! Event times are drawn from a homogeneous process at a dominating rate,
//! then each candidate is kept with probability `λ(x(t), t) / max_rate`,
//! where `x` is a caller-supplied trajectory (e.g. an animal's position)
//! and `λ` a caller-supplied intensity (e.g. a place field). Both functions
//! are evaluated once per call over the whole candidate batch.
//!
//! The random source is injected, so runs are reproducible from a seed.
//!
//! ```
//! use spikegen::{generate_spikes_seeded, ConstantIntensity};
//!
//! let position = |times: &[f64]| times.to_vec();
//! let spikes = generate_spikes_seeded(&ConstantIntensity(5.0), 10.0, &position, 1.0, 42).unwrap();
//! assert!(spikes.times().windows(2).all(|w| w[0] <= w[1]));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod candidates;
pub mod error;
pub mod generator;
pub mod intensity;
pub mod params;
pub mod spike_train;
pub mod thinning;

// Re-export essential types
pub use candidates::sample_candidates;
pub use error::{Result, SpikeGenError};
pub use generator::{generate_spikes, generate_spikes_seeded, GenerationReport, SpikeGenerator};
pub use intensity::{ConstantIntensity, IntensityFunction, PositionFunction};
pub use params::{ThinningParams, MAX_EXPECTED_CANDIDATES};
pub use spike_train::SpikeTrain;
pub use thinning::{thin, BoundPolicy, ThinningOutcome};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_integration() {
        let params = ThinningParams::default();
        assert!(params.max_rate > 0.0);
        assert_eq!(params.bound_policy, BoundPolicy::Warn);

        let train = SpikeTrain::empty(1.0);
        assert!(train.is_empty());
    }
}
