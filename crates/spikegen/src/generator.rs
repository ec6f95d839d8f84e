//! Inhomogeneous Poisson spike generation by thinning

use crate::{
    candidates::sample_candidates,
    error::*,
    intensity::{IntensityFunction, PositionFunction},
    params::ThinningParams,
    spike_train::SpikeTrain,
    thinning::{acceptance_ratio, thin, ThinningOutcome},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Counts from one generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// Accepted events
    pub spikes: SpikeTrain,
    /// Candidates drawn from the dominating process
    pub candidate_count: usize,
    /// Candidates with intensity above `max_rate`
    pub bound_violations: usize,
    /// Largest rate returned by the intensity function (0 with no candidates)
    pub max_observed_rate: f64,
}

impl GenerationReport {
    /// Number of accepted events
    pub fn accepted_count(&self) -> usize {
        self.spikes.len()
    }

    /// Fraction of candidates kept (0 when there were none)
    pub fn acceptance_ratio(&self) -> f64 {
        acceptance_ratio(self.spikes.len(), self.candidate_count)
    }

    fn from_outcome(outcome: ThinningOutcome, total_time: f64) -> Self {
        Self {
            spikes: SpikeTrain::from_accepted(outcome.accepted, total_time),
            candidate_count: outcome.candidate_count,
            bound_violations: outcome.bound_violations,
            max_observed_rate: outcome.max_observed_rate,
        }
    }
}

/// Spike generator with an injected random source
#[derive(Debug)]
pub struct SpikeGenerator<R: Rng = StdRng> {
    /// Generation parameters
    params: ThinningParams,
    /// Random source for counts, times and acceptance draws
    rng: R,
}

impl SpikeGenerator<StdRng> {
    /// Create a generator seeded from `params.seed`, or from entropy if unset
    pub fn from_params(params: ThinningParams) -> Result<Self> {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(params, rng)
    }
}

impl<R: Rng> SpikeGenerator<R> {
    /// Create a generator using the given random source
    pub fn new(params: ThinningParams, rng: R) -> Result<Self> {
        params.validate()?;
        Ok(Self { params, rng })
    }

    /// Generate one spike train
    pub fn generate<P, I, X>(&mut self, intensity: &I, position: &X) -> Result<SpikeTrain>
    where
        I: IntensityFunction<P> + ?Sized,
        X: PositionFunction<P> + ?Sized,
    {
        Ok(self.generate_with_report(intensity, position)?.spikes)
    }

    /// Generate one spike train along with candidate and violation counts
    pub fn generate_with_report<P, I, X>(
        &mut self,
        intensity: &I,
        position: &X,
    ) -> Result<GenerationReport>
    where
        I: IntensityFunction<P> + ?Sized,
        X: PositionFunction<P> + ?Sized,
    {
        let ThinningParams {
            max_rate,
            total_time,
            bound_policy,
            ..
        } = self.params;

        let candidates = sample_candidates(&mut self.rng, max_rate, total_time)?;
        if candidates.is_empty() {
            return Ok(GenerationReport::from_outcome(ThinningOutcome::empty(), total_time));
        }

        let positions = position.positions(&candidates);
        if positions.len() != candidates.len() {
            return Err(SpikeGenError::length_mismatch(
                "position",
                candidates.len(),
                positions.len(),
            ));
        }
        let rates = intensity.rates(&positions, &candidates);

        let outcome = thin(&mut self.rng, &candidates, &rates, max_rate, bound_policy)?;

        Ok(GenerationReport::from_outcome(outcome, total_time))
    }

    /// Get generation parameters
    pub fn params(&self) -> &ThinningParams {
        &self.params
    }

    /// Get mutable reference to the random source
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Consume the generator, returning its random source
    pub fn into_rng(self) -> R {
        self.rng
    }
}

/// Generate event times from an inhomogeneous Poisson process.
///
/// `intensity(position(t), t)` must not exceed `max_rate` on `[0, total_time)`.
/// Values above it are accepted and logged, biasing the output.
pub fn generate_spikes<P, I, X, R>(
    intensity: &I,
    max_rate: f64,
    position: &X,
    total_time: f64,
    rng: &mut R,
) -> Result<SpikeTrain>
where
    I: IntensityFunction<P> + ?Sized,
    X: PositionFunction<P> + ?Sized,
    R: Rng,
{
    let params = ThinningParams::new(max_rate, total_time)?;
    SpikeGenerator::new(params, rng)?.generate(intensity, position)
}

/// Same as [`generate_spikes`], with a `StdRng` seeded from `seed`
pub fn generate_spikes_seeded<P, I, X>(
    intensity: &I,
    max_rate: f64,
    position: &X,
    total_time: f64,
    seed: u64,
) -> Result<SpikeTrain>
where
    I: IntensityFunction<P> + ?Sized,
    X: PositionFunction<P> + ?Sized,
{
    let mut rng = StdRng::seed_from_u64(seed);
    generate_spikes(intensity, max_rate, position, total_time, &mut rng)
}
