//! Candidate events from the dominating homogeneous process

use crate::error::*;
use crate::params::{check_window, MAX_EXPECTED_CANDIDATES};
use rand::Rng;
use rand_distr::{Distribution, Poisson};

/// Hard cap on a single Poisson draw, well above any mean that passes validation
const MAX_DRAWN_CANDIDATES: f64 = 2.0 * MAX_EXPECTED_CANDIDATES;

/// Draw a sorted homogeneous Poisson sample on `[0, total_time)` at `max_rate`.
///
/// The count is drawn first, then one uniform time per candidate. When the
/// mean count is zero the RNG is left untouched and an empty sample returned.
pub fn sample_candidates<R: Rng>(
    rng: &mut R,
    max_rate: f64,
    total_time: f64,
) -> Result<Vec<f64>> {
    let mean = check_window(max_rate, total_time)?;
    if mean == 0.0 {
        log::trace!("Zero expected candidates (max_rate={}, total_time={})", max_rate, total_time);
        return Ok(Vec::new());
    }

    let count = Poisson::new(mean)?.sample(rng);
    if !count.is_finite() || count < 0.0 {
        return Err(SpikeGenError::numerical_error(format!(
            "Poisson draw {} for mean {}",
            count, mean
        )));
    }
    if count > MAX_DRAWN_CANDIDATES {
        return Err(SpikeGenError::distribution(format!(
            "Poisson draw {} for mean {} exceeds {:e} candidates",
            count, mean, MAX_DRAWN_CANDIDATES
        )));
    }
    let count = count as usize;

    let mut times: Vec<f64> = Vec::new();
    times.try_reserve_exact(count).map_err(|e| {
        SpikeGenError::distribution(format!("cannot hold {} candidates: {}", count, e))
    })?;
    times.extend((0..count).map(|_| rng.gen_range(0.0..total_time)));
    times.sort_unstable_by(|a, b| a.total_cmp(b));

    log::debug!("Drew {} candidates (expected {:.3})", count, mean);
    Ok(times)
}
