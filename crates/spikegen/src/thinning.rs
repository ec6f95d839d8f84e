//! Acceptance-rejection thinning of candidate events

use crate::error::*;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to do when the intensity exceeds the dominating rate.
///
/// Rates above `max_rate` are always accepted, so the output no longer
/// follows the requested intensity. None of the policies clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoundPolicy {
    /// Accept silently
    Ignore,
    /// Accept and log a warning with the violation count
    #[default]
    Warn,
    /// Fail with `SpikeGenError::RateBoundExceeded`
    Reject,
}

/// Result of thinning one candidate sample
#[derive(Debug, Clone, PartialEq)]
pub struct ThinningOutcome {
    /// Accepted times, ascending
    pub accepted: Vec<f64>,
    /// Number of candidates considered
    pub candidate_count: usize,
    /// Candidates whose rate exceeded `max_rate`
    pub bound_violations: usize,
    /// Largest rate returned by the intensity function
    pub max_observed_rate: f64,
}

impl ThinningOutcome {
    /// Outcome for an empty candidate set
    pub fn empty() -> Self {
        Self {
            accepted: Vec::new(),
            candidate_count: 0,
            bound_violations: 0,
            max_observed_rate: 0.0,
        }
    }

    /// Fraction of candidates kept (0 when there were none)
    pub fn acceptance_ratio(&self) -> f64 {
        acceptance_ratio(self.accepted.len(), self.candidate_count)
    }
}

pub(crate) fn acceptance_ratio(accepted: usize, candidates: usize) -> f64 {
    if candidates == 0 {
        0.0
    } else {
        accepted as f64 / candidates as f64
    }
}

/// Keep `candidates[i]` iff `rates[i] / max_rate > u_i` with `u_i ~ U[0, 1)`.
///
/// One uniform is drawn per candidate, in order, whether or not an earlier
/// candidate was rejected. `candidates` must be sorted; order is preserved.
pub fn thin<R: Rng>(
    rng: &mut R,
    candidates: &[f64],
    rates: &[f64],
    max_rate: f64,
    policy: BoundPolicy,
) -> Result<ThinningOutcome> {
    if rates.len() != candidates.len() {
        return Err(SpikeGenError::length_mismatch(
            "intensity",
            candidates.len(),
            rates.len(),
        ));
    }
    if candidates.is_empty() {
        return Ok(ThinningOutcome::empty());
    }
    if !(max_rate > 0.0) {
        return Err(SpikeGenError::invalid_parameter(
            "max_rate",
            max_rate.to_string(),
            "> 0.0 when candidates are present",
        ));
    }

    let mut bound_violations = 0usize;
    let mut max_observed_rate = f64::NEG_INFINITY;
    for (i, &rate) in rates.iter().enumerate() {
        if rate.is_nan() {
            return Err(SpikeGenError::numerical_error(format!(
                "intensity is NaN at t={}",
                candidates[i]
            )));
        }
        if rate > max_rate {
            bound_violations += 1;
        }
        max_observed_rate = max_observed_rate.max(rate);
    }

    if bound_violations > 0 {
        match policy {
            BoundPolicy::Ignore => {}
            BoundPolicy::Warn => log::warn!(
                "Intensity exceeded max rate {} at {}/{} candidates (max observed {}); output is biased",
                max_rate,
                bound_violations,
                candidates.len(),
                max_observed_rate
            ),
            BoundPolicy::Reject => {
                return Err(SpikeGenError::RateBoundExceeded {
                    count: bound_violations,
                    max_observed: max_observed_rate,
                    max_rate,
                })
            }
        }
    }

    let accepted: Vec<f64> = candidates
        .iter()
        .zip(rates)
        .filter_map(|(&t, &rate)| {
            let u: f64 = rng.gen();
            (rate / max_rate > u).then_some(t)
        })
        .collect();

    log::debug!("Thinning kept {}/{} candidates", accepted.len(), candidates.len());

    Ok(ThinningOutcome {
        accepted,
        candidate_count: candidates.len(),
        bound_violations,
        max_observed_rate,
    })
}
