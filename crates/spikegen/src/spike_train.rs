//! Ordered event times produced by the generator

use crate::error::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ascending event times within `[0, duration)`
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpikeTrain {
    times: Vec<f64>,
    duration: f64,
}

impl SpikeTrain {
    /// Empty train over a window of `duration`
    pub fn empty(duration: f64) -> Self {
        Self {
            times: Vec::new(),
            duration,
        }
    }

    /// Wrap sorted times, checking order and window bounds
    pub fn from_sorted(times: Vec<f64>, duration: f64) -> Result<Self> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(SpikeGenError::invalid_parameter(
                "duration",
                duration.to_string(),
                "finite and >= 0.0",
            ));
        }
        if let Some(t) = times.iter().find(|t| !(0.0..duration).contains(*t)) {
            return Err(SpikeGenError::invalid_spike_train(format!(
                "time {} outside [0, {})",
                t, duration
            )));
        }
        if let Some(i) = times.windows(2).position(|w| w[0] > w[1]) {
            return Err(SpikeGenError::invalid_spike_train(format!(
                "times not ascending at index {} ({} > {})",
                i,
                times[i],
                times[i + 1]
            )));
        }
        Ok(Self { times, duration })
    }

    /// Crate-internal constructor for times already known to be valid
    pub(crate) fn from_accepted(times: Vec<f64>, duration: f64) -> Self {
        debug_assert!(times.windows(2).all(|w| w[0] <= w[1]));
        Self { times, duration }
    }

    /// Event times
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Number of events
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True if there are no events
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Length of the observation window
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Iterate over event times
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.times.iter()
    }

    /// Take the underlying times
    pub fn into_times(self) -> Vec<f64> {
        self.times
    }

    /// Mean event rate over the window (0 for an empty window)
    pub fn firing_rate(&self) -> f64 {
        if self.duration > 0.0 {
            self.times.len() as f64 / self.duration
        } else {
            0.0
        }
    }

    /// Gaps between consecutive events
    pub fn inter_spike_intervals(&self) -> Vec<f64> {
        self.times.windows(2).map(|w| w[1] - w[0]).collect()
    }

    /// Number of events in `[start, end)`
    pub fn count_in(&self, start: f64, end: f64) -> usize {
        if !(start < end) {
            return 0;
        }
        let lo = self.times.partition_point(|&t| t < start);
        let hi = self.times.partition_point(|&t| t < end);
        hi - lo
    }
}

impl AsRef<[f64]> for SpikeTrain {
    fn as_ref(&self) -> &[f64] {
        &self.times
    }
}

impl IntoIterator for SpikeTrain {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.times.into_iter()
    }
}

impl<'a> IntoIterator for &'a SpikeTrain {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.times.iter()
    }
}
