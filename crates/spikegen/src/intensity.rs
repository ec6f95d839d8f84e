//! Caller-supplied trajectory and intensity functions
//!
//! Both seams are vectorized: the generator evaluates each function once,
//! over the full sorted candidate sequence, and never on an empty sequence.
//! Implementations are expected to be pure.

/// Maps a batch of times to the corresponding positions (or any state)
pub trait PositionFunction<P> {
    /// Positions for `times`, one per input, in the same order
    fn positions(&self, times: &[f64]) -> Vec<P>;
}

/// Maps (positions, times) pairs to non-negative event rates
pub trait IntensityFunction<P> {
    /// Rates for each `(positions[i], times[i])`, in the same order
    fn rates(&self, positions: &[P], times: &[f64]) -> Vec<f64>;
}

impl<P, F> PositionFunction<P> for F
where
    F: Fn(&[f64]) -> Vec<P>,
{
    fn positions(&self, times: &[f64]) -> Vec<P> {
        self(times)
    }
}

impl<P, F> IntensityFunction<P> for F
where
    F: Fn(&[P], &[f64]) -> Vec<f64>,
{
    fn rates(&self, positions: &[P], times: &[f64]) -> Vec<f64> {
        self(positions, times)
    }
}

/// Intensity that ignores position and time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantIntensity(pub f64);

impl<P> IntensityFunction<P> for ConstantIntensity {
    fn rates(&self, _positions: &[P], times: &[f64]) -> Vec<f64> {
        vec![self.0; times.len()]
    }
}
