use crate::error::{Error, Result};
use crate::float::Float;
use crate::utils::buffer::square_sum;

/// Value `r[0]` is raised to when a frame carries no energy at all, so that
/// the log power and the normalised correlations stay finite.
pub const POWER_FLOOR: f64 = 1e-10;

/// Smallest lag ever searched. A lag of one would put F0 at the sampling frequency.
pub const MIN_LAG: usize = 2;

/// Compute the biased autocorrelation of `signal` into `result`. For a frame
/// _x=(x_0,...,x_{N-1})_ this is
///
/// > r(l) = (1/N) * sum_{n=0}^{N-l-1} x_n*x_{n+l}
///
/// for every lag _l_ in `0..result.len()`. The sum is normalised by the full frame
/// length whatever the lag, so no end-effect correction is applied. If `r(0)` comes
/// out as exactly zero it is replaced by [POWER_FLOOR].
///
/// This is a direct O(L*N) evaluation. Frames are short enough that the exact sum
/// is preferred over an FFT.
pub fn autocorrelation<T: Float>(signal: &[T], result: &mut [T]) {
    assert!(
        result.len() <= signal.len(),
        "Cannot compute {} lags of a {} sample frame",
        result.len(),
        signal.len()
    );
    if result.is_empty() {
        return;
    }

    let scale = T::one() / T::from_usize(signal.len()).unwrap();

    result[0] = scale * square_sum(signal);
    for (lag, r) in result.iter_mut().enumerate().skip(1) {
        *r = scale
            * signal
                .iter()
                .zip(&signal[lag..])
                .fold(T::zero(), |acc, (&a, &b)| acc + a * b);
    }

    if result[0] == T::zero() {
        result[0] = T::from_f64(POWER_FLOOR).unwrap();
    }
}

/// Half-open interval `[min, max)` of lags, in samples, searched for the pitch period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LagRange {
    pub min: usize,
    pub max: usize,
}

impl LagRange {
    /// Maps an F0 search interval onto lags. F0 is `sampling_freq / lag`, so the
    /// highest F0 gives the smallest lag and vice versa:
    ///
    /// > min = max(2, floor(sampling_freq / max_f0))
    /// > max = min(frame_len / 2, 1 + floor(sampling_freq / min_f0))
    ///
    /// The upper clamp makes sure a frame holds at least two periods of the lowest
    /// admissible F0. Pathological inputs give an empty range, see [LagRange::validate].
    pub fn new<T: Float>(sampling_freq: usize, min_f0: T, max_f0: T, frame_len: usize) -> Self {
        let sampling_freq = T::from_usize(sampling_freq).unwrap();
        let min = lag_for(sampling_freq / max_f0).max(MIN_LAG);
        let max = lag_for(sampling_freq / min_f0)
            .saturating_add(1)
            .min(frame_len / 2);

        LagRange { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min >= self.max
    }

    /// Lags in the range, i.e. `max - min`.
    pub fn len(&self) -> usize {
        self.max.saturating_sub(self.min)
    }

    pub fn validate(self) -> Result<Self> {
        if self.is_empty() {
            return Err(Error::DegenerateLagRange {
                lag_min: self.min,
                lag_max: self.max,
            });
        }
        Ok(self)
    }
}

/// Truncates a lag expressed in samples. Values too large for a `usize`
/// saturate, they get clamped to the frame anyway.
fn lag_for<T: Float>(lag: T) -> usize {
    lag.floor().to_usize().unwrap_or(usize::MAX)
}
