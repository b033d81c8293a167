use crate::detector::internals::LagRange;
use crate::float::Float;

/// Skips the lobe around lag zero. Starting at lag one, the scan moves on while
/// the autocorrelation is still decreasing, still positive, or still below
/// `range.min`. The first lag where none of this holds is where a genuine second
/// peak can start.
///
/// Returns `None` if the scan reaches the end of `autocorr` without settling,
/// which happens when the autocorrelation never turns negative within the range.
pub fn skip_central_lobe<T: Float>(autocorr: &[T], range: LagRange) -> Option<usize> {
    let mut lag = 1;
    while lag + 1 < autocorr.len()
        && (autocorr[lag] > autocorr[lag + 1] || lag < range.min || autocorr[lag] > T::zero())
    {
        lag += 1;
    }

    if lag + 1 < autocorr.len() {
        Some(lag)
    } else {
        None
    }
}

/// `true` if `arr[idx]` is strictly greater than both of its neighbours.
/// The first and last elements have a missing neighbour and are never peaks.
fn is_strict_peak<T: Float>(arr: &[T], idx: usize) -> bool {
    idx > 0 && idx + 1 < arr.len() && arr[idx] > arr[idx - 1] && arr[idx] > arr[idx + 1]
}

/// Finds the lag of the pitch period in `autocorr`, which must hold at least
/// `range.max` values.
///
/// After [skip_central_lobe], the lags up to `range.max` are scanned while keeping
/// the largest value seen so far. A lag takes over only if it beats that value and
/// is a strict local maximum, so a large value on a monotonic ridge never wins over
/// an earlier well formed peak. If no lag qualifies the start of the scan is
/// returned.
///
/// Only the first `range.max` values are looked at, so lag `range.max - 1` has no
/// right neighbour and can never be confirmed as a peak. A ridge climbing up to
/// the end of the range falls back to the start of the scan, usually a trough.
pub fn find_pitch_lag<T: Float>(autocorr: &[T], range: LagRange) -> Option<usize> {
    assert!(
        autocorr.len() >= range.max,
        "Autocorrelation has {} lags, the search goes up to {}",
        autocorr.len(),
        range.max
    );

    let start = skip_central_lobe(&autocorr[..range.max], range)?;

    let best = (start..range.max).fold(start, |best, lag| {
        if autocorr[lag] > autocorr[best] && is_strict_peak(&autocorr[..range.max], lag) {
            lag
        } else {
            best
        }
    });
    Some(best)
}
