//! [Window functions](https://en.wikipedia.org/wiki/Window_function) applied to a frame
//! before its autocorrelation is computed.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::float::Float;

/// Hamming coefficients with the equiripple-optimal values rather than the
/// rounded 0.54 / 0.46 pair.
const HAMMING_A0: f64 = 0.53836;
const HAMMING_A1: f64 = 0.46164;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum WindowKind {
    /// Every coefficient is one, i.e. the frame is used as is.
    Rectangular,
    /// <https://en.wikipedia.org/wiki/Window_function#Hann_and_Hamming_windows>
    #[default]
    Hamming,
}

impl WindowKind {
    /// Smallest frame length this window can be computed for.
    pub fn min_size(self) -> usize {
        match self {
            WindowKind::Rectangular => 1,
            WindowKind::Hamming => 2,
        }
    }

    /// Computes the `size` coefficients of the window.
    ///
    /// Panics if `size` is below [WindowKind::min_size]; the analyzer
    /// configuration rejects such sizes before getting here.
    pub fn coefficients<T: Float>(self, size: usize) -> Vec<T> {
        assert!(
            size >= self.min_size(),
            "{} window needs at least {} samples, got {}",
            self,
            self.min_size(),
            size
        );
        match self {
            WindowKind::Rectangular => vec![T::one(); size],
            WindowKind::Hamming => hamming_window(size),
        }
    }
}

fn hamming_window<T: Float>(size: usize) -> Vec<T> {
    let a0 = T::from_f64(HAMMING_A0).unwrap();
    let a1 = T::from_f64(HAMMING_A1).unwrap();
    let two_pi = T::from_f64(2.0 * std::f64::consts::PI).unwrap();
    let denominator = T::from_usize(size - 1).unwrap();

    (0..size)
        .map(|n| a0 - a1 * (two_pi * T::from_usize(n).unwrap() / denominator).cos())
        .collect()
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowKind::Rectangular => write!(f, "rectangular"),
            WindowKind::Hamming => write!(f, "hamming"),
        }
    }
}

impl FromStr for WindowKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rect" | "rectangular" => Ok(WindowKind::Rectangular),
            "hamming" => Ok(WindowKind::Hamming),
            _ => Err(Error::UnknownWindow(s.to_string())),
        }
    }
}
