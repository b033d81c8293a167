//! Configuration of a [PitchAnalyzer][crate::detector::analyzer::PitchAnalyzer].

use crate::detector::internals::LagRange;
use crate::detector::voicing::Thresholds;
use crate::error::{Error, Result};
use crate::float::Float;
use crate::utils::window::WindowKind;

/// Everything a [PitchAnalyzer][crate::detector::analyzer::PitchAnalyzer] needs to
/// know about the frames it analyses.
///
/// The defaults describe 30 ms frames of 16 kHz speech, analysed with a Hamming
/// window over a 50 to 500 Hz F0 range.
///
/// ```
/// use pitch_analyzer::config::AnalyzerConfig;
/// use pitch_analyzer::utils::window::WindowKind;
///
/// let config = AnalyzerConfig::<f32>::new(320, 8000)
///     .with_window(WindowKind::Rectangular)
///     .with_f0_range(60.0, 400.0);
///
/// let range = config.validate().unwrap();
/// assert_eq!((range.min, range.max), (20, 134));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct AnalyzerConfig<T>
where
    T: Float,
{
    /// Number of samples per frame.
    pub frame_len: usize,
    /// Sampling frequency in Hz.
    pub sampling_freq: usize,
    pub window: WindowKind,
    /// Lowest F0, in Hz, that can be detected.
    pub min_f0: T,
    /// Highest F0, in Hz, that can be detected.
    pub max_f0: T,
    pub thresholds: Thresholds<T>,
}

impl<T> Default for AnalyzerConfig<T>
where
    T: Float,
{
    fn default() -> Self {
        AnalyzerConfig {
            frame_len: 480,
            sampling_freq: 16000,
            window: WindowKind::default(),
            min_f0: T::from_f64(50.0).unwrap(),
            max_f0: T::from_f64(500.0).unwrap(),
            thresholds: Thresholds::default(),
        }
    }
}

impl<T> AnalyzerConfig<T>
where
    T: Float,
{
    /// Default configuration for frames of `frame_len` samples at `sampling_freq` Hz.
    pub fn new(frame_len: usize, sampling_freq: usize) -> Self {
        AnalyzerConfig {
            frame_len,
            sampling_freq,
            ..Default::default()
        }
    }

    pub fn with_window(mut self, window: WindowKind) -> Self {
        self.window = window;
        self
    }

    pub fn with_f0_range(mut self, min_f0: T, max_f0: T) -> Self {
        self.min_f0 = min_f0;
        self.max_f0 = max_f0;
        self
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds<T>) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Lag range searched for the pitch period. Only meaningful for a configuration
    /// that passes [AnalyzerConfig::validate].
    pub fn lag_range(&self) -> LagRange {
        LagRange::new(self.sampling_freq, self.min_f0, self.max_f0, self.frame_len)
    }

    /// Checks the configuration and returns the lag range it leads to.
    pub fn validate(&self) -> Result<LagRange> {
        if self.sampling_freq == 0 {
            return Err(Error::InvalidParameter(
                "sampling frequency must be positive".into(),
            ));
        }
        if self.frame_len < self.window.min_size() {
            return Err(Error::InvalidParameter(format!(
                "{} window needs frames of at least {} samples, got {}",
                self.window,
                self.window.min_size(),
                self.frame_len
            )));
        }
        for (name, f0) in [("min_f0", self.min_f0), ("max_f0", self.max_f0)] {
            if !f0.is_finite() || f0 <= T::zero() {
                return Err(Error::InvalidParameter(format!(
                    "{} must be a positive frequency, got {}",
                    name, f0
                )));
            }
        }
        self.thresholds.validate()?;

        self.lag_range().validate()
    }
}
