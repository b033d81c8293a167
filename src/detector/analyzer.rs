//! Autocorrelation pitch analyzer.
//!
//! Each frame is windowed and its biased autocorrelation is computed up to the
//! largest lag of interest. The central lobe around lag zero is skipped, then the
//! highest well formed peak within the lag range gives the pitch period. A frame
//! is voiced when its log power, its correlation at unit lag and its correlation
//! at the pitch period all clear their thresholds.

use crate::config::AnalyzerConfig;
use crate::detector::internals::{autocorrelation, LagRange};
use crate::detector::voicing::{Features, Thresholds};
use crate::detector::PitchDetector;
use crate::error::{Error, Result};
use crate::float::Float;
use crate::utils::buffer::{apply_window, new_real_buffer};
use crate::utils::peak::find_pitch_lag;
use crate::utils::window::WindowKind;

/// Outcome of analysing a single frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Analysis<T>
where
    T: Float,
{
    /// Pitch period in samples, `None` if the autocorrelation has no usable peak.
    pub lag: Option<usize>,
    pub features: Features<T>,
    pub voiced: bool,
    /// Estimated F0 in Hz, zero for an unvoiced frame.
    pub frequency: T,
}

pub struct PitchAnalyzer<T>
where
    T: Float,
{
    config: AnalyzerConfig<T>,
    window: Vec<T>,
    range: LagRange,
}

impl<T> PitchAnalyzer<T>
where
    T: Float,
{
    pub fn new(config: AnalyzerConfig<T>) -> Result<Self> {
        let range = config.validate()?;
        let window = config.window.coefficients(config.frame_len);
        log::debug!(
            "Pitch analyzer: {} samples at {} Hz, {} window, lags {}..{}",
            config.frame_len,
            config.sampling_freq,
            config.window,
            range.min,
            range.max
        );

        Ok(PitchAnalyzer {
            config,
            window,
            range,
        })
    }

    pub fn config(&self) -> &AnalyzerConfig<T> {
        &self.config
    }

    pub fn lag_range(&self) -> LagRange {
        self.range
    }

    /// Window coefficients applied to every frame.
    pub fn window(&self) -> &[T] {
        &self.window
    }

    pub fn set_window(&mut self, window: WindowKind) -> Result<()> {
        let config = self.config.with_window(window);
        config.validate()?;

        self.window = window.coefficients(config.frame_len);
        self.config = config;
        log::debug!("Pitch analyzer window set to {}", window);
        Ok(())
    }

    /// Changes the F0 search interval. On error the analyzer keeps its previous range.
    pub fn set_f0_range(&mut self, min_f0: T, max_f0: T) -> Result<()> {
        let config = self.config.with_f0_range(min_f0, max_f0);
        let range = config.validate()?;

        self.range = range;
        self.config = config;
        log::debug!(
            "Pitch analyzer F0 range set to {}..{} Hz, lags {}..{}",
            min_f0,
            max_f0,
            range.min,
            range.max
        );
        Ok(())
    }

    /// Changes the voicing thresholds. On error the analyzer keeps its previous ones.
    pub fn set_thresholds(&mut self, thresholds: Thresholds<T>) -> Result<()> {
        let config = self.config.with_thresholds(thresholds);
        config.validate()?;

        self.config = config;
        log::debug!(
            "Pitch analyzer thresholds set to {} dB, r1norm {}, rmaxnorm {}",
            thresholds.power,
            thresholds.r1norm,
            thresholds.rmaxnorm
        );
        Ok(())
    }

    /// Analyses `frame`, which must hold exactly `frame_len` samples.
    ///
    /// The window is applied to `frame` in place: after the call it holds the
    /// windowed samples. A frame of the wrong length is rejected untouched.
    pub fn analyze(&self, frame: &mut [T]) -> Result<Analysis<T>> {
        if frame.len() != self.config.frame_len {
            return Err(Error::FrameLength {
                expected: self.config.frame_len,
                actual: frame.len(),
            });
        }

        apply_window(&self.window, frame);

        let mut autocorr = new_real_buffer(self.range.max);
        autocorrelation(frame, &mut autocorr);

        let lag = find_pitch_lag(&autocorr, self.range);
        let features = Features::from_autocorrelation(&autocorr, lag);
        log::trace!(
            "pot {:.3} r1norm {:.3} rmaxnorm {:.3} lag {:?}",
            features.pot,
            features.r1norm,
            features.rmaxnorm,
            lag
        );

        let frequency = match lag {
            Some(lag) if !features.is_unvoiced(&self.config.thresholds) => {
                T::from_usize(self.config.sampling_freq).unwrap() / T::from_usize(lag).unwrap()
            }
            _ => T::zero(),
        };

        Ok(Analysis {
            lag,
            features,
            voiced: frequency > T::zero(),
            frequency,
        })
    }
}

impl<T> PitchDetector<T> for PitchAnalyzer<T>
where
    T: Float,
{
    fn compute_pitch(&self, frame: &mut [T]) -> Result<T> {
        self.analyze(frame).map(|analysis| analysis.frequency)
    }
}
