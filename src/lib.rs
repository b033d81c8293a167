//! # Pitch Analyzer
//! *pitch_analyzer* estimates the fundamental frequency (F0) of short frames of a
//! speech signal and decides whether each frame is voiced or unvoiced. It is meant
//! to sit inside a frame-by-frame analysis loop: frames come in, one pitch value per
//! frame goes out.
//!
//! # Algorithm
//! Frames are weighted by a [window][utils::window], then their biased
//! autocorrelation is computed in the time domain. The pitch period is the lag of
//! the first well formed peak past the lobe around lag zero, searched within the
//! lags matching the configured F0 range. The [voicing rule][detector::voicing]
//! looks at the log power of the frame and at the normalised autocorrelation at
//! unit lag and at the pitch period.
//!
//!   * [PitchAnalyzer][detector::analyzer::PitchAnalyzer]
//!   * [AnalyzerConfig][config::AnalyzerConfig]
//!
//! # Examples
//! ```
//! use pitch_analyzer::config::AnalyzerConfig;
//! use pitch_analyzer::detector::analyzer::PitchAnalyzer;
//! use pitch_analyzer::detector::PitchDetector;
//!
//! fn main() {
//!     const SAMPLE_RATE: usize = 16000;
//!     const SIZE: usize = 480;
//!
//!     // Frame coming from some source (microphone, file, etc...)
//!     let dt = 1.0 / SAMPLE_RATE as f64;
//!     let freq = 250.0;
//!     let mut frame: Vec<f64> = (0..SIZE)
//!         .map(|x| (2.0 * std::f64::consts::PI * x as f64 * dt * freq).sin())
//!         .collect();
//!
//!     let analyzer = PitchAnalyzer::new(AnalyzerConfig::new(SIZE, SAMPLE_RATE)).unwrap();
//!
//!     let pitch = analyzer.compute_pitch(&mut frame).unwrap();
//!
//!     println!("Frequency: {}", pitch);
//!     assert_eq!(pitch, 250.0);
//! }
//! ```

pub use config::AnalyzerConfig;
pub use detector::analyzer::{Analysis, PitchAnalyzer};
pub use error::{Error, Result};

pub mod config;
pub mod detector;
pub mod error;
pub mod float;
pub mod utils;
