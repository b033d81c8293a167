//! Error types for pitch analysis.
//!
//! Configuration problems are caught when an analyzer is built or
//! reconfigured, so per-frame analysis only has to report frames of the
//! wrong length.

use thiserror::Error;

/// Result type alias using this crate's [Error] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or running a
/// [PitchAnalyzer][crate::detector::analyzer::PitchAnalyzer].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The frame handed to the analyzer does not have the configured length.
    ///
    /// This is the invalid-input signal of the per-frame operation. The frame
    /// is left untouched when it is returned.
    #[error("Frame has {actual} samples, expected {expected}")]
    FrameLength { expected: usize, actual: usize },

    /// Invalid parameter value.
    ///
    /// Returned for a zero sampling frequency, a frame too short to window,
    /// non-positive or non-finite F0 bounds and similar.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The F0 bounds do not leave any lag to search.
    ///
    /// Happens when the frame is too short to hold two periods of the lowest
    /// F0, or when the bounds are swapped.
    #[error("Empty lag range [{lag_min}, {lag_max}): frame too short or F0 bounds swapped")]
    DegenerateLagRange { lag_min: usize, lag_max: usize },

    /// A window name that doesn't match any [WindowKind][crate::utils::window::WindowKind].
    #[error("Unknown window type: {0}")]
    UnknownWindow(String),
}
