use crate::error::Result;
use crate::float::Float;

pub mod analyzer;
pub mod internals;
pub mod voicing;

pub trait PitchDetector<T>
where
    T: Float,
{
    /// Estimates the F0 of `frame` in Hz, or returns zero if the frame is unvoiced.
    /// `frame` may be modified by the detector.
    fn compute_pitch(&self, frame: &mut [T]) -> Result<T>;
}
