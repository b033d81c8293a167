//! Voiced/unvoiced decision from three autocorrelation features.

use crate::error::{Error, Result};
use crate::float::Float;

/// Joint rule thresholds: a frame whose unit-lag and peak correlations are
/// both below these is unvoiced even when it passes the individual thresholds.
const JOINT_R1_THRESHOLD: f64 = 0.935;
const JOINT_RMAX_THRESHOLD: f64 = 0.4;

/// Thresholds of the voicing rule.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thresholds<T>
where
    T: Float,
{
    /// Minimum log power, in dB, of a voiced frame.
    pub power: T,
    /// Minimum `r[1] / r[0]`.
    pub r1norm: T,
    /// Minimum `r[lag] / r[0]` at the candidate pitch lag.
    pub rmaxnorm: T,
}

impl<T> Default for Thresholds<T>
where
    T: Float,
{
    fn default() -> Self {
        Thresholds {
            power: T::from_f64(-50.5).unwrap(),
            r1norm: T::from_f64(0.7).unwrap(),
            rmaxnorm: T::from_f64(0.3).unwrap(),
        }
    }
}

impl<T> Thresholds<T>
where
    T: Float,
{
    /// Rejects thresholds that are not finite. A NaN threshold never compares
    /// below anything and would let every frame through.
    pub fn validate(&self) -> Result<()> {
        for (name, threshold) in [
            ("power", self.power),
            ("r1norm", self.r1norm),
            ("rmaxnorm", self.rmaxnorm),
        ] {
            if !threshold.is_finite() {
                return Err(Error::InvalidParameter(format!(
                    "{} threshold must be finite, got {}",
                    name, threshold
                )));
            }
        }
        Ok(())
    }
}

/// Features of a frame the voicing decision is made on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Features<T>
where
    T: Float,
{
    /// Log power `10 * log10(r[0])`.
    pub pot: T,
    /// Normalised correlation at unit lag.
    pub r1norm: T,
    /// Normalised correlation at the candidate pitch lag, zero when there is none.
    pub rmaxnorm: T,
}

impl<T> Features<T>
where
    T: Float,
{
    /// Extracts the features from an autocorrelation whose `r[0]` is non-zero.
    pub fn from_autocorrelation(autocorr: &[T], lag: Option<usize>) -> Self {
        let r0 = autocorr[0];
        Features {
            pot: T::from_f64(10.0).unwrap() * r0.log10(),
            r1norm: autocorr[1] / r0,
            rmaxnorm: lag.map_or(T::zero(), |lag| autocorr[lag] / r0),
        }
    }

    /// Features computed from a frame holding NaN or infinite samples are never
    /// finite, and such a frame is unvoiced.
    pub fn is_unvoiced(&self, thresholds: &Thresholds<T>) -> bool {
        !self.pot.is_finite()
            || !self.r1norm.is_finite()
            || !self.rmaxnorm.is_finite()
            || self.pot < thresholds.power
            || self.r1norm < thresholds.r1norm
            || self.rmaxnorm < thresholds.rmaxnorm
            || (self.r1norm < T::from_f64(JOINT_R1_THRESHOLD).unwrap()
                && self.rmaxnorm < T::from_f64(JOINT_RMAX_THRESHOLD).unwrap())
    }
}
