use crate::core::colouring::colouring_algorithm::ColouringAlgorithm;
use crate::core::colouring::errors::ColouringError;
use crate::core::colouring::kinds::ColouringKinds;
use crate::core::data::complex::Complex;

/// Normalised iteration count, giving continuous values across escape-time
/// bands:
///
/// `n + 1 + ln(ln(bailout) / ln|z_n|) / ln(power)`
///
/// where `n` is the sequence length and `z_n` the last iterate. `power` is the
/// leading exponent of the generating function and `bailout` the stopping
/// radius it was iterated with.
///
/// If the last iterate has not left the bailout disc (the orbit hit the
/// iteration cap) or its modulus is not finite, the plain sequence length is
/// returned instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothIterationCount {
    inv_ln_power: f64,
    bailout: f64,
    ln_bailout: f64,
}

impl SmoothIterationCount {
    pub fn new(power: f64, bailout: f64) -> Result<Self, ColouringError> {
        if !(power > 1.0) || !power.is_finite() {
            return Err(ColouringError::InvalidPower { power });
        }
        if !(bailout > 1.0) || !bailout.is_finite() {
            return Err(ColouringError::InvalidBailout { bailout });
        }

        Ok(Self {
            inv_ln_power: 1.0 / power.ln(),
            bailout,
            ln_bailout: bailout.ln(),
        })
    }

    #[must_use]
    pub fn bailout(&self) -> f64 {
        self.bailout
    }
}

impl ColouringAlgorithm for SmoothIterationCount {
    fn pixel_value(&self, iterates: &[Complex]) -> f64 {
        let length = iterates.len() as f64;
        let Some(last) = iterates.last() else {
            return length;
        };

        let modulus = last.magnitude();
        if !(modulus > self.bailout) || !modulus.is_finite() {
            return length;
        }

        length + 1.0 + self.inv_ln_power * (self.ln_bailout / modulus.ln()).ln()
    }

    fn kind(&self) -> ColouringKinds {
        ColouringKinds::SmoothIterationCount
    }

    fn required_stopping_radius(&self) -> Option<f64> {
        Some(self.bailout)
    }
}
