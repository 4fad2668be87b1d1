use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationError {
    ZeroMaxIterationsError,
    InvalidStoppingRadius { radius: f64 },
}

impl fmt::Display for IterationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidStoppingRadius { radius } => {
                write!(
                    f,
                    "Stopping radius must be positive and finite, got {}",
                    radius
                )
            }
        }
    }
}

impl Error for IterationError {}

pub(crate) fn validate_max_iterations(max_iterations: u32) -> Result<u32, IterationError> {
    if max_iterations == 0 {
        return Err(IterationError::ZeroMaxIterationsError);
    }

    Ok(max_iterations)
}

pub(crate) fn validate_stopping_radius(radius: f64) -> Result<f64, IterationError> {
    if !(radius > 0.0) || !radius.is_finite() {
        return Err(IterationError::InvalidStoppingRadius { radius });
    }

    Ok(radius)
}
