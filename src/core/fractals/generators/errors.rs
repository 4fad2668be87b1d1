use crate::core::colouring::errors::ColouringError;
use crate::core::iteration::errors::IterationError;
use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratorConfigError {
    MissingColouringAlgorithm,
    MissingGeneratingFunction,
    MissingMaxIterations,
    MissingStoppingRadius,
    StoppingRadiusMismatch { stopping_radius: f64, bailout: f64 },
    Iteration(IterationError),
    Colouring(ColouringError),
}

impl fmt::Display for GeneratorConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColouringAlgorithm => write!(f, "No colouring algorithm was given"),
            Self::MissingGeneratingFunction => write!(f, "No generating function was given"),
            Self::MissingMaxIterations => write!(f, "No maximum iteration count was given"),
            Self::MissingStoppingRadius => write!(f, "No stopping radius was given"),
            Self::StoppingRadiusMismatch {
                stopping_radius,
                bailout,
            } => write!(
                f,
                "Colouring expects a stopping radius of {}, got {}",
                bailout, stopping_radius
            ),
            Self::Iteration(err) => write!(f, "{}", err),
            Self::Colouring(err) => write!(f, "{}", err),
        }
    }
}

impl Error for GeneratorConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Iteration(err) => Some(err),
            Self::Colouring(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IterationError> for GeneratorConfigError {
    fn from(err: IterationError) -> Self {
        Self::Iteration(err)
    }
}

impl From<ColouringError> for GeneratorConfigError {
    fn from(err: ColouringError) -> Self {
        Self::Colouring(err)
    }
}
