use crate::core::algorithms::errors::EscapeTimeAlgorithmError;
use crate::core::fractals::generators::errors::GeneratorConfigError;
use crate::core::view::complex_plane_view::ComplexPlaneViewError;
use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderConfigError {
    View(ComplexPlaneViewError),
    EscapeTime(EscapeTimeAlgorithmError),
    Generator(GeneratorConfigError),
}

impl fmt::Display for RenderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View(err) => write!(f, "invalid view: {}", err),
            Self::EscapeTime(err) => write!(f, "invalid escape-time settings: {}", err),
            Self::Generator(err) => write!(f, "invalid generator settings: {}", err),
        }
    }
}

impl Error for RenderConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::View(err) => Some(err),
            Self::EscapeTime(err) => Some(err),
            Self::Generator(err) => Some(err),
        }
    }
}

impl From<ComplexPlaneViewError> for RenderConfigError {
    fn from(err: ComplexPlaneViewError) -> Self {
        Self::View(err)
    }
}

impl From<EscapeTimeAlgorithmError> for RenderConfigError {
    fn from(err: EscapeTimeAlgorithmError) -> Self {
        Self::EscapeTime(err)
    }
}

impl From<GeneratorConfigError> for RenderConfigError {
    fn from(err: GeneratorConfigError) -> Self {
        Self::Generator(err)
    }
}
