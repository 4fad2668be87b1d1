use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColouringError {
    InvalidPower { power: f64 },
    InvalidBailout { bailout: f64 },
}

impl fmt::Display for ColouringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPower { power } => {
                write!(f, "Power must be finite and greater than one, got {}", power)
            }
            Self::InvalidBailout { bailout } => {
                write!(
                    f,
                    "Bailout radius must be finite and greater than one, got {}",
                    bailout
                )
            }
        }
    }
}

impl Error for ColouringError {}
