use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColourLutError {
    ValueOutOfRange { value: f64 },
}

impl fmt::Display for ColourLutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueOutOfRange { value } => {
                write!(f, "value {} is outside the range [0, 1]", value)
            }
        }
    }
}

impl Error for ColourLutError {}
