use crate::core::colouring::colouring_algorithm::ColouringAlgorithm;
use crate::core::colouring::kinds::ColouringKinds;
use crate::core::data::complex::Complex;

/// Pixel value is the length of the iterate sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EscapeTime;

impl ColouringAlgorithm for EscapeTime {
    fn pixel_value(&self, iterates: &[Complex]) -> f64 {
        iterates.len() as f64
    }

    fn kind(&self) -> ColouringKinds {
        ColouringKinds::EscapeTime
    }
}
