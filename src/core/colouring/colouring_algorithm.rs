use crate::core::colouring::kinds::ColouringKinds;
use crate::core::data::complex::Complex;

/// Turns the iterate sequence of one pixel into a single pixel value.
///
/// The sequence is never empty: it always starts with the initial value.
pub trait ColouringAlgorithm: Send + Sync {
    fn pixel_value(&self, iterates: &[Complex]) -> f64;

    fn kind(&self) -> ColouringKinds;

    /// Stopping radius the sequence must have been iterated with, for
    /// algorithms whose formula depends on it.
    fn required_stopping_radius(&self) -> Option<f64> {
        None
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}
