use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel work of a render. `pixel` is an image coordinate with `(0, 0)`
/// at the top-left corner; implementations map it onto the complex plane
/// themselves and must give the same answer for the same pixel every time.
pub trait FractalAlgorithm {
    /// Raw value handed on to scaling and colouring.
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
