use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::algorithms::errors::EscapeTimeAlgorithmError;
use crate::core::data::point::Point;
use crate::core::fractals::sets::fractal_set::FractalSet;
use crate::core::view::complex_plane_view::ComplexPlaneView;
use std::convert::Infallible;

/// Renders a closed-form set over a view. Pixel values are iteration counts,
/// or `1.0`/`0.0` for members/non-members in black-and-white mode.
#[derive(Debug, Clone)]
pub struct EscapeTimeAlgorithm<S: FractalSet> {
    view: ComplexPlaneView,
    set: S,
    max_iterations: u32,
    black_and_white: bool,
}

impl<S: FractalSet> EscapeTimeAlgorithm<S> {
    pub fn new(
        view: ComplexPlaneView,
        set: S,
        max_iterations: u32,
    ) -> Result<Self, EscapeTimeAlgorithmError> {
        if max_iterations == 0 {
            return Err(EscapeTimeAlgorithmError::ZeroMaxIterationsError);
        }

        Ok(Self {
            view,
            set,
            max_iterations,
            black_and_white: false,
        })
    }

    #[must_use]
    pub fn with_black_and_white(mut self, black_and_white: bool) -> Self {
        self.black_and_white = black_and_white;
        self
    }

    #[must_use]
    pub fn view(&self) -> &ComplexPlaneView {
        &self.view
    }

    #[must_use]
    pub fn set(&self) -> &S {
        &self.set
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl<S: FractalSet> FractalAlgorithm for EscapeTimeAlgorithm<S> {
    type Success = f64;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = self.view.pixel_to_complex_at(pixel);
        let count = self.set.iteration_count(c.real, c.imag, self.max_iterations);

        if self.black_and_white {
            return Ok(if count >= self.max_iterations { 1.0 } else { 0.0 });
        }

        Ok(count as f64)
    }
}
