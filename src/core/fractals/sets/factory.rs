use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::sets::{
    fractal_set::FractalSet, julia::JuliaSet, mandelbrot::MandelbrotSet, tricorn::TricornSet,
};

/// `mu` is only read by the Julia set.
#[must_use]
pub fn fractal_set_factory(kind: FractalKinds, mu: Complex) -> Box<dyn FractalSet> {
    match kind {
        FractalKinds::Mandelbrot => Box::new(MandelbrotSet),
        FractalKinds::Julia => Box::new(JuliaSet::new(mu)),
        FractalKinds::Tricorn => Box::new(TricornSet),
    }
}
