use crate::core::data::complex::Complex;
use crate::core::fractals::generators::fractal_generator::FractalGenerator;
use crate::core::fractals::generators::generator_config::GeneratorConfig;

/// Iterates `f(z) + c` from `z0 = 0`, with `c` the sampled point.
#[derive(Debug, Clone)]
pub struct MandelbrotGenerator {
    config: GeneratorConfig,
}

impl MandelbrotGenerator {
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }
}

impl FractalGenerator for MandelbrotGenerator {
    fn pixel_value(&self, point: Complex) -> f64 {
        self.config.pixel_value(Complex::ZERO, point)
    }

    fn name(&self) -> &str {
        "Mandelbrot"
    }

    fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}
