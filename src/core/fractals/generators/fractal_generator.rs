use crate::core::data::complex::Complex;
use crate::core::fractals::generators::generator_config::GeneratorConfig;

/// Maps a point of the complex plane to a pixel value by iterating a
/// configured function and colouring the resulting orbit.
pub trait FractalGenerator: Send + Sync {
    fn pixel_value(&self, point: Complex) -> f64;

    fn name(&self) -> &str;

    fn info_lines(&self) -> Vec<String> {
        Vec::new()
    }

    fn config(&self) -> &GeneratorConfig;
}

impl FractalGenerator for Box<dyn FractalGenerator> {
    fn pixel_value(&self, point: Complex) -> f64 {
        (**self).pixel_value(point)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn info_lines(&self) -> Vec<String> {
        (**self).info_lines()
    }

    fn config(&self) -> &GeneratorConfig {
        (**self).config()
    }
}
