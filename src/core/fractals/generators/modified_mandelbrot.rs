use crate::core::data::complex::Complex;
use crate::core::fractals::generators::fractal_generator::FractalGenerator;
use crate::core::fractals::generators::generator_config::GeneratorConfig;

/// Iterates `f(z) + c` starting from `z0 = c`.
#[derive(Debug, Clone)]
pub struct ModifiedMandelbrotGenerator {
    config: GeneratorConfig,
}

impl ModifiedMandelbrotGenerator {
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }
}

impl FractalGenerator for ModifiedMandelbrotGenerator {
    fn pixel_value(&self, point: Complex) -> f64 {
        self.config.pixel_value(point, point)
    }

    fn name(&self) -> &str {
        "Modified Mandelbrot"
    }

    fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colouring::escape_time::EscapeTime;
    use crate::core::fractals::generators::mandelbrot::MandelbrotGenerator;
    use std::sync::Arc;

    fn escape_time_config() -> GeneratorConfig {
        GeneratorConfig::builder()
            .colouring_algorithm(Arc::new(EscapeTime))
            .generating_function(Arc::new(|z| z * z))
            .max_iterations(100)
            .stopping_radius(2.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_quadratic_orbit_is_mandelbrot_orbit_without_leading_zero() {
        let modified = ModifiedMandelbrotGenerator::new(escape_time_config());
        let classic = MandelbrotGenerator::new(escape_time_config());

        for point in [Complex::new(2.0, 2.0), Complex::new(0.3, 0.6), Complex::new(-1.9, 0.1)] {
            assert_eq!(modified.pixel_value(point), classic.pixel_value(point) - 1.0);
        }
    }

    #[test]
    fn test_start_outside_radius_gives_single_iterate() {
        let modified = ModifiedMandelbrotGenerator::new(escape_time_config());

        assert_eq!(modified.pixel_value(Complex::new(2.0, 2.0)), 1.0);
    }

    #[test]
    fn test_bounded_point_reaches_cap() {
        let modified = ModifiedMandelbrotGenerator::new(escape_time_config());

        assert_eq!(modified.pixel_value(Complex::new(-0.1, 0.1)), 101.0);
        assert_eq!(modified.name(), "Modified Mandelbrot");
    }
}
