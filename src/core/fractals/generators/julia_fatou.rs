use crate::core::data::complex::Complex;
use crate::core::fractals::generators::fractal_generator::FractalGenerator;
use crate::core::fractals::generators::generator_config::GeneratorConfig;
use crate::core::fractals::sets::julia::mu_info_lines;

/// Iterates `f(z) + μ` from `z0` = the sampled point, `μ` fixed per generator.
#[derive(Debug, Clone)]
pub struct JuliaFatouGenerator {
    config: GeneratorConfig,
    mu: Complex,
    info_lines: Vec<String>,
}

impl JuliaFatouGenerator {
    #[must_use]
    pub fn new(config: GeneratorConfig, mu: Complex) -> Self {
        Self {
            config,
            mu,
            info_lines: mu_info_lines(mu),
        }
    }

    #[must_use]
    pub fn mu(&self) -> Complex {
        self.mu
    }
}

impl FractalGenerator for JuliaFatouGenerator {
    fn pixel_value(&self, point: Complex) -> f64 {
        self.config.pixel_value(point, self.mu)
    }

    fn name(&self) -> &str {
        "Julia-Fatou"
    }

    fn info_lines(&self) -> Vec<String> {
        self.info_lines.clone()
    }

    fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}
