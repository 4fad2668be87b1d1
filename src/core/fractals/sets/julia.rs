use crate::core::data::complex::Complex;
use crate::core::fractals::sets::fractal_set::{BOUND_SQUARED, FractalSet};

const MU: char = '\u{03BC}';

/// `z <- z² + μ` with `μ` fixed and `z0` the sampled point.
#[derive(Debug, Clone, PartialEq)]
pub struct JuliaSet {
    mu: Complex,
    info_lines: Vec<String>,
}

impl JuliaSet {
    #[must_use]
    pub fn new(mu: Complex) -> Self {
        Self {
            mu,
            info_lines: mu_info_lines(mu),
        }
    }

    #[must_use]
    pub fn mu(&self) -> Complex {
        self.mu
    }
}

pub(crate) fn mu_info_lines(mu: Complex) -> Vec<String> {
    vec![
        format!("Re({}) = {}", MU, mu.real),
        format!("Im({}) = {}", MU, mu.imag),
    ]
}

impl FractalSet for JuliaSet {
    fn iteration_count(&self, real: f64, imag: f64, max_iterations: u32) -> u32 {
        let mut z_real = real;
        let mut z_imag = imag;
        let mut iteration = 0;

        while iteration < max_iterations && z_real * z_real + z_imag * z_imag <= BOUND_SQUARED {
            let next_real = z_real * z_real - z_imag * z_imag + self.mu.real;
            z_imag = 2.0 * z_real * z_imag + self.mu.imag;
            z_real = next_real;
            iteration += 1;
        }

        iteration
    }

    fn name(&self) -> &str {
        "Julia set"
    }

    fn info_lines(&self) -> Vec<String> {
        self.info_lines.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn douady_rabbit() -> JuliaSet {
        JuliaSet::new(Complex::new(-0.123, 0.745))
    }

    #[test]
    fn iteration_count_is_monotonic_in_cap() {
        let julia = JuliaSet::new(Complex::new(-0.7, 0.27));

        for (real, imag) in [(0.0, 0.0), (0.3, -0.2), (-1.2, 0.1), (1.5, 1.5), (0.01, 0.6)] {
            let mut previous = 0;
            for max_iterations in [1, 2, 5, 10, 50, 100, 500, 1000] {
                let count = julia.iteration_count(real, imag, max_iterations);
                assert!(count >= previous);
                assert!(count <= max_iterations);
                previous = count;
            }
        }
    }

    #[test]
    fn centre_of_rabbit_is_member() {
        assert!(douady_rabbit().is_member(0.0, 0.0, 1000));
    }

    #[test]
    fn far_start_escapes_immediately() {
        assert_eq!(douady_rabbit().iteration_count(3.0, 0.0, 256), 0);
    }

    #[test]
    fn zero_mu_is_unit_disc() {
        let julia = JuliaSet::new(Complex::ZERO);

        assert!(julia.is_member(0.5, 0.5, 500));
        assert!(!julia.is_member(1.01, 0.0, 500));
    }

    #[test]
    fn info_lines_report_mu() {
        let lines = JuliaSet::new(Complex::new(-0.7, 0.27)).info_lines();

        assert_eq!(lines, vec!["Re(\u{03BC}) = -0.7", "Im(\u{03BC}) = 0.27"]);
    }
}
