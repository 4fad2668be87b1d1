use crate::core::fractals::sets::fractal_set::{BOUND_SQUARED, FractalSet};

/// The Mandelbar: `z <- conj(z)² + c` with `z0 = 0`. Conjugating before
/// squaring only flips the sign of the imaginary update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TricornSet;

impl FractalSet for TricornSet {
    fn iteration_count(&self, real: f64, imag: f64, max_iterations: u32) -> u32 {
        let mut z_real = 0.0;
        let mut z_imag = 0.0;
        let mut iteration = 0;

        while iteration < max_iterations && z_real * z_real + z_imag * z_imag <= BOUND_SQUARED {
            let next_real = z_real * z_real - z_imag * z_imag + real;
            z_imag = -2.0 * z_real * z_imag + imag;
            z_real = next_real;
            iteration += 1;
        }

        iteration
    }

    fn name(&self) -> &str {
        "Tricorn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::sets::mandelbrot::MandelbrotSet;

    #[test]
    fn origin_is_member() {
        assert!(TricornSet.is_member(0.0, 0.0, 500));
    }

    #[test]
    fn agrees_with_mandelbrot_on_real_axis() {
        // with a real c every iterate stays real, so the conjugate is a no-op
        for real in [-2.5, -1.9, -1.2, -0.5, 0.0, 0.2, 0.26, 0.5, 1.0] {
            assert_eq!(
                TricornSet.iteration_count(real, 0.0, 300),
                MandelbrotSet.iteration_count(real, 0.0, 300)
            );
        }
    }

    #[test]
    fn symmetric_under_complex_conjugation() {
        for (real, imag) in [(-0.3, 0.7), (0.1, -0.9), (-1.1, 0.25)] {
            assert_eq!(
                TricornSet.iteration_count(real, imag, 200),
                TricornSet.iteration_count(real, -imag, 200)
            );
        }
    }

    #[test]
    fn differs_from_mandelbrot_off_axis() {
        // c = -0.2 + 0.9i escapes from both, after 3 and 9 steps respectively
        let tricorn = TricornSet.iteration_count(-0.2, 0.9, 1000);
        let mandelbrot = MandelbrotSet.iteration_count(-0.2, 0.9, 1000);

        assert_eq!(tricorn, 3);
        assert_eq!(mandelbrot, 9);
    }
}
