use crate::core::fractals::sets::fractal_set::{BOUND_SQUARED, FractalSet};

/// `z <- z² + c` with `z0 = 0` and `c` the sampled point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MandelbrotSet;

impl FractalSet for MandelbrotSet {
    fn iteration_count(&self, real: f64, imag: f64, max_iterations: u32) -> u32 {
        let mut z_real = 0.0;
        let mut z_imag = 0.0;
        let mut iteration = 0;

        while iteration < max_iterations && z_real * z_real + z_imag * z_imag <= BOUND_SQUARED {
            let next_real = z_real * z_real - z_imag * z_imag + real;
            z_imag = 2.0 * z_real * z_imag + imag;
            z_real = next_real;
            iteration += 1;
        }

        iteration
    }

    fn name(&self) -> &str {
        "Mandelbrot set"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_member_for_any_iteration_cap() {
        for max_iterations in [1, 2, 17, 256, 4096] {
            assert!(MandelbrotSet.is_member(0.0, 0.0, max_iterations));
            assert_eq!(MandelbrotSet.iteration_count(0.0, 0.0, max_iterations), max_iterations);
        }
    }

    #[test]
    fn far_point_escapes_quickly() {
        let count = MandelbrotSet.iteration_count(2.0, 2.0, 256);

        assert!(count < 256);
        assert_eq!(count, 1);
        assert!(!MandelbrotSet.is_member(2.0, 2.0, 256));
    }

    #[test]
    fn known_interior_points_are_members() {
        // main cardioid and period-2 bulb
        assert!(MandelbrotSet.is_member(-0.1, 0.1, 1000));
        assert!(MandelbrotSet.is_member(-1.0, 0.0, 1000));
    }

    #[test]
    fn known_exterior_point_escapes() {
        // c = 0.26 lies just outside the cusp of the cardioid
        let count = MandelbrotSet.iteration_count(0.26, 0.0, 10_000);

        assert!(count > 10);
        assert!(count < 10_000);
    }

    #[test]
    fn zero_cap_takes_no_steps() {
        assert_eq!(MandelbrotSet.iteration_count(2.0, 2.0, 0), 0);
    }

    #[test]
    fn has_no_info_lines() {
        assert!(MandelbrotSet.info_lines().is_empty());
        assert_eq!(MandelbrotSet.name(), "Mandelbrot set");
    }
}
