/// Closed-form escape-time test for one quadratic family.
///
/// Implementations unroll `z <- z² + c` (or a variant of it) into real
/// arithmetic and stop as soon as `|z| > 2` or `max_iterations` steps have
/// been taken.
pub trait FractalSet: Send + Sync {
    /// Number of steps taken before the orbit left the radius-2 disc, capped at
    /// `max_iterations`.
    fn iteration_count(&self, real: f64, imag: f64, max_iterations: u32) -> u32;

    /// A point belongs to the set when its orbit survives every step.
    fn is_member(&self, real: f64, imag: f64, max_iterations: u32) -> bool {
        self.iteration_count(real, imag, max_iterations) >= max_iterations
    }

    fn name(&self) -> &str;

    fn info_lines(&self) -> Vec<String> {
        Vec::new()
    }
}

pub(crate) const BOUND_SQUARED: f64 = 2.0 * 2.0;

impl FractalSet for Box<dyn FractalSet> {
    fn iteration_count(&self, real: f64, imag: f64, max_iterations: u32) -> u32 {
        (**self).iteration_count(real, imag, max_iterations)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn info_lines(&self) -> Vec<String> {
        (**self).info_lines()
    }
}
