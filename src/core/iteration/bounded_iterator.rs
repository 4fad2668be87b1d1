use crate::core::data::complex::Complex;
use crate::core::iteration::errors::{
    validate_max_iterations, validate_stopping_radius, IterationError,
};
use std::fmt;
use std::sync::Arc;

/// A complex function to iterate. Shared behind an `Arc` so configurations
/// stay cheap to clone and can be handed to worker threads.
pub type GeneratingFunction = Arc<dyn Fn(Complex) -> Complex + Send + Sync>;

/// Iterates `f` (or `f ∘ conj` when `conjugate` is set) starting at `z_start`.
///
/// The returned sequence always begins with `z_start`. A new iterate is
/// appended while the previous one lies within `stopping_radius` and fewer
/// than `max_iterations` steps have been taken, so the sequence holds at most
/// `max_iterations + 1` values and, when the orbit escapes, ends with the
/// first value outside the radius.
///
/// An iterate with a NaN component counts as escaped.
pub fn bounded_iterates<F>(
    z_start: Complex,
    f: F,
    max_iterations: u32,
    stopping_radius: f64,
    conjugate: bool,
) -> Vec<Complex>
where
    F: Fn(Complex) -> Complex,
{
    let radius_squared = stopping_radius * stopping_radius;
    let mut iterates = Vec::with_capacity(initial_capacity(max_iterations));
    let mut z = z_start;
    iterates.push(z);

    let mut steps = 0;
    while steps < max_iterations && z.magnitude_squared() <= radius_squared {
        z = if conjugate { f(z.conjugate()) } else { f(z) };
        iterates.push(z);
        steps += 1;
    }

    iterates
}

// most orbits escape early, so don't reserve the worst case up front
fn initial_capacity(max_iterations: u32) -> usize {
    (max_iterations as usize).saturating_add(1).min(64)
}

/// Holds a function together with the iteration cap and stopping radius.
///
/// Both limits are validated on construction and by the setters; a rejected
/// value leaves the iterator unchanged.
#[derive(Clone)]
pub struct BoundedIterator {
    max_iterations: u32,
    stopping_radius: f64,
    function: GeneratingFunction,
}

impl fmt::Debug for BoundedIterator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedIterator")
            .field("max_iterations", &self.max_iterations)
            .field("stopping_radius", &self.stopping_radius)
            .finish_non_exhaustive()
    }
}

impl BoundedIterator {
    pub fn new(
        max_iterations: u32,
        stopping_radius: f64,
        function: GeneratingFunction,
    ) -> Result<Self, IterationError> {
        Ok(Self {
            max_iterations: validate_max_iterations(max_iterations)?,
            stopping_radius: validate_stopping_radius(stopping_radius)?,
            function,
        })
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), IterationError> {
        self.max_iterations = validate_max_iterations(max_iterations)?;
        Ok(())
    }

    pub fn set_stopping_radius(&mut self, stopping_radius: f64) -> Result<(), IterationError> {
        self.stopping_radius = validate_stopping_radius(stopping_radius)?;
        Ok(())
    }

    pub fn set_function(&mut self, function: GeneratingFunction) {
        self.function = function;
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn stopping_radius(&self) -> f64 {
        self.stopping_radius
    }

    #[must_use]
    pub fn iterate(&self, z_start: Complex) -> Vec<Complex> {
        bounded_iterates(
            z_start,
            &*self.function,
            self.max_iterations,
            self.stopping_radius,
            false,
        )
    }

    /// Like [`iterate`](Self::iterate) but applies the function to the
    /// conjugate of each iterate.
    #[must_use]
    pub fn iterate_conjugate(&self, z_start: Complex) -> Vec<Complex> {
        bounded_iterates(
            z_start,
            &*self.function,
            self.max_iterations,
            self.stopping_radius,
            true,
        )
    }
}
