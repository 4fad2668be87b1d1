use crate::core::colouring::colouring_algorithm::ColouringAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::generators::errors::GeneratorConfigError;
use crate::core::iteration::bounded_iterator::{GeneratingFunction, bounded_iterates};
use crate::core::iteration::errors::{validate_max_iterations, validate_stopping_radius};
use std::fmt;
use std::sync::Arc;

/// Everything a generator needs to turn a point into a pixel value. Built
/// through [`GeneratorConfigBuilder`] and never changed afterwards.
#[derive(Clone)]
pub struct GeneratorConfig {
    colouring_algorithm: Arc<dyn ColouringAlgorithm>,
    generating_function: GeneratingFunction,
    max_iterations: u32,
    stopping_radius: f64,
    use_conjugate: bool,
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("colouring_algorithm", &self.colouring_algorithm.display_name())
            .field("max_iterations", &self.max_iterations)
            .field("stopping_radius", &self.stopping_radius)
            .field("use_conjugate", &self.use_conjugate)
            .finish_non_exhaustive()
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
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
    pub fn use_conjugate(&self) -> bool {
        self.use_conjugate
    }

    #[must_use]
    pub fn colouring_algorithm(&self) -> &dyn ColouringAlgorithm {
        &*self.colouring_algorithm
    }

    /// Copy of this configuration with the conjugate toggle set.
    #[must_use]
    pub fn with_conjugate(&self, use_conjugate: bool) -> Self {
        Self {
            use_conjugate,
            ..self.clone()
        }
    }

    /// Iterates `f(z) + constant` from `z_start` and colours the sequence.
    pub(crate) fn pixel_value(&self, z_start: Complex, constant: Complex) -> f64 {
        let function = &*self.generating_function;
        let iterates = bounded_iterates(
            z_start,
            |z| function(z) + constant,
            self.max_iterations,
            self.stopping_radius,
            self.use_conjugate,
        );

        self.colouring_algorithm.pixel_value(&iterates)
    }
}

#[derive(Default)]
pub struct GeneratorConfigBuilder {
    colouring_algorithm: Option<Arc<dyn ColouringAlgorithm>>,
    generating_function: Option<GeneratingFunction>,
    max_iterations: Option<u32>,
    stopping_radius: Option<f64>,
    use_conjugate: bool,
}

impl GeneratorConfigBuilder {
    #[must_use]
    pub fn colouring_algorithm(mut self, colouring_algorithm: Arc<dyn ColouringAlgorithm>) -> Self {
        self.colouring_algorithm = Some(colouring_algorithm);
        self
    }

    #[must_use]
    pub fn generating_function(mut self, generating_function: GeneratingFunction) -> Self {
        self.generating_function = Some(generating_function);
        self
    }

    #[must_use]
    pub fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    #[must_use]
    pub fn stopping_radius(mut self, stopping_radius: f64) -> Self {
        self.stopping_radius = Some(stopping_radius);
        self
    }

    #[must_use]
    pub fn use_conjugate(mut self, use_conjugate: bool) -> Self {
        self.use_conjugate = use_conjugate;
        self
    }

    pub fn build(self) -> Result<GeneratorConfig, GeneratorConfigError> {
        let colouring_algorithm = self
            .colouring_algorithm
            .ok_or(GeneratorConfigError::MissingColouringAlgorithm)?;
        let generating_function = self
            .generating_function
            .ok_or(GeneratorConfigError::MissingGeneratingFunction)?;
        let max_iterations = self
            .max_iterations
            .ok_or(GeneratorConfigError::MissingMaxIterations)?;
        let stopping_radius = self
            .stopping_radius
            .ok_or(GeneratorConfigError::MissingStoppingRadius)?;
        let max_iterations = validate_max_iterations(max_iterations)?;
        let stopping_radius = validate_stopping_radius(stopping_radius)?;

        if let Some(bailout) = colouring_algorithm.required_stopping_radius() {
            if bailout != stopping_radius {
                return Err(GeneratorConfigError::StoppingRadiusMismatch {
                    stopping_radius,
                    bailout,
                });
            }
        }

        Ok(GeneratorConfig {
            colouring_algorithm,
            generating_function,
            max_iterations,
            stopping_radius,
            use_conjugate: self.use_conjugate,
        })
    }
}
