use crate::core::colouring::{
    escape_time::EscapeTime, factory::colouring_algorithm_factory, kinds::ColouringKinds,
    smooth_iteration_count::SmoothIterationCount,
};
use crate::core::data::complex::Complex;
use crate::core::fractals::generators::{
    errors::GeneratorConfigError, fractal_generator::FractalGenerator,
    generator_config::GeneratorConfig, julia_fatou::JuliaFatouGenerator, kinds::GeneratorKinds,
    mandelbrot::MandelbrotGenerator, modified_mandelbrot::ModifiedMandelbrotGenerator,
};
use crate::core::iteration::bounded_iterator::GeneratingFunction;
use std::sync::Arc;

pub const DEFAULT_MAX_ITERATIONS: u32 = 256;
pub const DEFAULT_STOPPING_RADIUS: f64 = 2.0;

const RUDY_CUBIC_STOPPING_RADIUS: f64 = 1.0e10;
const RUDY_CUBIC_D: Complex = Complex::new(-0.7198, 0.9111);

fn square() -> GeneratingFunction {
    Arc::new(|z| z * z)
}

// z³ + d·z
fn rudy_cubic() -> GeneratingFunction {
    Arc::new(|z| z * z * z + z * RUDY_CUBIC_D)
}

fn escape_time_config(
    generating_function: GeneratingFunction,
    stopping_radius: f64,
) -> Result<GeneratorConfig, GeneratorConfigError> {
    GeneratorConfig::builder()
        .colouring_algorithm(Arc::new(EscapeTime))
        .generating_function(generating_function)
        .max_iterations(DEFAULT_MAX_ITERATIONS)
        .stopping_radius(stopping_radius)
        .build()
}

/// `z² + c`, escape-time coloured.
pub fn mandelbrot_escape_time() -> Result<MandelbrotGenerator, GeneratorConfigError> {
    Ok(MandelbrotGenerator::new(escape_time_config(
        square(),
        DEFAULT_STOPPING_RADIUS,
    )?))
}

/// `z² + c`, coloured with the smooth iteration count.
pub fn mandelbrot_smooth_iteration_count() -> Result<MandelbrotGenerator, GeneratorConfigError> {
    let config = GeneratorConfig::builder()
        .colouring_algorithm(Arc::new(SmoothIterationCount::new(
            2.0,
            DEFAULT_STOPPING_RADIUS,
        )?))
        .generating_function(square())
        .max_iterations(DEFAULT_MAX_ITERATIONS)
        .stopping_radius(DEFAULT_STOPPING_RADIUS)
        .build()?;

    Ok(MandelbrotGenerator::new(config))
}

pub fn modified_mandelbrot_escape_time()
-> Result<ModifiedMandelbrotGenerator, GeneratorConfigError> {
    Ok(ModifiedMandelbrotGenerator::new(escape_time_config(
        square(),
        DEFAULT_STOPPING_RADIUS,
    )?))
}

/// Rudy Rucker's cubic Mandelbrot: `z³ + d·z + c` from `z0 = c`, with
/// `d = -0.7198 + 0.9111i`.
pub fn rudy_cubic_mandelbrot_escape_time()
-> Result<ModifiedMandelbrotGenerator, GeneratorConfigError> {
    Ok(ModifiedMandelbrotGenerator::new(escape_time_config(
        rudy_cubic(),
        RUDY_CUBIC_STOPPING_RADIUS,
    )?))
}

/// `z² + μ`, escape-time coloured.
pub fn julia_classic_escape_time(mu: Complex) -> Result<JuliaFatouGenerator, GeneratorConfigError> {
    Ok(JuliaFatouGenerator::new(
        escape_time_config(square(), DEFAULT_STOPPING_RADIUS)?,
        mu,
    ))
}

/// Caller-tunable settings for [`generator_factory`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorSettings {
    pub colouring: ColouringKinds,
    pub max_iterations: u32,
    /// Overrides the family's own stopping radius when set.
    pub stopping_radius: Option<f64>,
    pub use_conjugate: bool,
    pub mu: Complex,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            colouring: ColouringKinds::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            stopping_radius: None,
            use_conjugate: false,
            mu: Complex::ZERO,
        }
    }
}

/// Builds the generator for `kind` from its preset function, applying
/// `settings` on top. The smooth count uses the function's degree as its
/// power and the stopping radius as its bailout.
pub fn generator_factory(
    kind: GeneratorKinds,
    settings: GeneratorSettings,
) -> Result<Box<dyn FractalGenerator>, GeneratorConfigError> {
    let (generating_function, power, default_radius) = match kind {
        GeneratorKinds::Mandelbrot
        | GeneratorKinds::ModifiedMandelbrot
        | GeneratorKinds::JuliaFatou => (square(), 2.0, DEFAULT_STOPPING_RADIUS),
        GeneratorKinds::RudyCubicMandelbrot => (rudy_cubic(), 3.0, RUDY_CUBIC_STOPPING_RADIUS),
    };
    let stopping_radius = settings.stopping_radius.unwrap_or(default_radius);

    let config = GeneratorConfig::builder()
        .colouring_algorithm(colouring_algorithm_factory(
            settings.colouring,
            power,
            stopping_radius,
        )?)
        .generating_function(generating_function)
        .max_iterations(settings.max_iterations)
        .stopping_radius(stopping_radius)
        .use_conjugate(settings.use_conjugate)
        .build()?;

    Ok(match kind {
        GeneratorKinds::Mandelbrot => Box::new(MandelbrotGenerator::new(config)),
        GeneratorKinds::ModifiedMandelbrot | GeneratorKinds::RudyCubicMandelbrot => {
            Box::new(ModifiedMandelbrotGenerator::new(config))
        }
        GeneratorKinds::JuliaFatou => Box::new(JuliaFatouGenerator::new(config, settings.mu)),
    })
}
