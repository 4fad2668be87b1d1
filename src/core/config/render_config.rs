use crate::core::algorithms::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::algorithms::generator_algorithm::GeneratorAlgorithm;
use crate::core::algorithms::render_algorithm::RenderAlgorithm;
use crate::core::colour_luts::colour_lut::ColourLut;
use crate::core::colour_luts::lut_colour_map::LutColourMap;
use crate::core::colouring::kinds::ColouringKinds;
use crate::core::config::errors::RenderConfigError;
use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::generators::factory::{
    DEFAULT_MAX_ITERATIONS, GeneratorSettings, generator_factory,
};
use crate::core::fractals::generators::kinds::GeneratorKinds;
use crate::core::fractals::sets::factory::fractal_set_factory;
use crate::core::scaling::image_scaling::ImageScaling;
use crate::core::view::complex_plane_view::{
    ComplexPlaneView, DEFAULT_CENTRE_IMAGINARY, DEFAULT_CENTRE_REAL,
};

const DEFAULT_WIDTH: u32 = 900;
const DEFAULT_HEIGHT: u32 = 600;
const DEFAULT_MU: Complex = Complex::new(-0.8, 0.156);

/// Which family of algorithms computes the pixel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEngine {
    /// Unrolled `z² + c` style recurrences with a fixed bailout of 2.
    ClosedForm {
        kind: FractalKinds,
        black_and_white: bool,
    },
    /// Generic iteration of a preset generating function.
    Generator {
        kind: GeneratorKinds,
        colouring: ColouringKinds,
        use_conjugate: bool,
    },
}

impl Default for RenderEngine {
    fn default() -> Self {
        Self::Generator {
            kind: GeneratorKinds::default(),
            colouring: ColouringKinds::default(),
            use_conjugate: false,
        }
    }
}

/// One complete render request: image size, window, fractal and colouring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub centre: Complex,
    pub zoom: f64,
    pub max_iterations: u32,
    /// Overrides the generator's own stopping radius. Ignored by the closed
    /// forms.
    pub stopping_radius: Option<f64>,
    pub mu: Complex,
    pub engine: RenderEngine,
    pub scaling: ImageScaling,
    pub colour_lut: ColourLut,
    pub reverse_lut: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            centre: Complex::new(DEFAULT_CENTRE_REAL, DEFAULT_CENTRE_IMAGINARY),
            zoom: 1.0,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            stopping_radius: None,
            mu: DEFAULT_MU,
            engine: RenderEngine::default(),
            scaling: ImageScaling::Logarithmic,
            colour_lut: ColourLut::Greyscale,
            reverse_lut: false,
        }
    }
}

impl RenderConfig {
    pub fn build_view(&self) -> Result<ComplexPlaneView, RenderConfigError> {
        let mut view = ComplexPlaneView::new(self.width, self.height)?;
        view.set_zoom_factor(self.zoom)?;
        view.set_centre(self.centre.real, self.centre.imag);

        Ok(view)
    }

    pub fn build_algorithm(&self) -> Result<RenderAlgorithm, RenderConfigError> {
        let view = self.build_view()?;

        Ok(match self.engine {
            RenderEngine::ClosedForm {
                kind,
                black_and_white,
            } => {
                let set = fractal_set_factory(kind, self.mu);
                RenderAlgorithm::ClosedForm(
                    EscapeTimeAlgorithm::new(view, set, self.max_iterations)?
                        .with_black_and_white(black_and_white),
                )
            }
            RenderEngine::Generator {
                kind,
                colouring,
                use_conjugate,
            } => {
                let settings = GeneratorSettings {
                    colouring,
                    max_iterations: self.max_iterations,
                    stopping_radius: self.stopping_radius,
                    use_conjugate,
                    mu: self.mu,
                };
                RenderAlgorithm::Generator(GeneratorAlgorithm::new(
                    view,
                    generator_factory(kind, settings)?,
                ))
            }
        })
    }

    #[must_use]
    pub fn colour_map(&self) -> LutColourMap {
        LutColourMap::new(self.colour_lut, self.reverse_lut)
    }

    /// The Julia-Fatou companion of the current view: `μ` becomes the current
    /// centre and the window returns to the origin at zoom 1.
    #[must_use]
    pub fn julia_at_centre(&self) -> Self {
        let colouring = match self.engine {
            RenderEngine::Generator { colouring, .. } => colouring,
            RenderEngine::ClosedForm { .. } => ColouringKinds::default(),
        };

        Self {
            centre: Complex::ZERO,
            zoom: 1.0,
            mu: self.centre,
            engine: RenderEngine::Generator {
                kind: GeneratorKinds::JuliaFatou,
                colouring,
                use_conjugate: false,
            },
            ..*self
        }
    }
}
