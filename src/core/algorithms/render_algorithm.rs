use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::algorithms::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::algorithms::generator_algorithm::GeneratorAlgorithm;
use crate::core::data::point::Point;
use crate::core::fractals::generators::fractal_generator::FractalGenerator;
use crate::core::fractals::sets::fractal_set::FractalSet;
use crate::core::view::complex_plane_view::ComplexPlaneView;
use std::convert::Infallible;
use std::fmt;

/// Either rendering engine behind one [`FractalAlgorithm`].
pub enum RenderAlgorithm {
    ClosedForm(EscapeTimeAlgorithm<Box<dyn FractalSet>>),
    Generator(GeneratorAlgorithm<Box<dyn FractalGenerator>>),
}

impl RenderAlgorithm {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::ClosedForm(algorithm) => algorithm.set().name(),
            Self::Generator(algorithm) => algorithm.generator().name(),
        }
    }

    #[must_use]
    pub fn info_lines(&self) -> Vec<String> {
        match self {
            Self::ClosedForm(algorithm) => algorithm.set().info_lines(),
            Self::Generator(algorithm) => algorithm.generator().info_lines(),
        }
    }

    #[must_use]
    pub fn view(&self) -> &ComplexPlaneView {
        match self {
            Self::ClosedForm(algorithm) => algorithm.view(),
            Self::Generator(algorithm) => algorithm.view(),
        }
    }
}

impl fmt::Debug for RenderAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderAlgorithm")
            .field("name", &self.name())
            .field("view", self.view())
            .finish()
    }
}

impl FractalAlgorithm for RenderAlgorithm {
    type Success = f64;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        match self {
            Self::ClosedForm(algorithm) => algorithm.compute(pixel),
            Self::Generator(algorithm) => algorithm.compute(pixel),
        }
    }
}
