mod controllers;
mod core;
mod presenters;

pub use controllers::cli::render::CliRenderController;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use presenters::file::ppm::PpmFilePresenter;

pub use crate::core::actions::cancellation::{CancelFlag, CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon,
    generate_fractal_parallel_rayon_cancelable,
};
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::progress::{NoProgress, ProgressObserver};
pub use crate::core::algorithms::escape_time_algorithm::EscapeTimeAlgorithm;
pub use crate::core::algorithms::generator_algorithm::GeneratorAlgorithm;
pub use crate::core::algorithms::render_algorithm::RenderAlgorithm;
pub use crate::core::colour_luts::colour_lut::ColourLut;
pub use crate::core::colour_luts::lut_colour_map::LutColourMap;
pub use crate::core::colouring::colouring_algorithm::ColouringAlgorithm;
pub use crate::core::colouring::escape_time::EscapeTime;
pub use crate::core::colouring::kinds::ColouringKinds;
pub use crate::core::colouring::smooth_iteration_count::SmoothIterationCount;
pub use crate::core::config::render_config::{RenderConfig, RenderEngine};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::Point;
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::fractals::generators::factory::{GeneratorSettings, generator_factory};
pub use crate::core::fractals::generators::fractal_generator::FractalGenerator;
pub use crate::core::fractals::generators::generator_config::{GeneratorConfig, GeneratorConfigBuilder};
pub use crate::core::fractals::generators::julia_fatou::JuliaFatouGenerator;
pub use crate::core::fractals::generators::kinds::GeneratorKinds;
pub use crate::core::fractals::generators::mandelbrot::MandelbrotGenerator;
pub use crate::core::fractals::generators::modified_mandelbrot::ModifiedMandelbrotGenerator;
pub use crate::core::fractals::sets::fractal_set::FractalSet;
pub use crate::core::fractals::sets::julia::JuliaSet;
pub use crate::core::fractals::sets::mandelbrot::MandelbrotSet;
pub use crate::core::fractals::sets::tricorn::TricornSet;
pub use crate::core::iteration::bounded_iterator::{BoundedIterator, GeneratingFunction, bounded_iterates};
pub use crate::core::scaling::image_scaling::ImageScaling;
pub use crate::core::view::complex_plane_view::ComplexPlaneView;

/// Error enums, one per concern.
pub mod errors {
    pub use crate::core::algorithms::errors::EscapeTimeAlgorithmError;
    pub use crate::core::colour_luts::errors::ColourLutError;
    pub use crate::core::colouring::errors::ColouringError;
    pub use crate::core::config::errors::RenderConfigError;
    pub use crate::core::data::pixel_buffer::PixelBufferError;
    pub use crate::core::fractals::generators::errors::GeneratorConfigError;
    pub use crate::core::iteration::errors::IterationError;
    pub use crate::core::view::complex_plane_view::ComplexPlaneViewError;
}

/// Ready-made generators.
pub mod presets {
    pub use crate::core::fractals::generators::factory::{
        DEFAULT_MAX_ITERATIONS, DEFAULT_STOPPING_RADIUS, julia_classic_escape_time,
        mandelbrot_escape_time, mandelbrot_smooth_iteration_count,
        modified_mandelbrot_escape_time, rudy_cubic_mandelbrot_escape_time,
    };
}
