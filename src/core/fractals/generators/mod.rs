pub mod errors;
pub mod factory;
pub mod fractal_generator;
pub mod generator_config;
pub mod julia_fatou;
pub mod kinds;
pub mod mandelbrot;
pub mod modified_mandelbrot;
