pub mod factory;
pub mod fractal_set;
pub mod julia;
pub mod mandelbrot;
pub mod tricorn;
