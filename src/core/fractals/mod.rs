pub mod fractal_kinds;
pub mod generators;
pub mod sets;
