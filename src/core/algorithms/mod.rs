pub mod errors;
pub mod escape_time_algorithm;
pub mod generator_algorithm;
pub mod render_algorithm;
