pub mod colouring_algorithm;
pub mod errors;
pub mod escape_time;
pub mod factory;
pub mod kinds;
pub mod smooth_iteration_count;
