pub mod bounded_iterator;
pub mod errors;
