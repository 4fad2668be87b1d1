pub mod actions;
pub mod algorithms;
pub mod colour_luts;
pub mod colouring;
pub mod config;
pub mod data;
pub mod fractals;
pub mod iteration;
pub mod scaling;
pub mod view;
