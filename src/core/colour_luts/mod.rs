pub mod colour_lut;
pub mod errors;
pub mod lut_colour_map;
