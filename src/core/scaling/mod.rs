pub mod image_scaling;
