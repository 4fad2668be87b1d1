use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_luts::colour_lut::ColourLut;
use crate::core::data::colour::Colour;
use std::error::Error;

/// Adapts a [`ColourLut`] to the pixel buffer's colour map port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LutColourMap {
    lut: ColourLut,
    reversed: bool,
}

impl LutColourMap {
    #[must_use]
    pub fn new(lut: ColourLut, reversed: bool) -> Self {
        Self { lut, reversed }
    }

    #[must_use]
    pub fn lut(&self) -> ColourLut {
        self.lut
    }

    #[must_use]
    pub fn reversed(&self) -> bool {
        self.reversed
    }
}

impl ColourMap<f64> for LutColourMap {
    fn map(&self, value: f64) -> Result<Colour, Box<dyn Error>> {
        let colour = if self.reversed {
            self.lut.colour_reversed(value)?
        } else {
            self.lut.colour(value)?
        };

        Ok(colour)
    }

    fn display_name(&self) -> &str {
        self.lut.display_name()
    }
}
