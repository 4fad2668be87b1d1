#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Builds a colour from channel intensities in `[0, 1]`, rounding to the
    /// nearest byte. Out-of-range intensities saturate.
    #[must_use]
    pub fn from_unit_rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: unit_to_byte(r),
            g: unit_to_byte(g),
            b: unit_to_byte(b),
        }
    }

    /// HSB (a.k.a. HSV) to RGB. `hue` wraps around, so only its fractional
    /// part matters.
    #[must_use]
    pub fn from_hsb(hue: f64, saturation: f64, brightness: f64) -> Self {
        if saturation <= 0.0 {
            return Self::from_unit_rgb(brightness, brightness, brightness);
        }

        let h = (hue - hue.floor()) * 6.0;
        let sector = h.floor();
        let f = h - sector;
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));

        let (r, g, b) = match sector as u32 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };

        Self::from_unit_rgb(r, g, b)
    }
}

fn unit_to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}
