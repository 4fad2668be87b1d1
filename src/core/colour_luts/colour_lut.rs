use crate::core::colour_luts::errors::ColourLutError;
use crate::core::data::colour::Colour;

/// Colour look-up tables over normalised pixel values in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourLut {
    #[default]
    Greyscale,
    IdlRainbow,
    Hipparcos,
    HipparcosTopWhite,
    PrismWhite,
    RainbowHsb,
    RainbowHsbStep,
    IdlBlueWhite,
    IdlGreenRedBlueWhite,
    GreenYellowRedBlueWhite,
    RedWhiteBlue,
    IdlRedTemperature,
    IdlBlueRed,
    IdlBlueGreenRedYellow,
    IdlSternSpecial,
    PrimarySteps,
    IdlGreenWhite,
    BlackCyanBlueMagentaRed,
}

impl ColourLut {
    pub const ALL: &'static [Self] = &[
        Self::Greyscale,
        Self::IdlRainbow,
        Self::Hipparcos,
        Self::HipparcosTopWhite,
        Self::PrismWhite,
        Self::RainbowHsb,
        Self::RainbowHsbStep,
        Self::IdlBlueWhite,
        Self::IdlGreenRedBlueWhite,
        Self::GreenYellowRedBlueWhite,
        Self::RedWhiteBlue,
        Self::IdlRedTemperature,
        Self::IdlBlueRed,
        Self::IdlBlueGreenRedYellow,
        Self::IdlSternSpecial,
        Self::PrimarySteps,
        Self::IdlGreenWhite,
        Self::BlackCyanBlueMagentaRed,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Greyscale => "Black to white",
            Self::IdlRainbow => "IDL rainbow",
            Self::Hipparcos => "Hipparcos",
            Self::HipparcosTopWhite => "Hipparcos, white top",
            Self::PrismWhite => "Prism to white",
            Self::RainbowHsb => "HSB rainbow",
            Self::RainbowHsbStep => "HSB rainbow in steps",
            Self::IdlBlueWhite => "IDL blue/white",
            Self::IdlGreenRedBlueWhite => "IDL green-red-blue-white",
            Self::GreenYellowRedBlueWhite => "Green-yellow-red-blue-white",
            Self::RedWhiteBlue => "Red-white-blue",
            Self::IdlRedTemperature => "IDL red temperature",
            Self::IdlBlueRed => "IDL blue-red",
            Self::IdlBlueGreenRedYellow => "IDL blue/green/red/yellow",
            Self::IdlSternSpecial => "IDL Stern special",
            Self::PrimarySteps => "Primary colours in steps",
            Self::IdlGreenWhite => "IDL green/white",
            Self::BlackCyanBlueMagentaRed => "Black-cyan-blue-magenta-red",
        }
    }

    pub fn colour(self, value: f64) -> Result<Colour, ColourLutError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ColourLutError::ValueOutOfRange { value });
        }

        Ok(self.lookup(value))
    }

    /// Looks `value` up in the table run backwards.
    pub fn colour_reversed(self, value: f64) -> Result<Colour, ColourLutError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ColourLutError::ValueOutOfRange { value });
        }

        Ok(self.lookup(1.0 - value))
    }

    fn lookup(self, v: f64) -> Colour {
        match self {
            Self::Greyscale => Colour::from_unit_rgb(v, v, v),
            Self::IdlRainbow => idl_rainbow(v),
            Self::Hipparcos => hipparcos(v),
            Self::HipparcosTopWhite => {
                if v == 1.0 {
                    Colour::WHITE
                } else {
                    hipparcos(v)
                }
            }
            Self::PrismWhite => prism_white(v),
            Self::RainbowHsb => Colour::from_hsb(5.0 / 6.0 * (1.0 - v), 1.0, 1.0),
            Self::RainbowHsbStep => {
                Colour::from_hsb(5.0 / 6.0 * ((1.0 - v) * 8.0).floor() / 7.0, 1.0, 1.0)
            }
            Self::IdlBlueWhite => idl_blue_white(v),
            Self::IdlGreenRedBlueWhite => green_red_blue_white(v, false),
            Self::GreenYellowRedBlueWhite => green_red_blue_white(v, true),
            Self::RedWhiteBlue => {
                if v <= 0.5 {
                    Colour::from_unit_rgb(1.0, v / 0.5, v / 0.5)
                } else {
                    let fade = 2.0 - 2.0 * v;
                    Colour::from_unit_rgb(fade, fade, 1.0)
                }
            }
            Self::IdlRedTemperature => idl_red_temperature(v),
            Self::IdlBlueRed => idl_blue_red(v),
            Self::IdlBlueGreenRedYellow => idl_blue_green_red_yellow(v),
            Self::IdlSternSpecial => idl_stern_special(v),
            Self::PrimarySteps => primary_steps(v),
            Self::IdlGreenWhite => idl_green_white(v),
            Self::BlackCyanBlueMagentaRed => black_cyan_blue_magenta_red(v),
        }
    }
}

impl std::fmt::Display for ColourLut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

// rises from zero at `knot` to one at the top of the range
fn ramp_above(v: f64, knot: f64) -> f64 {
    if v <= knot { 0.0 } else { (v - knot) / (1.0 - knot) }
}

fn idl_rainbow(v: f64) -> Colour {
    let r = if v <= 0.11 {
        0.486 - v / 0.11 * 0.486
    } else if v <= 0.56 {
        0.0
    } else if v <= 0.78 {
        (v - 0.56) / (0.78 - 0.56)
    } else {
        1.0
    };

    let g = if v <= 0.11 {
        0.0
    } else if v <= 0.34 {
        (v - 0.11) / (0.34 - 0.11)
    } else if v <= 0.78 {
        1.0
    } else {
        1.0 - (v - 0.78) / (1.0 - 0.78)
    };

    let b = if v <= 0.33 {
        1.0
    } else if v <= 0.56 {
        1.0 - (v - 0.33) / (0.56 - 0.33)
    } else {
        0.0
    };

    Colour::from_unit_rgb(r, g, b)
}

fn hipparcos(v: f64) -> Colour {
    if v <= 0.1 {
        Colour::from_hsb(2.0 / 3.0, 1.0, 0.5 * (1.0 + v / 0.1))
    } else {
        Colour::from_hsb(2.0 / 3.0 * (1.0 - v) / 0.9, 1.0, 1.0)
    }
}

fn prism_white(v: f64) -> Colour {
    if v <= 0.25 {
        Colour::from_unit_rgb(v / 0.25, 0.0, 0.0)
    } else if v <= 0.5 {
        let t = (0.5 - v) / 0.25;
        Colour::from_unit_rgb(t, 1.0 - t, 0.0)
    } else if v <= 0.75 {
        let t = (0.75 - v) / 0.25;
        Colour::from_unit_rgb(0.0, t, 1.0 - t)
    } else {
        let t = 1.0 - (1.0 - v) / 0.25;
        Colour::from_unit_rgb(t, t, 1.0)
    }
}

fn idl_blue_white(v: f64) -> Colour {
    const R_KNOT: f64 = 192.0 / 255.0;
    const G_KNOT: f64 = 96.0 / 255.0;
    const B_KNOT: f64 = 188.0 / 255.0;

    let b = if v <= B_KNOT { v / B_KNOT } else { 1.0 };

    Colour::from_unit_rgb(ramp_above(v, R_KNOT), ramp_above(v, G_KNOT), b)
}

// With `yellow` set the green channel climbs towards yellow before dropping
// out, instead of fading from green.
fn green_red_blue_white(v: f64, yellow: bool) -> Colour {
    const R_KNOTS: [f64; 3] = [0.113725, 0.305882, 0.862745];
    const G_KNOTS: [f64; 3] = [0.109804, 0.282353, 0.862745];
    const B_KNOTS: [f64; 2] = [0.294118, 0.784314];
    const R_PEAK: f64 = 250.0 / 255.0;
    const R_DIP: f64 = 148.0 / 255.0;
    const G_PEAK: f64 = 252.0 / 255.0;

    let r = if v < R_KNOTS[0] {
        0.0
    } else if v < R_KNOTS[1] {
        (v - R_KNOTS[0]) / (R_KNOTS[1] - R_KNOTS[0]) * R_PEAK
    } else if v < R_KNOTS[2] {
        R_PEAK - (v - R_KNOTS[1]) / (R_KNOTS[2] - R_KNOTS[1]) * (R_PEAK - R_DIP)
    } else {
        R_DIP + (v - R_KNOTS[2]) / (1.0 - R_KNOTS[2]) * (1.0 - R_DIP)
    };

    let g = if v < G_KNOTS[0] {
        v / G_KNOTS[0] * G_PEAK
    } else if v < G_KNOTS[1] {
        let t = (v - G_KNOTS[0]) / (G_KNOTS[1] - G_KNOTS[0]);
        G_PEAK * if yellow { t } else { 1.0 - t }
    } else {
        ramp_above(v, G_KNOTS[2])
    };

    let b = if v < B_KNOTS[0] {
        0.0
    } else if v < B_KNOTS[1] {
        (v - B_KNOTS[0]) / (B_KNOTS[1] - B_KNOTS[0])
    } else {
        1.0
    };

    Colour::from_unit_rgb(r, g, b)
}

fn idl_red_temperature(v: f64) -> Colour {
    const R_KNOT: f64 = 176.0 / 255.0;
    const G_KNOT: f64 = 120.0 / 255.0;
    const B_KNOT: f64 = 190.0 / 255.0;

    let r = if v < R_KNOT { v / R_KNOT } else { 1.0 };

    Colour::from_unit_rgb(r, ramp_above(v, G_KNOT), ramp_above(v, B_KNOT))
}

fn idl_blue_red(v: f64) -> Colour {
    const R_KNOTS: [f64; 3] = [98.0 / 255.0, 162.0 / 255.0, 226.0 / 255.0];
    const G_KNOTS: [f64; 4] = [33.0 / 255.0, 97.0 / 255.0, 162.0 / 255.0, 226.0 / 255.0];
    const B_KNOTS: [f64; 3] = [32.0 / 255.0, 98.0 / 255.0, 162.0 / 255.0];
    const OFFSET: f64 = 131.0 / 255.0;

    let r = if v <= R_KNOTS[0] {
        0.0
    } else if v < R_KNOTS[1] {
        (v - R_KNOTS[0]) / (R_KNOTS[1] - R_KNOTS[0])
    } else if v < R_KNOTS[2] {
        1.0
    } else {
        OFFSET + (1.0 - OFFSET) * (1.0 - v) / (1.0 - R_KNOTS[2])
    };

    let g = if v <= G_KNOTS[0] {
        0.0
    } else if v < G_KNOTS[1] {
        (v - G_KNOTS[0]) / (G_KNOTS[1] - G_KNOTS[0])
    } else if v <= G_KNOTS[2] {
        1.0
    } else if v < G_KNOTS[3] {
        (G_KNOTS[3] - v) / (G_KNOTS[3] - G_KNOTS[2])
    } else {
        0.0
    };

    let b = if v <= B_KNOTS[0] {
        OFFSET + (1.0 - OFFSET) * v / B_KNOTS[0]
    } else if v <= B_KNOTS[1] {
        1.0
    } else if v < B_KNOTS[2] {
        (B_KNOTS[2] - v) / (B_KNOTS[2] - B_KNOTS[1])
    } else {
        0.0
    };

    Colour::from_unit_rgb(r, g, b)
}

fn idl_blue_green_red_yellow(v: f64) -> Colour {
    const R_KNOTS: [f64; 2] = [112.0 / 255.0, 144.0 / 255.0];
    const G_KNOTS: [f64; 3] = [32.0 / 255.0, 80.0 / 255.0, 144.0 / 255.0];
    const B_KNOTS: [f64; 3] = [48.0 / 255.0, 80.0 / 255.0, 112.0 / 255.0];
    const R_KNEE: f64 = 200.0 / 255.0;
    const G_PEAK: f64 = 150.0 / 255.0;
    const B_MAX: f64 = 100.0 / 255.0;

    let r = if v <= R_KNOTS[0] {
        0.0
    } else if v <= R_KNOTS[1] {
        R_KNEE * (v - R_KNOTS[0]) / (R_KNOTS[1] - R_KNOTS[0])
    } else {
        R_KNEE + (1.0 - R_KNEE) * (v - R_KNOTS[1]) / (1.0 - R_KNOTS[1])
    };

    // green falls off the peak along a parabola
    let g = if v <= G_KNOTS[0] {
        0.0
    } else if v < G_KNOTS[1] {
        G_PEAK * (v - G_KNOTS[0]) / (G_KNOTS[1] - G_KNOTS[0])
    } else if v <= G_KNOTS[2] {
        let t = (v - G_KNOTS[1]) / (G_KNOTS[2] - G_KNOTS[1]);
        G_PEAK * (1.0 - t * t)
    } else {
        ramp_above(v, G_KNOTS[2])
    };

    let b = if v < B_KNOTS[0] {
        B_MAX * v / B_KNOTS[0]
    } else if v <= B_KNOTS[1] {
        B_MAX
    } else if v < B_KNOTS[2] {
        B_MAX * (B_KNOTS[2] - v) / (B_KNOTS[2] - B_KNOTS[1])
    } else {
        0.0
    };

    Colour::from_unit_rgb(r, g, b)
}

fn idl_stern_special(v: f64) -> Colour {
    const R_KNOTS: [f64; 3] = [14.0 / 255.0, 63.0 / 255.0, 64.0 / 255.0];
    const B_KNOTS: [f64; 2] = [128.0 / 255.0, 188.0 / 255.0];

    let r = if v <= R_KNOTS[0] {
        v / R_KNOTS[0]
    } else if v <= R_KNOTS[1] {
        (R_KNOTS[1] - v) / (R_KNOTS[1] - R_KNOTS[0])
    } else if v <= R_KNOTS[2] {
        R_KNOTS[2] * (v - R_KNOTS[1]) / (R_KNOTS[2] - R_KNOTS[1])
    } else {
        v
    };

    let b = if v <= B_KNOTS[0] {
        v / B_KNOTS[0]
    } else if v <= B_KNOTS[1] {
        (B_KNOTS[1] - v) / (B_KNOTS[1] - B_KNOTS[0])
    } else {
        ramp_above(v, B_KNOTS[1])
    };

    Colour::from_unit_rgb(r, v, b)
}

fn black_cyan_blue_magenta_red(v: f64) -> Colour {
    const R_KNOTS: [f64; 2] = [128.0 / 255.0, 191.0 / 255.0];
    const G_KNOTS: [f64; 2] = [64.0 / 255.0, 128.0 / 255.0];
    const B_KNOTS: [f64; 2] = [64.0 / 255.0, 191.0 / 255.0];

    let r = if v < R_KNOTS[0] {
        0.0
    } else if v <= R_KNOTS[1] {
        (v - R_KNOTS[0]) / (R_KNOTS[1] - R_KNOTS[0])
    } else {
        1.0
    };

    let g = if v < G_KNOTS[0] {
        v / G_KNOTS[0]
    } else if v <= G_KNOTS[1] {
        (G_KNOTS[1] - v) / (G_KNOTS[1] - G_KNOTS[0])
    } else {
        0.0
    };

    let b = if v < B_KNOTS[0] {
        v / B_KNOTS[0]
    } else if v <= B_KNOTS[1] {
        1.0
    } else {
        (1.0 - v) / (1.0 - B_KNOTS[1])
    };

    Colour::from_unit_rgb(r, g, b)
}

fn idl_green_white(v: f64) -> Colour {
    const R_KNOT: f64 = 97.0 / 255.0;
    const B_KNOT: f64 = 181.0 / 255.0;

    Colour::from_unit_rgb(ramp_above(v, R_KNOT), v, ramp_above(v, B_KNOT))
}

fn primary_steps(v: f64) -> Colour {
    const STEPS: [Colour; 8] = [
        Colour::BLACK,
        Colour { r: 0, g: 0, b: 255 },
        Colour { r: 0, g: 255, b: 255 },
        Colour { r: 255, g: 0, b: 0 },
        Colour { r: 255, g: 255, b: 0 },
        Colour { r: 255, g: 0, b: 255 },
        Colour { r: 0, g: 255, b: 0 },
        Colour::WHITE,
    ];

    // bands are closed on the right: (0.125, 0.25] is the second step
    let band = ((v * 8.0).ceil() as usize).saturating_sub(1);
    STEPS[band.min(STEPS.len() - 1)]
}
