#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneratorKinds {
    #[default]
    Mandelbrot,
    ModifiedMandelbrot,
    RudyCubicMandelbrot,
    JuliaFatou,
}

impl GeneratorKinds {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::ModifiedMandelbrot,
        Self::RudyCubicMandelbrot,
        Self::JuliaFatou,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::ModifiedMandelbrot => "Modified Mandelbrot",
            Self::RudyCubicMandelbrot => "Rudy's cubic Mandelbrot",
            Self::JuliaFatou => "Julia-Fatou",
        }
    }
}

impl std::fmt::Display for GeneratorKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
