#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColouringKinds {
    #[default]
    EscapeTime,
    SmoothIterationCount,
}

impl ColouringKinds {
    pub const ALL: &'static [Self] = &[Self::EscapeTime, Self::SmoothIterationCount];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::EscapeTime => "Escape time",
            Self::SmoothIterationCount => "Smooth iteration count",
        }
    }
}

impl std::fmt::Display for ColouringKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
