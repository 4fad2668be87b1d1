use log::debug;

/// Maps raw pixel values onto `[0, 1]` ahead of colour lookup.
///
/// Every variant returns a new vector of the same length as its input; an
/// empty input gives an empty output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageScaling {
    #[default]
    Linear,
    SquareRoot,
    /// Valid values land in `[1/256, 1]`; zero is reserved for values at the
    /// minimum, which have no logarithm once shifted.
    Logarithmic,
}

impl ImageScaling {
    pub const ALL: &'static [Self] = &[Self::Linear, Self::SquareRoot, Self::Logarithmic];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Linear => "Linear scaling",
            Self::SquareRoot => "Sqrt scaling",
            Self::Logarithmic => "Log scaling",
        }
    }

    #[must_use]
    pub fn scale(self, data: &[f64]) -> Vec<f64> {
        let Some((min, max)) = min_max(data.iter().copied()) else {
            return Vec::new();
        };

        debug!(
            "{} of {} values, min {} max {}",
            self.display_name(),
            data.len(),
            min,
            max
        );

        match self {
            Self::Linear => {
                let range = non_degenerate(max - min);
                data.iter().map(|&value| (value - min) / range).collect()
            }
            Self::SquareRoot => {
                let range = non_degenerate((max - min).sqrt());
                data.iter()
                    .map(|&value| (value - min).sqrt() / range)
                    .collect()
            }
            Self::Logarithmic => scale_logarithmic(data, min),
        }
    }
}

impl std::fmt::Display for ImageScaling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

fn scale_logarithmic(data: &[f64], min: f64) -> Vec<f64> {
    let logs: Vec<Option<f64>> = data
        .iter()
        .map(|&value| {
            let shifted = value - min;
            (shifted > 0.0).then(|| shifted.log10())
        })
        .collect();

    let Some((min_log, max_log)) = min_max(logs.iter().flatten().copied()) else {
        return vec![0.0; data.len()];
    };
    let range = non_degenerate(max_log - min_log);

    logs.into_iter()
        .map(|log| match log {
            Some(log) => (255.0 * (log - min_log) / range + 1.0) / 256.0,
            None => 0.0,
        })
        .collect()
}

// NaNs are skipped by f64::min/max
fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}

fn non_degenerate(range: f64) -> f64 {
    if range > 0.0 { range } else { 1.0 }
}
