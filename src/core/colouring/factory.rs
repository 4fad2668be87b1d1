use crate::core::colouring::{
    colouring_algorithm::ColouringAlgorithm, errors::ColouringError, escape_time::EscapeTime,
    kinds::ColouringKinds, smooth_iteration_count::SmoothIterationCount,
};
use std::sync::Arc;

/// Builds the colouring algorithm for `kind`. `power` and `bailout` are only
/// read by the smooth count.
pub fn colouring_algorithm_factory(
    kind: ColouringKinds,
    power: f64,
    bailout: f64,
) -> Result<Arc<dyn ColouringAlgorithm>, ColouringError> {
    Ok(match kind {
        ColouringKinds::EscapeTime => Arc::new(EscapeTime),
        ColouringKinds::SmoothIterationCount => {
            Arc::new(SmoothIterationCount::new(power, bailout)?)
        }
    })
}
