/// Receives render progress as whole percentages of completed rows.
///
/// Values arrive in increasing order and the last one is 100.
pub trait ProgressObserver: Send + Sync {
    fn on_progress(&self, percent: u8);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    #[inline]
    fn on_progress(&self, _: u8) {}
}

impl<F> ProgressObserver for F
where
    F: Fn(u8) + Send + Sync,
{
    #[inline]
    fn on_progress(&self, percent: u8) {
        self(percent)
    }
}

#[must_use]
pub(crate) fn percent_complete(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }

    (done.min(total) * 100 / total) as u8
}
