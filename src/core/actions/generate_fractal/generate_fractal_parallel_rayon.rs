use log::debug;
use rayon::prelude::*;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::progress::{NoProgress, ProgressObserver, percent_complete};
use crate::core::data::point::Point;

/// Error type for cancelable fractal generation.
///
/// Distinguishes between algorithm failures and cancellation, allowing callers
/// to treat cancellation as ordinary control flow.
#[derive(Debug)]
pub enum GenerateFractalError<E> {
    Cancelled(Cancelled),
    Algorithm(E),
}

impl<E: std::fmt::Display> std::fmt::Display for GenerateFractalError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateFractalError::Cancelled(c) => write!(f, "{}", c),
            GenerateFractalError::Algorithm(e) => write!(f, "algorithm error: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for GenerateFractalError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateFractalError::Cancelled(c) => Some(c),
            GenerateFractalError::Algorithm(e) => Some(e),
        }
    }
}

/// Generates fractal data in parallel using rayon's work-stealing scheduler,
/// one task per row. Output is row-major, identical to
/// [`generate_fractal`](super::generate_fractal::generate_fractal).
pub fn generate_fractal_parallel_rayon<Alg>(
    width: u32,
    height: u32,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    generate_fractal_parallel_rayon_cancelable(width, height, algorithm, &NeverCancel, &NoProgress)
        .map_err(|e| match e {
            GenerateFractalError::Algorithm(alg_err) => alg_err,
            GenerateFractalError::Cancelled(_) => {
                unreachable!("NeverCancel token should never signal cancellation")
            }
        })
}

/// Like [`generate_fractal_parallel_rayon`], but polls `cancel` at the start
/// of every row and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a
/// row, and reports the share of finished rows to `progress`.
///
/// Progress values are whole percents, strictly increasing, ending with 100
/// when every row has been computed. Nothing is reported after a
/// cancellation or failure has been observed by the row that hit it.
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C, P>(
    width: u32,
    height: u32,
    algorithm: &Alg,
    cancel: &C,
    progress: &P,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
    P: ProgressObserver,
{
    let rows_total = height as usize;
    let row_width = width as usize;
    let rows_done = AtomicUsize::new(0);
    let last_reported = Mutex::new(0u8);

    debug!("rendering {}x{} on {} threads", width, height, rayon::current_num_threads());

    let y_range = 0..height as i32;
    let rows: Result<Vec<Vec<Alg::Success>>, GenerateFractalError<Alg::Failure>> = y_range
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for x in 0..width as i32 {
                if x as usize % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(GenerateFractalError::Cancelled(Cancelled));
                }

                let value = algorithm
                    .compute(Point { x, y })
                    .map_err(GenerateFractalError::Algorithm)?;
                row.push(value);
            }

            let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
            let percent = percent_complete(done, rows_total);
            // the lock keeps deliveries ordered across worker threads
            if let Ok(mut last) = last_reported.lock() {
                if percent > *last {
                    *last = percent;
                    progress.on_progress(percent);
                }
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
