use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Computes every pixel of a `width` x `height` image in row-major order on
/// the calling thread.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    width: u32,
    height: u32,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    (0..height as i32)
        .flat_map(|y| (0..width as i32).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
