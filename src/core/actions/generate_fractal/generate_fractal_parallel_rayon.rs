use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;

/// Evaluates `algorithm` for every pixel, one rayon task per row.
///
/// Results come back in row-major order regardless of scheduling. Runs on the
/// pool of the caller; wrap the call in `ThreadPool::install` to pick a pool.
pub fn generate_fractal_parallel_rayon<Alg>(size: ScreenSize, algorithm: &Alg) -> Vec<Alg::Output>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Output: Send,
{
    let width = size.width();

    (0..size.height())
        .into_par_iter()
        .flat_map_iter(|y| (0..width).map(move |x| algorithm.compute(Point { x, y })))
        .collect()
}
