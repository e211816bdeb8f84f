use crate::core::data::point::Point;

/// Per-pixel evaluation step of a fractal. Implementations are pure, so any
/// pixel may be computed on any thread in any order.
pub trait FractalAlgorithm {
    type Output;

    fn compute(&self, pixel: Point) -> Self::Output;
}
