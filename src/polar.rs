use crate::Point2;
use num_traits::Float;

/// Polar coordinate in 2D space
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Polar2<F: Float> {
    pub a: F,
    pub r: F,
}

impl<F: Float> Polar2<F> {
    #[inline]
    pub fn new(r: F, a: F) -> Self {
        Self { a, r }
    }

    /// A negative `r` lands on the opposite side of the origin
    pub fn to_point(&self) -> Point2<F> {
        let (sin, cos) = self.a.sin_cos();
        Point2 {
            x: self.r * cos,
            y: self.r * sin,
        }
    }
}

impl<F: Float> From<Point2<F>> for Polar2<F> {
    fn from(p: Point2<F>) -> Self {
        p.to_polar()
    }
}

impl<F: Float> From<Polar2<F>> for Point2<F> {
    fn from(p: Polar2<F>) -> Self {
        p.to_point()
    }
}

/// 2D Polar with `f32` component
pub type PolarF32 = Polar2<f32>;
/// 2D Polar with `f64` component
pub type PolarF64 = Polar2<f64>;
