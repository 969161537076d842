use flo_curves::Coordinate2D;
use num_traits::{AsPrimitive, Float};
use std::fmt::Display;
use crate::Polar2;

/// Plain Cartesian pair in 2D space
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

pub trait NumberFormat: Display {
    fn number_format(num: Self, precision: Option<u32>) -> String;
}

impl NumberFormat for i32 {
    fn number_format(num: Self, _precision: Option<u32>) -> String {
        format!("{}", num)
    }
}

macro_rules! float_number_format {
    ($t:ty) => {
        impl NumberFormat for $t {
            fn number_format(num: Self, precision: Option<u32>) -> String {
                match precision {
                    None => format!("{}", num),
                    Some(0) => format!("{1:.0$}", 0, num),
                    Some(p) => {
                        let string = format!("{1:.0$}", p as usize, num);
                        string.trim_end_matches('0').trim_end_matches('.').to_owned()
                    },
                }
            }
        }
    };
}

float_number_format!(f32);
float_number_format!(f64);

impl<T> Point2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<F> Point2<F>
where
    F: Float,
{
    #[inline]
    /// The L2-norm
    pub fn norm(self) -> F {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    /// Angle from the positive x axis, in (-π, π]. The origin maps to 0.
    pub fn angle(self) -> F {
        self.y.atan2(self.x)
    }

    pub fn to_polar(&self) -> Polar2<F> {
        Polar2 {
            a: self.angle(),
            r: self.norm(),
        }
    }

    /// Truncates toward zero; out of range values saturate
    pub fn to_point_i32(&self) -> PointI32
    where
        F: AsPrimitive<i32>,
    {
        PointI32 { x: self.x.as_(), y: self.y.as_() }
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<F> Coordinate2D for Point2<F>
where
    F: Copy + Into<f64>,
{
    fn x(&self) -> f64 {
        self.x.into()
    }

    fn y(&self) -> f64 {
        self.y.into()
    }
}

/// 2D Point with `i32` component
pub type PointI32 = Point2<i32>;
/// 2D Point with `f32` component
pub type PointF32 = Point2<f32>;
/// 2D Point with `f64` component
pub type PointF64 = Point2<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_angle_is_zero() {
        let p = PointF64::default();
        assert_eq!(p.angle(), 0.0);
        assert_eq!(p.norm(), 0.0);
    }

    #[test]
    fn pointf64_to_polar() {
        let p = PointF64::new(3.0, 4.0);
        let q = p.to_polar();
        assert_eq!(q.r, 5.0);
        assert_eq!(q.a, 4.0f64.atan2(3.0));
    }

    #[test]
    fn truncate_toward_zero() {
        let p = PointF64::new(3.9, -3.9);
        assert_eq!(p.to_point_i32(), PointI32::new(3, -3));
    }

    #[test]
    fn test_round_f64() {
        assert_eq!(f64::number_format(0.1, Some(0)), "0");
        assert_eq!(f64::number_format(0.1, Some(2)), "0.1");
        assert_eq!(f64::number_format(1.21786434, Some(3)), "1.218");
        assert_eq!(f64::number_format(1.21786434, None), "1.21786434");
        assert_eq!(f32::number_format(2.5, Some(4)), "2.5");
    }

    #[test]
    fn coordinate_2d() {
        let p = PointF32::new(1.5, -2.0);
        assert_eq!(Coordinate2D::x(&p), 1.5);
        assert_eq!(Coordinate2D::y(&p), -2.0);
    }
}
