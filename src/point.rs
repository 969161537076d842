//! A 2D point that keeps its Cartesian `(x, y)` and Polar `(r, a)` forms in step.
//!
//! Every mutation stores the coordinates it was given and immediately derives the
//! other pair from them, so both readings always describe the same point. The
//! exceptions are [`Point::from_point`], which copies all four fields verbatim,
//! and a negative radius, which is accepted as given.

use log::debug;
use num_traits::{AsPrimitive, Float};
use std::{fmt, ops::*};
use crate::{NumberFormat, Point2, PointI32, Polar2};

/// The input a [`Point`] is constructed from
#[derive(Debug, Clone, Copy)]
pub enum Coordinates<F: Float> {
    Cartesian { x: F, y: F },
    CartesianPair((F, F)),
    Polar { r: F, a: F },
    FromPoint(Point<F>),
}

/// 2D point with synchronized Cartesian and Polar coordinates
#[derive(Default, Debug, Clone, Copy)]
pub struct Point<F: Float> {
    x: F,
    y: F,
    r: F,
    a: F,
}

/// Dual point with `f32` component
pub type DualPointF32 = Point<f32>;
/// Dual point with `f64` component
pub type DualPointF64 = Point<f64>;

impl<F: Float> Point<F> {
    pub fn new(input: Coordinates<F>) -> Self {
        match input {
            Coordinates::Cartesian { x, y } => Self::from_cartesian(x, y),
            Coordinates::CartesianPair(pair) => Self::from_pair(pair),
            Coordinates::Polar { r, a } => Self::from_polar(r, a),
            Coordinates::FromPoint(other) => Self::from_point(&other),
        }
    }

    pub fn from_cartesian(x: F, y: F) -> Self {
        let mut p = Self { x, y, r: F::zero(), a: F::zero() };
        p.calc_polar();
        p
    }

    #[inline]
    pub fn from_pair((x, y): (F, F)) -> Self {
        Self::from_cartesian(x, y)
    }

    pub fn from_polar(r: F, a: F) -> Self {
        let mut p = Self { x: F::zero(), y: F::zero(), r, a };
        p.calc_cartesian();
        p
    }

    /// Copies all four fields as they are, without re-deriving either pair
    #[inline]
    pub fn from_point(other: &Self) -> Self {
        Self {
            x: other.x,
            y: other.y,
            r: other.r,
            a: other.a,
        }
    }

    fn calc_polar(&mut self) {
        let polar = Point2::new(self.x, self.y).to_polar();
        self.r = polar.r;
        self.a = polar.a;
        if !(self.r.is_finite() && self.a.is_finite()) {
            debug!("non-finite polar pair derived from cartesian input");
        }
    }

    fn calc_cartesian(&mut self) {
        if self.r < F::zero() {
            debug!("negative radius accepted, point lies opposite its angle");
        }
        let cartesian = Polar2::new(self.r, self.a).to_point();
        self.x = cartesian.x;
        self.y = cartesian.y;
    }

    #[inline]
    pub fn x(&self) -> F {
        self.x
    }

    #[inline]
    pub fn y(&self) -> F {
        self.y
    }

    #[inline]
    pub fn r(&self) -> F {
        self.r
    }

    #[inline]
    /// Angle in radians. Not normalized.
    pub fn a(&self) -> F {
        self.a
    }

    #[inline]
    pub fn cartesian(&self) -> (F, F) {
        (self.x, self.y)
    }

    #[inline]
    pub fn polar(&self) -> (F, F) {
        (self.r, self.a)
    }

    pub fn set_x(&mut self, x: F) {
        self.x = x;
        self.calc_polar();
    }

    pub fn set_y(&mut self, y: F) {
        self.y = y;
        self.calc_polar();
    }

    pub fn set_r(&mut self, r: F) {
        self.r = r;
        self.calc_cartesian();
    }

    pub fn set_a(&mut self, a: F) {
        self.a = a;
        self.calc_cartesian();
    }

    pub fn set_cartesian(&mut self, x: F, y: F) {
        self.x = x;
        self.y = y;
        self.calc_polar();
    }

    #[inline]
    pub fn set_cartesian_pair(&mut self, (x, y): (F, F)) {
        self.set_cartesian(x, y)
    }

    pub fn set_polar(&mut self, r: F, a: F) {
        self.r = r;
        self.a = a;
        self.calc_cartesian();
    }

    #[inline]
    pub fn set_polar_pair(&mut self, (r, a): (F, F)) {
        self.set_polar(r, a)
    }

    /// Cartesian coordinates truncated toward zero, for pixel grids
    pub fn ints(&self) -> PointI32
    where
        F: AsPrimitive<i32>,
    {
        self.to_point2().to_point_i32()
    }

    #[inline]
    pub fn to_point2(&self) -> Point2<F> {
        Point2::new(self.x, self.y)
    }

    #[inline]
    pub fn to_polar2(&self) -> Polar2<F> {
        Polar2::new(self.r, self.a)
    }

    /// Scales the distance from the origin by `k`, keeping the angle.
    ///
    /// This is the non-mutating counterpart of `*=`. Neither `p * k` nor `k * p`
    /// scale the vector this way.
    pub fn scaled(&self, k: F) -> Self {
        Self::from_polar(self.r * k, self.a)
    }
}

impl<F> Point<F>
where
    F: Float + NumberFormat,
{
    /// Same layout as `Display`, each value rounded to `precision` digits
    pub fn to_string_with_precision(&self, precision: Option<u32>) -> String {
        format!(
            "Point({}, {})({}, {})",
            F::number_format(self.x, precision),
            F::number_format(self.y, precision),
            F::number_format(self.r, precision),
            F::number_format(self.a, precision),
        )
    }
}

impl<F: Float> From<(F, F)> for Point<F> {
    fn from(pair: (F, F)) -> Self {
        Self::from_pair(pair)
    }
}

impl<F: Float> From<Point2<F>> for Point<F> {
    fn from(p: Point2<F>) -> Self {
        Self::from_cartesian(p.x, p.y)
    }
}

impl<F: Float> From<Polar2<F>> for Point<F> {
    fn from(p: Polar2<F>) -> Self {
        Self::from_polar(p.r, p.a)
    }
}

impl<F> fmt::Display for Point<F>
where
    F: Float + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Point({}, {})({}, {})", self.x, self.y, self.r, self.a)
    }
}

impl<F: Float> Add for Point<F> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::from_cartesian(self.x + other.x, self.y + other.y)
    }
}

impl<F: Float> AddAssign for Point<F> {
    fn add_assign(&mut self, other: Self) {
        self.x = self.x + other.x;
        self.y = self.y + other.y;
        self.calc_polar();
    }
}

impl<F: Float> Sub for Point<F> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::from_cartesian(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> SubAssign for Point<F> {
    fn sub_assign(&mut self, other: Self) {
        self.x = self.x - other.x;
        self.y = self.y - other.y;
        self.calc_polar();
    }
}

/// `p * k` builds a point from polar input `(x * k, a * k)`.
///
/// The radius argument is taken from `x`, not `r`. This differs from both
/// `k * p` and `p *= k`; use [`Point::scaled`] for a plain scale.
impl<F: Float> Mul<F> for Point<F> {
    type Output = Self;

    fn mul(self, k: F) -> Self {
        Self::from_polar(self.x * k, self.a * k)
    }
}

/// `p *= k` multiplies `r` by `k` and leaves `a` alone
impl<F: Float> MulAssign<F> for Point<F> {
    fn mul_assign(&mut self, k: F) {
        self.set_r(self.r * k);
    }
}

// k * p builds a point from polar input (r * k, a * k)
macro_rules! scalar_mul_point {
    ($t:ty) => {
        impl Mul<Point<$t>> for $t {
            type Output = Point<$t>;

            fn mul(self, p: Point<$t>) -> Point<$t> {
                Point::from_polar(p.r * self, p.a * self)
            }
        }
    };
}

scalar_mul_point!(f32);
scalar_mul_point!(f64);
