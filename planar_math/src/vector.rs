use bytemuck::{Pod, Zeroable};

use crate::operand::{Operand, Point};

pub const fn vector(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

/// A point or displacement in the plane.
///
/// The methods on this type update the vector in place and hand it back, so
/// calls can be chained:
///
/// ```
/// use planar_math::vector;
///
/// let mut v = vector(1.0, 2.0);
/// v.add_mut(1.0).multiply(2.0);
/// assert_eq!(vector(4.0, 6.0), v);
/// ```
///
/// The free functions of this crate (and the `std::ops` operators) leave their
/// operands alone and return a new vector instead.
#[derive(Debug, Default, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 2]", into = "[f64; 2]")
)]
#[repr(C)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Self = Self::splat(0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn splat(v: f64) -> Self {
        vector(v, v)
    }

    pub fn from_point(p: impl Point) -> Self {
        p.to_vector()
    }

    /// Builds a vector from the first two values of `array`.
    ///
    /// Missing values become `NaN`, anything past the second value is ignored.
    /// Use `Vector::try_from` to reject slices of the wrong length instead.
    pub fn from_array(array: &[f64]) -> Self {
        let component = |i: usize| array.get(i).copied().unwrap_or(f64::NAN);
        vector(component(0), component(1))
    }

    pub fn to_array(&self) -> [f64; 2] {
        bytemuck::cast(*self)
    }

    pub fn as_array(&self) -> &[f64; 2] {
        bytemuck::cast_ref(self)
    }

    pub fn magnitude(&self) -> f64 {
        f64::sqrt(self.x.powi(2) + self.y.powi(2))
    }

    pub fn length(&self) -> f64 {
        self.magnitude()
    }

    /// The smaller component, `NaN` if either component is `NaN`.
    pub fn min(&self) -> f64 {
        if self.has_nan() {
            f64::NAN
        } else {
            f64::min(self.x, self.y)
        }
    }

    /// The larger component, `NaN` if either component is `NaN`.
    pub fn max(&self) -> f64 {
        if self.has_nan() {
            f64::NAN
        } else {
            f64::max(self.x, self.y)
        }
    }

    fn has_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Direction of the vector in radians, in `(-π, π]`.
    ///
    /// Measured with the y axis flipped (`-atan2(-y, x)`), which is what
    /// screen-space consumers of this type expect.
    pub fn angle(&self) -> f64 {
        -f64::atan2(-self.y, self.x)
    }

    /// Adds in place. Named apart from [`std::ops::Add::add`], which returns a
    /// new vector.
    pub fn add_mut(&mut self, addend: impl Into<Operand>) -> &mut Self {
        let v = Operand::spread(addend);
        self.x += v.x;
        self.y += v.y;
        self
    }

    pub fn sub_mut(&mut self, subtrahend: impl Into<Operand>) -> &mut Self {
        let v = Operand::spread(subtrahend);
        self.x -= v.x;
        self.y -= v.y;
        self
    }

    pub fn multiply(&mut self, factor: impl Into<Operand>) -> &mut Self {
        let v = Operand::spread(factor);
        self.x *= v.x;
        self.y *= v.y;
        self
    }

    /// Divides in place, skipping any divisor component that is exactly zero.
    ///
    /// Dividing by a zero scalar leaves the vector untouched. The free
    /// [`divide`](crate::divide) function and the `/` operator do not skip
    /// anything and will produce infinities.
    pub fn divide(&mut self, divisor: impl Into<Operand>) -> &mut Self {
        let v = Operand::spread(divisor);
        if v.x != 0.0 {
            self.x /= v.x;
        }
        if v.y != 0.0 {
            self.y /= v.y;
        }
        self
    }

    pub fn inverse(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    /// Scales the vector to unit length. A zero vector stays zero.
    pub fn normalize(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        self.divide(magnitude)
    }

    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Angle between this vector and `b` in radians.
    ///
    /// `NaN` if either vector has zero length.
    pub fn angle_to(&self, b: impl Point) -> f64 {
        f64::acos(self.dot_product(&b) / (self.magnitude() * b.to_vector().magnitude()))
    }

    pub fn dot_product(&self, b: impl Point) -> f64 {
        self.x * b.x() + self.y * b.y()
    }

    pub fn cross_product(&self, b: impl Point) -> f64 {
        self.x * b.y() - self.y * b.x()
    }

    /// Exact component comparison, no tolerance.
    pub fn equals(&self, b: impl Point) -> bool {
        self.x == b.x() && self.y == b.y()
    }
}
