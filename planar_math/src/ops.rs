//! Operator overloads. These follow plain IEEE semantics: unlike
//! [`Vector::divide`], `/` and `/=` do not skip zero divisors.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::vector::{vector, Vector};

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        vector(-self.x, -self.y)
    }
}

/// Implements a component-wise binary operator, against both another vector
/// and a scalar, together with its compound assignment form.
macro_rules! component_wise {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $sym:tt) => {
        impl $op for Vector {
            type Output = Vector;

            fn $method(self, rhs: Vector) -> Vector {
                vector(self.x $sym rhs.x, self.y $sym rhs.y)
            }
        }

        impl $op<f64> for Vector {
            type Output = Vector;

            fn $method(self, rhs: f64) -> Vector {
                self.$method(Vector::splat(rhs))
            }
        }

        impl<R> $assign_op<R> for Vector
        where
            Vector: $op<R, Output = Vector>,
        {
            fn $assign_method(&mut self, rhs: R) {
                *self = $op::$method(*self, rhs);
            }
        }
    };
}

component_wise!(Add, add, AddAssign, add_assign, +);
component_wise!(Sub, sub, SubAssign, sub_assign, -);
component_wise!(Mul, mul, MulAssign, mul_assign, *);
component_wise!(Div, div, DivAssign, div_assign, /);

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, v: Vector) -> Vector {
        v * self
    }
}
