//! Pure counterparts of the [`Vector`] methods. None of these touch their
//! arguments; each returns a fresh vector or scalar.

use crate::{
    operand::{Operand, Point},
    vector::Vector,
};

pub fn add(augend: impl Point, addend: impl Into<Operand>) -> Vector {
    augend.to_vector() + Operand::spread(addend)
}

pub fn sub(minuend: impl Point, subtrahend: impl Into<Operand>) -> Vector {
    minuend.to_vector() - Operand::spread(subtrahend)
}

pub fn multiply(multiplicand: impl Point, factor: impl Into<Operand>) -> Vector {
    multiplicand.to_vector() * Operand::spread(factor)
}

/// Plain component-wise division.
///
/// Zero divisors are not skipped here, so the result may hold infinities or
/// `NaN`. Use [`Vector::divide`] for the zero-skipping variant.
pub fn divide(dividend: impl Point, divisor: impl Into<Operand>) -> Vector {
    dividend.to_vector() / Operand::spread(divisor)
}

pub fn inverse(v: impl Point) -> Vector {
    -v.to_vector()
}

/// Unit vector pointing the same way as `v`; zero if `v` is zero.
pub fn normalize(v: impl Point) -> Vector {
    let mut unit = v.to_vector();
    unit.normalize();
    unit
}

pub fn dot_product(a: impl Point, b: impl Point) -> f64 {
    a.x() * b.x() + a.y() * b.y()
}

pub fn cross_product(a: impl Point, b: impl Point) -> f64 {
    a.x() * b.y() - a.y() * b.x()
}

pub fn equals(a: impl Point, b: impl Point) -> bool {
    a.x() == b.x() && a.y() == b.y()
}

/// Angle between `a` and `b` in radians, `NaN` when either has zero length.
pub fn angle_between(a: impl Point, b: impl Point) -> f64 {
    a.to_vector().angle_to(b)
}

#[cfg(test)]
mod test {
    use std::f64::consts::FRAC_PI_4;

    use approx::assert_relative_eq;

    use super::*;
    use crate::vector::vector;

    #[test]
    fn arithmetic_leaves_operands_untouched() {
        let a = vector(2.0, 3.0);
        let b = vector(4.0, 6.0);

        assert_eq!(vector(6.0, 9.0), add(a, b));
        assert_eq!(vector(-2.0, -3.0), sub(a, b));
        assert_eq!(vector(8.0, 18.0), multiply(a, b));
        assert_eq!(vector(0.5, 0.5), divide(a, b));
        assert_eq!(vector(2.0, 3.0), a);
        assert_eq!(vector(4.0, 6.0), b);
    }

    #[test]
    fn scalar_operands_apply_to_both_components() {
        let a = vector(2.0, 3.0);
        assert_eq!(vector(3.0, 4.0), add(a, 1.0));
        assert_eq!(vector(1.0, 2.0), sub(a, 1.0));
        assert_eq!(vector(4.0, 6.0), multiply(a, 2.0));
        assert_eq!(vector(1.0, 1.5), divide(a, 2.0));
    }

    #[test]
    fn plain_pairs_work_as_first_operand() {
        assert_eq!(vector(4.0, 6.0), add((1.0, 2.0), vector(3.0, 4.0)));
        assert_eq!(vector(2.0, 4.0), multiply([1.0, 2.0], 2.0));
    }

    #[test]
    fn divide_by_zero_is_not_skipped() {
        let v = divide(vector(3.0, 4.0), 0.0);
        assert_eq!(f64::INFINITY, v.x);
        assert_eq!(f64::INFINITY, v.y);

        assert!(divide(Vector::ZERO, 0.0).x.is_nan());
    }

    #[test]
    fn divide_disagrees_with_in_place_divide_on_zero() {
        let mut in_place = vector(3.0, 4.0);
        in_place.divide(vector(0.0, 2.0));

        let pure = divide(vector(3.0, 4.0), vector(0.0, 2.0));

        assert_eq!(vector(3.0, 2.0), in_place);
        assert_eq!(f64::INFINITY, pure.x);
        assert_eq!(2.0, pure.y);
    }

    #[test]
    fn inverse_returns_negated_copy() {
        let v = vector(1.0, -2.0);
        assert_eq!(vector(-1.0, 2.0), inverse(v));
        assert_eq!(vector(1.0, -2.0), v);
    }

    #[test]
    fn normalize_returns_unit_copy() {
        let v = vector(0.0, -8.0);
        assert_eq!(vector(0.0, -1.0), normalize(v));
        assert_eq!(vector(0.0, -8.0), v);
        assert_eq!(Vector::ZERO, normalize(Vector::ZERO));
    }

    #[test]
    fn products() {
        assert_eq!(0.0, dot_product(vector(1.0, 0.0), vector(0.0, 1.0)));
        assert_eq!(1.0, cross_product(vector(1.0, 0.0), vector(0.0, 1.0)));
        assert_eq!(11.0, dot_product((1.0, 2.0), [3.0, 4.0]));
    }

    #[test]
    fn equals_compares_exactly() {
        assert!(equals(vector(1.0, 2.0), (1.0, 2.0)));
        assert!(!equals(vector(1.0, 2.0), (1.0, 2.000_000_000_000_001)));
    }

    #[test]
    fn angle_between_vectors() {
        assert_relative_eq!(
            FRAC_PI_4,
            angle_between(vector(1.0, 0.0), vector(3.0, 3.0)),
            epsilon = 1e-12
        );
        assert!(angle_between(Vector::ZERO, vector(1.0, 1.0)).is_nan());
    }

    #[test]
    fn angle_between_matches_reference() {
        let (a, b) = (vector(2.0, -1.0), vector(-0.5, 4.0));
        let expected = glam::dvec2(2.0, -1.0).angle_between(glam::dvec2(-0.5, 4.0));
        assert_relative_eq!(expected.abs(), angle_between(a, b), epsilon = 1e-12);
    }
}
