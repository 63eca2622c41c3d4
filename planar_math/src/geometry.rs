use crate::{
    arith::{add, angle_between, multiply, normalize, sub},
    operand::{Operand, Point},
    vector::Vector,
};

pub fn distance(a: impl Point, b: impl Point) -> f64 {
    sub(a, b.to_vector()).magnitude()
}

/// Moves from `a` towards `b` by `distance`.
///
/// `distance` scales the unit direction from `a` to `b`, either per axis (a
/// vector) or uniformly (a scalar).
pub fn point_between(a: impl Point, b: impl Point, distance: impl Into<Operand>) -> Vector {
    let a = a.to_vector();
    add(a, multiply(normalize(sub(b, a)), distance))
}

/// Projects `point` onto the infinite line through `start` and `end`.
///
/// The result is `NaN` when `point` coincides with `start` or when `start`
/// equals `end`, since the angle to a zero vector is undefined.
pub fn closest_point_between(start: impl Point, end: impl Point, point: impl Point) -> Vector {
    let start = start.to_vector();
    let start_to_point = sub(point, start);
    let mut line = sub(start, end.to_vector());

    let theta = angle_between(start_to_point, line);
    line.normalize().multiply(start_to_point.magnitude() * f64::cos(theta));

    add(start, line)
}

/// Whether `v` lies on the segment from `a` to `b`.
///
/// Compares distances exactly, so points that are only collinear up to
/// rounding error are reported as off the line.
pub fn is_on_line(a: impl Point, b: impl Point, v: impl Point) -> bool {
    let (a, b, v) = (a.to_vector(), b.to_vector(), v.to_vector());
    distance(a, v) + distance(v, b) == distance(a, b)
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::vector::vector;

    #[test]
    fn distance_of_three_four_is_five() {
        assert_eq!(5.0, distance(vector(0.0, 0.0), vector(3.0, 4.0)));
        assert_eq!(5.0, distance((3.0, 4.0), (0.0, 0.0)));
    }

    #[test]
    fn distance_matches_reference() {
        let expected = glam::dvec2(1.5, -2.0).distance(glam::dvec2(-4.0, 7.25));
        assert_relative_eq!(expected, distance(vector(1.5, -2.0), vector(-4.0, 7.25)));
    }

    #[test]
    fn point_between_moves_towards_b() {
        assert_eq!(
            vector(1.0, 0.0),
            point_between(vector(0.0, 0.0), vector(10.0, 0.0), vector(1.0, 1.0))
        );
        assert_eq!(
            vector(2.0, 6.0),
            point_between(vector(2.0, 2.0), vector(2.0, 10.0), 4.0)
        );
    }

    #[test]
    fn point_between_scales_each_axis() {
        assert_eq!(
            vector(1.2, 3.2),
            point_between(Vector::ZERO, vector(3.0, 4.0), vector(2.0, 4.0))
        );
    }

    #[test]
    fn point_between_same_points_stays_put() {
        let a = vector(4.0, -1.0);
        assert_eq!(a, point_between(a, a, 10.0));
    }

    #[test]
    fn closest_point_projects_onto_line() {
        let p = closest_point_between(vector(0.0, 0.0), vector(10.0, 0.0), vector(5.0, 5.0));
        assert_relative_eq!(5.0, p.x, epsilon = 1e-12);
        assert_relative_eq!(0.0, p.y, epsilon = 1e-12);
    }

    #[test]
    fn closest_point_extends_past_the_segment() {
        let p = closest_point_between(vector(0.0, 0.0), vector(10.0, 0.0), vector(-3.0, 2.0));
        assert_relative_eq!(-3.0, p.x, epsilon = 1e-12);
        assert_relative_eq!(0.0, p.y, epsilon = 1e-12);
    }

    #[test]
    fn closest_point_matches_reference() {
        let (start, end, point) = (vector(1.0, 2.0), vector(7.0, -3.0), vector(-2.0, 5.5));

        let g_start = glam::dvec2(1.0, 2.0);
        let expected = g_start
            + (glam::dvec2(-2.0, 5.5) - g_start).project_onto(glam::dvec2(7.0, -3.0) - g_start);

        let p = closest_point_between(start, end, point);
        assert_relative_eq!(expected.x, p.x, epsilon = 1e-9);
        assert_relative_eq!(expected.y, p.y, epsilon = 1e-9);
    }

    #[test]
    fn closest_point_from_start_is_nan() {
        let p = closest_point_between(vector(1.0, 1.0), vector(5.0, 1.0), vector(1.0, 1.0));
        assert!(p.x.is_nan());
        assert!(p.y.is_nan());
    }

    #[test]
    fn closest_point_on_degenerate_line_is_nan() {
        let p = closest_point_between(vector(2.0, 2.0), vector(2.0, 2.0), vector(5.0, 5.0));
        assert!(p.x.is_nan());
        assert!(p.y.is_nan());
    }

    #[test]
    fn point_on_line_is_exact() {
        let (a, b) = (vector(0.0, 0.0), vector(10.0, 0.0));
        assert!(is_on_line(a, b, vector(5.0, 0.0)));
        assert!(is_on_line(a, b, a));
        assert!(is_on_line(a, b, b));
        assert!(!is_on_line(a, b, vector(5.0, 0.0001)));
        assert!(!is_on_line(a, b, vector(11.0, 0.0)));
    }
}
