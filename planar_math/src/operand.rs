use crate::vector::{vector, Vector};

/// Anything with an `x` and a `y` coordinate.
///
/// Accepted as a read-only operand wherever a [`Vector`] would be, so plain
/// coordinate pairs work without converting them first.
pub trait Point {
    fn x(&self) -> f64;

    fn y(&self) -> f64;

    fn to_vector(&self) -> Vector {
        vector(self.x(), self.y())
    }
}

impl Point for Vector {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Point for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl Point for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }
}

impl<P: Point + ?Sized> Point for &P {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}

/// Right hand side of an arithmetic operation: either a whole vector, applied
/// component-wise, or a scalar applied to both components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Vector(Vector),
}

impl From<f64> for Operand {
    fn from(s: f64) -> Self {
        Operand::Scalar(s)
    }
}

impl From<Vector> for Operand {
    fn from(v: Vector) -> Self {
        Operand::Vector(v)
    }
}

impl From<&Vector> for Operand {
    fn from(v: &Vector) -> Self {
        Operand::Vector(*v)
    }
}

impl From<(f64, f64)> for Operand {
    fn from(v: (f64, f64)) -> Self {
        Operand::Vector(v.into())
    }
}

impl From<[f64; 2]> for Operand {
    fn from(v: [f64; 2]) -> Self {
        Operand::Vector(v.into())
    }
}

impl Operand {
    /// The operand as a vector, with a scalar repeated in both components.
    pub fn spread(operand: impl Into<Operand>) -> Vector {
        let operand: Operand = operand.into();
        Vector::from(operand)
    }
}

impl From<Operand> for Vector {
    fn from(operand: Operand) -> Self {
        match operand {
            Operand::Scalar(s) => Vector::splat(s),
            Operand::Vector(v) => v,
        }
    }
}
