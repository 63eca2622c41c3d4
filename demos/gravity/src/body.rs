use planar_math::{divide, multiply, normalize, sub, Vector};

pub const GRAVITATIONAL_CONSTANT: f64 = 0.4;

/// A round body whose mass grows with the square of its radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vector,
    pub velocity: Vector,
    pub radius: f64,
    pub mass: f64,
}

impl Body {
    pub fn new(position: Vector, radius: f64, velocity: Vector) -> Self {
        Self {
            position,
            velocity,
            radius,
            mass: radius * radius,
        }
    }

    /// Acceleration `other` exerts on this body.
    ///
    /// Falls off with the square root of the distance rather than its square.
    /// Coincident bodies produce `NaN`.
    pub fn acceleration_towards(&self, other: &Body) -> Vector {
        let offset = sub(other.position, self.position);
        let falloff = offset.length().sqrt();
        let direction = normalize(offset);

        let force = divide(
            multiply(multiply(direction, GRAVITATIONAL_CONSTANT), other.mass),
            falloff,
        );
        divide(force, self.mass)
    }

    /// Velocity change over `time_step` caused by every body in `bodies` except
    /// the one at `index`, which is taken to be `self`.
    pub fn velocity_change(&self, index: usize, bodies: &[Body], time_step: f64) -> Vector {
        bodies
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != index)
            .fold(Vector::ZERO, |mut change, (_, other)| {
                change.add_mut(multiply(self.acceleration_towards(other), time_step));
                change
            })
    }

    pub fn update_position(&mut self, time_step: f64) {
        self.position.add_mut(multiply(self.velocity, time_step));
    }

    /// Where the body lands on a `viewport` sized screen centered on `center`.
    pub fn screen_position(&self, center: Vector, viewport: Vector) -> Vector {
        let mut screen = sub(self.position, center);
        screen.add_mut(divide(viewport, 2.0));
        screen
    }
}
