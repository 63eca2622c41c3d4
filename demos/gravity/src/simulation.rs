use log::debug;
use planar_math::{vector, Vector};
use rand::Rng;

use crate::{body::Body, config::Config};

pub const SUN_RADIUS: f64 = 50.0;
pub const FIELD_SIZE: f64 = 1000.0;

pub struct Simulation {
    bodies: Vec<Body>,
    time_step: f64,
    elapsed_steps: u64,
}

impl Simulation {
    pub fn new(bodies: Vec<Body>, time_step: f64) -> Self {
        Self {
            bodies,
            time_step,
            elapsed_steps: 0,
        }
    }

    /// A resting sun followed by `config.planets` randomly placed planets.
    pub fn generate<R: Rng>(config: &Config, rng: &mut R) -> Self {
        let mut bodies = Vec::with_capacity(config.planets + 1);
        bodies.push(Body::new(config.sun, SUN_RADIUS, Vector::ZERO));

        for _ in 0..config.planets {
            let position = vector(
                rng.random_range(0.0..FIELD_SIZE),
                rng.random_range(0.0..FIELD_SIZE),
            );
            let radius = rng.random_range(1.0..20.0);
            let velocity = vector(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0));
            bodies.push(Body::new(position, radius, velocity));
        }

        Self::new(bodies, config.time_step)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn sun(&self) -> Option<&Body> {
        self.bodies.first()
    }

    pub fn elapsed_steps(&self) -> u64 {
        self.elapsed_steps
    }

    /// Advances every velocity first, then every position.
    pub fn step(&mut self) {
        for index in 0..self.bodies.len() {
            let change = self.bodies[index].velocity_change(index, &self.bodies, self.time_step);
            self.bodies[index].velocity.add_mut(change);
        }

        for body in &mut self.bodies {
            body.update_position(self.time_step);
        }

        self.elapsed_steps += 1;
        debug!("step {} done", self.elapsed_steps);
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies
            .iter()
            .map(|body| 0.5 * body.mass * body.velocity.dot_product(body.velocity))
            .sum()
    }

    /// Center of mass of all bodies, or zero when there are none.
    pub fn center_of_mass(&self) -> Vector {
        let total_mass: f64 = self.bodies.iter().map(|body| body.mass).sum();
        let mut weighted = self
            .bodies
            .iter()
            .fold(Vector::ZERO, |sum, body| sum + body.position * body.mass);
        *weighted.divide(total_mass)
    }
}
