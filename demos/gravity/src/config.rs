use clap::Parser;
use planar_math::Vector;

use crate::error::{SimulationError, SimulationResult};

/// Headless N-body gravity simulation.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Config {
    /// Number of random planets orbiting the sun.
    #[arg(long, default_value_t = 10)]
    pub planets: usize,

    /// Number of simulation steps to run.
    #[arg(long, default_value_t = 1000)]
    pub steps: u64,

    /// Simulated time per step.
    #[arg(long, default_value_t = 0.1)]
    pub time_step: f64,

    /// Seed for planet generation. A random seed is drawn and logged if omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Position of the sun, as `[x, y]`.
    #[arg(long, default_value = "[500, 500]")]
    pub sun: Vector,

    /// Size of the screen the final positions are mapped onto, as `[width, height]`.
    #[arg(long, default_value = "[1920, 1080]")]
    pub viewport: Vector,

    /// Log progress every this many steps.
    #[arg(long, default_value_t = 100)]
    pub report_every: u64,
}

impl Config {
    pub fn validate(&self) -> SimulationResult {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(SimulationError::new(format!(
                "time step must be a positive number, got {}",
                self.time_step
            )));
        }

        if self.report_every == 0 {
            return Err("report interval must be at least one step".into());
        }

        if !(self.sun.x.is_finite() && self.sun.y.is_finite()) {
            return Err(SimulationError::new(format!(
                "sun position must be finite, got {}",
                self.sun
            )));
        }

        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !(positive(self.viewport.x) && positive(self.viewport.y)) {
            return Err(SimulationError::new(format!(
                "viewport must have a positive, finite size, got {}",
                self.viewport
            )));
        }

        Ok(())
    }
}
