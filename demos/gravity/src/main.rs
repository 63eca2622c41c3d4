use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use log::{error, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use config::Config;
use error::SimulationResult;
use simulation::Simulation;

mod body;
mod config;
mod error;
mod simulation;

fn main() -> ExitCode {
    env_logger::init();

    let config = Config::parse();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> SimulationResult {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!("generating {} planets with seed {seed}", config.planets);
    let mut simulation = Simulation::generate(config, &mut StdRng::seed_from_u64(seed));

    for _ in 0..config.steps {
        simulation.step();

        let step = simulation.elapsed_steps();
        if step % config.report_every == 0 {
            info!(
                "step {step}: kinetic energy {:.3}, center of mass {}",
                simulation.kinetic_energy(),
                simulation.center_of_mass()
            );
        }
    }

    report(&simulation, config)
}

fn report(simulation: &Simulation, config: &Config) -> SimulationResult {
    let Some(sun) = simulation.sun() else {
        return Err("simulation has no bodies".into());
    };
    let center = sun.position;

    let mut out = io::stdout().lock();
    writeln!(out, "{:>4} {:>8} {:>12} {:>12}", "body", "radius", "screen x", "screen y")?;
    for (index, body) in simulation.bodies().iter().enumerate() {
        let screen = body.screen_position(center, config.viewport);
        writeln!(
            out,
            "{index:>4} {:>8.2} {:>12.2} {:>12.2}",
            body.radius, screen.x, screen.y
        )?;
    }

    Ok(())
}
