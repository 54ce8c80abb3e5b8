/*
 * Boid Flocking Simulation
 *
 * Agents steer using three local rules (separation, alignment, cohesion)
 * and blend their colors with nearby agents, so clusters show up as patches
 * of shared color. Parameters are tunable live from the control panel.
 *
 * Usage: chroma-flock [config.json]
 * Logging is controlled with RUST_LOG, e.g. RUST_LOG=chroma_flock=debug.
 */

use anyhow::{Context, Result};
use chroma_flock::app::{model, update};
use chroma_flock::config::{self, SimulationConfig};
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let config = load_config()?;
    info!(boids = config.params.agent_count, seed = ?config.seed, "Starting boids simulation");
    config::install(config);

    nannou::app(model)
        .update(update)
        .run();

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_config() -> Result<SimulationConfig> {
    match std::env::args().nth(1) {
        Some(path) => SimulationConfig::from_json_file(&path)
            .with_context(|| format!("loading config from {path}")),
        None => Ok(SimulationConfig::default()),
    }
}
