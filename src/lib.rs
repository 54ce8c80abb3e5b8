/*
 * Boid Flocking Simulation - Module Definitions
 *
 * The simulation core (vector, boid, perception, steering, color,
 * simulation, params, config) has no windowing state and can be driven
 * headlessly. The nannou front end (app, ui, renderer, debug) sits on top.
 */

// Re-export key components for easier access
pub use boid::{Boid, FlockDecision};
pub use config::{ConfigError, SimulationConfig};
pub use params::{SimulationParams, UpdateOrder};
pub use simulation::Simulation;
pub use steering::Steering;
pub use vector::Vector2Ext;

// Define modules
pub mod app;
pub mod boid;
pub mod color;
pub mod config;
pub mod debug;
pub mod params;
pub mod perception;
pub mod renderer;
pub mod simulation;
pub mod steering;
pub mod ui;
pub mod vector;

// Constants
pub const BOID_RADIUS: f32 = 3.0;
