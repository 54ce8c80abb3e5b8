/*
 * Application Module
 *
 * This module defines the nannou model and the update/view loop.
 * Each frame: run the control panel, apply reset and resize requests,
 * advance the simulation one tick, then draw.
 */

use std::time::Instant;

use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::{debug, error, info};

use crate::config;
use crate::debug::DebugInfo;
use crate::params::SimulationParams;
use crate::renderer;
use crate::simulation::Simulation;
use crate::ui;

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Initialize the model from the installed config
pub fn model(app: &App) -> Model {
    let config = config::active();

    let window_id = match app
        .new_window()
        .title("Boids Simulation")
        .size(config.width as u32, config.height as u32)
        .view(view)
        .raw_event(raw_window_event)
        .build()
    {
        Ok(id) => id,
        Err(err) => {
            error!(?err, "Failed to create window");
            std::process::exit(1);
        }
    };

    let egui = match app.window(window_id) {
        Some(window) => Egui::from_window(&window),
        None => {
            error!("Window closed before the UI could attach");
            std::process::exit(1);
        }
    };

    let simulation = Simulation::new(&config);
    info!(
        width = config.width,
        height = config.height,
        boids = simulation.len(),
        "Simulation ready"
    );

    Model {
        simulation,
        params: config.params,
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.egui.set_elapsed_time(update.since_start);

    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let outcome = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if outcome.reset_requested {
        model.params.reset();
        info!("Parameters reset to defaults");
    } else if outcome.changes.any_changed {
        debug!(params = ?model.params, "Parameters changed");
    }

    // Reset can also change the count, so compare against the live flock
    model.simulation.resize(model.params.agent_count, &model.params);

    if !model.params.pause_simulation {
        let started = Instant::now();
        model.simulation.tick(&model.params);
        model.debug_info.tick_time = started.elapsed();
        model.debug_info.ticks += 1;
    }

    model.debug_info.boid_count = model.simulation.len();
    model.debug_info.placed_separation = model.simulation.placed_separation();
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    renderer::draw_flock(&draw, &model.simulation, app.window_rect());

    if let Err(err) = draw.to_frame(app, &frame) {
        error!(?err, "Failed to draw flock");
    }
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        error!(?err, "Failed to draw UI");
    }
}

pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Pass events to egui
    model.egui.handle_raw_event(event);
}
