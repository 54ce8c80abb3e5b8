/*
 * UI Module
 *
 * This module builds the control panel with nannou_egui. It exposes the
 * live-tunable parameters and the reset action. Change detection is handled
 * by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{ParamChanges, SimulationParams, UpdateOrder};

#[derive(Debug, Clone, Copy, Default)]
pub struct UiOutcome {
    pub reset_requested: bool,
    pub changes: ParamChanges,
}

pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, debug_info: &DebugInfo) -> UiOutcome {
    let mut reset_requested = false;

    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.add(egui::Slider::new(&mut params.agent_count, SimulationParams::get_agent_count_range()).text("Number of Boids"));
            ui.add(egui::Slider::new(&mut params.max_speed, SimulationParams::get_max_speed_range()).text("Max Speed"));
            ui.add(egui::Slider::new(&mut params.max_force, SimulationParams::get_max_force_range()).text("Max Force"));
            ui.add(
                egui::Slider::new(&mut params.perception_radius, SimulationParams::get_perception_radius_range())
                    .text("Perception Radius"),
            );

            // Presented as a percentage, stored as a fraction
            let mut bias_percent = params.color_bias * 100.0;
            let bias_range = SimulationParams::get_color_bias_range();
            ui.add(
                egui::Slider::new(&mut bias_percent, (*bias_range.start() * 100.0)..=(*bias_range.end() * 100.0))
                    .text("Color Bias")
                    .suffix("%"),
            );
            if bias_percent != params.color_bias * 100.0 {
                params.color_bias = bias_percent / 100.0;
            }

            if ui.button("Reset").clicked() {
                reset_requested = true;
            }

            ui.collapsing("Execution", |ui| {
                ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
                ui.checkbox(&mut params.enable_parallel, "Enable Parallel Processing");
                ui.horizontal(|ui| {
                    ui.radio_value(&mut params.update_order, UpdateOrder::Snapshot, "Snapshot");
                    ui.radio_value(&mut params.update_order, UpdateOrder::Sequential, "Sequential");
                });
            });

            ui.collapsing("Debug", |ui| {
                for line in debug_info.lines() {
                    ui.label(line);
                }
            });
        });

    UiOutcome {
        reset_requested,
        changes: params.detect_changes(),
    }
}
