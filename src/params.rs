/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * live-tunable parameters for the flock. The control panel mutates them
 * between ticks; the simulation only reads them. It also provides the
 * documented ranges, the reset action, and change detection.
 */

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

pub const DEFAULT_AGENT_COUNT: usize = 500;
pub const DEFAULT_MAX_SPEED: f32 = 6.0;
pub const DEFAULT_MAX_FORCE: f32 = 0.3;
pub const DEFAULT_PERCEPTION_RADIUS: f32 = 70.0;
pub const DEFAULT_COLOR_BIAS: f32 = 0.2;

// Separation looks at a tighter circle than the other rules
pub const AVOIDANCE_FACTOR: f32 = 0.70;

// How agent decisions within a tick see each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOrder {
    // Every decision reads the population as it was before the tick
    Snapshot,
    // Agent i sees agents 0..i already moved this tick
    Sequential,
}

impl Default for UpdateOrder {
    fn default() -> Self {
        UpdateOrder::Snapshot
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub agent_count: usize,
    pub max_speed: f32,
    pub max_force: f32,
    pub perception_radius: f32,
    // Weight of an agent's own color against its neighbors' average, in [0, 1]
    pub color_bias: f32,
    pub pause_simulation: bool,
    pub enable_parallel: bool,
    pub update_order: UpdateOrder,

    // Internal state for tracking changes
    #[serde(skip)]
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Debug, Clone, PartialEq)]
struct ParamSnapshot {
    agent_count: usize,
    max_speed: f32,
    max_force: f32,
    perception_radius: f32,
    color_bias: f32,
    pause_simulation: bool,
    enable_parallel: bool,
    update_order: UpdateOrder,
}

// What changed since the last snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamChanges {
    pub agent_count_changed: bool,
    pub any_changed: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            agent_count: DEFAULT_AGENT_COUNT,
            max_speed: DEFAULT_MAX_SPEED,
            max_force: DEFAULT_MAX_FORCE,
            perception_radius: DEFAULT_PERCEPTION_RADIUS,
            color_bias: DEFAULT_COLOR_BIAS,
            pause_simulation: false,
            enable_parallel: false,
            update_order: UpdateOrder::Snapshot,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Radius used by separation, derived from the perception radius
    #[inline]
    pub fn avoidance_radius(&self) -> f32 {
        self.perception_radius * AVOIDANCE_FACTOR
    }

    // Restore the five tunables to their initial values.
    // Execution toggles (pause, parallel, ordering) are left alone.
    pub fn reset(&mut self) {
        self.agent_count = DEFAULT_AGENT_COUNT;
        self.max_speed = DEFAULT_MAX_SPEED;
        self.max_force = DEFAULT_MAX_FORCE;
        self.perception_radius = DEFAULT_PERCEPTION_RADIUS;
        self.color_bias = DEFAULT_COLOR_BIAS;
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.current_values());
    }

    // Compare against the last snapshot. Nothing has changed if no snapshot was taken.
    pub fn detect_changes(&self) -> ParamChanges {
        let Some(prev) = &self.previous_values else {
            return ParamChanges::default();
        };

        ParamChanges {
            agent_count_changed: self.agent_count != prev.agent_count,
            any_changed: *prev != self.current_values(),
        }
    }

    // Check every tunable against its documented range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let counts = Self::get_agent_count_range();
        check_range(
            "agent_count",
            self.agent_count as f64,
            *counts.start() as f64,
            *counts.end() as f64,
        )?;
        check_f32("max_speed", self.max_speed, Self::get_max_speed_range())?;
        check_f32("max_force", self.max_force, Self::get_max_force_range())?;
        check_f32("perception_radius", self.perception_radius, Self::get_perception_radius_range())?;
        check_f32("color_bias", self.color_bias, Self::get_color_bias_range())?;
        Ok(())
    }

    fn current_values(&self) -> ParamSnapshot {
        ParamSnapshot {
            agent_count: self.agent_count,
            max_speed: self.max_speed,
            max_force: self.max_force,
            perception_radius: self.perception_radius,
            color_bias: self.color_bias,
            pause_simulation: self.pause_simulation,
            enable_parallel: self.enable_parallel,
            update_order: self.update_order,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_agent_count_range() -> std::ops::RangeInclusive<usize> {
        1..=2000
    }

    pub fn get_max_speed_range() -> std::ops::RangeInclusive<f32> {
        1.0..=10.0
    }

    pub fn get_max_force_range() -> std::ops::RangeInclusive<f32> {
        0.01..=1.0
    }

    pub fn get_perception_radius_range() -> std::ops::RangeInclusive<f32> {
        10.0..=100.0
    }

    pub fn get_color_bias_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }
}

fn check_f32(name: &'static str, value: f32, range: std::ops::RangeInclusive<f32>) -> Result<(), ConfigError> {
    check_range(name, value as f64, *range.start() as f64, *range.end() as f64)
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { name, value, min, max })
    }
}
