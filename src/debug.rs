/*
 * Debug Information Module
 *
 * Per-frame diagnostics shown in the control panel:
 * - FPS (frames per second)
 * - Frame time and time spent in the simulation tick
 * - Current flock size and the separation its placement achieved
 */

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub tick_time: Duration,
    pub ticks: u64,
    pub boid_count: usize,
    pub placed_separation: f32,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            tick_time: Duration::ZERO,
            ticks: 0,
            boid_count: 0,
            placed_separation: 0.0,
        }
    }
}

impl DebugInfo {
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Tick time: {:.2} ms", self.tick_time.as_secs_f64() * 1000.0),
            format!("Ticks: {}", self.ticks),
            format!("Boids: {}", self.boid_count),
            format!("Placement separation: {:.2}", self.placed_separation),
        ]
    }
}
