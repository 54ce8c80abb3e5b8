/*
 * Renderer Module
 *
 * Draws the flock. Simulation coordinates have their origin at the top-left
 * corner with y pointing down; nannou's window has its origin at the center
 * with y pointing up. The domain is scaled uniformly to fit the window.
 */

use nannou::prelude::*;

use crate::simulation::Simulation;
use crate::BOID_RADIUS;

pub const BACKGROUND: (u8, u8, u8) = (30, 30, 30);

// Maps domain coordinates into a window rectangle
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub scale: f32,
    pub origin: Vec2,
}

impl Viewport {
    pub fn fit(width: f32, height: f32, window_rect: Rect) -> Self {
        let scale = f32::min(window_rect.w() / width, window_rect.h() / height);
        // Top-left corner of the centered domain, in window space
        let origin = window_rect.xy() + vec2(-width, height) * scale / 2.0;
        Self { scale, origin }
    }

    pub fn to_screen(&self, point: Point2) -> Point2 {
        self.origin + vec2(point.x, -point.y) * self.scale
    }
}

pub fn draw_flock(draw: &Draw, simulation: &Simulation, window_rect: Rect) {
    let (r, g, b) = BACKGROUND;
    draw.background().color(rgb(r, g, b));

    let viewport = Viewport::fit(simulation.width(), simulation.height(), window_rect);
    let radius = BOID_RADIUS * viewport.scale;

    for boid in simulation.boids() {
        draw.ellipse()
            .xy(viewport.to_screen(boid.position))
            .radius(radius)
            .color(boid.color);
    }
}
