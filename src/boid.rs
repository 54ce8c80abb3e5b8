/*
 * Boid Module
 *
 * This module defines the Boid struct and its per-frame physical update.
 * Each boid follows three main rules, evaluated in the steering module:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 * and blends its color towards nearby boids (see the color module).
 */

use nannou::prelude::*;
use rand::Rng;

use crate::color;
use crate::params::SimulationParams;
use crate::steering::Steering;
use crate::vector::Vector2Ext;

// Channel range for freshly spawned boids
pub const SPAWN_BRIGHTNESS: std::ops::RangeInclusive<u8> = 150..=255;

#[derive(Clone, Debug)]
pub struct Boid {
    pub position: Point2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub color: Rgb<u8>,
}

// Everything a boid decides in one tick, computed from a read-only view of the flock
#[derive(Clone, Copy, Debug)]
pub struct FlockDecision {
    pub steering: Steering,
    // None when no neighbor is close enough to influence the color
    pub color: Option<Rgb<u8>>,
}

impl FlockDecision {
    // `population[index]` must be the deciding boid
    pub fn decide(index: usize, population: &[Boid], params: &SimulationParams) -> Self {
        Self {
            steering: Steering::compute(index, population, params),
            color: color::diffuse(index, population, params),
        }
    }
}

impl Boid {
    pub fn new(position: Point2, velocity: Vec2, color: Rgb<u8>) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
            color,
        }
    }

    // Random heading at `speed` and a bright random color
    pub fn spawn<R: Rng + ?Sized>(x: f32, y: f32, speed: f32, rng: &mut R) -> Self {
        let vx = rng.gen_range(-1.0..1.0);
        let vy = rng.gen_range(-1.0..1.0);
        let mut heading = vec2(vx, vy).normalize_or_zero();
        if heading == Vec2::ZERO {
            heading = Vec2::X;
        }

        let color = rgb(
            rng.gen_range(SPAWN_BRIGHTNESS),
            rng.gen_range(SPAWN_BRIGHTNESS),
            rng.gen_range(SPAWN_BRIGHTNESS),
        );

        Self::new(pt2(x, y), heading * speed, color)
    }

    // Apply a force to the boid
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    // Steer and recolor against the flock. `population[index]` must be this boid's
    // state at the start of the tick.
    pub fn flock(&mut self, index: usize, population: &[Boid], params: &SimulationParams) {
        let decision = FlockDecision::decide(index, population, params);
        self.apply_decision(decision);
    }

    pub fn apply_decision(&mut self, decision: FlockDecision) {
        decision.steering.apply_to(self);
        if let Some(color) = decision.color {
            self.color = color;
        }
    }

    // Integrate: force into velocity, clamp speed, velocity into position
    pub fn update(&mut self, max_speed: f32) {
        self.velocity += self.acceleration;

        if self.velocity.length() > max_speed {
            self.velocity = self.velocity.scale_to_length(max_speed);
        }

        self.position += self.velocity;

        self.acceleration = Vec2::ZERO;
    }

    // Wrap around the domain edges. Leaving past the far edge snaps to 0,
    // leaving below 0 snaps to the far edge itself.
    pub fn edges(&mut self, width: f32, height: f32) {
        if self.position.x > width {
            self.position.x = 0.0;
        }
        if self.position.x < 0.0 {
            self.position.x = width;
        }
        if self.position.y > height {
            self.position.y = 0.0;
        }
        if self.position.y < 0.0 {
            self.position.y = height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn still(x: f32, y: f32) -> Boid {
        Boid::new(pt2(x, y), Vec2::ZERO, rgb(200, 200, 200))
    }

    #[test]
    fn forces_accumulate_until_update() {
        let mut boid = still(10.0, 10.0);
        boid.apply_force(vec2(0.5, 0.0));
        boid.apply_force(vec2(0.0, 0.25));
        assert_eq!(boid.acceleration, vec2(0.5, 0.25));

        boid.update(6.0);
        assert_eq!(boid.velocity, vec2(0.5, 0.25));
        assert_eq!(boid.position, pt2(10.5, 10.25));
        assert_eq!(boid.acceleration, Vec2::ZERO);
    }

    #[test]
    fn update_clamps_speed_before_moving() {
        let mut boid = still(0.0, 0.0);
        boid.velocity = vec2(5.0, 0.0);
        boid.apply_force(vec2(5.0, 0.0));
        boid.update(6.0);

        assert!((boid.velocity.length() - 6.0).abs() < 1e-5);
        assert!((boid.position.x - 6.0).abs() < 1e-5);
    }

    #[test]
    fn edges_wrap_to_the_boundary_values() {
        let mut boid = still(1920.5, 540.0);
        boid.edges(1920.0, 1080.0);
        assert_eq!(boid.position.x, 0.0);

        let mut boid = still(-0.5, 540.0);
        boid.edges(1920.0, 1080.0);
        assert_eq!(boid.position.x, 1920.0);

        let mut boid = still(10.0, 1080.25);
        boid.edges(1920.0, 1080.0);
        assert_eq!(boid.position.y, 0.0);

        let mut boid = still(10.0, -3.0);
        boid.edges(1920.0, 1080.0);
        assert_eq!(boid.position.y, 1080.0);
    }

    #[test]
    fn exact_far_edge_is_not_wrapped() {
        let mut boid = still(1920.0, 1080.0);
        boid.edges(1920.0, 1080.0);
        assert_eq!(boid.position, pt2(1920.0, 1080.0));
    }

    #[test]
    fn spawn_is_bright_and_at_speed() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..100 {
            let boid = Boid::spawn(5.0, 6.0, 4.0, &mut rng);
            assert!((boid.velocity.length() - 4.0).abs() < 1e-4);
            assert!(boid.color.red >= 150);
            assert!(boid.color.green >= 150);
            assert!(boid.color.blue >= 150);
            assert_eq!(boid.position, pt2(5.0, 6.0));
        }
    }
}
