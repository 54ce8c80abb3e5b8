/*
 * Steering Module
 *
 * The three flocking rules. Each one follows the same shape:
 * accumulate over qualifying neighbors, average, derive a desired velocity
 * at max speed, then Reynolds steering = desired - velocity, limited to
 * max force. A rule with no qualifying neighbors produces zero.
 */

use nannou::prelude::*;

use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::perception::{self, Vision, CONE_ANGLE};
use crate::vector::Vector2Ext;

pub const ALIGNMENT_WEIGHT: f32 = 1.0;
pub const COHESION_WEIGHT: f32 = 1.0;
pub const SEPARATION_WEIGHT: f32 = 1.5;

// Unweighted rule outputs for one boid
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Steering {
    pub alignment: Vec2,
    pub cohesion: Vec2,
    pub separation: Vec2,
}

impl Steering {
    pub fn compute(index: usize, population: &[Boid], params: &SimulationParams) -> Self {
        Self {
            alignment: alignment(index, population, params),
            cohesion: cohesion(index, population, params),
            separation: separation(index, population, params),
        }
    }

    // Each weighted rule goes in as its own force
    pub fn apply_to(&self, boid: &mut Boid) {
        boid.apply_force(self.alignment * ALIGNMENT_WEIGHT);
        boid.apply_force(self.cohesion * COHESION_WEIGHT);
        boid.apply_force(self.separation * SEPARATION_WEIGHT);
    }
}

// Steering = desired - velocity, desired pointing along `direction` at max speed
fn steer(direction: Vec2, velocity: Vec2, params: &SimulationParams) -> Vec2 {
    if direction.length_squared() == 0.0 {
        return Vec2::ZERO;
    }

    let desired = direction.scale_to_length(params.max_speed);
    (desired - velocity).limit(params.max_force)
}

// Steer towards the average heading of visible neighbors
pub fn alignment(index: usize, population: &[Boid], params: &SimulationParams) -> Vec2 {
    let boid = &population[index];
    let mut sum = Vec2::ZERO;
    let mut count = 0;

    for (other, _) in perception::neighbors(index, population, params.perception_radius, Vision::Cone(CONE_ANGLE)) {
        sum += other.velocity;
        count += 1;
    }

    if count == 0 {
        return Vec2::ZERO;
    }

    steer(sum / count as f32, boid.velocity, params)
}

// Steer towards the average position of visible neighbors
pub fn cohesion(index: usize, population: &[Boid], params: &SimulationParams) -> Vec2 {
    let boid = &population[index];
    let mut sum = Vec2::ZERO;
    let mut count = 0;

    for (other, _) in perception::neighbors(index, population, params.perception_radius, Vision::Cone(CONE_ANGLE)) {
        sum += other.position;
        count += 1;
    }

    if count == 0 {
        return Vec2::ZERO;
    }

    let center = sum / count as f32;
    steer(center - boid.position, boid.velocity, params)
}

// Steer away from neighbors inside the avoidance radius, in any direction
pub fn separation(index: usize, population: &[Boid], params: &SimulationParams) -> Vec2 {
    let boid = &population[index];
    let mut sum = Vec2::ZERO;
    let mut count = 0;

    let near = perception::neighbors(index, population, params.avoidance_radius(), Vision::Omnidirectional);
    for (other, distance) in near {
        // Coincident boids give no direction to flee in
        if distance > 0.0 {
            sum += (boid.position - other.position) / distance;
            count += 1;
        }
    }

    if count == 0 {
        return Vec2::ZERO;
    }

    steer(sum / count as f32, boid.velocity, params)
}
