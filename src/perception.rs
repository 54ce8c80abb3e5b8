/*
 * Perception Module
 *
 * Decides which members of the flock a boid can see. Every query scans the
 * whole population (no spatial index) and excludes the boid itself by index.
 *
 * Alignment and cohesion only see within a forward-facing cone; separation
 * and color diffusion see all around.
 */

use crate::boid::Boid;
use crate::vector::Vector2Ext;

// Full opening angle of the forward vision cone, in degrees
pub const CONE_ANGLE: f32 = 90.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Vision {
    // Only neighbors within the forward cone of the given full angle
    Cone(f32),
    Omnidirectional,
}

// Whether `other` lies strictly within `cone_angle / 2` of `boid`'s heading.
// Coincident boids and a stationary `boid` have no direction and see nothing.
pub fn is_in_cone(boid: &Boid, other: &Boid, cone_angle: f32) -> bool {
    let to_other = other.position - boid.position;
    if to_other.length_squared() == 0.0 || boid.velocity.length_squared() == 0.0 {
        return false;
    }

    let forward = boid.velocity.normalize_or_zero();
    let angle = forward.angle_to(to_other.normalize_or_zero());

    angle.abs() < cone_angle / 2.0
}

// Neighbors of `population[index]` strictly within `radius`, with their distance
pub fn neighbors<'a>(
    index: usize,
    population: &'a [Boid],
    radius: f32,
    vision: Vision,
) -> impl Iterator<Item = (&'a Boid, f32)> + 'a {
    let boid = &population[index];

    population
        .iter()
        .enumerate()
        .filter(move |&(i, _)| i != index)
        .filter_map(move |(_, other)| {
            let distance = boid.position.distance_to(other.position);
            if distance >= radius {
                return None;
            }
            match vision {
                Vision::Cone(angle) if !is_in_cone(boid, other, angle) => None,
                _ => Some((other, distance)),
            }
        })
}
