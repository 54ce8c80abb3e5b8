/*
 * Color Diffusion Module
 *
 * Boids blend their color towards the average color of everyone around
 * them, so tight clusters converge on a shared hue. Channels never drop
 * below MIN_BRIGHTNESS to keep the flock from fading to black.
 */

use nannou::prelude::*;

use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::perception::{self, Vision};

pub const MIN_BRIGHTNESS: u8 = 50;

// New color for `population[index]`, or None if nobody is within the perception radius
pub fn diffuse(index: usize, population: &[Boid], params: &SimulationParams) -> Option<Rgb<u8>> {
    let mut totals = [0u32; 3];
    let mut count = 0u32;

    for (other, _) in perception::neighbors(index, population, params.perception_radius, Vision::Omnidirectional) {
        totals[0] += other.color.red as u32;
        totals[1] += other.color.green as u32;
        totals[2] += other.color.blue as u32;
        count += 1;
    }

    if count == 0 {
        return None;
    }

    let own = population[index].color;
    let bias = params.color_bias;

    Some(rgb(
        blend_channel(own.red, totals[0] / count, bias),
        blend_channel(own.green, totals[1] / count, bias),
        blend_channel(own.blue, totals[2] / count, bias),
    ))
}

// own * bias + average * (1 - bias), truncated, floored at MIN_BRIGHTNESS
pub fn blend_channel(own: u8, average: u32, bias: f32) -> u8 {
    let blended = (own as f32 * bias + average as f32 * (1.0 - bias)) as i32;
    blended.max(MIN_BRIGHTNESS as i32).clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boid_at(x: f32, color: Rgb<u8>) -> Boid {
        Boid::new(pt2(x, 100.0), vec2(1.0, 0.0), color)
    }

    #[test]
    fn blends_towards_neighbor_average() {
        let flock = vec![
            boid_at(100.0, rgb(100, 100, 100)),
            boid_at(90.0, rgb(200, 0, 61)),
            boid_at(110.0, rgb(101, 0, 60)),
        ];
        let mut params = SimulationParams::default();
        params.color_bias = 0.5;

        let color = diffuse(0, &flock, &params).unwrap();
        // average red = 301 / 2 = 150 (floor), 100 * 0.5 + 150 * 0.5 = 125
        assert_eq!(color.red, 125);
        // average green = 0, 50 floored up to the minimum
        assert_eq!(color.green, 50);
        // average blue = 121 / 2 = 60, 50 + 30 = 80
        assert_eq!(color.blue, 80);
    }

    #[test]
    fn no_neighbors_means_no_change() {
        let flock = vec![boid_at(100.0, rgb(10, 20, 30)), boid_at(900.0, rgb(200, 200, 200))];
        assert!(diffuse(0, &flock, &SimulationParams::default()).is_none());
    }

    #[test]
    fn neighbors_behind_still_count() {
        // Facing +x, neighbor directly behind
        let flock = vec![boid_at(100.0, rgb(100, 100, 100)), boid_at(80.0, rgb(200, 200, 200))];
        assert!(diffuse(0, &flock, &SimulationParams::default()).is_some());
    }

    #[test]
    fn blend_channel_bounds() {
        assert_eq!(blend_channel(0, 0, 0.2), MIN_BRIGHTNESS);
        assert_eq!(blend_channel(255, 255, 0.2), 255);
        assert_eq!(blend_channel(255, 0, 1.0), 255);
        assert_eq!(blend_channel(10, 255, 0.0), 255);
    }
}
