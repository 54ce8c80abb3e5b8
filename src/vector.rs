/*
 * Vector Module
 *
 * Two-dimensional vector helpers used by the flocking rules. Arithmetic,
 * length and normalization come straight from nannou's Vec2; this module
 * adds the few operations the rules need on top of it.
 *
 * The zero vector never faults: normalizing it, scaling it, or measuring an
 * angle against it yields zero.
 */

use nannou::prelude::*;

pub trait Vector2Ext {
    // Euclidean distance between two points
    fn distance_to(self, other: Self) -> f32;

    // Signed angle in degrees from `self` to `other`, wrapped to (-180, 180]
    fn angle_to(self, other: Self) -> f32;

    // Rescale to exactly `length`. The zero vector stays zero.
    fn scale_to_length(self, length: f32) -> Self;

    // Clamp magnitude to at most `max`
    fn limit(self, max: f32) -> Self;
}

impl Vector2Ext for Vec2 {
    #[inline]
    fn distance_to(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    fn angle_to(self, other: Vec2) -> f32 {
        if self.length_squared() == 0.0 || other.length_squared() == 0.0 {
            return 0.0;
        }

        let cross = self.x * other.y - self.y * other.x;
        let dot = self.dot(other);
        let degrees = cross.atan2(dot).to_degrees();

        // atan2 can land on -180 exactly; keep the interval half-open
        if degrees <= -180.0 {
            degrees + 360.0
        } else {
            degrees
        }
    }

    #[inline]
    fn scale_to_length(self, length: f32) -> Vec2 {
        self.normalize_or_zero() * length
    }

    #[inline]
    fn limit(self, max: f32) -> Vec2 {
        if self.length_squared() > max * max {
            self.scale_to_length(max)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn angle_to_is_signed() {
        let forward = vec2(1.0, 0.0);
        assert!((forward.angle_to(vec2(0.0, 1.0)) - 90.0).abs() < EPSILON);
        assert!((forward.angle_to(vec2(0.0, -1.0)) + 90.0).abs() < EPSILON);
        assert!((forward.angle_to(vec2(-1.0, 0.0)) - 180.0).abs() < EPSILON);
    }

    #[test]
    fn angle_to_wraps_across_the_negative_axis() {
        // 179 degrees and -179 degrees are two degrees apart, not 358
        let a = vec2(179.0f32.to_radians().cos(), 179.0f32.to_radians().sin());
        let b = vec2((-179.0f32).to_radians().cos(), (-179.0f32).to_radians().sin());
        assert!((a.angle_to(b) - 2.0).abs() < 1e-2);
    }

    #[test]
    fn angle_to_zero_vector_is_zero() {
        assert_eq!(Vec2::ZERO.angle_to(vec2(1.0, 0.0)), 0.0);
        assert_eq!(vec2(1.0, 0.0).angle_to(Vec2::ZERO), 0.0);
    }

    #[test]
    fn scale_to_length_sets_exact_magnitude() {
        let v = vec2(3.0, 4.0).scale_to_length(10.0);
        assert!((v.length() - 10.0).abs() < EPSILON);

        // Scaling up is not skipped
        let small = vec2(0.1, 0.0).scale_to_length(2.0);
        assert!((small.x - 2.0).abs() < EPSILON);

        assert_eq!(Vec2::ZERO.scale_to_length(5.0), Vec2::ZERO);
    }

    #[test]
    fn limit_only_shrinks() {
        assert_eq!(vec2(0.1, 0.1).limit(1.0), vec2(0.1, 0.1));
        assert!((vec2(30.0, 40.0).limit(5.0).length() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn distance_to_is_symmetric() {
        let a = vec2(100.0, 100.0);
        let b = vec2(105.0, 100.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
    }
}
