use rand::Rng;

use glam::{Affine3A, Vec3};

use super::graph::placement;

/// Idle bobbing applied to a group: a slow sway of the rotation and a small
/// vertical drift, both driven by one sine/cosine pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floating {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    phase: f32,
}

impl Floating {
    pub fn new(speed: f32, rotation_intensity: f32, float_intensity: f32, phase: f32) -> Self {
        Self {
            speed,
            rotation_intensity,
            float_intensity,
            phase,
        }
    }

    /// Same motion with a random phase, so sibling groups do not move in lockstep.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        speed: f32,
        rotation_intensity: f32,
        float_intensity: f32,
    ) -> Self {
        Self::new(
            speed,
            rotation_intensity,
            float_intensity,
            rng.gen::<f32>() * 10_000.0,
        )
    }

    pub fn transform_at(&self, elapsed: f32) -> Affine3A {
        let t = (self.phase + elapsed) / 4.0 * self.speed;
        let (s, c) = t.sin_cos();
        let rotation = Vec3::new(c / 8.0, s / 8.0, s / 20.0) * self.rotation_intensity;
        let lift = s / 10.0 * self.float_intensity;
        placement(Vec3::new(0.0, lift, 0.0), rotation, 1.0)
    }
}
