use std::f32::consts::TAU;

use rand::Rng;

use super::float::Floating;
use glam::{Affine3A, Vec3};

use super::graph::{from_spherical, placement, Light, Material, Node, Rgb, Shape};
use super::{DecorativeScene, FrameClock};
use crate::section::Section;

const PARTICLE_COUNT: usize = 2000;
const PARTICLE_SPREAD: f32 = 50.0;
const STAR_COUNT: usize = 5000;
const STAR_RADIUS: f32 = 100.0;
const STAR_DEPTH: f32 = 50.0;
const STAR_FACTOR: f32 = 4.0;
const SHELL_RADIUS: f32 = 8.0;

const PARTICLE_PALETTE: [(Rgb, Rgb); 3] = [
    (Rgb::hex(0x00ffff), Rgb::hex(0x003333)),
    (Rgb::hex(0xff00ff), Rgb::hex(0x330033)),
    (Rgb::hex(0xffff00), Rgb::hex(0x333300)),
];

#[derive(Debug, Clone, Copy)]
struct Particle {
    position: Vec3,
    scale: f32,
    float: Floating,
}

#[derive(Debug, Clone, Copy)]
struct Star {
    position: Vec3,
    size: f32,
}

/// Particle field inside a slowly turning wireframe shell, with a pulsing
/// light at the origin and a starfield behind it.
pub struct HeroScene {
    particles: Vec<Particle>,
    stars: Vec<Star>,
    shell_rotation: Vec3,
    shell_float: Floating,
    pulse_intensity: f32,
    elapsed: f32,
}

impl HeroScene {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                let position = Vec3::new(
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                );
                let scale = rng.gen::<f32>() * 0.5 + 0.1;
                let speed = 1.0 + rng.gen::<f32>();
                Particle {
                    position,
                    scale,
                    float: Floating::random(rng, speed, 0.5, 1.0),
                }
            })
            .collect();

        // stars fill a shell from radius+depth inwards
        let mut r = STAR_RADIUS + STAR_DEPTH;
        let step = STAR_DEPTH / STAR_COUNT as f32;
        let stars = (0..STAR_COUNT)
            .map(|_| {
                r -= step * rng.gen::<f32>();
                let phi = (1.0 - rng.gen::<f32>() * 2.0).acos();
                let theta = rng.gen::<f32>() * TAU;
                Star {
                    position: from_spherical(r, phi, theta),
                    size: 0.08 * STAR_FACTOR * (0.5 + 0.5 * rng.gen::<f32>()),
                }
            })
            .collect();

        Self {
            particles,
            stars,
            shell_rotation: Vec3::ZERO,
            shell_float: Floating::random(rng, 2.0, 1.0, 2.0),
            pulse_intensity: 1.0,
            elapsed: 0.0,
        }
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn pulse_intensity(&self) -> f32 {
        self.pulse_intensity
    }
}

impl DecorativeScene for HeroScene {
    fn section(&self) -> Section {
        Section::Hero
    }

    fn tick(&mut self, clock: &FrameClock) {
        self.elapsed = clock.elapsed;
        self.shell_rotation.x += clock.delta * 0.1;
        self.shell_rotation.y += clock.delta * 0.05;
        self.pulse_intensity = 1.0 + (clock.elapsed * 2.0).sin() * 0.5;
    }

    fn nodes(&self) -> Vec<Node> {
        let mut nodes = Vec::with_capacity(self.stars.len() + self.particles.len() + 1);

        for star in &self.stars {
            nodes.push(Node::new(
                Shape::Point { size: star.size },
                Material::standard(Rgb::WHITE),
                Affine3A::from_translation(star.position),
            ));
        }

        let shell = self.shell_float.transform_at(self.elapsed)
            * placement(Vec3::ZERO, self.shell_rotation, 1.0);
        nodes.push(Node::new(
            Shape::Sphere {
                radius: SHELL_RADIUS,
                segments: 32,
            },
            Material::standard(Rgb::hex(0x1a1a2e)).opacity(0.3).wireframe(),
            shell,
        ));

        for (i, particle) in self.particles.iter().enumerate() {
            let (color, emissive) = PARTICLE_PALETTE[i % PARTICLE_PALETTE.len()];
            let local = placement(particle.position, Vec3::ZERO, particle.scale);
            nodes.push(Node::new(
                Shape::Sphere {
                    radius: 0.1,
                    segments: 8,
                },
                Material::standard(color).emissive(emissive, 1.0),
                particle.float.transform_at(self.elapsed) * local,
            ));
        }
        nodes
    }

    fn lights(&self) -> Vec<Light> {
        vec![
            Light::Point {
                position: Vec3::ZERO,
                color: Rgb::hex(0x00ffff),
                intensity: self.pulse_intensity,
            },
            Light::Ambient {
                color: Rgb::WHITE,
                intensity: 0.3,
            },
            Light::Directional {
                position: Vec3::new(10.0, 10.0, 5.0),
                color: Rgb::WHITE,
                intensity: 1.0,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_particles_inside_spread() {
        let mut rng = SmallRng::seed_from_u64(1);
        let scene = HeroScene::new(&mut rng);
        assert_eq!(scene.particle_count(), PARTICLE_COUNT);
        for p in &scene.particles {
            let half = PARTICLE_SPREAD / 2.0;
            assert!(p.position.x.abs() <= half);
            assert!(p.position.y.abs() <= half);
            assert!(p.position.z.abs() <= half);
            assert!((0.1..=0.6).contains(&p.scale));
            assert!((1.0..=2.0).contains(&p.float.speed));
        }
    }

    #[test]
    fn test_stars_stay_within_shell() {
        let mut rng = SmallRng::seed_from_u64(2);
        let scene = HeroScene::new(&mut rng);
        assert_eq!(scene.stars.len(), STAR_COUNT);
        for star in &scene.stars {
            let r = star.position.length();
            assert!(r <= STAR_RADIUS + STAR_DEPTH + 0.01);
            assert!(r >= STAR_RADIUS - 0.01);
        }
    }

    #[test]
    fn test_light_pulse() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut scene = HeroScene::new(&mut rng);
        scene.tick(&FrameClock::new(std::f32::consts::FRAC_PI_4, 0.016));
        assert!((scene.pulse_intensity() - 1.5).abs() < 1e-5);
        scene.tick(&FrameClock::new(3.0 * std::f32::consts::FRAC_PI_4, 0.016));
        assert!((scene.pulse_intensity() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_shell_rotation_follows_delta() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut scene = HeroScene::new(&mut rng);
        for i in 0..10 {
            scene.tick(&FrameClock::new(i as f32 * 0.5, 0.5));
        }
        assert!((scene.shell_rotation.x - 0.5).abs() < 1e-5);
        assert!((scene.shell_rotation.y - 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_particle_colors_cycle() {
        let mut rng = SmallRng::seed_from_u64(5);
        let scene = HeroScene::new(&mut rng);
        let nodes = scene.nodes();
        let first_particle = STAR_COUNT + 1;
        assert_eq!(nodes[first_particle].material.color, Rgb::hex(0x00ffff));
        assert_eq!(nodes[first_particle + 1].material.color, Rgb::hex(0xff00ff));
        assert_eq!(nodes[first_particle + 2].material.color, Rgb::hex(0xffff00));
        assert_eq!(nodes[first_particle + 3].material.color, Rgb::hex(0x00ffff));
    }
}
