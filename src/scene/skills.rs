use rand::Rng;

use super::float::Floating;
use glam::{Affine3A, Vec3};

use super::graph::{placement, Light, Material, Node, Rgb, Shape};
use super::{DecorativeScene, FrameClock};
use crate::section::Section;

struct OrbLayout {
    position: Vec3,
    color: Rgb,
    label: &'static str,
    size: f32,
}

static ORBS: [OrbLayout; 6] = [
    OrbLayout {
        position: Vec3::new(-4.0, 2.0, 0.0),
        color: Rgb::hex(0x61dafb),
        label: "React",
        size: 1.2,
    },
    OrbLayout {
        position: Vec3::new(4.0, 2.0, 0.0),
        color: Rgb::hex(0x68d391),
        label: "Node.js",
        size: 1.1,
    },
    OrbLayout {
        position: Vec3::new(0.0, 4.0, 0.0),
        color: Rgb::hex(0xf56565),
        label: "MongoDB",
        size: 1.0,
    },
    OrbLayout {
        position: Vec3::new(-2.0, -2.0, 2.0),
        color: Rgb::hex(0x9f7aea),
        label: "TypeScript",
        size: 0.9,
    },
    OrbLayout {
        position: Vec3::new(2.0, -2.0, 2.0),
        color: Rgb::hex(0xed8936),
        label: "Express",
        size: 0.8,
    },
    OrbLayout {
        position: Vec3::new(0.0, 0.0, -3.0),
        color: Rgb::hex(0x38b2ac),
        label: "CSS",
        size: 0.7,
    },
];

const CONNECTIONS: [(Vec3, Vec3); 4] = [
    (Vec3::new(-4.0, 2.0, 0.0), Vec3::new(4.0, 2.0, 0.0)),
    (Vec3::new(0.0, 4.0, 0.0), Vec3::new(0.0, 0.0, -3.0)),
    (Vec3::new(-4.0, 2.0, 0.0), Vec3::new(0.0, 4.0, 0.0)),
    (Vec3::new(4.0, 2.0, 0.0), Vec3::new(0.0, 4.0, 0.0)),
];

const LINE_COLOR: Rgb = Rgb::hex(0x00ffff);

struct Orb {
    layout: &'static OrbLayout,
    float: Floating,
    /// Sphere offset inside its group; drifts a little every frame.
    offset: Vec3,
    spin: f32,
}

/// Labelled technology orbs joined by pulsing connection lines.
pub struct SkillsScene {
    orbs: Vec<Orb>,
    line_opacity: f32,
    elapsed: f32,
}

impl SkillsScene {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let orbs = ORBS
            .iter()
            .map(|layout| Orb {
                layout,
                float: Floating::random(rng, 2.0, 1.0, 0.5),
                offset: Vec3::ZERO,
                spin: 0.0,
            })
            .collect();
        Self {
            orbs,
            line_opacity: 0.5,
            elapsed: 0.0,
        }
    }

    pub fn line_opacity(&self) -> f32 {
        self.line_opacity
    }
}

impl DecorativeScene for SkillsScene {
    fn section(&self) -> Section {
        Section::Skills
    }

    fn tick(&mut self, clock: &FrameClock) {
        self.elapsed = clock.elapsed;
        for orb in &mut self.orbs {
            orb.spin += 0.005;
            orb.offset.y += (clock.elapsed + orb.layout.position.x).sin() * 0.01;
        }
        self.line_opacity = 0.3 + clock.elapsed.sin() * 0.2;
    }

    fn nodes(&self) -> Vec<Node> {
        let mut nodes = Vec::with_capacity(self.orbs.len() * 2 + CONNECTIONS.len());
        for orb in &self.orbs {
            let group = orb.float.transform_at(self.elapsed)
                * Affine3A::from_translation(orb.layout.position);
            let material = Material::standard(orb.layout.color)
                .emissive(orb.layout.color, 0.2)
                .opacity(0.8);
            nodes.push(Node::new(
                Shape::Sphere {
                    radius: orb.layout.size,
                    segments: 32,
                },
                material,
                group * placement(orb.offset, Vec3::new(0.0, orb.spin, 0.0), 1.0),
            ));
            nodes.push(Node::new(
                Shape::Label {
                    text: orb.layout.label,
                    size: 0.3,
                },
                Material::standard(Rgb::WHITE),
                group * Affine3A::from_translation(Vec3::new(0.0, -orb.layout.size - 0.5, 0.0)),
            ));
        }
        for (from, to) in CONNECTIONS {
            nodes.push(Node::new(
                Shape::Line { from, to },
                Material::standard(LINE_COLOR).opacity(self.line_opacity),
                Affine3A::IDENTITY,
            ));
        }
        nodes
    }

    fn lights(&self) -> Vec<Light> {
        vec![
            Light::Ambient {
                color: Rgb::WHITE,
                intensity: 0.4,
            },
            Light::Point {
                position: Vec3::splat(10.0),
                color: Rgb::hex(0x00ffff),
                intensity: 1.0,
            },
        ]
    }
}
