use std::f32::consts::PI;

use rand::Rng;

use super::float::Floating;
use glam::{Affine3A, Vec3};

use super::graph::{placement, Light, Material, Node, Rgb, Shape};
use super::{DecorativeScene, FrameClock};
use crate::section::Section;

const BARS_PER_BLOCK: usize = 8;
const BAR_SIZE: Vec3 = Vec3::new(3.0, 0.2, 0.1);
const FLOW_COUNT: usize = 20;
const FLOW_RADIUS: f32 = 3.0;
const CODE_GREEN: Rgb = Rgb::hex(0x00ff41);
const CODE_BLUE: Rgb = Rgb::hex(0x0066cc);
const FLOW_RED: Rgb = Rgb::hex(0xff6b6b);

struct CodeBlock {
    position: Vec3,
    rotation: Vec3,
    float: Floating,
}

/// Two spinning stacks of "code" bars with a ring of cubes orbiting between
/// them and a floating caption.
pub struct ExperienceScene {
    blocks: [CodeBlock; 2],
    flow: Vec<Vec3>,
    caption_float: Floating,
    elapsed: f32,
}

impl ExperienceScene {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let blocks = [
            CodeBlock {
                position: Vec3::new(-3.0, 0.0, 0.0),
                rotation: Vec3::ZERO,
                float: Floating::random(rng, 1.5, 0.5, 1.0),
            },
            CodeBlock {
                position: Vec3::new(3.0, 0.0, 0.0),
                rotation: Vec3::new(0.0, PI, 0.0),
                float: Floating::random(rng, 1.5, 0.5, 1.0),
            },
        ];
        Self {
            blocks,
            flow: vec![Vec3::ZERO; FLOW_COUNT],
            caption_float: Floating::random(rng, 3.0, 2.0, 1.0),
            elapsed: 0.0,
        }
    }
}

fn bar_material(index: usize) -> Material {
    let (color, emissive) = if index % 2 == 0 {
        (CODE_GREEN, Rgb::hex(0x003311))
    } else {
        (CODE_BLUE, Rgb::hex(0x001133))
    };
    Material::standard(color).emissive(emissive, 1.0).opacity(0.8)
}

impl DecorativeScene for ExperienceScene {
    fn section(&self) -> Section {
        Section::Experience
    }

    fn tick(&mut self, clock: &FrameClock) {
        self.elapsed = clock.elapsed;
        for block in &mut self.blocks {
            block.rotation.y += 0.005;
        }
        for (i, p) in self.flow.iter_mut().enumerate() {
            let t = clock.elapsed + i as f32;
            p.x = t.sin() * FLOW_RADIUS;
            p.z = t.cos() * FLOW_RADIUS;
        }
    }

    fn nodes(&self) -> Vec<Node> {
        let mut nodes = Vec::with_capacity(BARS_PER_BLOCK * 2 + FLOW_COUNT + 1);
        for block in &self.blocks {
            let group = block.float.transform_at(self.elapsed)
                * placement(block.position, block.rotation, 1.0);
            for i in 0..BARS_PER_BLOCK {
                let local = Affine3A::from_translation(Vec3::new(0.0, i as f32 * 0.3 - 1.2, 0.0));
                nodes.push(Node::new(
                    Shape::Cuboid { size: BAR_SIZE },
                    bar_material(i),
                    group * local,
                ));
            }
        }
        for p in &self.flow {
            nodes.push(Node::new(
                Shape::Cuboid {
                    size: Vec3::splat(0.1),
                },
                Material::standard(FLOW_RED).emissive(Rgb::hex(0x330000), 1.0),
                Affine3A::from_translation(*p),
            ));
        }
        nodes.push(Node::new(
            Shape::Label {
                text: "Full Stack Development",
                size: 0.5,
            },
            Material::standard(CODE_GREEN),
            self.caption_float.transform_at(self.elapsed)
                * Affine3A::from_translation(Vec3::new(0.0, 3.0, 0.0)),
        ));
        nodes
    }

    fn lights(&self) -> Vec<Light> {
        vec![
            Light::Ambient {
                color: Rgb::WHITE,
                intensity: 0.3,
            },
            Light::Point {
                position: Vec3::splat(5.0),
                color: CODE_GREEN,
                intensity: 1.0,
            },
            Light::Point {
                position: Vec3::splat(-5.0),
                color: FLOW_RED,
                intensity: 0.5,
            },
        ]
    }
}
