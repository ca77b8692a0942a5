use rand::Rng;

use super::float::Floating;
use glam::{Affine3A, Vec3};

use super::graph::{placement, Light, Material, Node, Rgb, Shape};
use super::{DecorativeScene, FrameClock};
use crate::section::Section;

const GLOBE_RADIUS: f32 = 2.0;
const CARD_COUNT: usize = 6;
const CARD_SIZE: Vec3 = Vec3::new(0.5, 0.8, 0.1);
const CARD_SPREAD: Vec3 = Vec3::new(12.0, 8.0, 8.0);

const MARKERS: [(Vec3, Rgb); 5] = [
    (Vec3::new(2.0, 1.0, 1.0), Rgb::hex(0xff6b6b)),
    (Vec3::new(-2.0, 0.5, 1.5), Rgb::hex(0x4ecdc4)),
    (Vec3::new(1.0, -1.5, 1.8), Rgb::hex(0xffe66d)),
    (Vec3::new(-1.5, 2.0, 0.5), Rgb::hex(0xff8b94)),
    (Vec3::new(0.0, -2.0, -1.5), Rgb::hex(0x95e1d3)),
];

struct Card {
    position: Vec3,
    float: Floating,
    color: Rgb,
    emissive: Rgb,
}

/// A faint wireframe globe ringed by project markers, with project cards
/// drifting around it.
pub struct ProjectsScene {
    globe_float: Floating,
    globe_spin: f32,
    marker_spin: f32,
    cards: Vec<Card>,
    elapsed: f32,
}

impl ProjectsScene {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let cards = (0..CARD_COUNT)
            .map(|i| {
                let position = Vec3::new(
                    (rng.gen::<f32>() - 0.5) * CARD_SPREAD.x,
                    (rng.gen::<f32>() - 0.5) * CARD_SPREAD.y,
                    (rng.gen::<f32>() - 0.5) * CARD_SPREAD.z,
                );
                let hue = i as f32 * 60.0;
                Card {
                    position,
                    float: Floating::random(rng, 1.0 + i as f32 * 0.2, 1.0, 2.0),
                    color: Rgb::hsl(hue, 0.7, 0.6),
                    emissive: Rgb::hsl(hue, 0.7, 0.2),
                }
            })
            .collect();
        Self {
            globe_float: Floating::random(rng, 1.0, 0.5, 2.0),
            globe_spin: 0.0,
            marker_spin: 0.0,
            cards,
            elapsed: 0.0,
        }
    }

    pub fn card_positions(&self) -> Vec<Vec3> {
        self.cards.iter().map(|c| c.position).collect()
    }
}

impl DecorativeScene for ProjectsScene {
    fn section(&self) -> Section {
        Section::Projects
    }

    fn tick(&mut self, clock: &FrameClock) {
        self.elapsed = clock.elapsed;
        self.globe_spin += 0.005;
        self.marker_spin += 0.003;
    }

    fn nodes(&self) -> Vec<Node> {
        let mut nodes = Vec::with_capacity(1 + MARKERS.len() + self.cards.len());
        let globe_group = self.globe_float.transform_at(self.elapsed);
        nodes.push(Node::new(
            Shape::Sphere {
                radius: GLOBE_RADIUS,
                segments: 32,
            },
            Material::standard(Rgb::hex(0x1a1a2e)).opacity(0.1).wireframe(),
            globe_group * placement(Vec3::ZERO, Vec3::new(0.0, self.globe_spin, 0.0), 1.0),
        ));
        let markers = globe_group * placement(Vec3::ZERO, Vec3::new(0.0, self.marker_spin, 0.0), 1.0);
        for (position, color) in MARKERS {
            nodes.push(Node::new(
                Shape::Cuboid {
                    size: Vec3::splat(0.1),
                },
                Material::standard(color).emissive(color, 0.5),
                markers * Affine3A::from_translation(position),
            ));
        }
        for card in &self.cards {
            nodes.push(Node::new(
                Shape::Cuboid { size: CARD_SIZE },
                Material::standard(card.color).emissive(card.emissive, 1.0),
                card.float.transform_at(self.elapsed) * Affine3A::from_translation(card.position),
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
                color: Rgb::WHITE,
                intensity: 1.0,
            },
            Light::Point {
                position: Vec3::splat(-10.0),
                color: Rgb::hex(0xff6b6b),
                intensity: 0.5,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_cards_within_spread() {
        let mut rng = SmallRng::seed_from_u64(1);
        let scene = ProjectsScene::new(&mut rng);
        let positions = scene.card_positions();
        assert_eq!(positions.len(), CARD_COUNT);
        for p in positions {
            assert!(p.x.abs() <= 6.0);
            assert!(p.y.abs() <= 4.0);
            assert!(p.z.abs() <= 4.0);
        }
    }

    #[test]
    fn test_card_hues_step_by_sixty() {
        let mut rng = SmallRng::seed_from_u64(2);
        let scene = ProjectsScene::new(&mut rng);
        assert_eq!(scene.cards[0].color, Rgb::hsl(0.0, 0.7, 0.6));
        assert_eq!(scene.cards[3].color, Rgb::hsl(180.0, 0.7, 0.6));
        assert_eq!(scene.cards[5].emissive, Rgb::hsl(300.0, 0.7, 0.2));
    }

    #[test]
    fn test_markers_keep_distance_while_spinning() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut scene = ProjectsScene::new(&mut rng);
        for i in 0..500 {
            scene.tick(&FrameClock::new(i as f32 / 60.0, 1.0 / 60.0));
        }
        assert!((scene.globe_spin - 2.5).abs() < 1e-3);
        assert!((scene.marker_spin - 1.5).abs() < 1e-3);
        let nodes = scene.nodes();
        let globe_center = nodes[0].center();
        for (node, (local, _)) in nodes[1..=MARKERS.len()].iter().zip(MARKERS) {
            let d = (node.center() - globe_center).length();
            assert!((d - local.length()).abs() < 1e-3);
        }
    }
}
