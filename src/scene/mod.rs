//! Decorative background scenes, one per [`Section`].
//!
//! Scenes own their primitives outright and mutate them from [`DecorativeScene::tick`].
//! Nothing here touches the DOM: [`render`] turns a scene into a flat list of 2D
//! draw commands that the browser side replays onto a canvas.

pub mod camera;
mod experience;
pub mod float;
pub mod graph;
mod hero;
pub mod host;
mod projects;
pub mod render;
mod skills;

pub use experience::ExperienceScene;
pub use hero::HeroScene;
pub use host::SceneHost;
pub use projects::ProjectsScene;
pub use skills::SkillsScene;

use rand::Rng;

use crate::section::Section;
use glam::Vec3;
use graph::{Light, Node, Rgb};

/// Time as seen by one animation frame, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameClock {
    /// Seconds since the canvas started animating.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
}

impl FrameClock {
    pub fn new(elapsed: f32, delta: f32) -> Self {
        Self { elapsed, delta }
    }

    /// Builds a clock from `requestAnimationFrame` timings in milliseconds.
    pub fn from_millis(elapsed_ms: f64, delta_ms: f64) -> Self {
        Self::new((elapsed_ms / 1000.0) as f32, (delta_ms / 1000.0).max(0.0) as f32)
    }
}

pub trait DecorativeScene {
    fn section(&self) -> Section;

    /// Advances the scene by one frame.
    fn tick(&mut self, clock: &FrameClock);

    /// Every primitive of the scene in world space, as of the last tick.
    fn nodes(&self) -> Vec<Node>;

    fn lights(&self) -> Vec<Light>;
}

/// Builds a fresh scene for `section`. Random layout is drawn from `rng`, so
/// two mounts of the same section do not look identical.
pub fn build<R: Rng + ?Sized>(section: Section, rng: &mut R) -> Box<dyn DecorativeScene> {
    match section {
        Section::Hero => Box::new(HeroScene::new(rng)),
        Section::Skills => Box::new(SkillsScene::new(rng)),
        Section::Experience => Box::new(ExperienceScene::new(rng)),
        Section::Projects => Box::new(ProjectsScene::new(rng)),
    }
}

/// Lights the canvas carries regardless of which scene is mounted.
pub fn stage_lights() -> [Light; 3] {
    [
        Light::Ambient {
            color: Rgb::WHITE,
            intensity: 0.2,
        },
        Light::Point {
            position: Vec3::splat(10.0),
            color: Rgb::WHITE,
            intensity: 1.0,
        },
        Light::Point {
            position: Vec3::splat(-10.0),
            color: Rgb::hex(0x00ffff),
            intensity: 0.5,
        },
    ]
}
