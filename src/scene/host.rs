use rand::Rng;

use super::{build, DecorativeScene, FrameClock};
use crate::section::Section;

/// Keeps exactly one decorative scene alive: the one for the active section.
///
/// Switching sections drops the old scene and all of its primitives before
/// the new one is built, so revisiting a section draws a fresh random layout.
#[derive(Default)]
pub struct SceneHost {
    scene: Option<Box<dyn DecorativeScene>>,
    mounts: u64,
}

impl SceneHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mounted(&self) -> Option<Section> {
        self.scene.as_ref().map(|s| s.section())
    }

    pub fn scene(&self) -> Option<&dyn DecorativeScene> {
        self.scene.as_deref()
    }

    /// How many scenes have been built over the host's lifetime.
    pub fn mount_count(&self) -> u64 {
        self.mounts
    }

    /// Mounts the scene for `section`. Returns whether a new scene was built.
    pub fn show<R: Rng + ?Sized>(&mut self, section: Section, rng: &mut R) -> bool {
        if self.mounted() == Some(section) {
            return false;
        }
        if let Some(old) = self.scene.take() {
            log::debug!("unmounting {} scene", old.section());
        }
        self.scene = Some(build(section, rng));
        self.mounts += 1;
        log::debug!("mounted {section} scene");
        true
    }

    pub fn tick(&mut self, clock: &FrameClock) {
        if let Some(scene) = self.scene.as_mut() {
            scene.tick(clock);
        }
    }

    pub fn clear(&mut self) {
        self.scene = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::graph::Shape;
    use crate::scene::ProjectsScene;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_empty_host_tick_is_noop() {
        let mut host = SceneHost::new();
        host.tick(&FrameClock::new(1.0, 0.016));
        assert_eq!(host.mounted(), None);
        assert!(host.scene().is_none());
    }

    #[test]
    fn test_show_is_idempotent_for_same_section() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut host = SceneHost::new();
        assert!(host.show(Section::Hero, &mut rng));
        assert!(!host.show(Section::Hero, &mut rng));
        assert_eq!(host.mount_count(), 1);
        assert_eq!(host.mounted(), Some(Section::Hero));
    }

    #[test]
    fn test_switch_replaces_scene_entirely() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut host = SceneHost::new();
        host.show(Section::Hero, &mut rng);
        let hero_nodes = host.scene().map(|s| s.nodes().len()).unwrap_or(0);
        assert!(hero_nodes > 2000);

        assert!(host.show(Section::Skills, &mut rng));
        assert_eq!(host.mounted(), Some(Section::Skills));
        let nodes = host.scene().map(|s| s.nodes()).unwrap_or_default();
        // six orbs, six labels, four lines and nothing left over from the hero field
        assert_eq!(nodes.len(), 16);
        assert!(!nodes.iter().any(|n| matches!(n.shape, Shape::Point { .. })));
    }

    #[test]
    fn test_progress_scenarios_pick_matching_scene() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut host = SceneHost::new();
        for (progress, expected) in [
            (0.0, Section::Hero),
            (0.6, Section::Experience),
            (1.0, Section::Projects),
        ] {
            host.show(Section::from_progress(progress), &mut rng);
            assert_eq!(host.mounted(), Some(expected));
        }
    }

    #[test]
    fn test_remount_regenerates_layout() {
        let mut rng = SmallRng::seed_from_u64(4);
        let first = ProjectsScene::new(&mut rng).card_positions();
        let second = ProjectsScene::new(&mut rng).card_positions();
        assert_ne!(first, second);

        let mut host = SceneHost::new();
        host.show(Section::Projects, &mut rng);
        host.show(Section::Hero, &mut rng);
        host.show(Section::Projects, &mut rng);
        assert_eq!(host.mount_count(), 3);
    }

    #[test]
    fn test_clear_unmounts() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut host = SceneHost::new();
        host.show(Section::Experience, &mut rng);
        host.clear();
        assert_eq!(host.mounted(), None);
        assert!(host.show(Section::Experience, &mut rng));
    }
}
