/// Entrance state of a content block: hidden until it is first seen, then
/// shown for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Hidden,
    Shown,
}

impl Reveal {
    /// Folds a visibility observation into the state.
    pub fn observe(self, visible: bool) -> Self {
        match (self, visible) {
            (Reveal::Hidden, true) => Reveal::Shown,
            (state, _) => state,
        }
    }

    pub fn is_shown(self) -> bool {
        self == Reveal::Shown
    }
}

/// Stagger between neighbouring cards or list items.
pub const ITEM_STEP_MS: u32 = 100;
/// Stagger between larger groups: skill categories and timeline entries.
pub const GROUP_STEP_MS: u32 = 200;

/// CSS `transition-delay` for the `index`th item of a staggered list.
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("{}ms", index as u32 * step_ms)
}
