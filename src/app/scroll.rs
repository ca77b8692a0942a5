use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::section::{scroll_progress, Section};

/// Scroll progress of the page and the bucket derived from it.
#[derive(Debug, Clone, Copy)]
pub struct ScrollState {
    pub progress: Memo<f64>,
    pub section: Memo<Section>,
}

/// Document height and viewport height, in CSS pixels.
fn page_metrics() -> (f64, f64) {
    #[cfg(feature = "hydrate")]
    {
        let scroll_height = document()
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default();
        let viewport_height = window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        (scroll_height, viewport_height)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (0.0, 0.0)
    }
}

pub fn use_scroll_state() -> ScrollState {
    let (_, scroll_y) = use_window_scroll();
    let progress = Memo::new(move |_| {
        let y = scroll_y.get();
        let (scroll_height, viewport_height) = page_metrics();
        scroll_progress(y, scroll_height, viewport_height)
    });
    // only notifies when the bucket actually changes
    let section = Memo::new(move |_| Section::from_progress(progress.get()));
    ScrollState { progress, section }
}
