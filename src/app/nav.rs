use leptos::prelude::*;

use crate::nav::{nav_entries, scroll_to_section, ScrollTarget, NAV_BAR_CLASS};
use crate::section::Section;

const ACTIVE_CLASS: &str = "px-4 py-2 rounded-full text-sm font-medium transition-all duration-300 bg-cyan-500 text-white shadow-lg shadow-cyan-500/25";
const IDLE_CLASS: &str = "px-4 py-2 rounded-full text-sm font-medium transition-all duration-300 text-gray-400 hover:text-white hover:bg-white/10";

/// Scrolls the live document.
pub(super) struct DocumentScroller;

impl ScrollTarget for DocumentScroller {
    #[cfg(feature = "hydrate")]
    fn scroll_to_anchor(&self, anchor_id: &str) -> bool {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let Some(el) = document().get_element_by_id(anchor_id) else {
            return false;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }

    #[cfg(not(feature = "hydrate"))]
    fn scroll_to_anchor(&self, _anchor_id: &str) -> bool {
        false
    }
}

#[component]
pub fn NavBar(#[prop(into)] section: Signal<Section>) -> impl IntoView {
    view! {
        <nav class=NAV_BAR_CLASS>
            <div class="bg-black/20 backdrop-blur-md border border-gray-700/50 rounded-full px-6 py-3">
                <ul class="flex space-x-6">
                    {move || {
                        nav_entries(section.get())
                            .into_iter()
                            .map(|entry| {
                                let target = entry.section;
                                view! {
                                    <li>
                                        <button
                                            class=if entry.active { ACTIVE_CLASS } else { IDLE_CLASS }
                                            aria-current=if entry.active { Some("true") } else { None }
                                            on:click=move |_| {
                                                scroll_to_section(&DocumentScroller, target);
                                            }
                                        >
                                            {target.label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        </nav>
    }
}
