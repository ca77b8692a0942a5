#[cfg(feature = "hydrate")]
mod canvas;

use leptos::{html, prelude::*};

use crate::section::Section;

/// Full-viewport canvas behind the page. It keeps exactly one decorative
/// scene mounted, chosen by the active section, and redraws it every frame.
#[component]
pub fn Backdrop(#[prop(into)] section: Signal<Section>) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

        let stage = StoredValue::new_local(canvas::Stage::new());
        let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
            // not attached yet, or already gone
            let Some(el) = canvas_ref.get_untracked() else {
                return;
            };
            let section = section.get_untracked();
            stage.try_update_value(|s| s.frame(&el, section, args.timestamp, args.delta));
        });

        on_cleanup(move || {
            stage.try_update_value(|s| s.unmount());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = section;

    view! {
        <div class="fixed inset-0 z-0" aria-hidden="true">
            <canvas node_ref=canvas_ref class="w-full h-full block"></canvas>
        </div>
    }
}
