use std::time::Duration;

use leptos::prelude::*;
use leptos_use::utils::Pausable;
use leptos_use::{use_interval_fn, use_timeout_fn, UseTimeoutFnReturn};

use crate::loading::{LoadingGate, LoadingProgress, LOADING_DURATION_MS, PROGRESS_TICK_MS};

fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Polls the gate against the clock. A timer that fired early re-arms for
/// whatever is left.
fn settle(gate: StoredValue<LoadingGate>, set_ready: WriteSignal<bool>) {
    let now = now_ms();
    let Some((fired, remaining)) = gate.try_update_value(|g| (g.poll(now), g.remaining_ms(now)))
    else {
        return;
    };
    if fired {
        log::debug!("loading gate open");
        set_ready.set(true);
    } else if remaining > 0.0 {
        set_timeout(
            move || settle(gate, set_ready),
            Duration::from_millis(remaining.ceil() as u64),
        );
    }
}

/// Starts the fixed loading timer and returns whether the page may show.
///
/// The timer is cleared if the owning component is torn down first, and the
/// gate is cancelled with it.
pub fn use_loading_gate() -> ReadSignal<bool> {
    let (ready, set_ready) = signal(false);
    let gate = StoredValue::new(LoadingGate::new(now_ms()));

    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |_: ()| settle(gate, set_ready),
        LOADING_DURATION_MS,
    );
    start(());

    on_cleanup(move || {
        stop();
        gate.try_update_value(|g| g.cancel());
    });

    ready
}

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let (progress, set_progress) = signal(LoadingProgress::default());

    let Pausable { pause, .. } = use_interval_fn(
        move || {
            set_progress.update(|p| {
                p.advance();
            });
        },
        PROGRESS_TICK_MS,
    );
    Effect::new(move |_| {
        if progress.get().is_complete() {
            pause();
        }
    });

    view! {
        <div class="fixed inset-0 bg-black flex items-center justify-center z-50 loading-fade">
            <div class="text-center">
                <div class="w-32 h-32 mb-8 mx-auto relative loading-pop">
                    <div class="absolute inset-0 border-4 border-cyan-500/30 rounded-full"></div>
                    <div class="absolute inset-0 border-4 border-transparent border-t-cyan-500 rounded-full spin-slow"></div>
                    <div class="absolute inset-4 flex items-center justify-center">
                        <span class="text-2xl">"🚀"</span>
                    </div>
                </div>
                <h2 class="text-3xl font-bold text-white mb-4 rise-in">"Initializing Portfolio"</h2>
                <div class="w-64 h-2 bg-gray-800 rounded-full mx-auto mb-4 overflow-hidden">
                    <div
                        class="h-full bg-gradient-to-r from-cyan-500 to-purple-500 transition-all duration-100"
                        style=move || format!("width: {}%", progress.get().percent())
                    ></div>
                </div>
                <p class="text-gray-400 fade-in-late">{move || progress.get().percent()} "% Complete"</p>
            </div>
        </div>
    }
}
