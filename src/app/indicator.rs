use leptos::prelude::*;

use crate::section::indicator_fill;

#[component]
pub fn ScrollIndicator(#[prop(into)] progress: Signal<f64>) -> impl IntoView {
    view! {
        <div class="fixed right-8 top-1/2 -translate-y-1/2 z-50" aria-hidden="true">
            <div class="w-1 h-32 bg-gray-800 rounded-full relative overflow-hidden">
                <div
                    class="w-full bg-gradient-to-b from-cyan-500 to-purple-500 rounded-full"
                    style=move || format!("height: {:.1}%", indicator_fill(progress.get()))
                ></div>
            </div>
            <div class="mt-4 text-center">
                <div class="w-6 h-6 border-2 border-cyan-500 rounded-full flex items-center justify-center">
                    <div class="w-1 h-2 bg-cyan-500 rounded-full nudge"></div>
                </div>
            </div>
        </div>
    }
}
