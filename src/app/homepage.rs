use leptos::prelude::*;
use leptos_meta::Title;

use super::backdrop::Backdrop;
use super::indicator::ScrollIndicator;
use super::loading::{use_loading_gate, LoadingScreen};
use super::nav::NavBar;
use super::scroll::use_scroll_state;
use super::sections::{
    ContactSection, ExperienceSection, Footer, HeroSection, ProjectsSection, SkillsSection,
};
use crate::content::Portfolio;

#[component]
pub fn HomePage() -> impl IntoView {
    let ready = use_loading_gate();

    view! {
        <Title text="Home" />
        <Show when=move || ready.get() fallback=LoadingScreen>
            <Page />
        </Show>
    }
}

#[component]
fn Page() -> impl IntoView {
    let scroll = use_scroll_state();
    let section = Signal::from(scroll.section);
    let progress = Signal::from(scroll.progress);

    let body = match Portfolio::global() {
        Ok(portfolio) => view! {
            <main class="relative z-10">
                <HeroSection portfolio=portfolio />
                <SkillsSection portfolio=portfolio />
                <ExperienceSection portfolio=portfolio />
                <ProjectsSection portfolio=portfolio />
                <ContactSection portfolio=portfolio />
                <Footer portfolio=portfolio />
            </main>
        }
        .into_any(),
        Err(e) => {
            log::error!("portfolio content unavailable: {e}");
            view! {
                <main class="relative z-10 min-h-screen flex items-center justify-center">
                    <p class="text-gray-400">"Portfolio content is unavailable right now."</p>
                </main>
            }
            .into_any()
        }
    };

    view! {
        <div class="relative">
            <Backdrop section=section />
            <div class="fixed inset-0 z-0 pointer-events-none bg-gradient-to-b from-black/40 via-transparent to-black/60"></div>
            <div class="fixed inset-0 z-0 pointer-events-none bg-gradient-to-r from-cyan-900/10 via-transparent to-purple-900/10"></div>
            <NavBar section=section />
            <ScrollIndicator progress=progress />
            {body}
        </div>
    }
}
