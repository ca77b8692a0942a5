use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::content::{Job, Portfolio, Project, SkillCategory};
use crate::nav::scroll_to_section;
use crate::reveal::{stagger_delay, Reveal, GROUP_STEP_MS, ITEM_STEP_MS};
use crate::section::Section;

use super::nav::DocumentScroller;

const BUILD_TIME: &str = env!("BUILD_TIME");

/// Direction a block slides in from when it is first seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Entrance {
    #[default]
    Up,
    Left,
    Right,
    Fade,
}

impl Entrance {
    fn class(self) -> &'static str {
        match self {
            Entrance::Up => "reveal reveal-up",
            Entrance::Left => "reveal reveal-left",
            Entrance::Right => "reveal reveal-right",
            Entrance::Fade => "reveal reveal-fade",
        }
    }
}

/// Hides its children until the wrapper first scrolls into view, then plays
/// the entrance once.
#[component]
fn RevealOnView(
    #[prop(optional)] entrance: Entrance,
    /// Position in a staggered list.
    #[prop(optional)]
    order: usize,
    /// Delay between neighbours in that list.
    #[prop(default = GROUP_STEP_MS)]
    step_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(node);
    let reveal = Memo::new(move |prev: Option<&Reveal>| {
        prev.copied().unwrap_or_default().observe(visible.get())
    });
    let base = format!("{} {}", entrance.class(), class);

    view! {
        <div
            node_ref=node
            class=move || {
                if reveal.get().is_shown() { format!("{base} reveal-shown") } else { base.clone() }
            }
            style=format!("transition-delay: {}", stagger_delay(order, step_ms))
        >
            {children()}
        </div>
    }
}

#[component]
fn SectionHeading(title: &'static str, #[prop(optional)] accent: &'static str) -> impl IntoView {
    view! {
        <RevealOnView class="text-center mb-16">
            <h2 class="text-5xl md:text-6xl font-bold mb-6">
                <span class="bg-gradient-to-r from-cyan-400 to-purple-600 bg-clip-text text-transparent">
                    {title}
                </span>
                {(!accent.is_empty()).then(|| view! { " " <span class="text-white">{accent}</span> })}
            </h2>
            <div class="w-24 h-1 bg-gradient-to-r from-cyan-500 to-purple-500 mx-auto"></div>
        </RevealOnView>
    }
}

#[component]
pub fn HeroSection(portfolio: &'static Portfolio) -> impl IntoView {
    let hero = &portfolio.hero;
    view! {
        <section
            id=Section::Hero.anchor_id()
            class="min-h-screen flex items-center justify-center relative"
        >
            <div class="text-center z-10 px-4">
                <RevealOnView entrance=Entrance::Up>
                    <h1 class="text-6xl md:text-8xl font-bold mb-6 hero-title">{hero.name.clone()}</h1>
                </RevealOnView>
                <RevealOnView entrance=Entrance::Up order=1>
                    <p class="text-xl md:text-2xl text-gray-300 mb-12 max-w-3xl mx-auto">
                        {hero.tagline.clone()}
                    </p>
                </RevealOnView>
                <RevealOnView entrance=Entrance::Fade order=2>
                    <div class="flex flex-col sm:flex-row gap-6 justify-center">
                        <button
                            class="px-8 py-4 bg-gradient-to-r from-cyan-500 to-purple-600 rounded-full text-white font-semibold hover:scale-105 transition-transform"
                            on:click=move |_| {
                                scroll_to_section(&DocumentScroller, Section::Skills);
                            }
                        >
                            {hero.primary_cta.clone()}
                        </button>
                        <button class="px-8 py-4 border-2 border-cyan-500 rounded-full text-cyan-400 font-semibold hover:bg-cyan-500 hover:text-black transition-colors">
                            {hero.secondary_cta.clone()}
                        </button>
                    </div>
                </RevealOnView>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(category: &'static SkillCategory, order: usize) -> impl IntoView {
    let glow = format!(
        "absolute inset-0 bg-gradient-to-r {} opacity-0 group-hover:opacity-10 rounded-2xl transition-opacity duration-300",
        category.accent
    );
    let bar = format!("w-2 h-2 bg-gradient-to-r {} rounded-full mr-3", category.accent);
    view! {
        <RevealOnView entrance=Entrance::Up order=order class="group relative">
            <div class="relative bg-gray-900/50 backdrop-blur-sm border border-gray-700 rounded-2xl p-8 h-full hover:border-cyan-500 transition-colors duration-300">
                <div class=glow></div>
                <h3 class="text-2xl font-bold text-white mb-6">{category.title.clone()}</h3>
                <ul class="space-y-3">
                    {category
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            let bar = bar.clone();
                            view! {
                                <li>
                                    <RevealOnView
                                        entrance=Entrance::Left
                                        order=i
                                        step_ms=ITEM_STEP_MS
                                        class="flex items-center text-gray-300"
                                    >
                                        <span class=bar></span>
                                        {skill.clone()}
                                    </RevealOnView>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </RevealOnView>
    }
}

#[component]
pub fn SkillsSection(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <section id=Section::Skills.anchor_id() class="min-h-screen py-20 px-4 relative">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title="Technical" accent="Skills" />
                <div class="grid md:grid-cols-3 gap-8">
                    {portfolio
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(order, category)| view! { <SkillCard category=category order=order /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(job: &'static Job, order: usize) -> impl IntoView {
    // entries alternate sides of the spine
    let left = order % 2 == 0;
    let (entrance, row, text) = if left {
        (Entrance::Left, "md:flex-row", "md:text-right md:pr-12")
    } else {
        (Entrance::Right, "md:flex-row-reverse", "md:text-left md:pl-12")
    };
    view! {
        <RevealOnView entrance=entrance order=order class=format!("relative flex flex-col {row} items-center mb-16")>
            <div class=format!("w-full md:w-1/2 {text}")>
                <div class="bg-gray-900/50 backdrop-blur-sm border border-gray-700 rounded-2xl p-8 hover:border-cyan-500 transition-colors">
                    <span class="text-cyan-400 text-sm font-semibold">{job.period.clone()}</span>
                    <h3 class="text-2xl font-bold text-white mt-2">{job.title.clone()}</h3>
                    <p class="text-purple-400 mb-4">{job.company.clone()}</p>
                    <p class="text-gray-300 mb-4">{job.description.clone()}</p>
                    <ul class="space-y-2 text-gray-400 text-sm">
                        {job
                            .achievements
                            .iter()
                            .map(|a| view! { <li>"▹ " {a.clone()}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            <div class="hidden md:block absolute left-1/2 -translate-x-1/2 w-4 h-4 bg-cyan-500 rounded-full border-4 border-black"></div>
            <div class="hidden md:block w-1/2"></div>
        </RevealOnView>
    }
}

#[component]
pub fn ExperienceSection(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <section id=Section::Experience.anchor_id() class="min-h-screen py-20 px-4 relative">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title="Professional" accent="Experience" />
                <div class="relative">
                    <div class="hidden md:block absolute left-1/2 -translate-x-1/2 w-1 h-full bg-gradient-to-b from-cyan-500 to-purple-500"></div>
                    {portfolio
                        .experience
                        .iter()
                        .enumerate()
                        .map(|(order, job)| view! { <TimelineEntry job=job order=order /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, order: usize) -> impl IntoView {
    view! {
        <RevealOnView entrance=Entrance::Up order=order step_ms=ITEM_STEP_MS class="group">
            <div class="bg-gray-900/50 backdrop-blur-sm border border-gray-700 rounded-2xl p-6 h-full hover:border-cyan-500 hover:-translate-y-2 transition-all duration-300">
                <h3 class="text-xl font-bold text-white mb-3 group-hover:text-cyan-400 transition-colors">
                    {project.title.clone()}
                </h3>
                <p class="text-gray-400 mb-4">{project.summary.clone()}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-3 py-1 bg-cyan-500/10 text-cyan-400 rounded-full text-xs">
                                    {tag.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                {project
                    .link
                    .clone()
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-block mt-4 text-sm text-purple-400 hover:text-purple-300"
                            >
                                "View project →"
                            </a>
                        }
                    })}
            </div>
        </RevealOnView>
    }
}

#[component]
pub fn ProjectsSection(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <section id=Section::Projects.anchor_id() class="min-h-screen py-20 px-4 relative">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title="Featured" accent="Projects" />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {portfolio
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(order, project)| view! { <ProjectCard project=project order=order /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Not a nav target; it sits inside the Projects scroll bucket.
#[component]
pub fn ContactSection(portfolio: &'static Portfolio) -> impl IntoView {
    let contact = &portfolio.contact;
    view! {
        <section id="contact" class="py-20 px-4 relative">
            <div class="max-w-4xl mx-auto text-center">
                <RevealOnView entrance=Entrance::Up>
                    <h2 class="text-5xl md:text-6xl font-bold mb-6">
                        {contact.heading.clone()} " "
                        <span class="bg-gradient-to-r from-cyan-400 to-purple-600 bg-clip-text text-transparent">
                            {contact.highlight.clone()}
                        </span>
                    </h2>
                    <p class="text-xl text-gray-300 mb-12">{contact.blurb.clone()}</p>
                </RevealOnView>
                <RevealOnView entrance=Entrance::Fade order=1>
                    <a
                        href=portfolio.mailto()
                        class="inline-block px-12 py-4 bg-gradient-to-r from-cyan-500 to-purple-600 rounded-full text-white text-lg font-semibold hover:scale-105 transition-transform"
                    >
                        "Get In Touch"
                    </a>
                    <div class="flex justify-center gap-6 mt-12">
                        {contact
                            .socials
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href.clone()
                                        aria-label=social.label.clone()
                                        class="w-14 h-14 bg-gray-900 border border-gray-700 rounded-full flex items-center justify-center text-2xl hover:border-cyan-500 hover:scale-110 transition-all"
                                    >
                                        {social.icon.clone()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </RevealOnView>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-gray-800 text-center text-gray-500 text-sm relative">
            <p>{format!("© {}", portfolio.hero.name)}</p>
            <p class="mt-1 text-xs text-gray-600">"Built " {BUILD_TIME}</p>
        </footer>
    }
}
