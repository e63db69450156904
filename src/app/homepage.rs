use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::About, achievements::Achievements, contact::Contact, education::Education,
    experience::Experience, hero::Hero, projects::Projects, skills::Skills,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <Experience />
        <Projects />
        <Skills />
        <About />
        <Achievements />
        <Education />
        <Contact />
    }
}

/// Heading shared by every section below the hero.
#[component]
pub fn SectionTitle(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold mb-4 text-gray-900 dark:text-white">
                <span class="text-gradient">{title}</span>
            </h2>
            <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}

/// Small rounded label used for technologies.
#[component]
pub fn Tag(text: &'static str) -> impl IntoView {
    view! {
        <span class="px-3 py-1 text-xs font-medium rounded-full bg-purple-100 text-purple-700 dark:bg-purple-900/40 dark:text-purple-300">
            {text}
        </span>
    }
}
