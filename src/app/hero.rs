use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::{
    data::{next_role_index, PERSONAL_INFO},
    motion::Direction,
};

use super::{
    effects::{Magnetic, Parallax},
    header::go_to_section,
    hooks::use_tracked_section,
};

/// Milliseconds each role stays on screen.
const ROLE_INTERVAL: u64 = 3000;

#[component]
pub fn Hero() -> impl IntoView {
    let node_ref = use_tracked_section("hero");
    let (role, set_role) = signal(0usize);
    let roles = PERSONAL_INFO.roles;

    let _ = use_interval_fn(
        move || set_role.update(|i| *i = next_role_index(*i, roles.len())),
        ROLE_INTERVAL,
    );

    view! {
        <section
            id="hero"
            node_ref=node_ref
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <Parallax
                speed=0.3
                class="absolute -top-20 -left-20 pointer-events-none"
            >
                <div class="w-72 h-72 rounded-full bg-purple-400/30 blur-3xl"></div>
            </Parallax>
            <Parallax
                speed=0.2
                direction=Direction::Down
                class="absolute bottom-0 right-0 pointer-events-none"
            >
                <div class="w-96 h-96 rounded-full bg-pink-400/30 blur-3xl"></div>
            </Parallax>

            <div class="relative z-10 text-center px-4 max-w-4xl">
                <p class="text-xl text-gray-600 dark:text-gray-400 mb-4">
                    {PERSONAL_INFO.greeting}
                </p>
                <h1 class="text-5xl md:text-7xl font-bold mb-6 text-gradient">
                    {PERSONAL_INFO.name}
                </h1>
                <p class="text-2xl md:text-3xl font-semibold text-gray-800 dark:text-gray-200 h-12 mb-6">
                    {move || roles.get(role()).copied().unwrap_or(PERSONAL_INFO.title)}
                </p>
                <p class="text-lg text-gray-600 dark:text-gray-400 mb-10 max-w-2xl mx-auto">
                    {PERSONAL_INFO.bio}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <Magnetic>
                        <button
                            class="px-8 py-3 rounded-full text-white font-medium bg-gradient-to-r from-purple-600 to-pink-600 shadow-lg"
                            on:click=move |_| go_to_section("projects")
                        >
                            "View My Work"
                        </button>
                    </Magnetic>
                    <Magnetic>
                        <button
                            class="px-8 py-3 rounded-full font-medium border-2 border-purple-600 text-purple-600 dark:text-purple-400"
                            on:click=move |_| go_to_section("contact")
                        >
                            "Get In Touch"
                        </button>
                    </Magnetic>
                </div>
                <div class="flex gap-6 justify-center mt-10 text-gray-600 dark:text-gray-400">
                    <a href=PERSONAL_INFO.github target="_blank" rel="noopener noreferrer">
                        "GitHub"
                    </a>
                    <a href=PERSONAL_INFO.linkedin target="_blank" rel="noopener noreferrer">
                        "LinkedIn"
                    </a>
                    <a href=format!("mailto:{}", PERSONAL_INFO.email)>"Email"</a>
                </div>
            </div>
        </section>
    }
}
