use leptos::{either::Either, ev, prelude::*};

use crate::{data::PERSONAL_INFO, sections::NAV_ITEMS};

use super::{
    effects::Magnetic,
    hooks::{scroll_to_section, use_active_section, use_theme},
    search::SearchBar,
};

/// Scroll to `id` on the home page. From any other route this loads the
/// home page at that anchor instead.
pub fn go_to_section(id: &str) {
    let location = window().location();
    if location.pathname().is_ok_and(|p| p == "/") {
        scroll_to_section(id);
    } else if let Err(e) = location.set_href(&format!("/#{id}")) {
        log::error!("failed to navigate to section {id}: {e:?}");
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let active = use_active_section();
    let (menu_open, set_menu_open) = signal(false);

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && menu_open.get_untracked() {
            set_menu_open(false);
        }
    });
    on_cleanup(move || handle.remove());

    let nav_to = move |id: &'static str| {
        set_menu_open(false);
        go_to_section(id);
    };

    let nav_links = move || {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let id = item.id;
                view! {
                    <button
                        class="px-3 py-2 text-sm font-medium rounded-lg transition-colors"
                        class=(
                            ["text-purple-600", "dark:text-purple-400", "bg-purple-50", "dark:bg-gray-800"],
                            move || active.is(id),
                        )
                        class=(
                            ["text-gray-700", "dark:text-gray-300", "hover:text-purple-600"],
                            move || !active.is(id),
                        )
                        on:click=move |_| nav_to(id)
                    >
                        {item.label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-40 glass shadow-sm">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 h-20 flex items-center justify-between gap-4">
                <button
                    class="text-2xl font-bold text-gradient"
                    aria-label="Back to top"
                    on:click=move |_| nav_to("hero")
                >
                    {PERSONAL_INFO.initials}
                </button>
                <nav class="hidden lg:flex items-center gap-1">{nav_links}</nav>
                <div class="flex items-center gap-2">
                    <SearchBar />
                    <ThemeToggle />
                    <div class="hidden md:block">
                        <Magnetic>
                            <button
                                class="px-5 py-2 rounded-full text-white bg-gradient-to-r from-purple-600 to-pink-600 shadow hover:shadow-lg"
                                on:click=move |_| nav_to("contact")
                            >
                                "Hire Me"
                            </button>
                        </Magnetic>
                    </div>
                    <button
                        class="lg:hidden p-2 rounded-lg text-gray-700 dark:text-gray-300"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=menu_open>
                <nav class="lg:hidden flex flex-col px-4 pb-4 gap-1 bg-white dark:bg-gray-900">
                    {nav_links}
                </nav>
            </Show>
        </header>
        // keeps content clear of the fixed header
        <div class="h-20"></div>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            class="p-2 rounded-lg bg-gray-100 dark:bg-gray-800 text-gray-700 dark:text-yellow-300"
            aria-label="Toggle theme"
            on:click=move |_| theme.toggle()
        >
            {move || {
                if theme.theme.get().is_dark() {
                    Either::Left(view! { <span>"☀"</span> })
                } else {
                    Either::Right(view! { <span>"☾"</span> })
                }
            }}
        </button>
    }
}
