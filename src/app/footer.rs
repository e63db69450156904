use chrono::{DateTime, Datelike};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::{data::PERSONAL_INFO, sections::NAV_ITEMS};

use super::header::go_to_section;

/// (copyright year, "YYYY-MM-DD") of the build.
fn build_stamp() -> (i32, String) {
    let raw = env!("BUILD_TIME");
    match DateTime::parse_from_rfc3339(raw) {
        Ok(t) => (t.year(), t.format("%Y-%m-%d").to_string()),
        Err(_) => (2025, raw.to_string()),
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let (year, built) = build_stamp();

    view! {
        <footer class="border-t border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900">
            <div class="mx-auto max-w-7xl px-4 py-12 grid gap-8 md:grid-cols-3 text-gray-600 dark:text-gray-400">
                <div>
                    <p class="text-2xl font-bold text-gradient mb-2">{PERSONAL_INFO.name}</p>
                    <p class="text-sm">{PERSONAL_INFO.title}</p>
                </div>
                <nav class="grid grid-cols-2 gap-2 text-sm">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let id = item.id;
                            view! {
                                <button class="text-left hover:text-purple-600" on:click=move |_| go_to_section(id)>
                                    {item.label}
                                </button>
                            }
                        })
                        .collect_view()}
                    <A href="/resume" attr:class="hover:text-purple-600">
                        "Resume"
                    </A>
                </nav>
                <div class="text-sm space-y-2">
                    <a href=PERSONAL_INFO.github target="_blank" rel="noopener noreferrer" class="block hover:text-purple-600">
                        "GitHub"
                    </a>
                    <a href=PERSONAL_INFO.linkedin target="_blank" rel="noopener noreferrer" class="block hover:text-purple-600">
                        "LinkedIn"
                    </a>
                </div>
            </div>
            <p class="text-center text-xs text-gray-500 pb-6">
                {format!("© {year} {}. Last built {built}.", PERSONAL_INFO.name)}
            </p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_stamp_parses() {
        let (year, built) = build_stamp();
        assert!(year >= 2024);
        assert_eq!(built.len(), "YYYY-MM-DD".len());
    }
}
