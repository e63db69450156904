use leptos::{ev, prelude::*};

use crate::data::{project_by_id, Project, PROJECTS};

use super::{
    homepage::{SectionTitle, Tag},
    hooks::use_tracked_section,
};

#[component]
pub fn Projects() -> impl IntoView {
    let node_ref = use_tracked_section("projects");
    let (selected, set_selected) = signal(None::<u32>);

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && selected.get_untracked().is_some() {
            set_selected(None);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <section id="projects" node_ref=node_ref class="section-padding">
            <div class="max-w-7xl mx-auto">
                <SectionTitle
                    title="Featured Projects"
                    subtitle="A selection of things I have built recently"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            let id = project.id;
                            view! {
                                <ProjectCard project on_open=move || set_selected(Some(id)) />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            {move || {
                selected()
                    .and_then(project_by_id)
                    .map(|project| {
                        view! { <ProjectModal project on_close=move || set_selected(None) /> }
                    })
            }}
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    on_open: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <article
            class="group cursor-pointer rounded-2xl overflow-hidden glass shadow-lg hover:shadow-2xl transition-shadow"
            on:click=move |_| on_open()
        >
            <div class="relative h-48 overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    loading="lazy"
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <span class="absolute top-3 left-3 px-3 py-1 rounded-full text-xs text-white bg-black/60">
                    {project.category}
                </span>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2 text-gray-900 dark:text-white">{project.title}</h3>
                <p class="text-gray-600 dark:text-gray-400 mb-4 line-clamp-3">
                    {project.description}
                </p>
                <div class="flex flex-wrap gap-2">
                    {project.technologies.iter().take(4).map(|t| view! { <Tag text=*t /> }).collect_view()}
                </div>
            </div>
        </article>
    }
}

#[component]
fn ProjectModal(
    project: &'static Project,
    on_close: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/70"
            on:click=move |_| on_close()
        >
            <div
                role="dialog"
                aria-modal="true"
                class="relative w-full max-w-3xl max-h-[90vh] overflow-y-auto rounded-2xl bg-white dark:bg-gray-900 shadow-2xl"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    class="absolute top-4 right-4 w-10 h-10 rounded-full bg-black/60 text-white"
                    aria-label="Close"
                    on:click=move |_| on_close()
                >
                    "✕"
                </button>
                <img src=project.image alt=project.title class="w-full h-64 object-cover" />
                <div class="p-8">
                    <p class="text-sm text-purple-600 dark:text-purple-400 mb-2">{project.category}</p>
                    <h3 class="text-3xl font-bold mb-4 text-gray-900 dark:text-white">{project.title}</h3>
                    <p class="text-gray-700 dark:text-gray-300 mb-6 leading-relaxed">
                        {project.description}
                    </p>
                    <div class="flex flex-wrap gap-2 mb-8">
                        {project.technologies.iter().map(|t| view! { <Tag text=*t /> }).collect_view()}
                    </div>
                    <div class="flex gap-4">
                        <a
                            href=project.live_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-6 py-2 rounded-full text-white bg-gradient-to-r from-purple-600 to-pink-600"
                        >
                            "Live Demo"
                        </a>
                        <a
                            href=project.github_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-6 py-2 rounded-full border-2 border-purple-600 text-purple-600 dark:text-purple-400"
                        >
                            "Source"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
