use leptos::prelude::*;

use crate::data::EXPERIENCES;

use super::{
    homepage::{SectionTitle, Tag},
    hooks::use_tracked_section,
};

#[component]
pub fn Experience() -> impl IntoView {
    let node_ref = use_tracked_section("experience");

    view! {
        <section id="experience" node_ref=node_ref class="section-padding bg-gray-50 dark:bg-gray-800/50">
            <div class="max-w-5xl mx-auto">
                <SectionTitle
                    title="Work Experience"
                    subtitle="Where I have been building products"
                />
                <div class="relative border-l-2 border-purple-300 dark:border-purple-700 ml-4 space-y-12">
                    {EXPERIENCES
                        .iter()
                        .map(|exp| {
                            view! {
                                <div class="relative pl-10">
                                    <span class="absolute -left-5 top-0 w-10 h-10 flex items-center justify-center rounded-full bg-white dark:bg-gray-900 border-2 border-purple-500 text-lg">
                                        {exp.icon}
                                    </span>
                                    <div class="glass rounded-xl p-6 shadow">
                                        <div class="flex flex-wrap justify-between gap-2 mb-2">
                                            <h3 class="text-xl font-bold text-gray-900 dark:text-white">
                                                {exp.title}
                                            </h3>
                                            <span class="text-sm text-purple-600 dark:text-purple-400">
                                                {exp.duration}
                                            </span>
                                        </div>
                                        <p class="text-gray-600 dark:text-gray-400 mb-4">
                                            {exp.company}" · "{exp.location}
                                        </p>
                                        <ul class="list-disc pl-5 space-y-2 text-gray-700 dark:text-gray-300 mb-4">
                                            {exp
                                                .description
                                                .iter()
                                                .map(|line| view! { <li>{*line}</li> })
                                                .collect_view()}
                                        </ul>
                                        <div class="flex flex-wrap gap-2">
                                            {exp
                                                .technologies
                                                .iter()
                                                .map(|t| view! { <Tag text=*t /> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
