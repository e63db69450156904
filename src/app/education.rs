use leptos::prelude::*;

use crate::data::EDUCATION;

use super::{homepage::SectionTitle, hooks::use_tracked_section};

#[component]
pub fn Education() -> impl IntoView {
    let node_ref = use_tracked_section("education");

    view! {
        <section id="education" node_ref=node_ref class="section-padding">
            <div class="max-w-4xl mx-auto">
                <SectionTitle title="Education" subtitle="Where the foundations were laid" />
                <ol class="space-y-8">
                    {EDUCATION
                        .iter()
                        .map(|step| {
                            view! {
                                <li class="glass rounded-2xl p-6 shadow">
                                    <span class="inline-block mb-2 px-3 py-1 rounded-full text-xs font-medium text-white bg-gradient-to-r from-purple-600 to-pink-600">
                                        {step.level.label()}
                                    </span>
                                    <h3 class="text-xl font-bold text-gray-900 dark:text-white">
                                        {step.degree}
                                    </h3>
                                    <p class="text-purple-600 dark:text-purple-400">{step.institution}</p>
                                    <p class="text-sm text-gray-500 dark:text-gray-400 mb-2">
                                        {step.duration}" · "{step.location}
                                    </p>
                                    {step
                                        .details
                                        .map(|d| {
                                            view! {
                                                <p class="text-gray-700 dark:text-gray-300">{d}</p>
                                            }
                                        })}
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
