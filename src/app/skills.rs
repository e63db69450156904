use leptos::prelude::*;

use crate::data::{Skill, SkillCategory};

use super::{homepage::SectionTitle, hooks::use_tracked_section};

#[component]
pub fn Skills() -> impl IntoView {
    let node_ref = use_tracked_section("skills");

    view! {
        <section id="skills" node_ref=node_ref class="section-padding bg-gray-50 dark:bg-gray-800/50">
            <div class="max-w-7xl mx-auto">
                <SectionTitle title="Skills" subtitle="Tools I reach for every day" />
                <div class="grid lg:grid-cols-3 gap-8">
                    {SkillCategory::ALL
                        .into_iter()
                        .map(|category| {
                            view! {
                                <div class="glass rounded-2xl p-6 shadow">
                                    <h3 class="text-2xl font-bold mb-6 text-gray-900 dark:text-white">
                                        {category.title()}
                                    </h3>
                                    <div class="space-y-5">
                                        {category
                                            .skills()
                                            .iter()
                                            .map(|skill| view! { <SkillBar skill /> })
                                            .collect_view()}
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

#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    view! {
        <div>
            <div class="flex justify-between items-center mb-1">
                <span class="font-medium text-gray-800 dark:text-gray-200">
                    {skill.icon}" "{skill.name}
                </span>
                <span class="text-xs text-gray-500 dark:text-gray-400">
                    {skill.level_label()}" · "{skill.level}"%"
                </span>
            </div>
            <div class="h-2 rounded-full bg-gray-200 dark:bg-gray-700 overflow-hidden">
                <div
                    class=format!("h-full rounded-full {}", skill.tone().bar_class())
                    style:width=format!("{}%", skill.level)
                ></div>
            </div>
        </div>
    }
}
