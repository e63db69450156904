use leptos::prelude::*;

use crate::data::{filter_achievements, Achievement, AchievementKind};

use super::{homepage::SectionTitle, hooks::use_tracked_section};

#[component]
pub fn Achievements() -> impl IntoView {
    let node_ref = use_tracked_section("achievements");
    let (filter, set_filter) = signal(None::<AchievementKind>);
    let groups = Memo::new(move |_| filter_achievements(filter.get()));

    let filter_button = move |kind: Option<AchievementKind>, label: &'static str| {
        view! {
            <button
                class="px-4 py-2 rounded-full text-sm font-medium transition-colors"
                class=(["text-white", "bg-gradient-to-r", "from-purple-600", "to-pink-600"], move || filter() == kind)
                class=(["bg-gray-100", "dark:bg-gray-800", "text-gray-700", "dark:text-gray-300"], move || filter() != kind)
                on:click=move |_| set_filter(kind)
            >
                {label}
            </button>
        }
    };

    view! {
        <section id="achievements" node_ref=node_ref class="section-padding bg-gray-50 dark:bg-gray-800/50">
            <div class="max-w-7xl mx-auto">
                <SectionTitle
                    title="Achievements"
                    subtitle="Certifications, awards, talks and writing"
                />
                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    {filter_button(None, "All")}
                    {AchievementKind::ALL
                        .into_iter()
                        .map(|kind| filter_button(Some(kind), kind.label()))
                        .collect_view()}
                </div>
                {move || {
                    let (featured, others) = groups.get();
                    if featured.is_empty() && others.is_empty() {
                        return view! { <p class="text-center text-gray-500">"Nothing here yet."</p> }
                            .into_any();
                    }
                    view! {
                        {(!featured.is_empty())
                            .then(|| {
                                view! {
                                    <div class="grid md:grid-cols-2 gap-6 mb-8">
                                        {featured
                                            .iter()
                                            .map(|a| view! { <AchievementCard achievement=*a featured=true /> })
                                            .collect_view()}
                                    </div>
                                }
                            })}
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {others
                                .iter()
                                .map(|a| view! { <AchievementCard achievement=*a /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }}
            </div>
        </section>
    }
}

#[component]
fn AchievementCard(
    achievement: &'static Achievement,
    #[prop(optional)] featured: bool,
) -> impl IntoView {
    let icon_class = format!(
        "w-12 h-12 flex-shrink-0 flex items-center justify-center rounded-xl text-2xl bg-gradient-to-br {}",
        achievement.kind.color()
    );
    view! {
        <div
            class="glass rounded-2xl p-6 shadow hover:shadow-xl transition-shadow"
            class=("ring-2", featured)
            class=("ring-purple-500", featured)
        >
            <div class="flex gap-4">
                <div class=icon_class>{achievement.icon}</div>
                <div class="flex-1">
                    <div class="flex justify-between gap-2">
                        <h3 class="font-bold text-gray-900 dark:text-white">{achievement.title}</h3>
                        <span class="text-xs text-gray-500 whitespace-nowrap">
                            {achievement.display_date()}
                        </span>
                    </div>
                    <p class="text-sm text-gray-600 dark:text-gray-400 mt-1">
                        {achievement.description}
                    </p>
                    <div class="flex justify-between items-center mt-3 text-xs">
                        <span class="text-purple-600 dark:text-purple-400">
                            {achievement.issuer}
                        </span>
                        {achievement
                            .url
                            .map(|url| {
                                view! {
                                    <a href=url target="_blank" rel="noopener noreferrer" class="underline">
                                        "View"
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </div>
        </div>
    }
}
