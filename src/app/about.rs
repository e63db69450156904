use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer, use_interval_fn_with_options, use_window_scroll, Pausable,
    UseIntervalFnOptions,
};

use crate::{
    data::{all_skills, EXPERIENCES, PERSONAL_INFO, PROJECTS},
    motion::{map_range, reading_progress, Spring, SpringState},
};

use super::{
    homepage::SectionTitle,
    hooks::{page_heights, use_tracked_section},
};

/// Spring tick, in milliseconds.
const FRAME_MS: u64 = 16;

#[component]
pub fn About() -> impl IntoView {
    let node_ref = use_tracked_section("about");
    let (_, scroll_y) = use_window_scroll();
    let portrait_scale = move || {
        let (doc, view) = page_heights();
        let progress = reading_progress(scroll_y.get(), doc, view) / 100.0;
        format!("scale({})", map_range(progress, 0.9, 1.05))
    };

    view! {
        <section id="about" node_ref=node_ref class="section-padding">
            <div class="max-w-6xl mx-auto">
                <SectionTitle title="About Me" subtitle="A little more about who I am" />
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="flex justify-center">
                        <div
                            class="w-64 h-64 rounded-full flex items-center justify-center text-7xl font-bold text-white bg-gradient-to-br from-purple-600 to-pink-600 shadow-2xl transition-transform"
                            style:transform=portrait_scale
                        >
                            {PERSONAL_INFO.initials}
                        </div>
                    </div>
                    <div>
                        <p class="text-lg text-gray-700 dark:text-gray-300 leading-relaxed mb-8">
                            {PERSONAL_INFO.bio}
                        </p>
                        <div class="grid grid-cols-3 gap-4 mb-8">
                            <Counter target=2.4 decimals=1 label="Years" />
                            <Counter target={PROJECTS.len() as f64} label="Projects" />
                            <Counter target={all_skills().count() as f64} label="Skills" />
                        </div>
                        <dl class="grid grid-cols-2 gap-4 text-sm">
                            <dt class="font-semibold text-gray-900 dark:text-white">"Location"</dt>
                            <dd class="text-gray-600 dark:text-gray-400">{PERSONAL_INFO.location}</dd>
                            <dt class="font-semibold text-gray-900 dark:text-white">"Email"</dt>
                            <dd class="text-gray-600 dark:text-gray-400">{PERSONAL_INFO.email}</dd>
                            <dt class="font-semibold text-gray-900 dark:text-white">"Current"</dt>
                            <dd class="text-gray-600 dark:text-gray-400">
                                {EXPERIENCES.first().map(|e| e.company)}
                            </dd>
                        </dl>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// A number that springs up from zero to `target` once it scrolls into view.
/// The tick stops when the spring comes to rest.
#[component]
fn Counter(target: f64, label: &'static str, #[prop(optional)] decimals: usize) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let spring = Spring::default();
    let (state, set_state) = signal(SpringState::default());

    let Pausable { pause, resume, .. } = use_interval_fn_with_options(
        move || set_state.update(|s| *s = spring.step(*s, target, FRAME_MS as f64 / 1000.0)),
        FRAME_MS,
        UseIntervalFnOptions::default().immediate(false),
    );

    Effect::new(move |_| {
        if state.get().is_settled(target) {
            pause();
        }
    });

    use_intersection_observer(node_ref, move |entries, _| {
        let visible = entries.iter().any(|e| e.is_intersecting());
        if visible && !state.get_untracked().is_settled(target) {
            resume();
        }
    });

    view! {
        <div node_ref=node_ref class="text-center glass rounded-xl p-4">
            <div class="text-3xl font-bold text-gradient">
                {move || format!("{:.*}+", decimals, state.get().value.max(0.0))}
            </div>
            <div class="text-sm text-gray-600 dark:text-gray-400">{label}</div>
        </div>
    }
}
