use leptos::{ev, html, prelude::*};
use wasm_bindgen::JsCast;

use crate::search::{cycle, is_typing_target, search, NavKey, SearchHit};

use super::header::go_to_section;

#[component]
pub fn SearchBar() -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();
    let (open, set_open) = signal(false);
    let (query, set_query) = signal(String::new());
    let (selected, set_selected) = signal(0usize);
    let hits = Memo::new(move |_| query.with(|q| search(q)));

    let close = move || {
        set_open(false);
        set_query(String::new());
        set_selected(0);
    };

    let pick = move |hit: SearchHit| {
        log::debug!("search picked {}", hit.label());
        close();
        go_to_section(hit.section());
    };

    let handle = window_event_listener(ev::keydown, move |ev| {
        let has_modifier = ev.ctrl_key() || ev.meta_key() || ev.alt_key();
        let Some(key) = NavKey::from_key(&ev.key(), has_modifier) else {
            return;
        };
        let is_open = open.get_untracked();
        match key {
            NavKey::Open if !is_open && !typed_in_field(&ev) => {
                ev.prevent_default();
                set_open(true);
                request_animation_frame(move || {
                    if let Some(el) = input_ref.get_untracked() {
                        let _ = el.focus();
                    }
                });
            }
            NavKey::Close if is_open => close(),
            NavKey::Next | NavKey::Prev if is_open => {
                ev.prevent_default();
                let len = hits.with_untracked(Vec::len);
                set_selected.update(|i| *i = cycle(*i, len, key == NavKey::Next));
            }
            NavKey::Select if is_open => {
                let hit = hits.with_untracked(|h| h.get(selected.get_untracked()).copied());
                if let Some(hit) = hit {
                    ev.prevent_default();
                    pick(hit);
                }
            }
            _ => {}
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <button
            class="hidden sm:flex items-center gap-2 px-3 py-2 rounded-lg text-sm text-gray-500 bg-gray-100 dark:bg-gray-800 dark:text-gray-400"
            on:click=move |_| set_open(true)
        >
            "Search"
            <kbd class="px-1.5 rounded border border-gray-300 dark:border-gray-600">"/"</kbd>
        </button>
        <Show when=open>
            <div
                class="fixed inset-0 z-50 flex items-start justify-center pt-24 bg-black/50"
                on:click=move |_| close()
            >
                <div
                    class="w-full max-w-lg rounded-xl bg-white dark:bg-gray-800 shadow-2xl"
                    on:click=|ev| ev.stop_propagation()
                >
                    <input
                        node_ref=input_ref
                        type="text"
                        placeholder="Search projects and skills"
                        class="w-full px-4 py-3 rounded-t-xl bg-transparent border-b border-gray-200 dark:border-gray-700 focus:outline-none"
                        prop:value=query
                        on:input=move |ev| {
                            set_query(event_target_value(&ev));
                            set_selected(0);
                        }
                    />
                    <ul class="max-h-80 overflow-y-auto py-2">
                        {move || {
                            let hits = hits.get();
                            if hits.is_empty() && !query.with(|q| q.trim().is_empty()) {
                                return view! {
                                    <li class="px-4 py-2 text-gray-500">"No results"</li>
                                }
                                    .into_any();
                            }
                            hits.into_iter()
                                .enumerate()
                                .map(|(i, hit)| {
                                    view! {
                                        <li
                                            class="px-4 py-2 flex justify-between cursor-pointer"
                                            class=("bg-purple-50", move || selected() == i)
                                            class=("dark:bg-gray-700", move || selected() == i)
                                            on:mouseenter=move |_| set_selected(i)
                                            on:click=move |_| pick(hit)
                                        >
                                            <span>{hit.label()}</span>
                                            <span class="text-xs uppercase text-gray-400">
                                                {hit.section()}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </ul>
                </div>
            </div>
        </Show>
    }
}

fn typed_in_field(ev: &ev::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
        .is_some_and(|el| is_typing_target(&el.tag_name(), el.is_content_editable()))
}
