use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_mouse, use_window_scroll, UseMouseReturn};

use crate::motion::{magnetic_offset, parallax_offset, reading_progress, Direction, Offset};

use super::hooks::page_heights;

#[component]
pub fn ReadingProgress() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let width = move || {
        let (doc, view) = page_heights();
        format!("{}%", reading_progress(scroll_y.get(), doc, view))
    };

    view! {
        <div class="fixed top-0 inset-x-0 h-1 z-50 bg-transparent">
            <div
                class="h-full bg-gradient-to-r from-purple-600 to-pink-600 transition-[width] duration-100"
                style:width=width
            ></div>
        </div>
    }
}

#[component]
pub fn CustomCursor() -> impl IntoView {
    let UseMouseReturn { x, y, .. } = use_mouse();
    let moved = move || x.get() != 0.0 || y.get() != 0.0;

    view! {
        <div
            class="hidden md:block fixed top-0 left-0 z-50 w-5 h-5 rounded-full border-2 border-purple-500 pointer-events-none mix-blend-difference"
            class=("opacity-0", move || !moved())
            style:transform=move || {
                Offset {
                    x: x.get() - 10.0,
                    y: y.get() - 10.0,
                }
                    .translate()
            }
        ></div>
    }
}

/// Pulls its children toward the pointer while it hovers nearby.
#[component]
pub fn Magnetic(
    children: Children,
    #[prop(default = 0.3)] strength: f64,
    #[prop(default = 100.0)] area: f64,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let (offset, set_offset) = signal(Offset::ZERO);

    let _ = use_event_listener(node_ref, ev::mousemove, move |ev| {
        let Some(el) = node_ref.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let centre = (
            rect.left() + rect.width() / 2.0,
            rect.top() + rect.height() / 2.0,
        );
        let pointer = (ev.client_x() as f64, ev.client_y() as f64);
        set_offset(magnetic_offset(pointer, centre, strength, area));
    });
    let _ = use_event_listener(node_ref, ev::mouseleave, move |_| set_offset(Offset::ZERO));

    view! {
        <div
            node_ref=node_ref
            class="inline-block transition-transform duration-200 ease-out"
            style:transform=move || offset.get().translate()
        >
            {children()}
        </div>
    }
}

/// Shifts its children as the window scrolls.
#[component]
pub fn Parallax(
    children: Children,
    speed: f64,
    #[prop(optional)] direction: Direction,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();

    view! {
        <div
            class=class
            style:transform=move || parallax_offset(scroll_y.get(), speed, direction).translate()
        >
            {children()}
        </div>
    }
}
