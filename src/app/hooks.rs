use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_preferred_dark, UseIntersectionObserverOptions,
};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use crate::{
    sections::{nav_section_ids, scroll_target, SectionTracker, ACTIVE_BAND_MARGIN},
    theme::{resolve_theme, Theme},
};

/// Light/dark preference shared by every component under `App`.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    set_stored: WriteSignal<Option<Theme>>,
}

impl ThemeContext {
    /// Persist `theme` as the explicit choice.
    pub fn set(&self, theme: Theme) {
        log::debug!("switching theme to {}", theme.as_str());
        self.set_stored.set(Some(theme));
    }

    pub fn toggle(&self) {
        self.set(self.theme.get_untracked().toggled());
    }
}

pub fn provide_theme() {
    #[cfg(feature = "hydrate")]
    let (stored, set_stored, _) =
        use_local_storage::<Option<Theme>, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (stored, set_stored) = {
        let (stored, set_stored) = signal(None::<Theme>);
        (Signal::from(stored), set_stored)
    };

    let prefers_dark = use_preferred_dark();
    let theme = Signal::derive(move || resolve_theme(stored.get(), prefers_dark.get()));

    Effect::new(move |_| {
        let dark = theme.get().is_dark();
        if let Some(root) = document().document_element() {
            let _ = root.class_list().toggle_with_force("dark", dark);
        }
    });

    provide_context(ThemeContext { theme, set_stored });
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Which navigable section currently sits in the active band.
#[derive(Debug, Clone, Copy)]
pub struct ActiveSection(RwSignal<SectionTracker>);

impl ActiveSection {
    pub fn is(&self, id: &str) -> bool {
        self.0.with(|t| t.is_active(id))
    }
}

pub fn provide_active_section() {
    provide_context(ActiveSection(RwSignal::new(SectionTracker::new(
        nav_section_ids(),
    ))));
}

pub fn use_active_section() -> ActiveSection {
    expect_context::<ActiveSection>()
}

/// Register a section with the active-section tracker. Attach the returned
/// ref to the section's root element.
pub fn use_tracked_section(id: &'static str) -> NodeRef<html::Section> {
    let node_ref = NodeRef::<html::Section>::new();
    let ActiveSection(tracker) = use_active_section();

    use_intersection_observer_with_options(
        node_ref,
        move |entries, _| {
            let hits = entries.iter().map(|e| (id, e.is_intersecting()));
            let changed = tracker
                .try_update(|t| t.observe_all(hits))
                .unwrap_or_default();
            if changed {
                log::debug!("active section: {id}");
            }
        },
        UseIntersectionObserverOptions::default()
            .root_margin(ACTIVE_BAND_MARGIN.to_string())
            .thresholds(vec![0.0]),
    );

    node_ref
}

/// Smooth-scroll so the section with `id` lands just below the header. Does
/// nothing if no such element is on the page.
pub fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        log::warn!("no section with id {id}");
        return;
    };
    let top = scroll_target(
        el.get_bounding_client_rect().top(),
        window().scroll_y().unwrap_or_default(),
    );
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Document and viewport heights, zero while rendering on the server.
pub fn page_heights() -> (f64, f64) {
    #[cfg(feature = "hydrate")]
    {
        let doc = document()
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default();
        let view = window()
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or_default();
        (doc, view)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (0.0, 0.0)
    }
}
