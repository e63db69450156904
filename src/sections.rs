/// Margins that shrink the observer root to the band where a section counts
/// as "in view".
pub const ACTIVE_BAND_MARGIN: &str = "-20% 0px -70% 0px";

/// Height of the sticky header; anchors scroll to just below it.
pub const HEADER_OFFSET: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub id: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", id: "hero" },
    NavItem { label: "Experience", id: "experience" },
    NavItem { label: "Projects", id: "projects" },
    NavItem { label: "Skills", id: "skills" },
    NavItem { label: "About", id: "about" },
    NavItem { label: "Achievements", id: "achievements" },
    NavItem { label: "Education", id: "education" },
    NavItem { label: "Contact", id: "contact" },
];

pub fn nav_section_ids() -> Vec<String> {
    NAV_ITEMS.iter().map(|item| item.id.to_string()).collect()
}

/// Tracks which of a fixed set of sections was most recently reported as
/// entering the active band.
///
/// When several sections intersect at once the last report wins; there is
/// no priority between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionTracker {
    ids: Vec<String>,
    active: Option<String>,
}

impl SectionTracker {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether `id` is the active section. Nothing is active before the
    /// first intersecting report.
    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }

    /// Feed one intersection report. Returns true if the active section
    /// changed.
    pub fn observe(&mut self, id: &str, is_intersecting: bool) -> bool {
        if !is_intersecting || !self.ids.iter().any(|s| s == id) {
            return false;
        }
        if self.active.as_deref() == Some(id) {
            return false;
        }
        self.active = Some(id.to_string());
        true
    }

    /// Feed a batch of reports in delivery order.
    pub fn observe_all<'a, I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        entries
            .into_iter()
            .fold(false, |changed, (id, hit)| self.observe(id, hit) || changed)
    }
}

/// Window scroll position that puts an element's top right under the header.
pub fn scroll_target(element_top: f64, page_offset: f64) -> f64 {
    element_top + page_offset - HEADER_OFFSET
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// `None` for the current (last) crumb.
    pub path: Option<String>,
}

pub fn breadcrumbs(pathname: &str) -> Vec<Crumb> {
    let segments = pathname
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();
    let mut crumbs = vec![Crumb {
        label: "Home".to_string(),
        path: if segments.is_empty() {
            None
        } else {
            Some("/".to_string())
        },
    }];
    crumbs.extend(segments.iter().enumerate().map(|(i, seg)| {
        let is_last = i == segments.len() - 1;
        Crumb {
            label: capitalize(seg),
            path: (!is_last).then(|| format!("/{}", segments[..=i].join("/"))),
        }
    }));
    crumbs
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_starts_empty() {
        let mut tracker = SectionTracker::new(nav_section_ids());
        assert_eq!(tracker.active(), None);
        assert!(NAV_ITEMS.iter().all(|item| !tracker.is_active(item.id)));

        // a miss does not pick the first section either
        assert!(!tracker.observe("hero", false));
        assert!(!tracker.is_active("hero"));

        assert!(tracker.observe("hero", true));
        assert!(tracker.is_active("hero"));
        assert!(!tracker.is_active("contact"));
    }

    #[test]
    fn test_tracker_changes_on_distinct_section() {
        let mut tracker = SectionTracker::new(["hero", "projects", "contact"]);

        assert!(tracker.observe("hero", true));
        assert_eq!(tracker.active(), Some("hero"));

        // repeated identical reports do nothing
        assert!(!tracker.observe("hero", true));
        assert!(!tracker.observe("hero", true));

        assert!(tracker.observe("projects", true));
        assert_eq!(tracker.active(), Some("projects"));
    }

    #[test]
    fn test_tracker_ignores_leaving_and_unknown() {
        let mut tracker = SectionTracker::new(["hero", "projects"]);
        tracker.observe("hero", true);

        assert!(!tracker.observe("projects", false));
        assert!(!tracker.observe("footer", true));
        assert_eq!(tracker.active(), Some("hero"));
    }

    #[test]
    fn test_tracker_last_event_wins() {
        let mut tracker = SectionTracker::new(["hero", "projects", "skills"]);
        let changed = tracker.observe_all([("skills", true), ("hero", true), ("projects", false)]);
        assert!(changed);
        assert_eq!(tracker.active(), Some("hero"));

        assert!(!tracker.observe_all([("hero", true)]));
    }

    #[test]
    fn test_scroll_target_accounts_for_header() {
        assert_eq!(scroll_target(300.0, 1000.0), 1220.0);
        assert_eq!(scroll_target(0.0, 0.0), -80.0);
    }

    #[test]
    fn test_breadcrumbs_root() {
        assert_eq!(
            breadcrumbs("/"),
            vec![Crumb {
                label: "Home".to_string(),
                path: None
            }]
        );
    }

    #[test]
    fn test_breadcrumbs_nested() {
        let crumbs = breadcrumbs("/resume/print/");
        let labels = crumbs.iter().map(|c| c.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Home", "Resume", "Print"]);
        assert_eq!(crumbs[0].path.as_deref(), Some("/"));
        assert_eq!(crumbs[1].path.as_deref(), Some("/resume"));
        assert_eq!(crumbs[2].path, None);
    }
}
