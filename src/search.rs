use crate::data::{all_skills, Project, PROJECTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchHit {
    Project(&'static Project),
    Skill(&'static str),
}

impl SearchHit {
    /// Section to scroll to when the hit is picked.
    pub fn section(&self) -> &'static str {
        match self {
            SearchHit::Project(_) => "projects",
            SearchHit::Skill(_) => "skills",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchHit::Project(p) => p.title,
            SearchHit::Skill(s) => *s,
        }
    }
}

/// Case-insensitive substring search over projects then skills.
pub fn search(query: &str) -> Vec<SearchHit> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    let matches = |s: &str| s.to_lowercase().contains(&query);
    let projects = PROJECTS
        .iter()
        .filter(|p| {
            matches(p.title)
                || matches(p.description)
                || p.technologies.iter().any(|t| matches(t))
        })
        .map(SearchHit::Project);
    let skills = all_skills()
        .filter(|s| matches(s.name))
        .map(|s| SearchHit::Skill(s.name));
    projects.chain(skills).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Open,
    Close,
    Next,
    Prev,
    Select,
}

impl NavKey {
    /// Map a keyboard event key to a search action. `/` only counts without
    /// modifiers so browser shortcuts keep working.
    pub fn from_key(key: &str, has_modifier: bool) -> Option<Self> {
        match key {
            "/" if !has_modifier => Some(Self::Open),
            "Escape" => Some(Self::Close),
            "ArrowDown" => Some(Self::Next),
            "ArrowUp" => Some(Self::Prev),
            "Enter" => Some(Self::Select),
            _ => None,
        }
    }
}

/// Whether a key pressed in this element is ordinary typing. The `/`
/// shortcut must not fire from form fields.
pub fn is_typing_target(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || ["INPUT", "TEXTAREA", "SELECT"]
            .iter()
            .any(|tag| tag_name.eq_ignore_ascii_case(tag))
}

/// Move a selection cursor over `len` items, wrapping at both ends.
pub fn cycle(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    match forward {
        true => (index + 1) % len,
        false if index == 0 => len - 1,
        false => (index - 1).min(len - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_has_no_results() {
        assert!(search("").is_empty());
        assert!(search("   ").is_empty());
    }

    #[test]
    fn test_matches_projects_and_skills() {
        let hits = search("zustand");
        let labels = hits.iter().map(SearchHit::label).collect::<Vec<_>>();
        // project technologies come first, then the skill itself
        assert_eq!(labels, vec!["AlphaGen", "Zustand"]);
        assert_eq!(hits[0].section(), "projects");
        assert_eq!(hits[1].section(), "skills");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert_eq!(search("ALPHAGEN").len(), 1);
        assert!(search("git")
            .iter()
            .any(|h| matches!(h, SearchHit::Skill("GitHub"))));
    }

    #[test]
    fn test_nav_keys() {
        assert_eq!(NavKey::from_key("/", false), Some(NavKey::Open));
        assert_eq!(NavKey::from_key("/", true), None);
        assert_eq!(NavKey::from_key("Escape", true), Some(NavKey::Close));
        assert_eq!(NavKey::from_key("a", false), None);
    }

    #[test]
    fn test_slash_in_form_fields_is_typing() {
        assert!(is_typing_target("INPUT", false));
        assert!(is_typing_target("textarea", false));
        assert!(is_typing_target("SELECT", false));
        assert!(is_typing_target("DIV", true));
        assert!(!is_typing_target("BODY", false));
        assert!(!is_typing_target("BUTTON", false));
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle(0, 3, true), 1);
        assert_eq!(cycle(2, 3, true), 0);
        assert_eq!(cycle(0, 3, false), 2);
        assert_eq!(cycle(2, 3, false), 1);
        assert_eq!(cycle(5, 0, true), 0);
    }
}
