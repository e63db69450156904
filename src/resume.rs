use std::fmt::Write;

use crate::data::{SkillCategory, EDUCATION, EXPERIENCES, PERSONAL_INFO, PROJECTS};

/// Plain-text resume assembled from the site content.
pub fn plain_text() -> String {
    let info = &PERSONAL_INFO;
    let mut out = String::new();
    let heading = format!("{} - {}", info.name, info.title);
    // writing to a String cannot fail
    let _ = writeln!(out, "{heading}\n{}\n", "=".repeat(heading.chars().count()));

    let _ = writeln!(out, "Contact:");
    let _ = writeln!(out, "- Email: {}", info.email);
    let _ = writeln!(out, "- Phone: {}", info.phone);
    let _ = writeln!(out, "- Location: {}", info.location);
    let _ = writeln!(out, "- GitHub: {}", info.github);
    let _ = writeln!(out, "- LinkedIn: {}\n", info.linkedin);

    let _ = writeln!(out, "Summary:\n{}\n", info.bio);

    let _ = writeln!(out, "Skills:");
    for category in SkillCategory::ALL {
        let names = category
            .skills()
            .iter()
            .map(|s| s.name)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "- {}: {names}", category.title());
    }

    let _ = writeln!(out, "\nExperience:");
    for exp in EXPERIENCES {
        let _ = writeln!(
            out,
            "{} | {} | {} | {}",
            exp.title, exp.company, exp.location, exp.duration
        );
        for line in exp.description {
            let _ = writeln!(out, "  * {line}");
        }
    }

    let _ = writeln!(out, "\nProjects:");
    for project in PROJECTS {
        let _ = writeln!(
            out,
            "{} ({})\n  {}\n  Tech: {}",
            project.title,
            project.category,
            project.description,
            project.technologies.join(", ")
        );
    }

    let _ = writeln!(out, "\nEducation:");
    for step in EDUCATION {
        let _ = writeln!(
            out,
            "{} - {} ({}, {})",
            step.degree, step.institution, step.duration, step.location
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_has_every_section() {
        let text = plain_text();
        assert!(text.starts_with("Anurag Kadam - Full Stack Developer\n"));
        for heading in ["Contact:", "Summary:", "Skills:", "Experience:", "Projects:", "Education:"] {
            assert!(text.contains(heading), "missing {heading}");
        }
    }

    #[test]
    fn test_resume_lists_content() {
        let text = plain_text();
        assert!(text.contains("- Frontend: React.js, Next.js"));
        assert!(text.contains("Mindcrew Technologies"));
        assert!(text.contains("AlphaGen (Frontend Web App)"));
        assert!(text.contains("B.Tech in Information Technology"));
    }
}
