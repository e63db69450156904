//! Site content. Everything is a `'static` table read directly by the views.

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub initials: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub bio: &'static str,
    pub greeting: &'static str,
    pub roles: &'static [&'static str],
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Anurag Kadam",
    initials: "AK",
    title: "Full Stack Developer",
    email: "anuragkadam70@gmail.com",
    phone: "+91-8085606055",
    location: "India",
    bio: "Full-stack developer with 2.4 years of experience building scalable web applications using React, TypeScript, Node.js, and MongoDB. Skilled in front-end architecture, state management, authentication, and API integrations, delivering clean, maintainable, and production-ready solutions.",
    greeting: "Hi, I'm 👋",
    roles: &[
        "Full Stack Developer",
        "Frontend Engineer",
        "Problem Solver",
        "Tech Enthusiast",
    ],
    github: "https://github.com/Anuragkadam",
    linkedin: "https://linkedin.com/in/anuragkadam7",
};

/// Index of the role shown after `current`, wrapping around.
pub fn next_role_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "NxtGen Boss",
        description: "Implemented core features for a full-stack ed-tech platform with parent and child portals, learning modules, quizzes, certificates, and progress tracking, including Stripe subscriptions, multilingual UI (English/Spanish), secure AWS S3 file handling, and dashboards using React, TypeScript, Node.js, and Express.",
        image: "https://images.unsplash.com/photo-1523580846011-d3a5bc25702b",
        category: "Full-Stack Web App",
        technologies: &[
            "React",
            "TypeScript",
            "Node.js",
            "Express.js",
            "MongoDB",
            "Stripe",
            "AWS S3",
            "Tailwind CSS",
        ],
        live_url: "https://example.com",
        github_url: "https://github.com/username/nxtgen-boss",
        featured: true,
    },
    Project {
        id: 2,
        title: "AlphaGen",
        description: "Built the complete frontend for an AI-powered financial analysis platform using Next.js, Zustand, and Framer Motion, including responsive UI, multi-file upload flows, document parsing workflows, admin dashboards (users, projects, tokens, models), and chat-based AI insights.",
        image: "https://images.unsplash.com/photo-1556157382-97eda2d62296",
        category: "Frontend Web App",
        technologies: &[
            "Next.js",
            "TypeScript",
            "Zustand",
            "Framer Motion",
            "Tailwind CSS",
        ],
        live_url: "https://example.com",
        github_url: "https://github.com/username/alphagen",
        featured: true,
    },
    Project {
        id: 3,
        title: "BPA – Buying Power Analytics",
        description: "Multi-portal real-estate eligibility system with Admin, Agent, Borrower, and Co-Borrower portals built using React.js and Node.js. Agents can onboard borrowers through customized websites, generate logins, and track applications, while the platform integrates with iSoftPull APIs to calculate buying power and loan eligibility, including co-borrower scenarios.",
        image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa",
        category: "Full-Stack Web App",
        technologies: &[
            "React",
            "Node.js",
            "Express.js",
            "MongoDB",
            "Tailwind CSS",
            "iSoftPull API",
        ],
        live_url: "https://example.com",
        github_url: "https://github.com/username/bpa-buying-power-analytics",
        featured: true,
    },
];

pub fn project_by_id(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub icon: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTone {
    Success,
    Primary,
    Warning,
    Error,
}

impl SkillTone {
    pub fn bar_class(self) -> &'static str {
        match self {
            SkillTone::Success => "bg-green-500",
            SkillTone::Primary => "bg-gradient-to-r from-purple-600 to-pink-600",
            SkillTone::Warning => "bg-yellow-500",
            SkillTone::Error => "bg-red-500",
        }
    }
}

impl Skill {
    pub fn level_label(&self) -> &'static str {
        match self.level {
            90.. => "Master",
            75.. => "Expert",
            60.. => "Intermediate",
            _ => "Beginner",
        }
    }

    pub fn tone(&self) -> SkillTone {
        match self.level {
            90.. => SkillTone::Success,
            75.. => SkillTone::Primary,
            60.. => SkillTone::Warning,
            _ => SkillTone::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tools => "Tools & Practices",
        }
    }

    pub fn skills(self) -> &'static [Skill] {
        match self {
            SkillCategory::Frontend => FRONTEND_SKILLS,
            SkillCategory::Backend => BACKEND_SKILLS,
            SkillCategory::Tools => TOOL_SKILLS,
        }
    }
}

const fn skill(name: &'static str, level: u8, icon: &'static str, color: &'static str) -> Skill {
    Skill {
        name,
        level,
        icon,
        color,
    }
}

pub const FRONTEND_SKILLS: &[Skill] = &[
    skill("React.js", 95, "⚛️", "from-blue-500 to-cyan-500"),
    skill("Next.js", 90, "▲", "from-gray-800 to-gray-600"),
    skill("TypeScript", 90, "📘", "from-blue-600 to-blue-400"),
    skill("JavaScript (ES6+)", 95, "📜", "from-yellow-500 to-yellow-400"),
    skill("HTML5", 98, "🌐", "from-orange-500 to-red-500"),
    skill("CSS3", 96, "🎨", "from-cyan-500 to-blue-500"),
    skill("Tailwind CSS", 92, "🌀", "from-cyan-500 to-blue-500"),
    skill("Shadcn", 88, "💠", "from-purple-500 to-pink-500"),
    skill("Material UI", 85, "📐", "from-indigo-500 to-blue-500"),
    skill("Framer Motion", 85, "🎞️", "from-pink-500 to-purple-500"),
];

pub const BACKEND_SKILLS: &[Skill] = &[
    skill("Node.js", 85, "🟢", "from-green-600 to-green-400"),
    skill("Express.js", 82, "🚂", "from-gray-700 to-gray-500"),
    skill("REST APIs", 90, "🔌", "from-purple-500 to-pink-500"),
    skill("MongoDB", 80, "🍃", "from-green-500 to-emerald-500"),
    skill("Auth0", 80, "🔐", "from-purple-600 to-indigo-600"),
    skill("Firebase Auth", 80, "🔥", "from-orange-500 to-red-500"),
    skill("JWT", 85, "🛡️", "from-slate-700 to-slate-500"),
    skill("Redux", 88, "🌀", "from-purple-500 to-purple-700"),
    skill("Zustand", 85, "🐻", "from-emerald-500 to-teal-500"),
];

pub const TOOL_SKILLS: &[Skill] = &[
    skill("Git", 92, "📦", "from-orange-600 to-red-600"),
    skill("GitHub", 92, "🐙", "from-gray-800 to-gray-600"),
    skill("Postman", 88, "📮", "from-orange-500 to-orange-600"),
    skill("Google Analytics", 75, "📊", "from-blue-500 to-green-500"),
    skill("CI/CD Pipelines", 80, "⚙️", "from-slate-600 to-slate-400"),
    skill("Performance Optimization", 85, "🚀", "from-pink-500 to-red-500"),
    skill("Production Build Pipelines", 82, "🏗️", "from-indigo-500 to-purple-500"),
];

pub fn all_skills() -> impl Iterator<Item = &'static Skill> {
    SkillCategory::ALL.into_iter().flat_map(|c| c.skills().iter())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub description: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub icon: &'static str,
}

pub const EXPERIENCES: &[Experience] = &[Experience {
    id: 1,
    title: "Frontend / Full-Stack Developer",
    company: "Mindcrew Technologies",
    location: "Indore, India",
    duration: "July 2022 – Present",
    description: &[
        "Developed scalable and responsive web applications using React, TypeScript, Shadcn, TailwindCSS, Redux, and Zustand, improving UI performance and reducing load time by up to 30%.",
        "Engineered secure authentication workflows with Auth0, JWT, and Firebase (Google/Facebook logins), reducing onboarding friction and security issues.",
        "Built REST APIs with Node.js, Express, and MongoDB, and implemented Stripe-based payment flows including checkout and subscriptions, enabling automated billing and reducing manual effort.",
        "Collaborated with designers using Figma to deliver pixel-perfect, reusable UI components and streamline development across multiple projects.",
    ],
    technologies: &[
        "React",
        "Next.js",
        "TypeScript",
        "Node.js",
        "Express.js",
        "MongoDB",
        "Redux",
        "Zustand",
        "Tailwind CSS",
        "Shadcn",
        "Auth0",
        "Firebase Auth",
        "JWT",
        "Stripe",
    ],
    icon: "💼",
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementKind {
    Certification,
    Award,
    Publication,
    Speaking,
    Other,
}

impl AchievementKind {
    pub const ALL: [AchievementKind; 5] = [
        AchievementKind::Certification,
        AchievementKind::Award,
        AchievementKind::Publication,
        AchievementKind::Speaking,
        AchievementKind::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AchievementKind::Certification => "Certifications",
            AchievementKind::Award => "Awards",
            AchievementKind::Publication => "Publications",
            AchievementKind::Speaking => "Speaking",
            AchievementKind::Other => "Other",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            AchievementKind::Certification => "from-blue-500 to-cyan-500",
            AchievementKind::Award => "from-yellow-500 to-orange-500",
            AchievementKind::Publication => "from-purple-500 to-pink-500",
            AchievementKind::Speaking => "from-green-500 to-emerald-500",
            AchievementKind::Other => "from-gray-500 to-gray-600",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: AchievementKind,
    /// `YYYY-MM`
    pub date: &'static str,
    pub issuer: Option<&'static str>,
    pub url: Option<&'static str>,
    pub icon: &'static str,
    pub featured: bool,
}

impl Achievement {
    /// "2023-06" -> "Jun 2023"
    pub fn display_date(&self) -> String {
        NaiveDate::parse_from_str(&format!("{}-01", self.date), "%Y-%m-%d")
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_else(|_| self.date.to_string())
    }
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: 1,
        title: "AWS Certified Solutions Architect",
        description: "Professional level certification for designing distributed systems on AWS",
        kind: AchievementKind::Certification,
        date: "2023-06",
        issuer: Some("Amazon Web Services"),
        url: Some("https://aws.amazon.com/certification/"),
        icon: "🏆",
        featured: true,
    },
    Achievement {
        id: 2,
        title: "Google Cloud Professional Developer",
        description: "Certification for developing applications on Google Cloud Platform",
        kind: AchievementKind::Certification,
        date: "2023-03",
        issuer: Some("Google Cloud"),
        url: Some("https://cloud.google.com/certification"),
        icon: "☁️",
        featured: true,
    },
    Achievement {
        id: 3,
        title: "Best Innovation Award",
        description: "Won first place for developing an AI-powered healthcare solution",
        kind: AchievementKind::Award,
        date: "2022-11",
        issuer: Some("TechCrunch Disrupt"),
        url: None,
        icon: "🥇",
        featured: true,
    },
    Achievement {
        id: 4,
        title: "React Performance Optimization",
        description: "Published article on advanced React performance techniques",
        kind: AchievementKind::Publication,
        date: "2023-08",
        issuer: Some("Medium"),
        url: Some("https://medium.com/@johndoe"),
        icon: "📝",
        featured: false,
    },
    Achievement {
        id: 5,
        title: "React Conference Speaker",
        description: "Spoke about 'Building Scalable React Applications' at React Summit",
        kind: AchievementKind::Speaking,
        date: "2023-05",
        issuer: Some("React Summit"),
        url: Some("https://reactsummit.com"),
        icon: "🎤",
        featured: true,
    },
    Achievement {
        id: 6,
        title: "MongoDB Certified Developer",
        description: "Professional certification for MongoDB database development",
        kind: AchievementKind::Certification,
        date: "2023-01",
        issuer: Some("MongoDB"),
        url: Some("https://www.mongodb.com/certification"),
        icon: "🍃",
        featured: false,
    },
    Achievement {
        id: 7,
        title: "Open Source Contributor",
        description: "Active contributor to major open source projects with 500+ contributions",
        kind: AchievementKind::Other,
        date: "2023-09",
        issuer: Some("GitHub"),
        url: Some("https://github.com/johndoe"),
        icon: "🚀",
        featured: false,
    },
    Achievement {
        id: 8,
        title: "JavaScript Best Practices",
        description: "Published comprehensive guide on modern JavaScript development",
        kind: AchievementKind::Publication,
        date: "2023-07",
        issuer: Some("Dev.to"),
        url: Some("https://dev.to/johndoe"),
        icon: "📚",
        featured: false,
    },
];

/// Achievements matching `kind` (all when `None`), split into featured and
/// the rest. Table order is kept in both halves.
pub fn filter_achievements(
    kind: Option<AchievementKind>,
) -> (Vec<&'static Achievement>, Vec<&'static Achievement>) {
    ACHIEVEMENTS
        .iter()
        .filter(|a| kind.is_none_or(|k| a.kind == k))
        .partition(|a| a.featured)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
    College,
    HigherSecondary,
    Secondary,
}

impl EducationLevel {
    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::College => "College",
            EducationLevel::HigherSecondary => "Higher Secondary",
            EducationLevel::Secondary => "Secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationStep {
    pub id: u32,
    pub level: EducationLevel,
    pub institution: &'static str,
    pub degree: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub details: Option<&'static str>,
}

pub const EDUCATION: &[EducationStep] = &[
    EducationStep {
        id: 1,
        level: EducationLevel::College,
        institution: "Malwa Institute of Science and Technology",
        degree: "B.Tech in Information Technology",
        duration: "2019 – 2023 (4 years)",
        location: "Indore, Madhya Pradesh",
        details: Some("Graduated with 7.51 CGPA, building a strong foundation in software engineering and web development."),
    },
    EducationStep {
        id: 2,
        level: EducationLevel::HigherSecondary,
        institution: "Talent Higher Secondary School",
        degree: "MP Board – 12th (Mathematics stream)",
        duration: "2017 – 2019",
        location: "Indore, Madhya Pradesh",
        details: Some("Focused on Mathematics and Science, building strong problem-solving skills."),
    },
    EducationStep {
        id: 3,
        level: EducationLevel::Secondary,
        institution: "New Bhartiya Vidhiya Mandir",
        degree: "MP Board – 10th",
        duration: "Completed before 2017",
        location: "Indore, Madhya Pradesh",
        details: Some("Completed secondary education with a strong interest in computers and technology."),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_rotation_wraps() {
        let len = PERSONAL_INFO.roles.len();
        assert_eq!(next_role_index(0, len), 1);
        assert_eq!(next_role_index(len - 1, len), 0);
        assert_eq!(next_role_index(3, 0), 0);
    }

    #[test]
    fn test_skill_levels() {
        let s = |level| skill("x", level, "", "");
        assert_eq!(s(95).level_label(), "Master");
        assert_eq!(s(90).level_label(), "Master");
        assert_eq!(s(89).level_label(), "Expert");
        assert_eq!(s(75).level_label(), "Expert");
        assert_eq!(s(60).level_label(), "Intermediate");
        assert_eq!(s(59).level_label(), "Beginner");
        assert_eq!(s(75).tone(), SkillTone::Primary);
        assert_eq!(s(10).tone(), SkillTone::Error);
    }

    #[test]
    fn test_skill_levels_in_range() {
        assert!(all_skills().all(|s| s.level <= 100));
        assert_eq!(
            all_skills().count(),
            FRONTEND_SKILLS.len() + BACKEND_SKILLS.len() + TOOL_SKILLS.len()
        );
    }

    #[test]
    fn test_achievement_date() {
        assert_eq!(ACHIEVEMENTS[0].display_date(), "Jun 2023");
        let odd = Achievement {
            date: "someday",
            ..ACHIEVEMENTS[0]
        };
        assert_eq!(odd.display_date(), "someday");
    }

    #[test]
    fn test_filter_achievements() {
        let (featured, other) = filter_achievements(None);
        assert_eq!(featured.len() + other.len(), ACHIEVEMENTS.len());
        assert!(featured.iter().all(|a| a.featured));
        assert_eq!(featured.first().map(|a| a.id), Some(1));

        let (featured, other) = filter_achievements(Some(AchievementKind::Publication));
        assert!(featured.is_empty());
        assert_eq!(other.iter().map(|a| a.id).collect::<Vec<_>>(), vec![4, 8]);
    }

    #[test]
    fn test_project_lookup() {
        assert_eq!(project_by_id(2).map(|p| p.title), Some("AlphaGen"));
        assert!(project_by_id(99).is_none());
    }
}
