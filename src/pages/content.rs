//! Static portfolio content.

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tech: &'static [&'static str],
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Realtime Collaboration Server",
        summary: "WebSocket backend that keeps shared documents in sync across hundreds of editors.",
        tech: &["Rust", "Tokio", "PostgreSQL"],
    },
    Project {
        title: "Design System",
        summary: "Accessible component library used by four product teams.",
        tech: &["TypeScript", "CSS", "Storybook"],
    },
    Project {
        title: "Metrics Pipeline",
        summary: "Streaming ingestion of application metrics with per-tenant retention.",
        tech: &["Go", "Kafka", "ClickHouse"],
    },
];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        skills: &["HTML", "CSS", "JavaScript", "Accessibility"],
    },
    SkillCategory {
        title: "Backend",
        skills: &["Rust", "Go", "SQL", "REST"],
    },
    SkillCategory {
        title: "Tooling",
        skills: &["Git", "Docker", "CI/CD", "Linux"],
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: "8+", label: "Years Experience" },
    Stat { value: "40+", label: "Projects Shipped" },
    Stat { value: "12", label: "Open Source Libraries" },
];
