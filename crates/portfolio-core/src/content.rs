//! Static portfolio content.
//!
//! Everything the page shows lives here as plain data; the app only decides
//! how to lay it out.

use chrono::{Datelike, NaiveDate};

pub const OWNER_NAME: &str = "Warathep";
pub const OWNER_TITLE: &str = "Software Engineer";
pub const PORTRAIT_PATH: &str = "/me.jpg";
pub const CONTACT_EMAIL: &str = "warathep187@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/Warathep187";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/warathep-komwongsa-092423231";
pub const FOOTER_TEXT: &str = "\u{00A9} 2025 Warathep. Crafted with lots of \u{2615}";

/// First working day, used for the "N years of experience" line.
pub fn career_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 10, 1).unwrap_or_default()
}

/// Calendar-year difference between `start` and `today`.
///
/// Deliberately coarse: October 2023 to January 2024 already counts as one.
pub fn years_of_experience(start: NaiveDate, today: NaiveDate) -> i32 {
    today.year() - start.year()
}

/// Hero paragraphs for the about section.
pub fn bio(years: i32) -> [String; 2] {
    [
        format!(
            "Passionate software engineer with {years} years of experience specializing in \
             scalable software development and platform engineering. I thrive on building \
             robust, distributed systems that can handle massive scale while maintaining \
             reliability and performance. My expertise spans modern web development, \
             sophisticated CI/CD pipelines, and cloud-native infrastructure."
        ),
        "I believe in creating elegant solutions that not only solve today's problems but are \
         architected to evolve with tomorrow's challenges."
            .to_string(),
    ]
}

// ============================================================================
// Skills
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub detail: Option<&'static str>,
}

const fn skill(name: &'static str, detail: Option<&'static str>) -> Skill {
    Skill { name, detail }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    Server,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub icon: SkillIcon,
    pub skills: &'static [Skill],
}

pub const SKILL_GROUPS: [SkillGroup; 2] = [
    SkillGroup {
        title: "Software Development",
        icon: SkillIcon::Code,
        skills: &[
            skill("JavaScript / TypeScript", Some("Node.js, Next.js, Vanilla JS")),
            skill("Next.js", Some("Tailwind CSS, DaisyUI, etc.")),
            skill("Golang", None),
            skill("Python", Some("LLM Application, RAG, Machine Learning")),
            skill("NoSQL", Some("MongoDB, Redis, Elasticsearch")),
            skill("SQL", Some("MySQL, PostgreSQL")),
            skill("Event Streaming", Some("Kafka, ksqlDB")),
            skill("Testing", Some("Jest, Cypress")),
            skill("Shell Scripting", Some("Bash, Zsh")),
        ],
    },
    SkillGroup {
        title: "Platform Engineering",
        icon: SkillIcon::Server,
        skills: &[
            skill("Docker", None),
            skill("Kubernetes", None),
            skill("AWS", Some("EC2, EKS, etc.")),
            skill("CI/CD", Some("Gitlab CI, Jenkins, ArgoCD")),
            skill("Terraform", None),
            skill("Ansible", None),
            skill("Monitoring", Some("Grafana, Prometheus, Jaeger, etc.")),
            skill("Linux", Some("System Administration")),
            skill("Cloudflare", Some("Cloudflare Tunnel (for home server)")),
        ],
    },
];

// ============================================================================
// Education
// ============================================================================

/// Marker drawn on the timeline next to an entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineIcon {
    GraduationCap,
    Image(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub title: &'static str,
    pub period: &'static str,
    pub school: &'static str,
    pub school_url: &'static str,
    pub summary: &'static str,
    pub focus: &'static [&'static str],
    pub icon: TimelineIcon,
}

pub const EDUCATION: [Education; 2] = [
    Education {
        title: "Bachelor of Computer Science",
        period: "2020 - 2024",
        school: "Chiang Mai University",
        school_url: "https://www.cmu.ac.th",
        summary: "Specialized in Software Engineering with focus on database systems, software \
                  engineering, system design, and software architecture.",
        focus: &[
            "Database Systems",
            "Software Engineering",
            "System Design",
            "Software Architecture",
        ],
        icon: TimelineIcon::GraduationCap,
    },
    Education {
        title: "Secondary School",
        period: "2017 - 2020",
        school: "Yupparaj Wittayalai School",
        school_url: "https://www.yupparaj.ac.th/index.php",
        summary: "Science and Mathematics Program",
        focus: &[],
        icon: TimelineIcon::Image("/high-school-icon.svg"),
    },
];

// ============================================================================
// Experience
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: ExternalLink,
    pub period: &'static str,
    pub product: ExternalLink,
    pub highlights: &'static [&'static str],
    pub tags: &'static [&'static str],
}

const THINKNET: ExternalLink = ExternalLink {
    label: "THiNKNET Co. Ltd.",
    url: "https://www.thinknet.co.th",
};

const JOBTHAI: ExternalLink = ExternalLink {
    label: "JobThai",
    url: "https://www.jobthai.com",
};

pub const EXPERIENCE: [Experience; 2] = [
    Experience {
        role: "Software Engineer",
        company: THINKNET,
        period: "2023 - Present",
        product: JOBTHAI,
        highlights: &[
            "Enhanced a Node.js service performance by applying Multi-threading technique to \
             increase throughput to 4x. Also, apply thread pooling to make the service more \
             efficient.",
            "Enhanced a Node.js (Express.js) service performance by developing a new Validation \
             Library, resulting in a 50% increase in throughput.",
            "etc.",
        ],
        tags: &["Node.js", "Microservices"],
    },
    Experience {
        role: "Software Engineer Intern",
        company: THINKNET,
        period: "6 Months",
        product: JOBTHAI,
        highlights: &[
            "Developed a library for rendering Cookie Consent UI for the company's websites.",
            "Built End-to-End testing by using Cypress.js.",
        ],
        tags: &["Vanilla JavaScript", "Node.js", "Cypress.js"],
    },
];

// ============================================================================
// Projects
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub built_on: Option<ExternalLink>,
    pub tags: &'static [&'static str],
    pub demo_url: &'static str,
    pub repo_url: &'static str,
}

pub const PROJECTS: [Project; 1] = [Project {
    title: "MGSH (MongoDB Shell Helper)",
    description: "A simple command-line tool to manage and connect to multiple MongoDB \
                  instances easily. This tool helps you organize and quickly access different \
                  MongoDB connections across various environments (development, production, \
                  etc.).",
    built_on: Some(ExternalLink {
        label: "Mongo Shell",
        url: "https://www.mongodb.com/docs/mongodb-shell/",
    }),
    tags: &["Shell Script"],
    demo_url: "https://github.com/Warathep187/mgsh/blob/main/docs/demo.gif",
    repo_url: "https://github.com/Warathep187/mgsh",
}];

// ============================================================================
// Contact
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactAction {
    /// Copy the address to the clipboard instead of opening a mail client
    CopyEmail(&'static str),
    OpenUrl(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactIcon {
    Mail,
    GitHub,
    LinkedIn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub icon: ContactIcon,
    pub action: ContactAction,
}

pub const CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        label: "Email",
        icon: ContactIcon::Mail,
        action: ContactAction::CopyEmail(CONTACT_EMAIL),
    },
    ContactLink {
        label: "GitHub",
        icon: ContactIcon::GitHub,
        action: ContactAction::OpenUrl(GITHUB_URL),
    },
    ContactLink {
        label: "LinkedIn",
        icon: ContactIcon::LinkedIn,
        action: ContactAction::OpenUrl(LINKEDIN_URL),
    },
];
