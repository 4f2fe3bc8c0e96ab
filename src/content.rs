//! Static page content. Everything here is fixed at build time and never
//! mutated; the view layer only borrows from these tables.

use crate::config::RESUME_PATH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    /// Site path of the downloadable resume.
    pub resume: &'static str,
}

/// A content block of the page, addressable by its anchor id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
}

impl SectionId {
    /// The DOM id, also used for `#fragment` deep links.
    pub fn id(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Contact => "Contact",
        }
    }

    #[cfg(test)]
    fn from_id(id: &str) -> Option<Self> {
        PAGE_SECTIONS.iter().copied().find(|s| s.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Web,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub technologies: &'static str,
    pub category: ProjectCategory,
    pub description: &'static [&'static str],
    /// Render the first description line as a paragraph, the rest as bullets.
    pub lead_paragraph: bool,
}

impl Project {
    /// Splits the description into the optional lead paragraph and the bullets.
    pub fn lead_and_bullets(&self) -> (Option<&'static str>, &'static [&'static str]) {
        match self.description.split_first() {
            Some((first, rest)) if self.lead_paragraph => (Some(*first), rest),
            _ => (None, self.description),
        }
    }
}

/// Shared shape of experience and education entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub organization: &'static str,
    pub dates: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Social,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub kind: ContactKind,
    pub label: &'static str,
    pub uri: &'static str,
}

impl ContactChannel {
    /// Social links leave the site; mail and phone hand off to the OS.
    pub fn is_external(&self) -> bool {
        self.kind == ContactKind::Social
    }
}

pub const PROFILE: Profile = Profile {
    name: "Ayush Sinha",
    title: "Master's Student in Electrical and Computer Engineering",
    summary: "Passionate about developing efficient and scalable software solutions. Seeking to build a career in the tech industry by utilizing skills in programming, software design, and problem-solving.",
    resume: RESUME_PATH,
};

/// Sections linked from the header, in display order.
pub const NAV_SECTIONS: &[SectionId] = &[
    SectionId::About,
    SectionId::Skills,
    SectionId::Projects,
    SectionId::Experience,
    SectionId::Contact,
];

/// Every section rendered on the page, in document order.
pub const PAGE_SECTIONS: &[SectionId] = &[
    SectionId::About,
    SectionId::Skills,
    SectionId::Projects,
    SectionId::Experience,
    SectionId::Education,
    SectionId::Contact,
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: "Languages",
        skills: &["Python", "C++", "JavaScript", "TypeScript", "HTML", "CSS"],
    },
    SkillGroup {
        category: "Web Development",
        skills: &[
            "Angular.js",
            "React.js",
            "Node.js",
            "Material-UI",
            "Elysia.js",
            "Bun",
        ],
    },
    SkillGroup {
        category: "Database Management",
        skills: &["PostgreSQL"],
    },
    SkillGroup {
        category: "Developer Tools",
        skills: &["VS Code", "Git", "Docker", "NPM", "GitHub"],
    },
    SkillGroup {
        category: "Technologies/Frameworks",
        skills: &["Docker", "Linux", "Git", "AWS"],
    },
    SkillGroup {
        category: "Project Management",
        skills: &["Agile", "Scrum", "Kanban"],
    },
    SkillGroup {
        category: "Libraries",
        skills: &[
            "Pandas",
            "NumPy",
            "Matplotlib",
            "TensorFlow",
            "PyTorch",
            "Scikit-Learn",
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Student Housing Booking Website",
        technologies: "Angular, Node.js, Elysia.js, Bun, Docker, PostgreSQL",
        category: ProjectCategory::Web,
        description: &[
            "Built a dynamic housing booking platform with real-time property search filters for location, pricing, and room types.",
            "Improved search efficiency by 25% through dynamic filtering.",
            "Reduced server startup time by 60% with Bun runtime and Docker containerization.",
            "Achieved 100% test coverage with 144+ automated tests to ensure full reliability.",
            "Focused on scalable design and fast deployment.",
        ],
        lead_paragraph: true,
    },
    Project {
        title: "Traffic Intersection Surveillance",
        technologies: "Python, C++, Graph Theory, Algorithms",
        category: ProjectCategory::Other,
        description: &[
            "Designed an optimization tool to help law enforcement place cameras across city intersections efficiently.",
            "Reduced hardware requirements by 40% using advanced graph algorithms.",
            "Ensured full surveillance coverage with minimal camera overlap.",
            "Applied graph theory solutions to real-world infrastructure challenges.",
        ],
        lead_paragraph: true,
    },
    Project {
        title: "Extending Wlang with Functions",
        technologies: "Python, TatSu",
        category: ProjectCategory::Other,
        description: &[
            "Enhanced Wlang's symbolic execution engine by introducing formal function specifications ('requires'/'ensures' clauses).",
            "Achieved 100% test coverage across parser and execution modules.",
            "Improved software reliability by reducing assertion failures.",
            "Aligned symbolic execution with modern formal verification practices (inspired by Dafny).",
        ],
        lead_paragraph: true,
    },
];

pub const EXPERIENCE: &[TimelineEntry] = &[TimelineEntry {
    title: "Electrical Intern",
    organization: "Automation Network and Services Pvt Ltd, India",
    dates: "May 2022 – June 2022",
    bullets: &[
        "Ensured proper functionality of control system machines by testing and verifying connections before client delivery.",
        "Improved troubleshooting by reviewing and interpreting circuit diagrams, contributing to faster and more efficient machine testing processes.",
        "Enhanced machine performance by detecting and fixing malfunctions during hands-on testing, ensuring high-quality system output.",
    ],
}];

pub const EDUCATION: &[TimelineEntry] = &[
    TimelineEntry {
        title: "Master of Engineering in Electrical and Computer Engineering",
        organization: "University of Waterloo",
        dates: "Sept 2023 – Dec 2024",
        bullets: &[],
    },
    TimelineEntry {
        title: "Bachelor of Technology in Electrical Engineering",
        organization: "Kalinga Institute of Industrial Technology (KIIT)",
        dates: "Aug 2019 – June 2023",
        bullets: &[],
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        kind: ContactKind::Email,
        label: "Email",
        uri: "mailto:ayushsinha960@gmail.com",
    },
    ContactChannel {
        kind: ContactKind::Phone,
        label: "Phone",
        uri: "tel:+15485772138",
    },
    ContactChannel {
        kind: ContactKind::Social,
        label: "LinkedIn",
        uri: "https://www.linkedin.com/in/ayushh-sinha",
    },
    ContactChannel {
        kind: ContactKind::Social,
        label: "GitHub",
        uri: "https://github.com/ayushhsinha",
    },
];
