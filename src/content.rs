//! The content store: every piece of text and every link the page shows.
//!
//! Built at compile time and never mutated. Views read it through
//! [`portfolio`].

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Briefcase,
    Code,
    Cpu,
    Database,
    ExternalLink,
    Github,
    GraduationCap,
    Linkedin,
    Mail,
    Terminal,
}

impl Icon {
    fn paths(self) -> &'static str {
        match self {
            Self::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            Self::Briefcase => {
                r#"<rect width="20" height="14" x="2" y="7" rx="2" ry="2"/><path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#
            }
            Self::Code => {
                r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#
            }
            Self::Cpu => {
                r#"<rect width="16" height="16" x="4" y="4" rx="2"/><rect width="6" height="6" x="9" y="9" rx="1"/><path d="M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2"/>"#
            }
            Self::Database => {
                r#"<ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M3 5v14a9 3 0 0 0 18 0V5"/><path d="M3 12a9 3 0 0 0 18 0"/>"#
            }
            Self::ExternalLink => {
                r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#
            }
            Self::Github => {
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
            }
            Self::GraduationCap => {
                r#"<path d="M22 10v6M2 10l10-5 10 5-10 5z"/><path d="M6 12v5c3 3 9 3 12 0v-5"/>"#
            }
            Self::Linkedin => {
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#
            }
            Self::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            Self::Terminal => {
                r#"<polyline points="4 17 10 11 4 5"/><line x1="12" x2="20" y1="19" y2="19"/>"#
            }
        }
    }

    /// Inline SVG markup, stroked with `currentColor` so it follows the theme.
    pub fn svg(self, size: u32) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="icon" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{}</svg>"#,
            self.paths()
        )
    }
}

#[derive(Debug, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub about: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Debug, PartialEq)]
pub struct EducationEntry {
    pub school: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Debug, PartialEq)]
pub struct ProjectLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub links: &'static [ProjectLink],
}

#[derive(Debug, PartialEq)]
pub struct SkillEntry {
    pub name: &'static str,
    pub level: u8,
    pub icon: Icon,
}

impl SkillEntry {
    /// Bar width as a percentage of the track. Levels above 100 fill the track.
    pub fn bar_width(&self) -> u8 {
        self.level.min(100)
    }

    pub fn bar_style(&self) -> String {
        format!("width: {}%;", self.bar_width())
    }
}

#[derive(Debug, PartialEq)]
pub struct SocialLinks {
    pub linkedin: &'static str,
    /// Placeholder until the profile is public.
    pub github: &'static str,
    /// Bare address; see [`SocialLinks::mailto`].
    pub email: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: String,
    pub icon: Icon,
}

impl SocialLinks {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Footer order: LinkedIn, GitHub, e-mail.
    pub fn links(&self) -> [SocialLink; 3] {
        [
            SocialLink {
                label: "LinkedIn",
                href: self.linkedin.to_string(),
                icon: Icon::Linkedin,
            },
            SocialLink {
                label: "GitHub",
                href: self.github.to_string(),
                icon: Icon::Github,
            },
            SocialLink {
                label: "Email",
                href: self.mailto(),
                icon: Icon::Mail,
            },
        ]
    }
}

#[derive(Debug, PartialEq)]
pub struct SectionHeading {
    pub ordinal: &'static str,
    pub title: &'static str,
}

/// Copy that sits in the page layout rather than in a list.
#[derive(Debug, PartialEq)]
pub struct PageCopy {
    pub availability: &'static str,
    pub headline_lead: &'static str,
    pub headline_highlight: &'static str,
    pub headline_trail: &'static str,
    pub introduction: &'static str,
    pub scroll_hint: &'static str,
    pub about: SectionHeading,
    pub current_role_lead: &'static str,
    pub current_employer: &'static str,
    pub current_role_trail: &'static str,
    pub skills_heading: &'static str,
    pub journey: SectionHeading,
    pub professional_heading: &'static str,
    pub academic_heading: &'static str,
    pub projects: SectionHeading,
    pub contact_heading: &'static str,
    pub contact_body: &'static str,
    pub contact_action: &'static str,
    pub copyright: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ContentStore {
    pub profile: Profile,
    pub copy: PageCopy,
    pub experience: &'static [ExperienceEntry],
    pub education: &'static [EducationEntry],
    pub projects: &'static [ProjectEntry],
    pub skills: &'static [SkillEntry],
    pub socials: SocialLinks,
}

static PORTFOLIO: ContentStore = ContentStore {
    profile: Profile {
        name: "Ruchira Dasanayake",
        initials: "RD",
        role: "Associate Software Engineer & Data Scientist",
        tagline: "Exploring the possibilities of tomorrow through Data Science & AI.",
        location: "Colombo, Sri Lanka",
        about: "I am a passionate final-year undergraduate at SLIIT, dedicated to honing my programming skills and nurturing a profound love for mathematics. At 23 years old, I am poised to transition into the captivating field of Data Science, blending Software Engineering with AI innovation.",
    },
    copy: PageCopy {
        availability: "Available for hire",
        headline_lead: "Crafting ",
        headline_highlight: "Intelligence",
        headline_trail: "from Data.",
        introduction: "I am a Data Scientist & AI Engineer bridging the gap between raw data and actionable intelligence.",
        scroll_hint: "SCROLL TO EXPLORE",
        about: SectionHeading {
            ordinal: "01.",
            title: "The Narrative",
        },
        current_role_lead: "Currently at ",
        current_employer: "Innobot Health",
        current_role_trail: ", I integrate robotic process automation with modern software engineering practices. My work is not just about writing code; it's about designing systems that can learn, adapt, and scale.",
        skills_heading: "Technical Arsenal",
        journey: SectionHeading {
            ordinal: "02.",
            title: "The Journey",
        },
        professional_heading: "Professional",
        academic_heading: "Academic",
        projects: SectionHeading {
            ordinal: "03.",
            title: "Creations",
        },
        contact_heading: "Ready to Collaborate?",
        contact_body: "I am currently open to new opportunities. Whether you have a question or just want to say hi, I'll try my best to get back to you!",
        contact_action: "Say Hello",
        copyright: "© 2025 RUCHIRA DASANAYAKE. ALL RIGHTS RESERVED.",
    },
    experience: &[ExperienceEntry {
        company: "Innobot Health",
        role: "Associate Software Engineer",
        period: "Dec 2024 - Present",
        kind: "Full-time · Hybrid",
        description: "Specializing in Python, Robotic Process Automation (RPA), and building intelligent software solutions for healthcare.",
        icon: Icon::Briefcase,
    }],
    education: &[
        EducationEntry {
            school: "SLIIT",
            degree: "BSc (Hons) in Information Technology (Data Science)",
            period: "2022 - 2026",
            description: "Focusing on Database Management Systems, Machine Learning, and Big Data Analytics.",
            icon: Icon::GraduationCap,
        },
        EducationEntry {
            school: "Nalanda College Colombo",
            degree: "Secondary Education",
            period: "2013 - 2022",
            description: "Communication and Critical Thinking focus.",
            icon: Icon::GraduationCap,
        },
    ],
    projects: &[
        ProjectEntry {
            title: "Text-Sage",
            category: "NLP & Web Analytics",
            description: "Information Retrieval and Web Analytics module project. A smart text analysis tool designed to extract insights from unstructured data.",
            tech: &["Python", "NLP", "React"],
            links: &[ProjectLink {
                label: "View",
                url: "#",
            }],
        },
        ProjectEntry {
            title: "End-to-End DW/BI Solution",
            category: "Data Engineering",
            description: "A complete Data Warehousing and Business Intelligence solution using Brazilian E-Commerce datasets for advanced analytics.",
            tech: &["Data Warehousing", "ETL", "PowerBI"],
            links: &[],
        },
        ProjectEntry {
            title: "House Price Prediction",
            category: "Machine Learning",
            description: "Regression model based system developed using US-based Kaggle datasets to predict housing market trends.",
            tech: &["Python", "Scikit-Learn", "Pandas"],
            links: &[],
        },
    ],
    skills: &[
        SkillEntry {
            name: "Python",
            level: 90,
            icon: Icon::Terminal,
        },
        SkillEntry {
            name: "Data Science",
            level: 85,
            icon: Icon::Database,
        },
        SkillEntry {
            name: "Machine Learning",
            level: 80,
            icon: Icon::Cpu,
        },
        SkillEntry {
            name: "RPA",
            level: 75,
            icon: Icon::Code,
        },
        SkillEntry {
            name: "Java",
            level: 70,
            icon: Icon::Code,
        },
        SkillEntry {
            name: "AWS Cloud",
            level: 65,
            icon: Icon::Database,
        },
    ],
    socials: SocialLinks {
        linkedin: "https://www.linkedin.com/in/ruchira-dasanayake-5baa27274/",
        github: "#",
        email: "contact@ruchira.dev",
    },
};

pub fn portfolio() -> &'static ContentStore {
    &PORTFOLIO
}
