//! Hard-coded page content.
//!
//! Everything here is presentation data: no ids, no persistence, no
//! mutation path.

use chrono::NaiveDate;

/// Page title and meta description.
pub const SITE_TITLE: &str = "Ryan Morrissey";
pub const SITE_DESCRIPTION: &str =
    "Software Engineer, Co-Founder, Builder. Always debugging, occasionally sleeping.";

#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub headline: &'static str,
    pub bio: &'static str,
    pub note: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorkItem {
    pub company: &'static str,
    pub role: &'static str,
    /// Image path; a missing file shows the broken-image placeholder.
    pub logo: &'static str,
    pub logo_alt: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillCategory {
    Language,
    Framework,
    Infrastructure,
    Tooling,
}

impl SkillCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Language => "lang",
            SkillCategory::Framework => "framework",
            SkillCategory::Infrastructure => "infra",
            SkillCategory::Tooling => "tools",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Shipped,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Shipped => "shipped",
            ProjectStatus::InProgress => "in progress",
            ProjectStatus::Planned => "planned",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
    pub status: ProjectStatus,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    pub title: &'static str,
    pub read_on: NaiveDate,
    pub cover: Option<&'static str>,
}

impl Book {
    /// Date in long form, e.g. "April 8, 2024".
    pub fn read_on_text(&self) -> String {
        self.read_on.format("%B %-d, %Y").to_string()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactLink {
    pub label: &'static str,
    pub handle: &'static str,
    pub href: &'static str,
}

/// Everything the page renders.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub profile: Profile,
    pub work: Vec<WorkItem>,
    pub skills: Vec<Skill>,
    pub skills_note: &'static str,
    pub projects: Vec<Project>,
    pub projects_placeholder: &'static str,
    pub reading: Vec<Book>,
    pub contacts: Vec<ContactLink>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::default_content()
    }
}

impl SiteContent {
    pub fn default_content() -> Self {
        Self {
            profile: Profile {
                name: SITE_TITLE,
                tagline: "Software is eating the world!",
                headline: "About, builder, founder, engineer.",
                bio: "Hey I'm Ryan, welcome to my personal site! Here is all things about me :)",
                note: "Site best viewed in Netscape Navigator.",
            },
            work: vec![
                WorkItem {
                    company: "Stripe",
                    role: "Software Engineering Intern",
                    logo: "/pxArt.png",
                    logo_alt: "Stripe logo",
                },
                WorkItem {
                    company: "Induct",
                    role: "Co-Founder",
                    logo: "/pxArt (1).png",
                    logo_alt: "Induct logo",
                },
            ],
            skills: vec![
                skill("Rust", SkillCategory::Language),
                skill("TypeScript", SkillCategory::Language),
                skill("Python", SkillCategory::Language),
                skill("Go", SkillCategory::Language),
                skill("React", SkillCategory::Framework),
                skill("Next.js", SkillCategory::Framework),
                skill("Tailwind", SkillCategory::Framework),
                skill("PostgreSQL", SkillCategory::Infrastructure),
                skill("Docker", SkillCategory::Infrastructure),
                skill("AWS", SkillCategory::Infrastructure),
                skill("Git", SkillCategory::Tooling),
                skill("Linux", SkillCategory::Tooling),
            ],
            skills_note: "💾 Tech stack icons coming soon! Currently brewing in the digital coffee pot...",
            projects: Vec::new(),
            projects_placeholder: "Coming soon... Check back later for updates!",
            reading: vec![Book {
                title: "Tools and Text Editors",
                read_on: NaiveDate::from_ymd_opt(2024, 4, 8).unwrap_or_default(),
                cover: None,
            }],
            // Placeholder handles until real links are filled in
            contacts: vec![
                ContactLink {
                    label: "Email",
                    handle: "hello@example.com",
                    href: "mailto:hello@example.com",
                },
                ContactLink {
                    label: "GitHub",
                    handle: "@github",
                    href: "https://github.com/",
                },
                ContactLink {
                    label: "LinkedIn",
                    handle: "in/linkedin",
                    href: "https://www.linkedin.com/",
                },
            ],
        }
    }
}

fn skill(name: &'static str, category: SkillCategory) -> Skill {
    Skill { name, category }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_date_format() {
        let content = SiteContent::default_content();
        assert_eq!(content.reading[0].read_on_text(), "April 8, 2024");
    }

    #[test]
    fn test_work_history_has_logos() {
        let content = SiteContent::default_content();
        assert_eq!(content.work.len(), 2);
        assert!(content.work.iter().all(|w| w.logo.starts_with('/')));
    }

    #[test]
    fn test_profile_matches_title() {
        assert_eq!(SiteContent::default().profile.name, SITE_TITLE);
    }
}
