//! Content sections shared by both layouts.

use dioxus::prelude::*;
use folio_core::content::{Book, ContactLink, Project, Skill, WorkItem};

use crate::state::use_site;

/// Name, tagline and the short about block.
#[component]
pub fn ProfileHeader() -> Element {
    let ctx = use_site();
    let content = ctx.content.read();
    let profile = &content.profile;

    rsx! {
        header { class: "page-header",
            h1 { class: "page-title", "{profile.name}" }
            p { class: "tagline", "{profile.tagline}" }
            div { class: "about",
                h2 { class: "retro-text", "{profile.headline}" }
                p { class: "muted", "{profile.bio}" }
                p { class: "site-note", "{profile.note}" }
            }
        }
    }
}

/// Titled section with the dashed divider.
#[component]
pub fn PageSection(title: String, children: Element) -> Element {
    rsx! {
        section { class: "section",
            div { class: "section-divider",
                h2 { class: "retro-text", "{title}" }
                {children}
            }
        }
    }
}

#[component]
pub fn WorkList() -> Element {
    let ctx = use_site();
    let work: Vec<WorkItem> = ctx.content.read().work.clone();

    rsx! {
        div { class: "work-list",
            for item in work {
                div { class: "work-item", key: "{item.company}",
                    div { class: "work-logo",
                        img { src: "{item.logo}", alt: "{item.logo_alt}" }
                    }
                    div { class: "work-body",
                        div { class: "work-company-row",
                            h3 { class: "work-company", "{item.company}" }
                            span { class: "muted", "→" }
                        }
                        p { class: "work-role", "{item.role}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SkillsGrid() -> Element {
    let ctx = use_site();
    let content = ctx.content.read();
    let skills: Vec<Skill> = content.skills.clone();
    let note = content.skills_note;

    rsx! {
        div { class: "skills-grid",
            for (i, skill) in skills.into_iter().enumerate() {
                div { class: "skill-tile pixel-border", key: "{skill.name}",
                    div { class: "skill-badge", "{i + 1}" }
                    span { class: "skill-name", "{skill.name}" }
                    span { class: "skill-category", "{skill.category.label()}" }
                }
            }
        }
        div { class: "callout pixel-border", "{note}" }
    }
}

#[component]
pub fn ProjectsList() -> Element {
    let ctx = use_site();
    let content = ctx.content.read();
    let projects: Vec<Project> = content.projects.clone();
    let placeholder = content.projects_placeholder;

    rsx! {
        if projects.is_empty() {
            div { class: "callout pixel-border", "{placeholder}" }
        } else {
            for project in projects {
                div { class: "project-card pixel-border", key: "{project.name}",
                    h3 { class: "book-title", "{project.name}" }
                    p { class: "muted", "{project.summary}" }
                    span { class: "project-status", "{project.status.label()}" }
                }
            }
        }
    }
}

#[component]
pub fn ReadingList() -> Element {
    let ctx = use_site();
    let books: Vec<Book> = ctx.content.read().reading.clone();

    rsx! {
        div {
            for book in books {
                div { class: "book-card pixel-border", key: "{book.title}",
                    if let Some(cover) = book.cover {
                        img { class: "book-cover", src: "{cover}", alt: "{book.title} cover" }
                    }
                    div {
                        h3 { class: "book-title", "{book.title}" }
                        p { class: "muted", "{book.read_on_text()}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ContactList() -> Element {
    let ctx = use_site();
    let contacts: Vec<ContactLink> = ctx.content.read().contacts.clone();

    rsx! {
        ul { class: "contact-list",
            for link in contacts {
                li { class: "contact-item", key: "{link.label}",
                    span { class: "contact-label", "{link.label}" }
                    a { href: "{link.href}", target: "_blank", "{link.handle}" }
                }
            }
        }
    }
}
