//! Personal portfolio page
//!
//! This crate provides a Dioxus desktop application rendering the profile
//! page in either a single-page or a sidebar/tab layout.

pub mod cli;
pub mod components;
pub mod platform;
pub mod state;
pub mod theme;

/// CSS styles embedded at compile time.
pub const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Extra `<head>` content: font, description and the stylesheet.
pub fn custom_head() -> String {
    format!(
        r#"
        <meta name="description" content="{description}">
        <link rel="preconnect" href="https://fonts.googleapis.com">
        <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
        <link href="https://fonts.googleapis.com/css2?family=DotGothic16&display=swap" rel="stylesheet">
        <title>{title}</title>
        <style>{styles}</style>
        "#,
        description = folio_core::SITE_DESCRIPTION,
        title = folio_core::SITE_TITLE,
        styles = STYLES_CSS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_head_has_metadata_and_styles() {
        let head = custom_head();
        assert!(head.contains("<title>Ryan Morrissey</title>"));
        assert!(head.contains("occasionally sleeping"));
        assert!(head.contains("DotGothic16"));
        assert!(head.contains("[data-theme=\"dark\"]"));
    }
}
