//! Fixed configuration for the page. Server settings (address, site root,
//! reload port) come from `[package.metadata.leptos]` instead.

/// Vertical scroll offset, in CSS pixels, past which the back-to-top button shows.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// Fraction of a section that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Pulls the viewport's bottom edge up so sections reveal slightly early.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Served out of `public/` by the static file handler.
pub const RESUME_PATH: &str = "/resume.pdf";
pub const RESUME_FILENAME: &str = "Ayush_Sinha_Resume.pdf";

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Identifiers for the hosted email relay. The relay treats all three as
/// public; the template decides where mail ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: &'static str,
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

impl RelayConfig {
    pub const DEFAULT: RelayConfig = RelayConfig {
        endpoint: EMAILJS_ENDPOINT,
        service_id: "service_portfolio",
        template_id: "template_contact",
        public_key: "portfolio_public_key",
    };
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Year the site was built, for the footer. Set by build.rs.
pub fn build_year() -> i32 {
    parse_year(env!("BUILD_TIME")).unwrap_or(2024)
}

fn parse_year(timestamp: &str) -> Option<i32> {
    use chrono::{DateTime, Datelike};

    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2024-11-02T10:15:00+00:00"), Some(2024));
        assert_eq!(parse_year("not a date"), None);
    }

    #[test]
    fn test_build_year_is_plausible() {
        assert!(build_year() >= 2024);
    }

    #[test]
    fn test_root_margin_biases_bottom_edge() {
        let parts = REVEAL_ROOT_MARGIN.split_whitespace().collect::<Vec<_>>();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[2], "-100px");
    }
}
