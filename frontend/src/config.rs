use std::sync::OnceLock;

use log::{warn, Level};
use serde::Deserialize;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

const SITE_JSON: &str = include_str!("../site.json");

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Default for ContactDetails {
    fn default() -> Self {
        ContactDetails {
            email: "hello@example.com".to_string(),
            phone: String::new(),
            address: String::new(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub preloader_delay_ms: u32,
    pub form_reset_ms: u32,
    pub nav_scroll_threshold: f64,
    pub footer_breakpoint: f64,
    pub marquee_seconds: f64,
    pub submit_label: String,
    pub sent_label: String,
    pub contact: ContactDetails,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            brand: "Multipage".to_string(),
            preloader_delay_ms: 800,
            form_reset_ms: 3000,
            nav_scroll_threshold: 50.0,
            footer_breakpoint: 640.0,
            marquee_seconds: 40.0,
            submit_label: "Send Message".to_string(),
            sent_label: "Message Sent!".to_string(),
            contact: ContactDetails::default(),
        }
    }
}

impl SiteConfig {
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<SiteConfig>(raw) {
            Ok(config) => config.with_usable_timings(),
            Err(e) => {
                warn!("Invalid site config, using defaults: {}", e);
                SiteConfig::default()
            }
        }
    }

    // A loop with no duration finishes on its first frame and freezes.
    fn with_usable_timings(mut self) -> Self {
        if !(self.marquee_seconds.is_finite() && self.marquee_seconds > 0.0) {
            warn!("marquee_seconds must be positive, got {}", self.marquee_seconds);
            self.marquee_seconds = SiteConfig::default().marquee_seconds;
        }
        self
    }
}

pub fn site() -> &'static SiteConfig {
    static SITE: OnceLock<SiteConfig> = OnceLock::new();
    SITE.get_or_init(|| SiteConfig::parse(SITE_JSON))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_matches_the_documented_timings() {
        let config = SiteConfig::parse(SITE_JSON);
        assert_eq!(config.preloader_delay_ms, 800);
        assert_eq!(config.form_reset_ms, 3000);
        assert_eq!(config.footer_breakpoint, 640.0);
        assert_eq!(config.nav_scroll_threshold, 50.0);
        assert_eq!(config.sent_label, "Message Sent!");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = SiteConfig::parse(r#"{ "brand": "Studio" }"#);
        assert_eq!(config.brand, "Studio");
        assert_eq!(config.marquee_seconds, 40.0);
        assert_eq!(config.contact, ContactDetails::default());
    }

    #[test]
    fn non_positive_marquee_duration_is_replaced() {
        assert_eq!(SiteConfig::parse(r#"{ "marquee_seconds": 0 }"#).marquee_seconds, 40.0);
        assert_eq!(SiteConfig::parse(r#"{ "marquee_seconds": -5.5 }"#).marquee_seconds, 40.0);
        assert_eq!(SiteConfig::parse(r#"{ "marquee_seconds": 25 }"#).marquee_seconds, 25.0);
    }

    #[test]
    fn malformed_json_gives_defaults() {
        assert_eq!(SiteConfig::parse("{ nope"), SiteConfig::default());
    }
}
