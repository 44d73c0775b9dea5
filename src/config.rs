//! Configuration handling for the site

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::forms::FormsConfig;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "SITE_FORMS_CONFIG";

/// Everything a site fork edits: identity, navigation and footer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub site: SiteConfig,
    #[serde(default)]
    pub nav: NavConfig,
    #[serde(default)]
    pub footer: FooterConfig,
}

/// Site identity and subsystem settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Display name used in titles and feeds
    pub name: String,
    /// Name shown in header and footer
    pub brand_name: String,
    /// One or two line description
    pub tagline: String,
    /// Full site URL with protocol and no trailing slash
    pub url: String,
    /// BCP-47 language tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    pub author: String,
    pub contact_email: String,
    /// Social profile links keyed by network name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub forms: FormsConfig,
    #[serde(default)]
    pub features: FeaturesConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Example Site".to_string(),
            brand_name: "Example".to_string(),
            tagline: "A marketing site for your product.".to_string(),
            url: "https://example.com".to_string(),
            locale: Some("en".to_string()),
            author: "Your Name or Company".to_string(),
            contact_email: "hello@example.com".to_string(),
            social: None,
            analytics: AnalyticsConfig::default(),
            forms: FormsConfig::default(),
            features: FeaturesConfig::default(),
        }
    }
}

/// Header navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NavConfig {
    #[serde(default)]
    pub items: Vec<NavItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_demo: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl NavItem {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            active: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FooterConfig {
    /// Year or range, e.g. "2024-2025"
    #[serde(default)]
    pub copyright_year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav: Option<Vec<NavItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<FooterColumn>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<NavItem>,
}

/// Google Tag Manager settings; consumed by the page templates only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsConfig {
    /// Container id such as "GTM-XXXX"; `None` disables GTM
    #[serde(default)]
    pub gtm_id: Option<String>,
    #[serde(default)]
    pub consent_mode: bool,
    #[serde(default)]
    pub custom_attributes: BTreeMap<String, serde_json::Value>,
}

/// Feature flags for whole subsystems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    pub blog: bool,
    pub rss: bool,
    pub demo: bool,
    pub pricing: bool,
    pub testimonials: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            blog: true,
            rss: true,
            demo: false,
            pricing: true,
            testimonials: true,
        }
    }
}

impl AppConfig {
    /// Get the default config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "site-forms", "site-forms")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Pick the config file: explicit path, then `$SITE_FORMS_CONFIG`,
    /// then the platform config directory
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .or_else(Self::config_path)
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match Self::resolve_path(explicit) {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
