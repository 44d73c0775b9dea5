//! Forms configuration and per-call resolution

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::Backend;

/// Site-wide forms configuration.
///
/// Built once at startup and never mutated; individual forms may override
/// any field through [`FormsOverrides`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormsConfig {
    /// Backend used when a form does not pick one
    #[serde(default)]
    pub default_backend: Backend,
    /// Web3Forms access key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web3forms_key: Option<String>,
    /// Endpoint for the generic `api` backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Formspree form endpoint, e.g. `https://formspree.io/f/xyz`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formspree_endpoint: Option<String>,
    /// Formspark project id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formspar_project_id: Option<String>,
    /// Reserved: no adapter reads reCAPTCHA settings yet
    #[serde(default)]
    pub recaptcha_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recaptcha_site_key: Option<String>,
}

/// Per-form partial override of [`FormsConfig`].
///
/// `default_backend` is the raw name given by the caller; it is only checked
/// when the submission is dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormsOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_backend: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web3forms_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formspree_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formspar_project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recaptcha_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recaptcha_site_key: Option<String>,
}

impl FormsOverrides {
    /// Override only the backend
    pub fn backend(name: impl Into<String>) -> Self {
        Self {
            default_backend: Some(name.into()),
            ..Default::default()
        }
    }
}

/// Configuration for a single submission after merging overrides
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedFormConfig {
    /// Backend name requested for this call
    pub backend: String,
    pub web3forms_key: Option<String>,
    pub api_url: Option<String>,
    pub formspree_endpoint: Option<String>,
    pub formspar_project_id: Option<String>,
    pub recaptcha_enabled: bool,
    pub recaptcha_site_key: Option<String>,
    /// Not populated by [`resolve`]; adapters read the fields above
    pub action_url: Option<String>,
    pub access_key: Option<String>,
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
}

/// Merge the global config with an optional override, field by field.
///
/// Fields set in the override win; everything else falls through to the
/// global value. The backend name is not validated here.
pub fn resolve(global: &FormsConfig, overrides: Option<&FormsOverrides>) -> ResolvedFormConfig {
    let empty = FormsOverrides::default();
    let overrides = overrides.unwrap_or(&empty);

    ResolvedFormConfig {
        backend: overrides
            .default_backend
            .clone()
            .unwrap_or_else(|| global.default_backend.name().to_string()),
        web3forms_key: overrides
            .web3forms_key
            .clone()
            .or_else(|| global.web3forms_key.clone()),
        api_url: overrides.api_url.clone().or_else(|| global.api_url.clone()),
        formspree_endpoint: overrides
            .formspree_endpoint
            .clone()
            .or_else(|| global.formspree_endpoint.clone()),
        formspar_project_id: overrides
            .formspar_project_id
            .clone()
            .or_else(|| global.formspar_project_id.clone()),
        recaptcha_enabled: overrides
            .recaptcha_enabled
            .unwrap_or(global.recaptcha_enabled),
        recaptcha_site_key: overrides
            .recaptcha_site_key
            .clone()
            .or_else(|| global.recaptcha_site_key.clone()),
        action_url: None,
        access_key: None,
        metadata: None,
    }
}
