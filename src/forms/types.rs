//! Core form value objects

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transport::TransportError;

/// Field name to field value, as submitted by the browser form
pub type FormFieldData = BTreeMap<String, String>;

/// Supported form-submission backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Web3Forms,
    Netlify,
    Api,
    Formspree,
    Formspark,
}

impl Backend {
    /// Every backend, in the order they are advertised to users
    pub const ALL: [Backend; 5] = [
        Backend::Web3Forms,
        Backend::Netlify,
        Backend::Api,
        Backend::Formspree,
        Backend::Formspark,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Web3Forms => "web3forms",
            Self::Netlify => "netlify",
            Self::Api => "api",
            Self::Formspree => "formspree",
            Self::Formspark => "formspark",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = SubmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Backend::ALL
            .into_iter()
            .find(|backend| backend.name() == s)
            .ok_or_else(|| SubmitError::UnknownBackend(s.to_string()))
    }
}

fn supported_backends() -> String {
    Backend::ALL
        .iter()
        .map(Backend::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reasons a submission did not succeed.
///
/// The `Display` text of each variant is exactly what ends up in
/// [`SubmissionResult::error`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A backend-specific setting is missing; no request was made
    #[error("{0}")]
    MissingConfig(&'static str),

    /// The resolved backend name is not one of [`Backend::ALL`]
    #[error("Unknown form backend: {0}. Supported backends: {list}.", list = supported_backends())]
    UnknownBackend(String),

    /// The backend answered but refused the submission
    #[error("{0}")]
    Rejected(String),

    /// The request itself failed
    #[error("Network error: {0}")]
    Network(String),
}

impl From<TransportError> for SubmitError {
    fn from(err: TransportError) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            SubmitError::Network("Unknown error".to_string())
        } else {
            SubmitError::Network(message)
        }
    }
}

/// Uniform outcome of a submission: `error` is set iff `ok` is false
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl SubmissionResult {
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl From<Result<(), SubmitError>> for SubmissionResult {
    fn from(result: Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(err) => Self::failure(err.to_string()),
        }
    }
}
