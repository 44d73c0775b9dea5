//! Backend adapters
//!
//! Each adapter speaks exactly one third-party protocol and turns whatever
//! that backend answers into a [`SubmissionResult`]. Adapters are stateless
//! unit structs; everything they need arrives with the call.

mod api;
mod formspark;
mod formspree;
mod netlify;
mod web3forms;

pub use api::ApiAdapter;
pub use formspark::{FormsparkAdapter, FORMSPARK_ENDPOINT};
pub use formspree::FormspreeAdapter;
pub use netlify::{is_netlify_host, NetlifyAdapter, NETLIFY_ENDPOINT, NETLIFY_FORM_NAME};
pub use web3forms::{Web3FormsAdapter, WEB3FORMS_ENDPOINT};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::warn;

use super::config::ResolvedFormConfig;
use super::types::{Backend, FormFieldData, SubmissionResult, SubmitError};
use crate::transport::{HttpResponse, HttpTransport};

/// A form-submission protocol for one backend
#[async_trait]
pub trait FormAdapter: Send + Sync {
    /// Backend this adapter speaks to
    fn backend(&self) -> Backend;

    /// Perform the submission, reporting any failure as a [`SubmitError`]
    async fn try_submit(
        &self,
        data: &FormFieldData,
        config: &ResolvedFormConfig,
        transport: &dyn HttpTransport,
    ) -> Result<(), SubmitError>;

    /// Perform the submission and normalize the outcome. Never fails.
    async fn submit(
        &self,
        data: &FormFieldData,
        config: &ResolvedFormConfig,
        transport: &dyn HttpTransport,
    ) -> SubmissionResult {
        let result = self.try_submit(data, config, transport).await;
        if let Err(err) = &result {
            warn!(backend = %self.backend(), error = %err, "form submission failed");
        }
        result.into()
    }
}

/// A backend's JSON reply, read loosely.
///
/// Backends are not strict about types, so a flag counts as set when its
/// value is truthy (`true`, a non-zero number, a non-empty string, an array
/// or an object) and messages are only taken when they are strings.
#[derive(Debug, Default)]
struct Reply(Value);

impl Reply {
    fn flag(&self, name: &str) -> bool {
        self.0.get(name).is_some_and(is_truthy)
    }

    fn message(&self, name: &str) -> Option<String> {
        self.0.get(name).and_then(Value::as_str).map(str::to_string)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Return the configured value, or a configuration error when it is
/// missing or empty.
fn required<'a>(
    value: &'a Option<String>,
    message: &'static str,
) -> Result<&'a str, SubmitError> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(SubmitError::MissingConfig(message))
}

/// Prefer the backend's own message; fall back when it is absent or empty
fn rejection(message: Option<String>, fallback: impl FnOnce() -> String) -> SubmitError {
    SubmitError::Rejected(message.filter(|m| !m.is_empty()).unwrap_or_else(fallback))
}

/// Field data followed by the backend-specific extra fields
fn multipart_fields(data: &FormFieldData, extra: &[(&str, &str)]) -> Vec<(String, String)> {
    data.iter()
        .map(|(name, value)| (name.clone(), value.clone()))
        .chain(
            extra
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        )
        .collect()
}

/// JSON object built from `base` entries, then the field data on top
fn json_body(base: &[(&str, &str)], data: &FormFieldData) -> Value {
    let mut body = Map::new();
    for (name, value) in base {
        body.insert(name.to_string(), Value::String(value.to_string()));
    }
    for (name, value) in data {
        body.insert(name.clone(), Value::String(value.clone()));
    }
    Value::Object(body)
}

/// Decode a backend reply.
///
/// A body that is not JSON is a transport failure on a 2xx response; on an
/// error status the reply is treated as empty so the status-based message
/// is reported instead.
fn decode_reply(response: &HttpResponse) -> Result<Reply, SubmitError> {
    match response.json::<Value>() {
        Ok(value) => Ok(Reply(value)),
        Err(_) if !response.is_success() => Ok(Reply::default()),
        Err(err) => Err(err.into()),
    }
}

/// POST the field data as JSON and interpret an `{ ok, error }` reply
async fn submit_ok_json(
    transport: &dyn HttpTransport,
    url: &str,
    data: &FormFieldData,
    failure_label: &str,
) -> Result<(), SubmitError> {
    let response = transport.post_json(url, &json_body(&[], data)).await?;
    let reply = decode_reply(&response)?;

    if response.is_success() && reply.flag("ok") {
        return Ok(());
    }

    Err(rejection(reply.message("error"), || {
        format!("{failure_label} failed with status {}", response.status)
    }))
}
