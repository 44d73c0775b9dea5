//! Generic API adapter
//!
//! Posts the field data as JSON to an endpoint you run yourself (a
//! Cloudflare Worker, a serverless function, ...). The endpoint is expected
//! to answer `{ "ok": true }` or `{ "ok": false, "error": "..." }`.

use async_trait::async_trait;

use super::{required, submit_ok_json, FormAdapter};
use crate::forms::config::ResolvedFormConfig;
use crate::forms::types::{Backend, FormFieldData, SubmitError};
use crate::transport::HttpTransport;

const MISSING_URL: &str = "API endpoint URL is required. Set apiUrl in your forms config.";

/// Adapter for a caller-supplied JSON endpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiAdapter;

#[async_trait]
impl FormAdapter for ApiAdapter {
    fn backend(&self) -> Backend {
        Backend::Api
    }

    async fn try_submit(
        &self,
        data: &FormFieldData,
        config: &ResolvedFormConfig,
        transport: &dyn HttpTransport,
    ) -> Result<(), SubmitError> {
        let url = required(&config.api_url, MISSING_URL)?;
        submit_ok_json(transport, url, data, "API request").await
    }
}
