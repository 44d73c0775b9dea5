//! Submission dispatcher
//!
//! Resolves the per-call configuration, picks the adapter for the resolved
//! backend and hands the submission to it.

use tracing::debug;

use super::adapters::{
    ApiAdapter, FormAdapter, FormsparkAdapter, FormspreeAdapter, NetlifyAdapter,
    Web3FormsAdapter,
};
use super::config::{resolve, FormsConfig, FormsOverrides, ResolvedFormConfig};
use super::types::{Backend, FormFieldData, SubmissionResult};
use crate::transport::HttpTransport;

/// Submits forms using an explicitly provided configuration and transport
#[derive(Debug, Clone)]
pub struct FormSubmitter<T> {
    config: FormsConfig,
    transport: T,
}

impl<T: HttpTransport> FormSubmitter<T> {
    pub fn new(config: FormsConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// The site-wide forms configuration
    pub fn config(&self) -> &FormsConfig {
        &self.config
    }

    /// Submit field data through the configured backend.
    ///
    /// Makes at most one network request and never retries. Unknown backend
    /// names are reported in the result without touching the network.
    pub async fn submit_form(
        &self,
        data: &FormFieldData,
        overrides: Option<&FormsOverrides>,
    ) -> SubmissionResult {
        let resolved = resolve(&self.config, overrides);
        self.dispatch(data, &resolved).await
    }

    /// Route an already resolved submission to its adapter
    pub async fn dispatch(
        &self,
        data: &FormFieldData,
        resolved: &ResolvedFormConfig,
    ) -> SubmissionResult {
        let backend = match resolved.backend.parse::<Backend>() {
            Ok(backend) => backend,
            Err(err) => return SubmissionResult::failure(err.to_string()),
        };

        debug!(%backend, fields = data.len(), "dispatching form submission");

        let adapter: &dyn FormAdapter = match backend {
            Backend::Web3Forms => &Web3FormsAdapter,
            Backend::Netlify => &NetlifyAdapter,
            Backend::Api => &ApiAdapter,
            Backend::Formspree => &FormspreeAdapter,
            Backend::Formspark => &FormsparkAdapter,
        };

        adapter.submit(data, resolved, &self.transport).await
    }
}
