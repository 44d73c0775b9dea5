//! Formspree adapter (community-maintained)
//!
//! Posts the field data as JSON to a Formspree form endpoint such as
//! `https://formspree.io/f/xyzabc123`. See <https://formspree.io>.

use async_trait::async_trait;

use super::{required, submit_ok_json, FormAdapter};
use crate::forms::config::ResolvedFormConfig;
use crate::forms::types::{Backend, FormFieldData, SubmitError};
use crate::transport::HttpTransport;

const MISSING_ENDPOINT: &str = "Formspree endpoint is required. Set formspreeEndpoint in your forms config. \
     Get it from https://formspree.io → your form → API endpoint";

/// Adapter for Formspree form endpoints
#[derive(Debug, Clone, Copy, Default)]
pub struct FormspreeAdapter;

#[async_trait]
impl FormAdapter for FormspreeAdapter {
    fn backend(&self) -> Backend {
        Backend::Formspree
    }

    async fn try_submit(
        &self,
        data: &FormFieldData,
        config: &ResolvedFormConfig,
        transport: &dyn HttpTransport,
    ) -> Result<(), SubmitError> {
        let endpoint = required(&config.formspree_endpoint, MISSING_ENDPOINT)?;
        submit_ok_json(transport, endpoint, data, "Formspree submission").await
    }
}
