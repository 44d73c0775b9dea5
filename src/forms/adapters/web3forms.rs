//! Web3Forms adapter
//!
//! Free form backend with no server of your own: the field data is posted
//! as a multipart form together with the site's access key.
//! See <https://web3forms.com>.

use async_trait::async_trait;

use super::{decode_reply, multipart_fields, rejection, required, FormAdapter};
use crate::forms::config::ResolvedFormConfig;
use crate::forms::types::{Backend, FormFieldData, SubmitError};
use crate::transport::HttpTransport;

pub const WEB3FORMS_ENDPOINT: &str = "https://api.web3forms.com/submit";

const MISSING_KEY: &str =
    "Web3Forms access key is required. Set web3formsKey in your forms config.";

/// Adapter for the Web3Forms API
#[derive(Debug, Clone, Copy, Default)]
pub struct Web3FormsAdapter;

#[async_trait]
impl FormAdapter for Web3FormsAdapter {
    fn backend(&self) -> Backend {
        Backend::Web3Forms
    }

    async fn try_submit(
        &self,
        data: &FormFieldData,
        config: &ResolvedFormConfig,
        transport: &dyn HttpTransport,
    ) -> Result<(), SubmitError> {
        let access_key = required(&config.web3forms_key, MISSING_KEY)?;
        let fields = multipart_fields(data, &[("access_key", access_key)]);

        let response = transport
            .post_multipart(WEB3FORMS_ENDPOINT, &fields)
            .await?;
        let reply = decode_reply(&response)?;

        if response.is_success() && reply.flag("success") {
            return Ok(());
        }

        Err(rejection(reply.message("message"), || {
            "Form submission failed".to_string()
        }))
    }
}
