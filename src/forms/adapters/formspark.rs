//! Formspark adapter (community-maintained)
//!
//! Posts `{ projectId, ...fields }` as JSON to the public Formspark
//! submission endpoint. See <https://formspark.io>.

use async_trait::async_trait;

use super::{decode_reply, json_body, rejection, required, FormAdapter};
use crate::forms::config::ResolvedFormConfig;
use crate::forms::types::{Backend, FormFieldData, SubmitError};
use crate::transport::HttpTransport;

pub const FORMSPARK_ENDPOINT: &str = "https://submit-form.com/formsparkapi";

const MISSING_PROJECT_ID: &str = "Formspark project ID is required. Set formsparProjectId in your forms config. \
     Get it from https://formspark.io → Project Settings → copy Project ID";

/// Adapter for Formspark projects
#[derive(Debug, Clone, Copy, Default)]
pub struct FormsparkAdapter;

#[async_trait]
impl FormAdapter for FormsparkAdapter {
    fn backend(&self) -> Backend {
        Backend::Formspark
    }

    async fn try_submit(
        &self,
        data: &FormFieldData,
        config: &ResolvedFormConfig,
        transport: &dyn HttpTransport,
    ) -> Result<(), SubmitError> {
        let project_id = required(&config.formspar_project_id, MISSING_PROJECT_ID)?;
        let body = json_body(&[("projectId", project_id)], data);

        let response = transport.post_json(FORMSPARK_ENDPOINT, &body).await?;
        let reply = decode_reply(&response)?;

        if response.is_success() && reply.flag("success") {
            return Ok(());
        }

        Err(rejection(reply.message("error"), || {
            format!(
                "Formspark submission failed with status {}",
                response.status
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{HttpResponse, MockHttpTransport};
    use pretty_assertions::assert_eq;

    fn config(project_id: Option<&str>) -> ResolvedFormConfig {
        ResolvedFormConfig {
            backend: "formspark".to_string(),
            formspar_project_id: project_id.map(str::to_string),
            ..Default::default()
        }
    }

    fn data() -> FormFieldData {
        FormFieldData::from([("name".to_string(), "Cy".to_string())])
    }

    #[tokio::test]
    async fn test_missing_project_id_skips_network() {
        let mut transport = MockHttpTransport::new();
        transport.expect_post_json().never();

        let result = FormsparkAdapter
            .submit(&data(), &config(None), &transport)
            .await;

        assert_eq!(
            result.error(),
            Some(
                "Formspark project ID is required. Set formsparProjectId in your forms config. \
                 Get it from https://formspark.io → Project Settings → copy Project ID"
            )
        );
    }

    #[tokio::test]
    async fn test_merges_project_id_into_body() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_post_json()
            .withf(|url, body| {
                url == FORMSPARK_ENDPOINT
                    && *body == serde_json::json!({ "projectId": "xyz123", "name": "Cy" })
            })
            .times(1)
            .returning(|_, _| Ok(HttpResponse::new(200, r#"{"success":true}"#)));

        let result = FormsparkAdapter
            .submit(&data(), &config(Some("xyz123")), &transport)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_backend_error_is_reported() {
        let mut transport = MockHttpTransport::new();
        transport.expect_post_json().times(1).returning(|_, _| {
            Ok(HttpResponse::new(
                200,
                r#"{"success":false,"error":"Project not found"}"#,
            ))
        });

        let result = FormsparkAdapter
            .submit(&data(), &config(Some("xyz123")), &transport)
            .await;

        assert_eq!(result.error(), Some("Project not found"));
    }

    #[tokio::test]
    async fn test_null_error_falls_back_to_status() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_post_json()
            .times(1)
            .returning(|_, _| Ok(HttpResponse::new(400, r#"{"success":0,"error":null}"#)));

        let result = FormsparkAdapter
            .submit(&data(), &config(Some("xyz123")), &transport)
            .await;

        assert_eq!(
            result.error(),
            Some("Formspark submission failed with status 400")
        );
    }

    #[tokio::test]
    async fn test_generic_message_includes_status() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_post_json()
            .times(1)
            .returning(|_, _| Ok(HttpResponse::new(429, "Too Many Requests")));

        let result = FormsparkAdapter
            .submit(&data(), &config(Some("xyz123")), &transport)
            .await;

        assert_eq!(
            result.error(),
            Some("Formspark submission failed with status 429")
        );
    }
}
