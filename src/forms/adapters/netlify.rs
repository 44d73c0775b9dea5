//! Netlify Forms adapter
//!
//! Netlify captures form posts made to the deployed site itself, keyed by a
//! hidden `form-name` field that must match a form registered at deploy
//! time. See <https://docs.netlify.com/forms/setup/>.

use async_trait::async_trait;
use tracing::warn;

use super::{multipart_fields, FormAdapter};
use crate::forms::config::ResolvedFormConfig;
use crate::forms::types::{Backend, FormFieldData, SubmitError};
use crate::transport::HttpTransport;

/// Relative to the deployed site origin
pub const NETLIFY_ENDPOINT: &str = "/?no-cache=1";

/// Every submission is filed under this form name.
// TODO: take the form name from the caller once forms other than the
// contact form are registered with Netlify.
pub const NETLIFY_FORM_NAME: &str = "contact";

/// True when the host looks like a Netlify deployment
pub fn is_netlify_host(host: &str) -> bool {
    host.contains("netlify.app") || host.contains(".netlify.com")
}

/// Adapter for Netlify Forms
#[derive(Debug, Clone, Copy, Default)]
pub struct NetlifyAdapter;

impl NetlifyAdapter {
    /// Warn when the site is not served by Netlify; the submission still goes out
    fn check_deployment(transport: &dyn HttpTransport) {
        let Some(origin) = transport.origin() else {
            return;
        };
        let host = origin.host_str().unwrap_or_default();
        if !is_netlify_host(host) {
            warn!(
                host,
                "Netlify adapter used on a non-Netlify deployment; submissions will not be captured. \
                 Deploy the site on Netlify or switch to another backend (web3forms, api, ...)"
            );
        }
    }
}

#[async_trait]
impl FormAdapter for NetlifyAdapter {
    fn backend(&self) -> Backend {
        Backend::Netlify
    }

    async fn try_submit(
        &self,
        data: &FormFieldData,
        _config: &ResolvedFormConfig,
        transport: &dyn HttpTransport,
    ) -> Result<(), SubmitError> {
        Self::check_deployment(transport);

        let fields = multipart_fields(data, &[("form-name", NETLIFY_FORM_NAME)]);
        let response = transport.post_multipart(NETLIFY_ENDPOINT, &fields).await?;

        if response.is_success() {
            return Ok(());
        }

        Err(SubmitError::Rejected(format!(
            "Netlify form submission failed with status {}",
            response.status
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{HttpResponse, MockHttpTransport, TransportError};
    use pretty_assertions::assert_eq;
    use url::Url;

    fn config() -> ResolvedFormConfig {
        ResolvedFormConfig {
            backend: "netlify".to_string(),
            ..Default::default()
        }
    }

    fn data() -> FormFieldData {
        FormFieldData::from([("message".to_string(), "Hello".to_string())])
    }

    fn transport_at(origin: &'static str) -> MockHttpTransport {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_origin()
            .returning(move || Some(Url::parse(origin).unwrap()));
        transport
    }

    #[test]
    fn test_is_netlify_host() {
        assert!(is_netlify_host("my-site.netlify.app"));
        assert!(is_netlify_host("app.netlify.com"));
        assert!(!is_netlify_host("example.com"));
        assert!(!is_netlify_host("netlify.com"));
    }

    #[tokio::test]
    async fn test_posts_form_name_to_site_root() {
        let mut transport = transport_at("https://my-site.netlify.app");
        transport
            .expect_post_multipart()
            .withf(|url, fields| {
                url == NETLIFY_ENDPOINT
                    && fields
                        == [
                            ("message".to_string(), "Hello".to_string()),
                            ("form-name".to_string(), "contact".to_string()),
                        ]
            })
            .times(1)
            .returning(|_, _| Ok(HttpResponse::new(200, "<html>thanks</html>")));

        let result = NetlifyAdapter.submit(&data(), &config(), &transport).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_non_netlify_host_still_submits() {
        let mut transport = transport_at("https://example.com");
        transport
            .expect_post_multipart()
            .times(1)
            .returning(|_, _| Ok(HttpResponse::new(200, "")));

        let result = NetlifyAdapter.submit(&data(), &config(), &transport).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_http_error_reports_status() {
        let mut transport = transport_at("https://my-site.netlify.app");
        transport
            .expect_post_multipart()
            .times(1)
            .returning(|_, _| Ok(HttpResponse::new(404, "Not Found")));

        let result = NetlifyAdapter.submit(&data(), &config(), &transport).await;

        assert_eq!(
            result.error(),
            Some("Netlify form submission failed with status 404")
        );
    }

    #[tokio::test]
    async fn test_missing_origin_surfaces_as_network_error() {
        let mut transport = MockHttpTransport::new();
        transport.expect_origin().returning(|| None);
        transport
            .expect_post_multipart()
            .times(1)
            .returning(|url, _| Err(TransportError::RelativeUrl(url.to_string())));

        let result = NetlifyAdapter.submit(&data(), &config(), &transport).await;

        assert_eq!(
            result.error(),
            Some("Network error: relative URL /?no-cache=1 requires a site origin")
        );
    }
}
