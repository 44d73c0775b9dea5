//! Trait abstraction for the HTTP transport to enable mocking in tests

use async_trait::async_trait;
use url::Url;

use super::client::{HttpResponse, TransportError};

/// Network primitive used by the form adapters.
///
/// One call issues exactly one request; implementations never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Origin of the deployed site, used to resolve relative URLs
    fn origin(&self) -> Option<Url>;

    /// POST a JSON body with `Content-Type: application/json`
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError>;

    /// POST a multipart form built from the given fields, in order
    async fn post_multipart(
        &self,
        url: &str,
        fields: &[(String, String)],
    ) -> Result<HttpResponse, TransportError>;
}
