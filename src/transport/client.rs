//! reqwest-backed HTTP transport
//!
//! This module provides the production transport used by the form adapters.
//! It resolves relative endpoints (such as Netlify's `/?no-cache=1`) against
//! the deployed site origin, the way a browser resolves them against the
//! current page.

use async_trait::async_trait;
use reqwest::{multipart, Client};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::traits::HttpTransport;

/// Errors raised by the network primitive itself
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or its body could not be read
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// A relative endpoint was used without a known site origin
    #[error("relative URL {0} requires a site origin")]
    RelativeUrl(String),

    /// The endpoint is not a valid URL
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The response body was not the JSON the backend promised
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// Any other failure reported by a transport implementation
    #[error("{0}")]
    Other(String),
}

/// Status and raw body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// HTTP transport over a shared reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    origin: Option<Url>,
}

impl ReqwestTransport {
    /// Create a transport with a default client and no site origin
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client))
    }

    /// Create a transport around an existing client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            origin: None,
        }
    }

    /// Set the deployed site origin used for relative URLs
    pub fn with_origin(mut self, origin: Url) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Turn an endpoint into an absolute URL
    fn resolve_url(&self, url: &str) -> Result<Url, TransportError> {
        match Url::parse(url) {
            Ok(parsed) => Ok(parsed),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let origin = self
                    .origin
                    .as_ref()
                    .ok_or_else(|| TransportError::RelativeUrl(url.to_string()))?;
                origin.join(url).map_err(|source| TransportError::InvalidUrl {
                    url: url.to_string(),
                    source,
                })
            }
            Err(source) => Err(TransportError::InvalidUrl {
                url: url.to_string(),
                source,
            }),
        }
    }

    async fn read_response(response: reqwest::Response) -> Result<HttpResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, bytes = body.len(), "received response");
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    fn origin(&self) -> Option<Url> {
        self.origin.clone()
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        let url = self.resolve_url(url)?;
        debug!(%url, "POST json");

        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(body)?)
            .send()
            .await?;

        Self::read_response(response).await
    }

    async fn post_multipart(
        &self,
        url: &str,
        fields: &[(String, String)],
    ) -> Result<HttpResponse, TransportError> {
        let url = self.resolve_url(url)?;
        debug!(%url, fields = fields.len(), "POST multipart");

        let form = fields
            .iter()
            .fold(multipart::Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            });

        let response = self.client.post(url).multipart(form).send().await?;

        Self::read_response(response).await
    }
}
