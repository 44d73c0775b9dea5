//! HTTP transport used by the form adapters

mod client;
mod traits;

pub use client::{HttpResponse, ReqwestTransport, TransportError};
pub use traits::HttpTransport;

#[cfg(test)]
pub use traits::MockHttpTransport;
