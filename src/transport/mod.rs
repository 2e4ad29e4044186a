//! Transport seam between operation namespaces and the network.

mod http;
mod request;
#[cfg(test)]
pub(crate) mod testing;

use crate::Result;
use async_trait::async_trait;

pub use http::{HttpTransport, HttpTransportBuilder};
pub use request::{
    ApiPath, ApiRequest, ApiResponse, BinaryPayload, FilePart, Method, RequestBody, ResponseMode,
};

/// Executes one admin API request.
///
/// Implementations own encoding, authentication and error classification.
/// Callers receive the decoded body or the failure exactly as produced here.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
