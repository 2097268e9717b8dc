use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Request, StatusCode};
use thiserror::Error;
use tracing::debug;

/// A fully-read gateway response
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Failures below the HTTP status layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// The request never produced a response (DNS, TLS, refused, timeout)
    #[error("{0}")]
    Send(String),

    /// Headers arrived but the body could not be read
    #[error("failed to read response body: {cause}")]
    ReadBody { status: StatusCode, cause: String },
}

/// The one capability the dispatcher needs from an HTTP stack
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and read the whole response body
    async fn send(&self, request: Request) -> Result<RawResponse, TransportError>;
}

/// `Transport` backed by a reqwest client
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<RawResponse, TransportError> {
        debug!("{} {}", request.method(), request.url());

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| TransportError::Send(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::ReadBody {
                status,
                cause: e.to_string(),
            })?;
        debug!("Response {} ({} bytes)", status, body.len());

        Ok(RawResponse { status, body })
    }
}
