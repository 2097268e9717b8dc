use bytes::Bytes;
use reqwest::StatusCode;

use super::transport::{RawResponse, TransportError};
use crate::utils::{FaasError, FaasResult};

/// What a single round trip to the gateway amounted to
#[derive(Debug, Clone, PartialEq)]
pub enum HttpOutcome {
    Success { status: StatusCode, body: Bytes },
    Unauthorized,
    ServerError { status: StatusCode, body: Bytes },
    TransportFailure(TransportError),
}

/// Sort a transport result into 2xx / 401 / anything else
pub fn classify(result: Result<RawResponse, TransportError>) -> HttpOutcome {
    match result {
        Err(e) => HttpOutcome::TransportFailure(e),
        Ok(RawResponse { status, body }) if status.is_success() => {
            HttpOutcome::Success { status, body }
        }
        Ok(RawResponse { status, .. }) if status == StatusCode::UNAUTHORIZED => {
            HttpOutcome::Unauthorized
        }
        Ok(RawResponse { status, body }) => HttpOutcome::ServerError { status, body },
    }
}

/// Turn an outcome into a result
///
/// `on_success` decides what a 2xx means for the caller; `on_status` builds
/// the error for any other non-401 status from the code and the body text.
pub fn interpret<T>(
    outcome: HttpOutcome,
    gateway: &str,
    on_success: impl FnOnce(StatusCode, Bytes) -> FaasResult<T>,
    on_status: impl FnOnce(u16, String) -> FaasError,
) -> FaasResult<T> {
    match outcome {
        HttpOutcome::Success { status, body } => on_success(status, body),
        HttpOutcome::Unauthorized => Err(FaasError::Unauthorized),
        HttpOutcome::ServerError { status, body } => Err(on_status(
            status.as_u16(),
            String::from_utf8_lossy(&body).into_owned(),
        )),
        HttpOutcome::TransportFailure(TransportError::Send(cause)) => Err(FaasError::Connection {
            gateway: gateway.to_string(),
            cause,
        }),
        HttpOutcome::TransportFailure(TransportError::ReadBody { status, cause }) => {
            Err(FaasError::ResponseRead {
                gateway: gateway.to_string(),
                status: status.as_u16(),
                cause,
            })
        }
    }
}
