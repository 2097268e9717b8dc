use reqwest::{Request, StatusCode};
use tracing::info;

use super::response::{classify, interpret};
use super::transport::Transport;
use super::types::Function;
use crate::utils::{FaasError, FaasResult};

/// Fetch the functions deployed on the gateway
pub async fn list_functions(
    transport: &dyn Transport,
    request: Request,
    gateway: &str,
) -> FaasResult<Vec<Function>> {
    info!("Making call to list functions with this endpoint: {}", request.url());

    let outcome = classify(transport.send(request).await);
    interpret(
        outcome,
        gateway,
        |status, body| {
            // Only a plain 200 carries the function list
            if status != StatusCode::OK {
                return Err(FaasError::UnexpectedStatus {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&body).into_owned(),
                });
            }
            serde_json::from_slice(&body).map_err(|e| FaasError::Decode {
                gateway: gateway.to_string(),
                cause: e.to_string(),
            })
        },
        |status, body| FaasError::UnexpectedStatus { status, body },
    )
}
