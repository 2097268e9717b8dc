use bytes::Bytes;
use reqwest::Request;
use tracing::debug;

use super::response::{classify, interpret};
use super::transport::Transport;
use crate::utils::{FaasError, FaasResult};

/// Send an invocation and return the function's output
///
/// Synchronous calls return the body as received. Asynchronous calls only
/// wait for the gateway's acknowledgement and return `None`.
pub async fn invoke_function(
    transport: &dyn Transport,
    request: Request,
    async_invoke: bool,
    gateway: &str,
) -> FaasResult<Option<Bytes>> {
    debug!("Invoking {} {}", request.method(), request.url());

    let outcome = classify(transport.send(request).await);
    interpret(
        outcome,
        gateway,
        |status, body| {
            if async_invoke {
                debug!("Function accepted for async processing ({})", status);
                Ok(None)
            } else {
                Ok(Some(body))
            }
        },
        |status, body| FaasError::Gateway { status, body },
    )
}
