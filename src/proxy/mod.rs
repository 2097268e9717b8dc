/// Gateway request construction and dispatch - Gateway
mod auth;
mod client;
mod invoke;
mod list;
mod request;
mod response;
mod transport;
mod types;

pub use auth::{AuthProvider, ConfigAuth, NoAuth};
pub use client::{make_client, timeout_from_secs};
pub use invoke::invoke_function;
pub use list::list_functions;
pub use request::{build_invoke_request, build_list_request, InvocationRequest};
pub use response::{classify, interpret, HttpOutcome};
pub use transport::{RawResponse, ReqwestTransport, Transport, TransportError};
pub use types::Function;
