use thiserror::Error;

/// Main error type for faasctl
#[derive(Error, Debug)]
pub enum FaasError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot connect to OpenFaaS on URL: {gateway} ({cause})")]
    Connection { gateway: String, cause: String },

    #[error(
        "unauthorized access, add credentials for this gateway to the faasctl config ([[auths]]) to authenticate"
    )]
    Unauthorized,

    #[error("server returned unexpected status code: {status} - {body}")]
    Gateway { status: u16, body: String },

    #[error("server returned unexpected status code: {status} - {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("cannot parse result from OpenFaaS on URL: {gateway} ({cause})")]
    Decode { gateway: String, cause: String },

    #[error("cannot read result from OpenFaaS on URL: {gateway} (status {status}: {cause})")]
    ResponseRead {
        gateway: String,
        status: u16,
        cause: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result alias used throughout the library
pub type FaasResult<T> = std::result::Result<T, FaasError>;
