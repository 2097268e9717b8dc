use reqwest::Client;
use std::time::Duration;
use tracing::warn;

use crate::utils::{FaasError, FaasResult};

/// Build the HTTP client used for a single command
///
/// `None` means no timeout. `tls_insecure` turns off certificate and
/// hostname verification and must only come from an explicit flag.
pub fn make_client(timeout: Option<Duration>, tls_insecure: bool) -> FaasResult<Client> {
    let mut builder = Client::builder();

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    if tls_insecure {
        warn!("TLS verification is disabled for this request");
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder
        .build()
        .map_err(|e| FaasError::ConfigError(format!("cannot build HTTP client: {}", e)))
}

/// Convert a configured number of seconds into a client timeout
pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_disables_timeout() {
        assert_eq!(timeout_from_secs(0), None);
        assert_eq!(timeout_from_secs(60), Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_builds_client() {
        assert!(make_client(Some(Duration::from_secs(60)), false).is_ok());
        assert!(make_client(None, true).is_ok());
    }
}
