use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Request;

use crate::app::{AuthEntry, AuthKind, Config};
use crate::utils::{FaasError, FaasResult};

/// Attaches credentials for a gateway to an outgoing request
#[cfg_attr(test, mockall::automock)]
pub trait AuthProvider: Send + Sync {
    /// Add an `Authorization` header when credentials are known; no-op otherwise
    fn apply(&self, gateway: &str, request: &mut Request) -> FaasResult<()>;
}

/// Never attaches credentials
pub struct NoAuth;

impl AuthProvider for NoAuth {
    fn apply(&self, _gateway: &str, _request: &mut Request) -> FaasResult<()> {
        Ok(())
    }
}

/// Credentials taken from the `[[auths]]` section of the config
pub struct ConfigAuth {
    entries: Vec<AuthEntry>,
}

impl ConfigAuth {
    pub fn new(entries: Vec<AuthEntry>) -> Self {
        Self { entries }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.auths.clone())
    }

    fn lookup(&self, gateway: &str) -> Option<&AuthEntry> {
        let gateway = gateway.trim_end_matches('/');
        self.entries
            .iter()
            .find(|entry| entry.gateway.trim_end_matches('/') == gateway)
    }
}

impl AuthProvider for ConfigAuth {
    fn apply(&self, gateway: &str, request: &mut Request) -> FaasResult<()> {
        let Some(entry) = self.lookup(gateway) else {
            return Ok(());
        };

        let scheme = match entry.auth {
            AuthKind::Basic => "Basic",
            AuthKind::Oauth2 => "Bearer",
        };
        let mut value = HeaderValue::from_str(&format!("{} {}", scheme, entry.token))
            .map_err(|_| {
                FaasError::ConfigError(format!("invalid token stored for gateway {}", entry.gateway))
            })?;
        value.set_sensitive(true);

        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }
}
