use figment::{
    providers::{Format, Yaml},
    Figment,
};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::utils::{FaasError, FaasResult};

// Only the provider section matters here; everything else in a stack file
// (functions, build options, ...) is ignored.
#[derive(Debug, Default, Deserialize)]
struct StackFile {
    #[serde(default)]
    provider: Option<Provider>,
}

#[derive(Debug, Default, Deserialize)]
struct Provider {
    #[serde(default)]
    gateway: Option<String>,
}

/// Read the gateway URL from a deployment descriptor, if it names one
pub fn descriptor_gateway(path: &Path) -> FaasResult<Option<String>> {
    if !path.exists() {
        return Err(FaasError::ConfigError(format!(
            "deployment descriptor not found: {}",
            path.display()
        )));
    }

    let stack: StackFile = Figment::from(Yaml::file(path)).extract().map_err(|e| {
        FaasError::ConfigError(format!("cannot parse {}: {}", path.display(), e))
    })?;

    let gateway = stack
        .provider
        .and_then(|p| p.gateway)
        .filter(|g| !g.trim().is_empty());
    debug!("Descriptor {} gateway: {:?}", path.display(), gateway);

    Ok(gateway)
}
