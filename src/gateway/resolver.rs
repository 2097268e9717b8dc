/// Candidate sources for the gateway URL
///
/// Empty strings are treated the same as `None`.
#[derive(Debug, Clone, Default)]
pub struct GatewaySources {
    /// Value of `--gateway`, which clap fills with the default when omitted
    pub explicit_flag: Option<String>,
    /// Compiled-in default gateway
    pub default_value: String,
    /// `provider.gateway` from a deployment descriptor
    pub descriptor_value: Option<String>,
    /// Value of the `OPENFAAS_URL` environment variable
    pub environment_value: Option<String>,
}

/// Pick the effective gateway URL
///
/// Precedence, highest first: an explicit flag that differs from the
/// default, the descriptor value, the environment value, the default.
/// Trailing slashes are stripped from the result.
pub fn resolve_gateway_url(sources: &GatewaySources) -> String {
    let explicit = present(&sources.explicit_flag)
        .filter(|flag| *flag != sources.default_value.as_str());

    let gateway = explicit
        .or_else(|| present(&sources.descriptor_value))
        .or_else(|| present(&sources.environment_value))
        .unwrap_or(sources.default_value.as_str());

    gateway.trim_end_matches('/').to_string()
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_GATEWAY;
    use pretty_assertions::assert_eq;

    fn sources(
        flag: Option<&str>,
        descriptor: Option<&str>,
        environment: Option<&str>,
    ) -> GatewaySources {
        GatewaySources {
            explicit_flag: flag.map(str::to_string),
            default_value: DEFAULT_GATEWAY.to_string(),
            descriptor_value: descriptor.map(str::to_string),
            environment_value: environment.map(str::to_string),
        }
    }

    #[test]
    fn test_explicit_flag_wins() {
        let s = sources(Some("http://flag:8080"), Some("http://yaml"), Some("http://env"));
        assert_eq!(resolve_gateway_url(&s), "http://flag:8080");
    }

    #[test]
    fn test_flag_equal_to_default_does_not_count() {
        let s = sources(Some(DEFAULT_GATEWAY), Some("http://yaml"), Some("http://env"));
        assert_eq!(resolve_gateway_url(&s), "http://yaml");
    }

    #[test]
    fn test_descriptor_beats_environment() {
        let s = sources(None, Some("http://yaml"), Some("http://env"));
        assert_eq!(resolve_gateway_url(&s), "http://yaml");
    }

    #[test]
    fn test_environment_beats_default() {
        let s = sources(Some(DEFAULT_GATEWAY), None, Some("http://env/"));
        assert_eq!(resolve_gateway_url(&s), "http://env");
    }

    #[test]
    fn test_falls_back_to_default() {
        let s = sources(Some(""), Some(""), Some(""));
        assert_eq!(resolve_gateway_url(&s), DEFAULT_GATEWAY);
        assert_eq!(resolve_gateway_url(&sources(None, None, None)), DEFAULT_GATEWAY);
    }

    #[test]
    fn test_trailing_slashes_stripped() {
        for s in [
            sources(Some("http://flag//"), None, None),
            sources(None, Some("http://yaml/"), None),
            sources(None, None, Some("http://env/")),
        ] {
            assert!(!resolve_gateway_url(&s).ends_with('/'));
        }
    }
}
