/// Constants module to avoid magic numbers in the codebase

// Gateway
pub const DEFAULT_GATEWAY: &str = "http://127.0.0.1:8080";
pub const OPENFAAS_URL_ENV: &str = "OPENFAAS_URL";

// Gateway routes
pub const FUNCTION_ROUTE: &[&str] = &["function"];
pub const ASYNC_FUNCTION_ROUTE: &[&str] = &["async-function"];
pub const SYSTEM_FUNCTIONS_ROUTE: &[&str] = &["system", "functions"];

// Request defaults
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";
pub const DEFAULT_METHOD: &str = "POST";

// Timeouts
pub const LIST_TIMEOUT_SECS: u64 = 60;
pub const INVOKE_TIMEOUT_SECS: u64 = 600; // 10 minutes for slow functions

// Configuration
pub const CONFIG_ENV_PREFIX: &str = "FAASCTL_";
pub const CONFIG_FILE_NAME: &str = "config.toml";
