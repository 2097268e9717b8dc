use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A function as reported by `GET /system/functions`
///
/// Fields are passed through as the gateway sends them; anything not named
/// here ends up in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    /// The name of the function
    pub name: String,
    /// The fully qualified docker image name of the function
    #[serde(default)]
    pub image: String,
    /// The amount of invocations for the specified function
    #[serde(default)]
    pub invocation_count: f64,
    /// The current minimal amount of replicas
    #[serde(default)]
    pub replicas: u64,
    /// The current available amount of replicas
    #[serde(default)]
    pub available_replicas: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// A map of labels for making scheduling or routing decisions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
    /// A map of annotations for management, orchestration, events and build tasks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<HashMap<String, String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
