use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Endpoint;

/// Pipe connects a source endpoint to a sink endpoint, optionally through a
/// chain of intermediate steps.
#[derive(CustomResource, Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[kube(
    kind = "Pipe",
    group = "camel.apache.org",
    status = "PipeStatus",
    version = "v1",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct PipeSpec {
    /// Source is the starting point of the integration defined by this Pipe.
    pub source: Endpoint,
    /// Sink is the destination of the integration defined by this Pipe.
    pub sink: Endpoint,
    /// Steps contains an optional list of intermediate steps that are executed between the Source and the Sink.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Endpoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    /// Custom SA to use for the Pipe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PipeStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
}
