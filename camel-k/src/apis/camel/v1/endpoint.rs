use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::ObjectReference;
use kube::{Resource, ResourceExt};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Kamelet;

/// Endpoint represents a source/sink external entity (could be any Kubernetes
/// resource or Camel URI).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Ref can be used to declare a Kubernetes resource as source/sink endpoint.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_: Option<ObjectReference>,
    /// URI can be used to specify the (Camel) endpoint explicitly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Properties are a key value representation of endpoint properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<EndpointProperties>,
}

impl Endpoint {
    /// An endpoint referencing `kamelet`, in the Kamelet's own namespace.
    pub fn kamelet(kamelet: &Kamelet, properties: Option<EndpointProperties>) -> Self {
        Endpoint {
            ref_: Some(ObjectReference {
                kind: Some(Kamelet::kind(&()).into_owned()),
                api_version: Some(Kamelet::api_version(&()).into_owned()),
                name: Some(kamelet.name_any()),
                namespace: kamelet.namespace(),
                ..Default::default()
            }),
            uri: None,
            properties,
        }
    }
}

/// EndpointProperties is a key/value JSON object that is passed through to the
/// endpoint as is.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(transparent)]
pub struct EndpointProperties(pub Value);

impl EndpointProperties {
    /// Flatten the properties into a string map. Non-string values are rendered
    /// as their JSON text.
    pub fn property_map(&self) -> Result<BTreeMap<String, String>, serde_json::Error> {
        let raw: BTreeMap<String, Value> = serde_json::from_value(self.0.clone())?;
        Ok(raw
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(value) => (key, value),
                other => (key, other.to_string()),
            })
            .collect())
    }
}

impl From<BTreeMap<String, String>> for EndpointProperties {
    fn from(properties: BTreeMap<String, String>) -> Self {
        EndpointProperties(Value::Object(
            properties
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect(),
        ))
    }
}
