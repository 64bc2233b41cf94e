use std::collections::BTreeMap;

use kube::{CustomResource, ResourceExt};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Label holding the Kamelet type (`source`, `sink` or `action`).
pub const KAMELET_TYPE_LABEL: &str = "camel.apache.org/kamelet.type";
pub const KAMELET_SUPPORT_LEVEL_ANNOTATION: &str = "camel.apache.org/kamelet.support.level";
pub const KAMELET_PROVIDER_ANNOTATION: &str = "camel.apache.org/provider";

/// Kamelet is a reusable route-snippet that declares the properties it can be
/// configured with.
#[derive(CustomResource, Serialize, Deserialize, Debug, Clone, Default, JsonSchema)]
#[kube(
    kind = "Kamelet",
    group = "camel.apache.org",
    status = "KameletStatus",
    version = "v1",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct KameletSpec {
    /// Defines the formal configuration of the Kamelet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<KameletDefinition>,
    /// Camel dependencies needed by the Kamelet.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    /// The main source of the Kamelet, kept opaque.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<Value>,
}

/// The JSON schema subset a Kamelet uses to declare its properties.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KameletDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Names of the properties a binding must set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Every property a binding may set.
    #[serde(default)]
    pub properties: BTreeMap<String, KameletPropertyDefinition>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KameletPropertyDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KameletStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
}

impl Kamelet {
    /// Names of the properties that must be set, empty without a definition.
    pub fn required_properties(&self) -> &[String] {
        self.spec
            .definition
            .as_ref()
            .map(|definition| definition.required.as_slice())
            .unwrap_or_default()
    }

    /// Whether the Kamelet declares `name` as one of its properties.
    pub fn declares_property(&self, name: &str) -> bool {
        self.spec
            .definition
            .as_ref()
            .map_or(false, |definition| definition.properties.contains_key(name))
    }

    pub fn kamelet_type(&self) -> Option<&str> {
        self.labels().get(KAMELET_TYPE_LABEL).map(String::as_str)
    }

    pub fn support_level(&self) -> Option<&str> {
        self.annotations()
            .get(KAMELET_SUPPORT_LEVEL_ANNOTATION)
            .map(String::as_str)
    }

    pub fn provider(&self) -> Option<&str> {
        self.annotations()
            .get(KAMELET_PROVIDER_ANNOTATION)
            .map(String::as_str)
    }
}
