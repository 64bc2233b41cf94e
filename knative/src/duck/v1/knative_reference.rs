use k8s_openapi::api::core::v1::ObjectReference;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// KReference contains enough information to refer to another object.
/// It's a trimmed down version of corev1.ObjectReference.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KReference {
    /// Kind of the referent.
    /// More info: https://git.k8s.io/community/contributors/devel/sig-architecture/api-conventions.md#types-kinds
    pub kind: String,
    /// Namespace of the referent.
    /// More info: https://kubernetes.io/docs/concepts/overview/working-with-objects/namespaces/
    /// This is optional field, it gets defaulted to the object holding it if left out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Name of the referent.
    /// More info: https://kubernetes.io/docs/concepts/overview/working-with-objects/names/#names
    pub name: String,
    /// API version of the referent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Group of the API, without the version of the group. This can be used as an alternative to the APIVersion, and then resolved using ResolveGroup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl KReference {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        KReference {
            kind: kind.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// The fully qualified api version, combining `group` and `api_version`
    /// unless that was done already.
    pub fn full_api_version(&self) -> Option<String> {
        match (&self.api_version, &self.group) {
            (Some(api_version), _) if api_version.contains('/') => Some(api_version.clone()),
            (Some(api_version), Some(group)) => Some(format!("{group}/{api_version}")),
            (Some(api_version), None) => Some(api_version.clone()),
            (None, _) => None,
        }
    }

    /// Fill in `namespace` if the reference does not carry one.
    pub fn default_namespace(&mut self, namespace: &str) {
        if self.namespace.as_deref().map_or(true, str::is_empty) {
            self.namespace = Some(namespace.to_string());
        }
    }
}

impl From<KReference> for ObjectReference {
    fn from(reference: KReference) -> ObjectReference {
        ObjectReference {
            api_version: reference.full_api_version(),
            name: Some(reference.name),
            namespace: reference.namespace,
            kind: Some(reference.kind),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn serialize_reference() {
        use serde_json::json;
        let reference = KReference {
            kind: "Broker".into(),
            api_version: Some("eventing.knative.dev/v1".into()),
            namespace: None,
            name: "default".into(),
            group: None,
        };
        let json = json!({
            "kind": "Broker",
            "name": "default",
            "apiVersion": "eventing.knative.dev/v1"
        });
        assert_eq!(serde_json::to_value(&reference).unwrap(), json)
    }

    #[test]
    fn group_is_combined_into_api_version() {
        let mut reference = KReference::new("Channel", "events");
        reference.api_version = Some("v1".into());
        reference.group = Some("messaging.knative.dev".into());
        assert_eq!(reference.full_api_version().as_deref(), Some("messaging.knative.dev/v1"));

        // already qualified
        reference.api_version = Some("messaging.knative.dev/v1".into());
        assert_eq!(reference.full_api_version().as_deref(), Some("messaging.knative.dev/v1"));
    }

    #[test]
    fn default_namespace_keeps_explicit_namespace() {
        let mut reference = KReference::new("Service", "svc1");
        reference.default_namespace("current");
        assert_eq!(reference.namespace.as_deref(), Some("current"));

        reference.namespace = Some("ns1".into());
        reference.default_namespace("current");
        assert_eq!(reference.namespace.as_deref(), Some("ns1"));

        reference.namespace = Some("".into());
        reference.default_namespace("current");
        assert_eq!(reference.namespace.as_deref(), Some("current"));
    }

    #[test]
    fn into_object_reference() {
        let mut reference = KReference::new("Broker", "default");
        reference.api_version = Some("eventing.knative.dev/v1".into());
        reference.namespace = Some("ns1".into());
        let object_reference: ObjectReference = reference.into();
        assert_eq!(object_reference.kind.as_deref(), Some("Broker"));
        assert_eq!(object_reference.api_version.as_deref(), Some("eventing.knative.dev/v1"));
        assert_eq!(object_reference.namespace.as_deref(), Some("ns1"));
        assert_eq!(object_reference.name.as_deref(), Some("default"));
        assert_eq!(object_reference.uid, None);
    }
}
