use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    /// A `--property` or `--ce-override` entry is not a single `key=value` pair
    #[error("invalid property format: {0}")]
    InvalidPropertyFormat(String),
    #[error("unsupported sink expression {0:?} - please use format <kind>:<name>")]
    UnsupportedExpression(String),
    #[error("unsupported sink type {0:?}")]
    UnsupportedSinkType(String),
    #[error("missing sink for binding - please use one of --source, --broker, --channel, --service")]
    MissingSink,
    #[error("binding source is ambiguous - only one of --source, --broker, --channel, --service may be used, got {}", .0.join(", "))]
    ConflictingSources(Vec<&'static str>),
    #[error("binding is missing required property {property:?} for Kamelet {kamelet:?}")]
    MissingRequiredProperty { property: String, kamelet: String },
    #[error("binding uses unknown property {property:?} for Kamelet {kamelet:?}")]
    UnknownProperty { property: String, kamelet: String },
    /// Endpoint properties are not a JSON object
    #[error("invalid endpoint properties: {0}")]
    InvalidProperties(#[source] serde_json::Error),
    #[error("cannot get Kamelet {name:?} in namespace {namespace:?}: {source}")]
    KameletFetch {
        name: String,
        namespace: String,
        #[source]
        source: kube::Error,
    },
    #[error("kamelet binding with name {0:?} already exists. Use --force to recreate the binding")]
    AlreadyExists(String),
    #[error("unable to infer Kubeconfig: {0}")]
    InferConfig(#[from] kube::config::InferConfigError),
    #[error("unable to load Kubeconfig: {0}")]
    Kubeconfig(#[from] kube::config::KubeconfigError),
    /// Kube errors
    #[error(transparent)]
    Kube(#[from] kube::Error),
}
