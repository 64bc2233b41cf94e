//! Creating (or replacing) the Pipe that binds a Kamelet sink to a Knative
//! source.
use std::fmt;

use camel_k::{Endpoint, Pipe, PipeSpec};
use knative::KReference;
use tracing::{debug, info};

use crate::{
    error::{Error, Result},
    name::derive_name,
    properties::{parse_properties, to_endpoint_properties, PropertyMap},
    source::decode_source,
    store::{is_already_exists, BindingStore},
    verify::verify_properties,
};

/// Where the binding takes its events from. Exactly one is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSelector {
    /// A full source expression, see [`decode_source`].
    Expression(String),
    Broker(String),
    Channel(String),
    /// A Knative service.
    Service(String),
}

impl SourceSelector {
    /// Pick the source from the four mutually exclusive flags. Empty values
    /// count as absent.
    pub fn from_flags(
        source: Option<String>,
        broker: Option<String>,
        channel: Option<String>,
        service: Option<String>,
    ) -> Result<Self> {
        let given = |value: Option<String>| value.filter(|v| !v.is_empty());
        let mut selected: Vec<(&'static str, SourceSelector)> = [
            ("--source", given(source).map(SourceSelector::Expression)),
            ("--broker", given(broker).map(SourceSelector::Broker)),
            ("--channel", given(channel).map(SourceSelector::Channel)),
            ("--service", given(service).map(SourceSelector::Service)),
        ]
        .into_iter()
        .filter_map(|(flag, selector)| selector.map(|selector| (flag, selector)))
        .collect();

        match selected.len() {
            0 => Err(Error::MissingSink),
            1 => Ok(selected.remove(0).1),
            _ => Err(Error::ConflictingSources(
                selected.into_iter().map(|(flag, _)| flag).collect(),
            )),
        }
    }

    /// The source expression this selector stands for.
    pub fn expression(&self) -> String {
        match self {
            SourceSelector::Expression(expression) => expression.clone(),
            SourceSelector::Broker(name) => format!("broker:{name}"),
            SourceSelector::Channel(name) => format!("channel:{name}"),
            SourceSelector::Service(name) => format!("ksvc:{name}"),
        }
    }

    pub fn decode(&self) -> Result<KReference> {
        decode_source(&self.expression())
    }
}

/// Customization of the events the source emits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceOverrides {
    pub broker_type: Option<String>,
    pub cloud_events_spec_version: Option<String>,
    pub cloud_events_type: Option<String>,
    /// `key=value` entries, each set as `ce.override.<key>`.
    pub cloud_events_overrides: Vec<String>,
}

/// Properties of the source endpoint.
pub fn source_properties(overrides: &SourceOverrides) -> Result<PropertyMap> {
    let mut properties = PropertyMap::new();
    let settings = [
        ("type", &overrides.broker_type),
        ("cloudEventsSpecVersion", &overrides.cloud_events_spec_version),
        ("cloudEventsType", &overrides.cloud_events_type),
    ];
    for (key, value) in settings {
        if let Some(value) = value.as_ref().filter(|v| !v.is_empty()) {
            properties.insert(key.to_string(), value.clone());
        }
    }

    for (key, value) in parse_properties(&overrides.cloud_events_overrides)? {
        properties.insert(format!("ce.override.{key}"), value);
    }

    Ok(properties)
}

/// Settings of a single `binding create` invocation.
#[derive(Debug, Clone)]
pub struct CreateBindingOptions {
    /// Binding name, derived from the sink and source when empty.
    pub name: String,
    /// Name of the sink Kamelet.
    pub kamelet: String,
    /// `key=value` sink properties.
    pub sink_properties: Vec<String>,
    pub source: SourceSelector,
    pub overrides: SourceOverrides,
    /// Replace an existing binding of the same name.
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(String),
    Updated(String),
}

impl Outcome {
    pub fn name(&self) -> &str {
        match self {
            Outcome::Created(name) | Outcome::Updated(name) => name,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created(name) => write!(f, "kamelet binding {name:?} created"),
            Outcome::Updated(name) => write!(f, "kamelet binding {name:?} updated"),
        }
    }
}

/// Build the Pipe for `options` in `namespace` and create it. An existing Pipe
/// of the same name is replaced only when `options.force` is set.
pub async fn create_binding<S>(
    store: &S,
    namespace: &str,
    options: CreateBindingOptions,
) -> Result<Outcome>
where
    S: BindingStore + ?Sized,
{
    debug!(kamelet = %options.kamelet, namespace, "fetching kamelet");
    let kamelet = store
        .get_kamelet(namespace, &options.kamelet)
        .await
        .map_err(|source| Error::KameletFetch {
            name: options.kamelet.clone(),
            namespace: namespace.to_string(),
            source,
        })?;

    let sink_properties = parse_properties(&options.sink_properties)?;
    let sink = Endpoint::kamelet(&kamelet, to_endpoint_properties(sink_properties));
    verify_properties(&kamelet, &sink)?;

    let mut source_ref = options.source.decode()?;
    source_ref.default_namespace(namespace);
    debug!(kind = %source_ref.kind, name = %source_ref.name, "resolved binding source");

    let source = Endpoint {
        ref_: Some(source_ref.clone().into()),
        uri: None,
        properties: to_endpoint_properties(source_properties(&options.overrides)?),
    };

    let name = derive_name(&options.name, &options.kamelet, &source_ref);
    let mut pipe = Pipe::new(
        &name,
        PipeSpec {
            source,
            sink,
            ..Default::default()
        },
    );
    pipe.metadata.namespace = Some(namespace.to_string());

    match store.create_pipe(namespace, &pipe).await {
        Ok(_) => {
            info!(name = %name, namespace, "kamelet binding created");
            Ok(Outcome::Created(name))
        }
        Err(err) if is_already_exists(&err) => {
            if !options.force {
                return Err(Error::AlreadyExists(name));
            }
            let existing = store.get_pipe(namespace, &name).await?;
            pipe.metadata.resource_version = existing.metadata.resource_version;
            store.replace_pipe(namespace, &pipe).await?;
            info!(name = %name, namespace, "kamelet binding updated");
            Ok(Outcome::Updated(name))
        }
        Err(err) => Err(err.into()),
    }
}
