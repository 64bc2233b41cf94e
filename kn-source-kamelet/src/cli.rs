//! Command line interface of the plugin.
use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use kube::config::{KubeConfigOptions, Kubeconfig};
use tracing::debug;

use crate::{
    binding::{create_binding, CreateBindingOptions, SourceOverrides, SourceSelector},
    error::Result,
    store::KubeStore,
};

const CREATE_EXAMPLES: &str = "\
Examples:
  # Create Kamelet binding with source and sink.
  kn source kamelet binding create NAME --kamelet=log-sink --broker=default

  # Add binding properties
  kn source kamelet binding create NAME --kamelet=name --source|broker|channel|service=<name> --property=<key>=<value>";

#[derive(Debug, Parser)]
#[clap(name = "kn-source-kamelet", version)]
#[clap(about = "Bind Camel-K Kamelet sinks to Knative brokers, channels and services.")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage Kamelet bindings
    #[clap(subcommand)]
    Binding(BindingCommand),
}

#[derive(Debug, Subcommand)]
pub enum BindingCommand {
    /// Create Kamelet bindings and bind sink to Knative broker, channel or service.
    #[clap(after_help = CREATE_EXAMPLES)]
    Create(CreateOpts),
}

/// Namespace and cluster selection.
#[derive(Debug, Args)]
pub struct NamespaceOpts {
    /// Specify the namespace to operate in.
    #[clap(long, short = 'n', env = "KN_NAMESPACE")]
    pub namespace: Option<String>,

    /// Path to the kubeconfig file to use for CLI requests.
    #[clap(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Name of the kubeconfig context to use.
    #[clap(long)]
    pub context: Option<String>,
}

#[derive(Debug, Args)]
#[clap(group(
    ArgGroup::new("binding-source")
        .required(true)
        .args(["source", "broker", "channel", "service"])
))]
pub struct CreateOpts {
    /// Name of the binding.
    pub name: String,

    /// Kamelet sink.
    #[clap(long, required = true)]
    pub kamelet: String,

    /// Source expression to define the binding source.
    #[clap(long, short = 's')]
    pub source: Option<String>,

    /// Uses a broker as binding source.
    #[clap(long)]
    pub broker: Option<String>,

    /// Uses a channel as binding source.
    #[clap(long)]
    pub channel: Option<String>,

    /// Uses a Knative service as binding source.
    #[clap(long)]
    pub service: Option<String>,

    /// Apply the changes even if the binding already exists.
    #[clap(long)]
    pub force: bool,

    /// Add a sink property in the form of "<key>=<value>".
    #[clap(long = "property", value_name = "KEY=VALUE")]
    pub properties: Vec<String>,

    /// Customize cloud events spec version provided to the binding source.
    #[clap(long)]
    pub ce_spec: Option<String>,

    /// Customize cloud events type provided to the binding source.
    #[clap(long)]
    pub ce_type: Option<String>,

    /// Customize broker type provided to the binding source.
    #[clap(long)]
    pub broker_type: Option<String>,

    /// Customize cloud events property in the form of "<key>=<value>".
    #[clap(long = "ce-override", value_name = "KEY=VALUE")]
    pub ce_overrides: Vec<String>,

    #[clap(flatten)]
    pub namespace: NamespaceOpts,
}

impl CreateOpts {
    pub fn to_options(&self) -> Result<CreateBindingOptions> {
        Ok(CreateBindingOptions {
            name: self.name.clone(),
            kamelet: self.kamelet.clone(),
            sink_properties: self.properties.clone(),
            source: SourceSelector::from_flags(
                self.source.clone(),
                self.broker.clone(),
                self.channel.clone(),
                self.service.clone(),
            )?,
            overrides: SourceOverrides {
                broker_type: self.broker_type.clone(),
                cloud_events_spec_version: self.ce_spec.clone(),
                cloud_events_type: self.ce_type.clone(),
                cloud_events_overrides: self.ce_overrides.clone(),
            },
            force: self.force,
        })
    }
}

impl NamespaceOpts {
    /// Client configuration for the selected kubeconfig and context.
    pub async fn client_config(&self) -> Result<kube::Config> {
        let options = KubeConfigOptions {
            context: self.context.clone(),
            ..Default::default()
        };
        let config = match (&self.kubeconfig, &self.context) {
            (Some(path), _) => {
                kube::Config::from_custom_kubeconfig(Kubeconfig::read_from(path)?, &options).await?
            }
            (None, Some(_)) => kube::Config::from_kubeconfig(&options).await?,
            (None, None) => kube::Config::infer().await?,
        };
        Ok(config)
    }

    /// The `--namespace` flag, or the default namespace of the kubeconfig context.
    pub fn resolve(&self, config: &kube::Config) -> String {
        self.namespace
            .clone()
            .filter(|namespace| !namespace.is_empty())
            .unwrap_or_else(|| config.default_namespace.clone())
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Binding(BindingCommand::Create(opts)) => {
            let options = opts.to_options()?;
            let config = opts.namespace.client_config().await?;
            let namespace = opts.namespace.resolve(&config);
            debug!(namespace = %namespace, cluster = %config.cluster_url, "using cluster");

            let store = KubeStore::new(kube::Client::try_from(config)?);
            let outcome = create_binding(&store, &namespace, options).await?;
            println!("{outcome}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::error::ErrorKind;

    fn create(args: &[&str]) -> Result<CreateOpts, clap::Error> {
        let argv = ["kn-source-kamelet", "binding", "create"]
            .iter()
            .chain(args)
            .copied();
        Cli::try_parse_from(argv).map(|cli| match cli.command {
            Command::Binding(BindingCommand::Create(opts)) => opts,
        })
    }

    #[test]
    fn parses_all_flags() {
        let opts = create(&[
            "audit",
            "--kamelet=log-sink",
            "--broker",
            "default",
            "--force",
            "--property",
            "loggerName=audit",
            "--property=showHeaders=true",
            "--ce-spec=1.0",
            "--ce-type=dev.knative.audit",
            "--broker-type=Kafka",
            "--ce-override",
            "source=audit",
            "-n",
            "events",
        ])
        .unwrap();
        assert_eq!(opts.name, "audit");
        assert!(opts.force);
        assert_eq!(opts.properties, ["loggerName=audit", "showHeaders=true"]);
        assert_eq!(opts.namespace.namespace.as_deref(), Some("events"));

        let options = opts.to_options().unwrap();
        assert_eq!(options.source, SourceSelector::Broker("default".into()));
        assert_eq!(options.overrides.broker_type.as_deref(), Some("Kafka"));
        assert_eq!(options.overrides.cloud_events_spec_version.as_deref(), Some("1.0"));
        assert_eq!(options.overrides.cloud_events_type.as_deref(), Some("dev.knative.audit"));
        assert_eq!(options.overrides.cloud_events_overrides, ["source=audit"]);
    }

    #[test]
    fn short_source_flag() {
        let opts = create(&["audit", "--kamelet", "log-sink", "-s", "channel:ns1/events"]).unwrap();
        assert_eq!(
            opts.to_options().unwrap().source,
            SourceSelector::Expression("channel:ns1/events".into())
        );
    }

    #[test]
    fn name_is_required() {
        let err = create(&["--kamelet", "log-sink", "--broker", "default"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn a_source_is_required() {
        let err = create(&["audit", "--kamelet", "log-sink"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn sources_are_exclusive() {
        let err = create(&[
            "audit",
            "--kamelet",
            "log-sink",
            "--broker",
            "default",
            "--service",
            "svc",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn namespace_falls_back_to_context_default() {
        let opts = NamespaceOpts {
            namespace: None,
            kubeconfig: None,
            context: None,
        };
        let mut config = kube::Config::new("https://cluster.local".parse().unwrap());
        config.default_namespace = "team-a".into();
        assert_eq!(opts.resolve(&config), "team-a");

        let opts = NamespaceOpts {
            namespace: Some("events".into()),
            ..opts
        };
        assert_eq!(opts.resolve(&config), "events");
    }
}
