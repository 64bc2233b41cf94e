//! `kn` plugin that binds Camel-K Kamelet sinks to Knative event sources.
//!
//! The plugin builds a Camel-K [`Pipe`](camel_k::Pipe) whose source is a
//! Knative broker, channel or service and whose sink is a
//! [`Kamelet`](camel_k::Kamelet), validating the sink properties against the
//! Kamelet's declared schema before creating (or, with `--force`, updating)
//! the binding.
pub mod binding;
pub mod cli;
mod error;
pub mod memory;
pub mod name;
pub mod properties;
pub mod source;
pub mod store;
pub mod verify;

pub use binding::{create_binding, CreateBindingOptions, Outcome, SourceOverrides, SourceSelector};
pub use error::{Error, Result};
pub use store::{BindingStore, KubeStore};
