pub mod knative_reference;

pub use knative_reference::KReference;
