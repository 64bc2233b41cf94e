//! Camel-K custom resources used to wire Kamelets into event pipelines.
pub mod apis;

// expose only v1 types
pub use apis::camel::v1::*;
