mod endpoint;
mod kamelet;
mod pipe;

pub use endpoint::{Endpoint, EndpointProperties};
pub use kamelet::{
    Kamelet, KameletDefinition, KameletPropertyDefinition, KameletSpec, KameletStatus,
    KAMELET_PROVIDER_ANNOTATION, KAMELET_SUPPORT_LEVEL_ANNOTATION, KAMELET_TYPE_LABEL,
};
pub use pipe::{Pipe, PipeSpec, PipeStatus};
