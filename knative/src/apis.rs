//! Scheme group versions of the Knative resources that can be referenced
//! from outside of Knative, e.g. as the source or sink of a binding.

/// `eventing.knative.dev`
pub mod eventing {
    pub mod v1 {
        pub const SCHEME_GROUP_VERSION: &str = "eventing.knative.dev/v1";

        pub const BROKER_KIND: &str = "Broker";
    }
}

/// `messaging.knative.dev`
pub mod messaging {
    pub mod v1 {
        pub const SCHEME_GROUP_VERSION: &str = "messaging.knative.dev/v1";

        pub const CHANNEL_KIND: &str = "Channel";
    }
}

/// `serving.knative.dev`
pub mod serving {
    pub mod v1 {
        pub const SCHEME_GROUP_VERSION: &str = "serving.knative.dev/v1";

        pub const SERVICE_KIND: &str = "Service";
    }
}

