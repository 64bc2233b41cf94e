mod duck;
pub mod apis;

// expose only v1 types
pub use duck::v1::*;
