//! Compact source references of the form
//! `[apiVersion:]kind:[namespace/]name[?query]`.
use knative::{
    apis::{eventing, messaging, serving},
    KReference,
};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

static SOURCE_EXPRESSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?P<apiVersion>(?:[a-z0-9.-]+/)?[a-z0-9.-]+):)?(?P<kind>[A-Za-z0-9.-]+):(?:(?P<namespace>[a-z0-9.-]+)/)?(?P<name>[a-z0-9.-]+)(?:$|[?].*$)")
        .expect("valid source expression pattern")
});

/// Kind and api version a short source alias stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceType {
    pub alias: &'static str,
    pub kind: &'static str,
    pub api_version: &'static str,
}

pub const SOURCE_TYPES: [SourceType; 3] = [
    SourceType {
        alias: "broker",
        kind: eventing::v1::BROKER_KIND,
        api_version: eventing::v1::SCHEME_GROUP_VERSION,
    },
    SourceType {
        alias: "channel",
        kind: messaging::v1::CHANNEL_KIND,
        api_version: messaging::v1::SCHEME_GROUP_VERSION,
    },
    SourceType {
        alias: "ksvc",
        kind: serving::v1::SERVICE_KIND,
        api_version: serving::v1::SCHEME_GROUP_VERSION,
    },
];

pub fn source_type(alias: &str) -> Option<&'static SourceType> {
    SOURCE_TYPES.iter().find(|source_type| source_type.alias == alias)
}

/// Decode a source expression into a reference.
///
/// The kind must be one of the [`SOURCE_TYPES`] aliases. An api version given
/// in the expression takes precedence over the alias default. The namespace is
/// left unset when the expression has none.
pub fn decode_source(expression: &str) -> Result<KReference> {
    let captures = SOURCE_EXPRESSION
        .captures(expression)
        .ok_or_else(|| Error::UnsupportedExpression(expression.to_string()))?;
    let group = |name: &str| {
        captures
            .name(name)
            .map(|m| m.as_str())
            .filter(|text| !text.is_empty())
    };

    let kind = group("kind").unwrap_or_default();
    let source_type = source_type(kind).ok_or_else(|| Error::UnsupportedSinkType(kind.to_string()))?;

    Ok(KReference {
        kind: source_type.kind.to_string(),
        namespace: group("namespace").map(str::to_string),
        name: group("name").unwrap_or_default().to_string(),
        api_version: Some(group("apiVersion").unwrap_or(source_type.api_version).to_string()),
        group: None,
    })
}
