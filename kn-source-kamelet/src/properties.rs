//! `key=value` property lists and their endpoint representation.
use std::collections::BTreeMap;

use camel_k::EndpointProperties;

use crate::error::{Error, Result};

pub type PropertyMap = BTreeMap<String, String>;

/// Parse `key=value` entries into a [`PropertyMap`].
///
/// Every entry must contain exactly one `=`, so values containing `=` are
/// rejected. Later entries overwrite earlier ones with the same key.
pub fn parse_properties<I, S>(entries: I) -> Result<PropertyMap>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut properties = PropertyMap::new();
    for entry in entries {
        let entry = entry.as_ref();
        let mut parts = entry.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => {
                properties.insert(key.to_string(), value.to_string());
            }
            _ => return Err(Error::InvalidPropertyFormat(entry.to_string())),
        }
    }
    Ok(properties)
}

/// An empty map yields no properties at all rather than an empty object.
pub fn to_endpoint_properties(properties: PropertyMap) -> Option<EndpointProperties> {
    if properties.is_empty() {
        None
    } else {
        Some(properties.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_key_value_pairs() {
        let properties = parse_properties(["loggerName=audit", "showHeaders=true"]).unwrap();
        assert_eq!(properties.len(), 2);
        assert_eq!(properties["loggerName"], "audit");
        assert_eq!(properties["showHeaders"], "true");
    }

    #[test]
    fn later_duplicates_win() {
        let properties = parse_properties(["a=1", "b=2", "a=3"]).unwrap();
        assert_eq!(properties["a"], "3");
        assert_eq!(properties["b"], "2");
    }

    #[test]
    fn empty_value_is_allowed() {
        let properties = parse_properties(["a="]).unwrap();
        assert_eq!(properties["a"], "");
    }

    #[test]
    fn rejects_entries_without_exactly_one_separator() {
        for entry in ["a", "a=b=c", ""] {
            match parse_properties([entry]) {
                Err(Error::InvalidPropertyFormat(e)) => assert_eq!(e, entry),
                other => panic!("expected format error for {entry:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_map_has_no_endpoint_properties() {
        assert_eq!(to_endpoint_properties(PropertyMap::new()), None);

        let properties = to_endpoint_properties(parse_properties(["a=b"]).unwrap()).unwrap();
        assert_eq!(properties.0, json!({ "a": "b" }));
    }
}
