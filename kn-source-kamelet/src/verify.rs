use camel_k::{Endpoint, Kamelet};
use kube::ResourceExt;
use tracing::debug;

use crate::{
    error::{Error, Result},
    properties::PropertyMap,
};

/// Check the endpoint properties against the schema the Kamelet declares.
///
/// Malformed properties are reported first, then the first missing required
/// property, then the first property the Kamelet does not declare. A Kamelet
/// without a definition declares no properties.
pub fn verify_properties(kamelet: &Kamelet, endpoint: &Endpoint) -> Result<()> {
    let properties = match &endpoint.properties {
        Some(properties) => properties.property_map().map_err(Error::InvalidProperties)?,
        None => PropertyMap::new(),
    };
    debug!(kamelet = %kamelet.name_any(), properties = properties.len(), "verifying sink properties");

    if let Some(missing) = kamelet
        .required_properties()
        .iter()
        .find(|required| !properties.contains_key(required.as_str()))
    {
        return Err(Error::MissingRequiredProperty {
            property: missing.clone(),
            kamelet: kamelet.name_any(),
        });
    }

    if let Some(unknown) = properties.keys().find(|name| !kamelet.declares_property(name)) {
        return Err(Error::UnknownProperty {
            property: unknown.clone(),
            kamelet: kamelet.name_any(),
        });
    }

    Ok(())
}
