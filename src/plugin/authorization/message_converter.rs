//! Authorization Message Converter
//!
//! Decodes the JSON response bodies of the authorization extension into
//! domain values. A JSON `null` body means the plugin does not provide the
//! facet.

use log::warn;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::plugin::common::{ConfigurationProperty, Image};
use crate::plugin::error::{ExtensionError, ExtensionResult};
use super::capabilities::Capabilities;

#[derive(Debug, Deserialize)]
struct ViewResponse {
    template: String,
}

#[derive(Debug, Deserialize)]
struct CapabilitiesResponse {
    supported_auth_type: String,
    can_search: Option<bool>,
}

/// Decode a metadata response: `[{"key": .., "metadata": {..}}, ..]`
pub fn configurations_from(plugin_id: &str, body: &Value) -> ExtensionResult<Option<Vec<ConfigurationProperty>>> {
    decode(plugin_id, "configuration metadata", body)
}

/// Decode a view response: `{"template": ..}`
pub fn view_from(plugin_id: &str, body: &Value) -> ExtensionResult<Option<String>> {
    let view: Option<ViewResponse> = decode(plugin_id, "view", body)?;
    Ok(view.map(|v| v.template))
}

/// Decode an icon response: `{"content_type": .., "data": ..}`
pub fn image_from(plugin_id: &str, body: &Value) -> ExtensionResult<Option<Image>> {
    decode(plugin_id, "icon", body)
}

/// Decode a capabilities response: `{"supported_auth_type": .., "can_search": ..}`
pub fn capabilities_from(plugin_id: &str, body: &Value) -> ExtensionResult<Option<Capabilities>> {
    let response: Option<CapabilitiesResponse> = decode(plugin_id, "capabilities", body)?;
    let Some(response) = response else {
        return Ok(None);
    };

    let can_search = response.can_search.unwrap_or_else(|| {
        warn!("Plugin {} capabilities omit can_search; assuming it cannot search", plugin_id);
        false
    });
    Ok(Some(Capabilities::from_tag(&response.supported_auth_type, can_search)?))
}

fn decode<T: DeserializeOwned>(plugin_id: &str, what: &str, body: &Value) -> ExtensionResult<Option<T>> {
    if body.is_null() {
        return Ok(None);
    }
    T::deserialize(body)
        .map(Some)
        .map_err(|e| ExtensionError::protocol(plugin_id, format!("invalid {} response: {}", what, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::plugin::authorization::capabilities::SupportedAuthType;
    use crate::plugin::common::{MetadataValue, SECURE};

    #[test]
    fn test_configurations_from_response() {
        let body = json!([
            {"key": "username", "metadata": {"secure": false, "required": true}},
            {"key": "password", "metadata": {"secure": true}}
        ]);

        let configurations = configurations_from("ldap", &body).unwrap().unwrap();
        assert_eq!(configurations.len(), 2);
        assert_eq!(configurations[0].key(), "username");
        assert!(configurations[0].is_required());
        assert_eq!(configurations[1], ConfigurationProperty::new("password", [(SECURE, true)]));
    }

    #[test]
    fn test_configurations_accept_null_and_fractional_metadata() {
        let body = json!([
            {"key": "timeout", "metadata": {"secure": false, "default_value": null, "display_order": 1.5}}
        ]);

        let configurations = configurations_from("ldap", &body).unwrap().unwrap();
        let metadata = configurations[0].metadata();

        assert_eq!(metadata.get("default_value"), Some(&MetadataValue::Null));
        assert_eq!(metadata.get("display_order").and_then(|v| match v {
            MetadataValue::Number(n) => n.as_f64(),
            _ => None,
        }), Some(1.5));
        assert!(!configurations[0].is_secure());
    }

    #[test]
    fn test_null_body_is_absent() {
        assert_eq!(configurations_from("ldap", &Value::Null).unwrap(), None);
        assert_eq!(view_from("ldap", &Value::Null).unwrap(), None);
        assert_eq!(image_from("ldap", &Value::Null).unwrap(), None);
        assert_eq!(capabilities_from("ldap", &Value::Null).unwrap(), None);
    }

    #[test]
    fn test_view_and_image_from_response() {
        assert_eq!(
            view_from("ldap", &json!({"template": "<div>auth</div>"})).unwrap(),
            Some("<div>auth</div>".to_string())
        );
        assert_eq!(
            image_from("ldap", &json!({"content_type": "image/svg+xml", "data": "PHN2Zz4="})).unwrap(),
            Some(Image::new("image/svg+xml", "PHN2Zz4="))
        );
    }

    #[test]
    fn test_malformed_body_is_protocol_error() {
        let error = view_from("ldap", &json!({"html": "<div/>"})).unwrap_err();
        assert!(matches!(error, ExtensionError::Protocol { .. }));
        assert!(error.to_string().contains("ldap"));

        let error = configurations_from("ldap", &json!("not a list")).unwrap_err();
        assert!(matches!(error, ExtensionError::Protocol { .. }));
    }

    #[test]
    fn test_capabilities_from_response() {
        let capabilities = capabilities_from("ldap", &json!({"supported_auth_type": "password", "can_search": true}))
            .unwrap()
            .unwrap();
        assert_eq!(capabilities, Capabilities::new(SupportedAuthType::Password, true));

        let error = capabilities_from("ldap", &json!({"supported_auth_type": "kerberos"})).unwrap_err();
        assert!(matches!(error, ExtensionError::InvalidCapability(ref e) if e.tag == "kerberos"));
    }

    #[test]
    fn test_capabilities_tag_is_case_insensitive() {
        let capabilities = capabilities_from("github", &json!({"supported_auth_type": "Web", "can_search": true}))
            .unwrap()
            .unwrap();
        assert_eq!(capabilities, Capabilities::new(SupportedAuthType::Web, true));
    }

    #[test]
    fn test_missing_can_search_means_no_search() {
        let capabilities = capabilities_from("ldap", &json!({"supported_auth_type": "password"}))
            .unwrap()
            .unwrap();
        assert!(!capabilities.can_search());

        let error = capabilities_from("ldap", &json!({"supported_auth_type": "password", "can_search": "yes"})).unwrap_err();
        assert!(matches!(error, ExtensionError::Protocol { .. }));
    }
}
