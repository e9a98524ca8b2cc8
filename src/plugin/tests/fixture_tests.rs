//! Tests for the Canned Response Extension
//! 
//! Drives the builder through recorded JSON responses, the way a live plugin
//! would answer.

use crate::plugin::authorization::{
    AuthorizationExtension, AuthorizationPluginInfoBuilder, Capabilities, Facet, FixtureExtension,
    PluginResponses, SupportedAuthType,
};
use crate::plugin::common::{Image, REQUIRED, SECURE};
use crate::plugin::descriptor::PluginDescriptor;
use crate::plugin::error::{ExtensionError, PluginInfoBuildError};
use serde_json::json;
use std::sync::Arc;

const RESPONSES: &str = r#"{
    "plugins": {
        "cd.go.authorization.ldap": {
            "auth_config_metadata": [
                {"key": "Url", "metadata": {"required": true, "secure": false}},
                {"key": "Password", "metadata": {"required": true, "secure": true}}
            ],
            "auth_config_view": {"template": "<div>ldap</div>"},
            "role_config_metadata": [{"key": "MemberOf", "metadata": {"required": false}}],
            "role_config_view": {"template": "<div>role</div>"},
            "icon": {"content_type": "image/png", "data": "iVBORw0KGgo="},
            "capabilities": {"supported_auth_type": "password", "can_search": true}
        },
        "cd.go.authorization.github": {
            "auth_config_metadata": [{"key": "ClientId", "metadata": {"required": true}}],
            "capabilities": {"supported_auth_type": "web", "can_search": false},
            "failures": {"icon": "connection refused"}
        }
    }
}"#;

fn builder(extension: FixtureExtension) -> AuthorizationPluginInfoBuilder {
    AuthorizationPluginInfoBuilder::new(Arc::new(extension))
}

#[test]
fn test_fixture_lists_plugins_sorted() {
    let extension = FixtureExtension::from_json(RESPONSES).unwrap();
    assert_eq!(
        extension.plugin_ids(),
        vec!["cd.go.authorization.github".to_string(), "cd.go.authorization.ldap".to_string()]
    );
}

#[test]
fn test_fixture_rejects_invalid_document() {
    assert!(FixtureExtension::from_json("{not json").is_err());
    assert!(FixtureExtension::from_json(r#"{"plugins": []}"#).is_err());
}

#[tokio::test]
async fn test_fully_recorded_plugin_builds_every_facet() {
    let descriptor = Arc::new(PluginDescriptor::new("cd.go.authorization.ldap"));
    let info = builder(FixtureExtension::from_json(RESPONSES).unwrap())
        .plugin_info_for(&descriptor)
        .await
        .unwrap();

    let auth = info.auth_config_settings().unwrap();
    assert_eq!(auth.view().template(), "<div>ldap</div>");
    assert_eq!(auth.configurations().len(), 2);
    assert!(auth.configuration("Password").unwrap().is_secure());
    assert!(auth.configuration("Url").unwrap().metadata().contains_key(REQUIRED));

    let role = info.role_settings().unwrap();
    assert_eq!(role.configurations()[0].key(), "MemberOf");
    assert!(!role.configurations()[0].is_required());

    assert_eq!(info.image(), Some(&Image::new("image/png", "iVBORw0KGgo=")));
    assert_eq!(info.capabilities(), Some(&Capabilities::new(SupportedAuthType::Password, true)));
}

#[tokio::test]
async fn test_recorded_transport_failure_fails_the_build() {
    let descriptor = Arc::new(PluginDescriptor::new("cd.go.authorization.github"));
    let error = builder(FixtureExtension::from_json(RESPONSES).unwrap())
        .plugin_info_for(&descriptor)
        .await
        .unwrap_err();

    assert_eq!(error.facet(), Facet::Icon);
    assert!(error.to_string().contains("connection refused"));
    assert!(error.is_recoverable());
}

#[tokio::test]
async fn test_unknown_plugin_fails_the_build() {
    let descriptor = Arc::new(PluginDescriptor::new("cd.go.authorization.missing"));
    let error = builder(FixtureExtension::from_json(RESPONSES).unwrap())
        .plugin_info_for(&descriptor)
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        PluginInfoBuildError::QueryFailed { source: ExtensionError::PluginNotFound { .. }, .. }
    ));
}

#[tokio::test]
async fn test_unknown_auth_type_fails_the_build() {
    let extension = FixtureExtension::new().with_plugin(
        "saml",
        PluginResponses {
            capabilities: Some(json!({"supported_auth_type": "saml", "can_search": false})),
            ..Default::default()
        },
    );
    let descriptor = Arc::new(PluginDescriptor::new("saml"));

    let error = builder(extension).plugin_info_for(&descriptor).await.unwrap_err();

    assert!(matches!(error, PluginInfoBuildError::InvalidCapability { .. }));
}

#[tokio::test]
async fn test_malformed_view_is_a_protocol_failure() {
    let extension = FixtureExtension::new().with_plugin(
        "broken",
        PluginResponses {
            auth_config_metadata: Some(json!([{"key": "username", "metadata": {"secure": false}}])),
            auth_config_view: Some(json!("<div/>")),
            ..Default::default()
        },
    );

    let error = extension.auth_config_view("broken").await.unwrap_err();
    assert!(matches!(error, ExtensionError::Protocol { .. }));

    let metadata = extension.auth_config_metadata("broken").await.unwrap().unwrap();
    assert!(!metadata[0].is_secure());
    assert!(metadata[0].metadata().contains_key(SECURE));
}
