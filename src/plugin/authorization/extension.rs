//! Authorization Extension
//!
//! The host side of the authorization extension point. Implementations talk
//! to a plugin process (or fake one); the builder only sees this trait.

use std::fmt;
use async_trait::async_trait;
use serde::{Serialize, Deserialize};
use crate::plugin::common::{ConfigurationProperty, Image};
use crate::plugin::error::ExtensionResult;
use super::capabilities::Capabilities;

/// One extension call, used to report where a build failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    AuthConfigMetadata,
    AuthConfigView,
    RoleConfigMetadata,
    RoleConfigView,
    Icon,
    Capabilities,
}

impl Facet {
    /// Every call made for a single plugin
    pub const ALL: [Facet; 6] = [
        Facet::AuthConfigMetadata,
        Facet::AuthConfigView,
        Facet::RoleConfigMetadata,
        Facet::RoleConfigView,
        Facet::Icon,
        Facet::Capabilities,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::AuthConfigMetadata => "auth config metadata",
            Facet::AuthConfigView => "auth config view",
            Facet::RoleConfigMetadata => "role config metadata",
            Facet::RoleConfigView => "role config view",
            Facet::Icon => "icon",
            Facet::Capabilities => "capabilities",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calls the host can make against an authorization plugin
///
/// Every call is keyed by plugin id. `Ok(None)` means the plugin does not
/// provide that piece of metadata; `Err` means the call itself failed.
/// Timeouts and retries are the implementation's business.
#[async_trait]
pub trait AuthorizationExtension: Send + Sync {
    /// Configuration properties of an auth config
    async fn auth_config_metadata(&self, plugin_id: &str) -> ExtensionResult<Option<Vec<ConfigurationProperty>>>;

    /// Template used to render the auth config form
    async fn auth_config_view(&self, plugin_id: &str) -> ExtensionResult<Option<String>>;

    /// Configuration properties of a role
    async fn role_configuration_metadata(&self, plugin_id: &str) -> ExtensionResult<Option<Vec<ConfigurationProperty>>>;

    /// Template used to render the role form
    async fn role_configuration_view(&self, plugin_id: &str) -> ExtensionResult<Option<String>>;

    async fn icon(&self, plugin_id: &str) -> ExtensionResult<Option<Image>>;

    async fn capabilities(&self, plugin_id: &str) -> ExtensionResult<Option<Capabilities>>;
}
