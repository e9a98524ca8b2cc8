//! Canned Response Extension
//!
//! An [`AuthorizationExtension`] answering from a JSON document of recorded
//! plugin responses instead of a live plugin process. Each response body goes
//! through the message converter, so malformed recordings fail the same way a
//! misbehaving plugin would.
//!
//! ```json
//! {
//!   "plugins": {
//!     "cd.go.authorization.ldap": {
//!       "auth_config_metadata": [{"key": "Url", "metadata": {"required": true}}],
//!       "auth_config_view": {"template": "<div/>"},
//!       "capabilities": {"supported_auth_type": "password", "can_search": true},
//!       "failures": {"icon": "connection refused"}
//!     }
//!   }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use serde::{Serialize, Deserialize};
use serde_json::Value;
use crate::plugin::common::{ConfigurationProperty, Image};
use crate::plugin::error::{ExtensionError, ExtensionResult};
use super::capabilities::Capabilities;
use super::extension::{AuthorizationExtension, Facet};
use super::message_converter;

/// Recorded responses of one plugin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginResponses {
    #[serde(default)]
    pub auth_config_metadata: Option<Value>,
    #[serde(default)]
    pub auth_config_view: Option<Value>,
    #[serde(default)]
    pub role_config_metadata: Option<Value>,
    #[serde(default)]
    pub role_config_view: Option<Value>,
    #[serde(default)]
    pub icon: Option<Value>,
    #[serde(default)]
    pub capabilities: Option<Value>,

    /// Calls that fail with a transport error, with the error message
    #[serde(default)]
    pub failures: HashMap<Facet, String>,
}

impl PluginResponses {
    fn body(&self, plugin_id: &str, facet: Facet) -> ExtensionResult<Value> {
        if let Some(message) = self.failures.get(&facet) {
            return Err(ExtensionError::transport(plugin_id, message.clone()));
        }
        let body = match facet {
            Facet::AuthConfigMetadata => &self.auth_config_metadata,
            Facet::AuthConfigView => &self.auth_config_view,
            Facet::RoleConfigMetadata => &self.role_config_metadata,
            Facet::RoleConfigView => &self.role_config_view,
            Facet::Icon => &self.icon,
            Facet::Capabilities => &self.capabilities,
        };
        Ok(body.clone().unwrap_or(Value::Null))
    }
}

#[derive(Debug, Default, Deserialize)]
struct FixtureDocument {
    #[serde(default)]
    plugins: BTreeMap<String, PluginResponses>,
}

/// Extension backed by recorded responses
#[derive(Debug, Clone, Default)]
pub struct FixtureExtension {
    plugins: BTreeMap<String, PluginResponses>,
}

impl FixtureExtension {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the responses of a plugin
    pub fn with_plugin<S: Into<String>>(mut self, plugin_id: S, responses: PluginResponses) -> Self {
        self.plugins.insert(plugin_id.into(), responses);
        self
    }

    /// Parse a fixture document
    pub fn from_json(json: &str) -> Result<Self> {
        let document: FixtureDocument = serde_json::from_str(json)
            .context("Failed to parse plugin responses document")?;
        debug!("Loaded responses for {} plugin(s)", document.plugins.len());
        Ok(Self { plugins: document.plugins })
    }

    /// Load a fixture document from disk
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read plugin responses file: {}", path.display()))?;
        let extension = Self::from_json(&content)
            .with_context(|| format!("Failed to load plugin responses file: {}", path.display()))?;
        info!("Loaded plugin responses from: {}", path.display());
        Ok(extension)
    }

    /// Ids of every plugin with recorded responses, sorted
    pub fn plugin_ids(&self) -> Vec<String> {
        self.plugins.keys().cloned().collect()
    }

    fn body(&self, plugin_id: &str, facet: Facet) -> ExtensionResult<Value> {
        self.plugins
            .get(plugin_id)
            .ok_or_else(|| ExtensionError::plugin_not_found(plugin_id))?
            .body(plugin_id, facet)
    }
}

#[async_trait]
impl AuthorizationExtension for FixtureExtension {
    async fn auth_config_metadata(&self, plugin_id: &str) -> ExtensionResult<Option<Vec<ConfigurationProperty>>> {
        message_converter::configurations_from(plugin_id, &self.body(plugin_id, Facet::AuthConfigMetadata)?)
    }

    async fn auth_config_view(&self, plugin_id: &str) -> ExtensionResult<Option<String>> {
        message_converter::view_from(plugin_id, &self.body(plugin_id, Facet::AuthConfigView)?)
    }

    async fn role_configuration_metadata(&self, plugin_id: &str) -> ExtensionResult<Option<Vec<ConfigurationProperty>>> {
        message_converter::configurations_from(plugin_id, &self.body(plugin_id, Facet::RoleConfigMetadata)?)
    }

    async fn role_configuration_view(&self, plugin_id: &str) -> ExtensionResult<Option<String>> {
        message_converter::view_from(plugin_id, &self.body(plugin_id, Facet::RoleConfigView)?)
    }

    async fn icon(&self, plugin_id: &str) -> ExtensionResult<Option<Image>> {
        message_converter::image_from(plugin_id, &self.body(plugin_id, Facet::Icon)?)
    }

    async fn capabilities(&self, plugin_id: &str) -> ExtensionResult<Option<Capabilities>> {
        message_converter::capabilities_from(plugin_id, &self.body(plugin_id, Facet::Capabilities)?)
    }
}
