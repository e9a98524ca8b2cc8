//! Authorization Plugin Info
//!
//! The assembled, immutable descriptor of an authorization plugin.

use std::sync::Arc;
use serde::Serialize;
use crate::plugin::common::{Image, InstanceSettings};
use crate::plugin::descriptor::PluginDescriptor;
use super::capabilities::Capabilities;

/// Name of the extension point these descriptors belong to
pub const AUTHORIZATION_EXTENSION: &str = "authorization";

/// Everything the host knows about one authorization plugin
///
/// Each facet is `None` when the plugin does not provide it. Equality is
/// structural, including the descriptor contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizationPluginInfo {
    descriptor: Arc<PluginDescriptor>,
    auth_config_settings: Option<InstanceSettings>,
    role_settings: Option<InstanceSettings>,
    image: Option<Image>,
    capabilities: Option<Capabilities>,
}

impl AuthorizationPluginInfo {
    pub fn new(
        descriptor: Arc<PluginDescriptor>,
        auth_config_settings: Option<InstanceSettings>,
        role_settings: Option<InstanceSettings>,
        image: Option<Image>,
        capabilities: Option<Capabilities>,
    ) -> Self {
        Self {
            descriptor,
            auth_config_settings,
            role_settings,
            image,
            capabilities,
        }
    }

    /// The descriptor this info was built for, shared with the caller
    pub fn descriptor(&self) -> &Arc<PluginDescriptor> {
        &self.descriptor
    }

    pub fn plugin_id(&self) -> &str {
        self.descriptor.id()
    }

    pub fn extension_name(&self) -> &'static str {
        AUTHORIZATION_EXTENSION
    }

    pub fn auth_config_settings(&self) -> Option<&InstanceSettings> {
        self.auth_config_settings.as_ref()
    }

    pub fn role_settings(&self) -> Option<&InstanceSettings> {
        self.role_settings.as_ref()
    }

    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    pub fn capabilities(&self) -> Option<&Capabilities> {
        self.capabilities.as_ref()
    }
}
