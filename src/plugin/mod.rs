//! Plugin Metadata Module
//! 
//! Collects the metadata an authorization plugin declares about itself and
//! assembles it into an immutable descriptor for the rest of the host.
//! 
//! # Example Usage
//! 
//! ```no_run
//! use std::sync::Arc;
//! use authz_plugin_info::plugin::{AuthorizationPluginInfoBuilder, FixtureExtension, PluginDescriptor};
//! 
//! # async fn example() -> anyhow::Result<()> {
//! let extension = FixtureExtension::load_from_file("responses.json".as_ref())?;
//! let builder = AuthorizationPluginInfoBuilder::new(Arc::new(extension));
//! 
//! let descriptor = Arc::new(PluginDescriptor::new("cd.go.authorization.ldap"));
//! let info = builder.plugin_info_for(&descriptor).await?;
//! println!("{:?}", info.capabilities());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod common;
pub mod descriptor;
pub mod authorization;

#[cfg(test)]
pub mod tests;

// Re-export core types for easier access
pub use error::{ExtensionError, ExtensionResult, InvalidCapabilityError, PluginInfoBuildError, PluginInfoResult};
pub use common::{ConfigurationProperty, Image, InstanceSettings, MetadataValue, PluginView};
pub use descriptor::{PluginAbout, PluginDescriptor};

// Authorization extension
pub use authorization::{
    AuthorizationExtension, AuthorizationPluginInfo, AuthorizationPluginInfoBuilder, BuilderConfig,
    Capabilities, Facet, FixtureExtension, PluginResponses, QueryMode, SupportedAuthType,
};
