//! Authorization Plugin Info Builder
//!
//! Queries an authorization plugin for each metadata facet and assembles the
//! answers into an [`AuthorizationPluginInfo`]. Facets are independent of each
//! other, so by default all calls are in flight at once; the first failure
//! aborts the build and the remaining calls are dropped.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use futures::future::join_all;
use log::{debug, trace, warn};
use crate::plugin::common::{ConfigurationProperty, Image, InstanceSettings, PluginView};
use crate::plugin::descriptor::PluginDescriptor;
use crate::plugin::error::{PluginInfoBuildError, PluginInfoResult};
use super::capabilities::Capabilities;
use super::extension::{AuthorizationExtension, Facet};
use super::info::AuthorizationPluginInfo;

/// How the extension calls of one build are scheduled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryMode {
    /// Issue every call at once and join the results
    #[default]
    Concurrent,

    /// Await each call before issuing the next, in facet order
    Sequential,
}

impl FromStr for QueryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "concurrent" => Ok(QueryMode::Concurrent),
            "sequential" => Ok(QueryMode::Sequential),
            _ => Err(format!("Invalid query mode: {}. Valid options: concurrent, sequential", s)),
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryMode::Concurrent => f.write_str("concurrent"),
            QueryMode::Sequential => f.write_str("sequential"),
        }
    }
}

/// Builder tuning
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuilderConfig {
    pub query_mode: QueryMode,
}

/// The two configurable surfaces an authorization plugin exposes
#[derive(Debug, Clone, Copy)]
enum Surface {
    AuthConfig,
    RoleConfig,
}

impl Surface {
    fn facets(self) -> (Facet, Facet) {
        match self {
            Surface::AuthConfig => (Facet::AuthConfigMetadata, Facet::AuthConfigView),
            Surface::RoleConfig => (Facet::RoleConfigMetadata, Facet::RoleConfigView),
        }
    }
}

/// Assembles plugin info from an authorization extension
///
/// Holds no per-plugin state, so a single builder can serve any number of
/// concurrent builds.
#[derive(Clone)]
pub struct AuthorizationPluginInfoBuilder {
    extension: Arc<dyn AuthorizationExtension>,
    config: BuilderConfig,
}

impl AuthorizationPluginInfoBuilder {
    /// Create a builder with the default configuration
    pub fn new(extension: Arc<dyn AuthorizationExtension>) -> Self {
        Self {
            extension,
            config: BuilderConfig::default(),
        }
    }

    /// Replace the builder configuration
    pub fn with_config(mut self, config: BuilderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Build the info for one plugin
    ///
    /// The returned info shares `descriptor` with the caller. Any failed
    /// extension call fails the whole build; no partial info is returned.
    pub async fn plugin_info_for(&self, descriptor: &Arc<PluginDescriptor>) -> PluginInfoResult<AuthorizationPluginInfo> {
        let plugin_id = descriptor.id();
        debug!("Building authorization plugin info for {} ({} queries)", plugin_id, self.config.query_mode);

        let (auth_config_settings, role_settings, image, capabilities) = match self.config.query_mode {
            QueryMode::Concurrent => tokio::try_join!(
                self.instance_settings(plugin_id, Surface::AuthConfig),
                self.instance_settings(plugin_id, Surface::RoleConfig),
                self.image(plugin_id),
                self.capabilities(plugin_id),
            )?,
            QueryMode::Sequential => (
                self.instance_settings(plugin_id, Surface::AuthConfig).await?,
                self.instance_settings(plugin_id, Surface::RoleConfig).await?,
                self.image(plugin_id).await?,
                self.capabilities(plugin_id).await?,
            ),
        };

        debug!(
            "Built plugin info for {}: auth settings={}, role settings={}, icon={}, capabilities={}",
            plugin_id,
            auth_config_settings.is_some(),
            role_settings.is_some(),
            image.is_some(),
            capabilities.is_some()
        );

        Ok(AuthorizationPluginInfo::new(
            Arc::clone(descriptor),
            auth_config_settings,
            role_settings,
            image,
            capabilities,
        ))
    }

    /// Build the info for several plugins at once
    ///
    /// Results come back in the order of `descriptors`; one plugin failing
    /// has no effect on the others.
    pub async fn plugin_infos_for(&self, descriptors: &[Arc<PluginDescriptor>]) -> Vec<PluginInfoResult<AuthorizationPluginInfo>> {
        join_all(descriptors.iter().map(|descriptor| self.plugin_info_for(descriptor))).await
    }

    async fn instance_settings(&self, plugin_id: &str, surface: Surface) -> PluginInfoResult<Option<InstanceSettings>> {
        let (metadata_facet, view_facet) = surface.facets();

        let metadata = async {
            let result = match surface {
                Surface::AuthConfig => self.extension.auth_config_metadata(plugin_id).await,
                Surface::RoleConfig => self.extension.role_configuration_metadata(plugin_id).await,
            };
            result.map_err(|e| PluginInfoBuildError::from_extension(plugin_id, metadata_facet, e))
        };
        let view = async {
            let result = match surface {
                Surface::AuthConfig => self.extension.auth_config_view(plugin_id).await,
                Surface::RoleConfig => self.extension.role_configuration_view(plugin_id).await,
            };
            result.map_err(|e| PluginInfoBuildError::from_extension(plugin_id, view_facet, e))
        };

        let (metadata, view) = match self.config.query_mode {
            QueryMode::Concurrent => tokio::try_join!(metadata, view)?,
            QueryMode::Sequential => (metadata.await?, view.await?),
        };

        Ok(pair_settings(plugin_id, metadata_facet, view_facet, metadata, view))
    }

    async fn image(&self, plugin_id: &str) -> PluginInfoResult<Option<Image>> {
        self.extension
            .icon(plugin_id)
            .await
            .map_err(|e| PluginInfoBuildError::from_extension(plugin_id, Facet::Icon, e))
    }

    async fn capabilities(&self, plugin_id: &str) -> PluginInfoResult<Option<Capabilities>> {
        self.extension
            .capabilities(plugin_id)
            .await
            .map_err(|e| PluginInfoBuildError::from_extension(plugin_id, Facet::Capabilities, e))
    }
}

/// Join metadata and view; a surface is present only when both halves are
fn pair_settings(
    plugin_id: &str,
    metadata_facet: Facet,
    view_facet: Facet,
    metadata: Option<Vec<ConfigurationProperty>>,
    view: Option<String>,
) -> Option<InstanceSettings> {
    match (metadata, view) {
        (Some(configurations), Some(template)) => {
            Some(InstanceSettings::new(configurations, PluginView::new(template)))
        }
        (None, None) => {
            trace!("Plugin {} provides neither {} nor {}", plugin_id, metadata_facet, view_facet);
            None
        }
        (Some(_), None) => {
            warn!("Plugin {} returned {} without {}; ignoring it", plugin_id, metadata_facet, view_facet);
            None
        }
        (None, Some(_)) => {
            warn!("Plugin {} returned {} without {}; ignoring it", plugin_id, view_facet, metadata_facet);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::common::SECURE;

    #[test]
    fn test_query_mode_parsing() {
        assert_eq!("concurrent".parse::<QueryMode>().unwrap(), QueryMode::Concurrent);
        assert_eq!("SEQUENTIAL".parse::<QueryMode>().unwrap(), QueryMode::Sequential);
        assert!("parallel".parse::<QueryMode>().is_err());
        assert_eq!(QueryMode::default(), QueryMode::Concurrent);
    }

    #[test]
    fn test_pair_settings_requires_both_halves() {
        let metadata = || Some(vec![ConfigurationProperty::new("username", [(SECURE, false)])]);
        let view = || Some("auth_config".to_string());
        let (m, v) = Surface::AuthConfig.facets();

        assert_eq!(
            pair_settings("p", m, v, metadata(), view()),
            Some(InstanceSettings::new(metadata().unwrap(), PluginView::new("auth_config")))
        );
        assert_eq!(pair_settings("p", m, v, metadata(), None), None);
        assert_eq!(pair_settings("p", m, v, None, view()), None);
        assert_eq!(pair_settings("p", m, v, None, None), None);
    }

    #[test]
    fn test_empty_metadata_still_forms_settings() {
        let (m, v) = Surface::RoleConfig.facets();
        let settings = pair_settings("p", m, v, Some(Vec::new()), Some(String::new())).unwrap();
        assert!(settings.configurations().is_empty());
        assert_eq!(settings.view().template(), "");
    }
}
