//! Main NavixConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::GraphStoreConfig;
use crate::pathfinding::RoutingConfig;

use super::error::ConfigLoadError;
use super::graph::GraphSection;
use super::routing::RoutingSection;

/// Default config file location
pub const DEFAULT_CONFIG_PATH: &str = "configs/navix.yaml";

/// Full navix-map configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct NavixConfig {
    /// Graph capture settings
    #[serde(default)]
    pub graph: GraphSection,

    /// Routing settings
    #[serde(default)]
    pub routing: RoutingSection,
}

impl NavixConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/navix.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Convert to GraphStoreConfig
    pub fn to_store_config(&self) -> GraphStoreConfig {
        self.graph.to_store_config()
    }

    /// Convert to RoutingConfig
    pub fn to_routing_config(&self) -> RoutingConfig {
        self.routing.to_routing_config()
    }
}
