//! Graph construction configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::graph::GraphStoreConfig;

/// Graph capture settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphSection {
    /// Mirror chain links back onto the previous node
    #[serde(default = "defaults::enabled")]
    pub bidirectional: bool,

    /// Prefix for generated node ids
    #[serde(default = "defaults::id_prefix")]
    pub id_prefix: String,

    /// Floor stamped on captured nodes
    #[serde(default)]
    pub floor_id: Option<String>,
}

impl Default for GraphSection {
    fn default() -> Self {
        Self {
            bidirectional: true,
            id_prefix: defaults::id_prefix(),
            floor_id: None,
        }
    }
}

impl GraphSection {
    /// Convert to GraphStoreConfig
    pub fn to_store_config(&self) -> GraphStoreConfig {
        GraphStoreConfig {
            bidirectional: self.bidirectional,
            id_prefix: self.id_prefix.clone(),
            floor_id: self.floor_id.clone(),
        }
    }
}
