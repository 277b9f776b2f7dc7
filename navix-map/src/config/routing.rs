//! Routing configuration section.

use serde::{Deserialize, Serialize};

use crate::pathfinding::RoutingConfig;

/// Routing settings
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct RoutingSection {
    /// Exclude stairs nodes by default
    #[serde(default)]
    pub avoid_stairs: bool,

    /// Maximum nodes to expand (0 = unlimited)
    #[serde(default)]
    pub max_iterations: usize,
}

impl RoutingSection {
    /// Convert to RoutingConfig
    pub fn to_routing_config(&self) -> RoutingConfig {
        RoutingConfig {
            avoid_stairs: self.avoid_stairs,
            max_iterations: self.max_iterations,
        }
    }
}
