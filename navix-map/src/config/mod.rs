//! Unified configuration loading for navix-map.
//!
//! Loads all configuration from a single YAML file; every field has a
//! default, so an empty file (or no file) is valid.
//!
//! ```yaml
//! graph:
//!   bidirectional: true   # mirror chain links onto the previous node
//!   id_prefix: node_
//!   floor_id: floor_1
//!
//! routing:
//!   avoid_stairs: false   # accessible routing
//!   max_iterations: 0     # 0 = unlimited
//! ```

mod defaults;
mod error;
mod graph;
mod navix;
mod routing;

// Re-export main types
pub use error::ConfigLoadError;
pub use navix::{DEFAULT_CONFIG_PATH, NavixConfig};

// Re-export section types
pub use graph::GraphSection;
pub use routing::RoutingSection;
