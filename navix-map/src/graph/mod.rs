//! Floor graph construction and snapshots.
//!
//! - [`GraphStore`]: incremental capture with chain linking
//! - [`FloorSnapshot`]: validated, id-indexed node set used for routing
//! - [`NodeIdGenerator`]: collision-free node ids
//!
//! ```rust
//! use navix_map::core::{NodeType, Point3D};
//! use navix_map::graph::GraphStore;
//!
//! let mut store = GraphStore::with_defaults();
//! let a = store.add_node(Point3D::new(0.0, 0.0, 0.0), None, NodeType::Walking);
//! let b = store.add_node(Point3D::new(1.0, 0.0, 0.0), Some("Exit".into()), NodeType::Normal);
//! assert_eq!(b.neighbor_ids, vec![a.id.clone()]);
//! ```

mod id;
mod snapshot;
mod store;

pub use id::{DEFAULT_ID_PREFIX, NodeIdGenerator};
pub use snapshot::FloorSnapshot;
pub use store::{GraphStore, GraphStoreConfig, SharedGraphStore};

use crate::core::{Node, NodeType, Point3D};

/// Build a single node without a store.
///
/// The node gets a fresh unique id and, when `previous_id` is given, one
/// outgoing link to it. Updating the previous node's links is up to the
/// caller.
pub fn build_node(
    position: Point3D,
    previous_id: Option<&str>,
    name: Option<&str>,
    node_type: NodeType,
) -> Node {
    let mut node = Node::new(id::fresh_id(), position).with_type(node_type);
    node.name = name.map(str::to_string);
    if let Some(prev) = previous_id {
        node.neighbor_ids.push(prev.to_string());
    }
    node
}
