//! Incremental graph construction.
//!
//! The mapping workflow captures one node per user action. Each new node is
//! chain-linked to the node captured before it, approximating the route the
//! mapper physically walked.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, trace};
use parking_lot::Mutex;

use crate::core::{Node, NodeType, Point3D};
use crate::error::{GraphError, Result};

use super::id::{DEFAULT_ID_PREFIX, NodeIdGenerator};
use super::snapshot::FloorSnapshot;

/// Graph store configuration
#[derive(Clone, Debug)]
pub struct GraphStoreConfig {
    /// Mirror each chain link back onto the previous node
    pub bidirectional: bool,
    /// Prefix for generated node ids
    pub id_prefix: String,
    /// Floor id stamped on every captured node
    pub floor_id: Option<String>,
}

impl Default for GraphStoreConfig {
    fn default() -> Self {
        Self {
            bidirectional: true,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            floor_id: None,
        }
    }
}

impl GraphStoreConfig {
    /// Directed chain links only (new node points back, previous node untouched)
    pub fn directed() -> Self {
        Self {
            bidirectional: false,
            ..Default::default()
        }
    }

    /// Stamp captured nodes with a floor id
    pub fn with_floor(mut self, floor_id: impl Into<String>) -> Self {
        self.floor_id = Some(floor_id.into());
        self
    }
}

/// In-memory node set for one floor with a "last inserted" chain pointer.
///
/// Persistence is the caller's concern: hand finished nodes to storage and
/// load an existing map back with [`GraphStore::from_nodes`].
#[derive(Clone, Debug)]
pub struct GraphStore {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    last_inserted: Option<String>,
    ids: NodeIdGenerator,
    config: GraphStoreConfig,
}

impl GraphStore {
    /// Create an empty store
    pub fn new(config: GraphStoreConfig) -> Self {
        let ids = NodeIdGenerator::new(config.id_prefix.clone());
        Self::with_id_generator(config, ids)
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::new(GraphStoreConfig::default())
    }

    /// Create an empty store with a caller-supplied id generator
    pub fn with_id_generator(config: GraphStoreConfig, ids: NodeIdGenerator) -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            last_inserted: None,
            ids,
            config,
        }
    }

    /// Load an existing map.
    ///
    /// The node list is validated like a [`FloorSnapshot`]. The chain starts
    /// reset, so the next captured node is not linked to any loaded node.
    pub fn from_nodes(config: GraphStoreConfig, nodes: Vec<Node>) -> Result<Self> {
        let snapshot = FloorSnapshot::new(nodes)?;
        let mut store = Self::new(config);
        for node in snapshot.into_nodes() {
            store.index.insert(node.id.clone(), store.nodes.len());
            store.nodes.push(node);
        }
        debug!("[GraphStore] loaded {} nodes", store.nodes.len());
        Ok(store)
    }

    /// Capture a new node at `position`.
    ///
    /// The node gets a fresh id and, if a previous node exists in the chain,
    /// a link back to it. With bidirectional linking the previous node also
    /// gains a link to the new one. Returns a copy of the stored node.
    pub fn add_node(
        &mut self,
        position: Point3D,
        name: Option<String>,
        node_type: NodeType,
    ) -> Node {
        let index = &self.index;
        let id = self.ids.next_unused(|candidate| index.contains_key(candidate));

        let mut node = Node::new(id.clone(), position).with_type(node_type);
        node.name = name;
        node.floor_id = self.config.floor_id.clone();

        if let Some(prev_id) = self.last_inserted.take() {
            node.neighbor_ids.push(prev_id.clone());
            if self.config.bidirectional
                && let Some(&prev_idx) = self.index.get(&prev_id)
            {
                self.nodes[prev_idx].add_neighbor(&id);
            }
            trace!("[GraphStore] chained {} -> {}", id, prev_id);
        }

        self.index.insert(id.clone(), self.nodes.len());
        self.nodes.push(node.clone());
        self.last_inserted = Some(id);

        node
    }

    /// Forget the chain pointer; existing nodes are kept.
    ///
    /// Used when the mapper starts a disconnected segment or switches floors.
    pub fn reset_chain(&mut self) {
        self.last_inserted = None;
    }

    /// Id of the most recently captured node in the current chain
    pub fn last_inserted(&self) -> Option<&str> {
        self.last_inserted.as_deref()
    }

    /// Add a directed link between two stored nodes.
    ///
    /// Returns false if the link already existed.
    pub fn link(&mut self, from: &str, to: &str) -> Result<bool> {
        let from_idx = self.require(from)?;
        self.require(to)?;
        Ok(self.nodes[from_idx].add_neighbor(to))
    }

    /// Link two stored nodes in both directions.
    pub fn link_bidirectional(&mut self, a: &str, b: &str) -> Result<()> {
        self.link(a, b)?;
        self.link(b, a)?;
        Ok(())
    }

    /// Delete a node and every link pointing at it.
    pub fn remove_node(&mut self, id: &str) -> Option<Node> {
        let idx = self.index.remove(id)?;
        let removed = self.nodes.remove(idx);

        for node in &mut self.nodes {
            node.neighbor_ids.retain(|n| n != id);
        }
        for (i, node) in self.nodes.iter().enumerate().skip(idx) {
            self.index.insert(node.id.clone(), i);
        }

        if self.last_inserted.as_deref() == Some(id) {
            self.last_inserted = None;
        }

        debug!("[GraphStore] removed {}", id);
        Some(removed)
    }

    /// Look up a node by id
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Number of stored nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no nodes are stored
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in capture order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Consume the store and return its nodes
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Store configuration
    pub fn config(&self) -> &GraphStoreConfig {
        &self.config
    }

    /// Validated copy of the current node set for planning
    pub fn snapshot(&self) -> Result<FloorSnapshot> {
        FloorSnapshot::from_slice(&self.nodes)
    }

    fn require(&self, id: &str) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Thread-safe handle to a [`GraphStore`].
///
/// Capture appends the new node and updates both the previous node's links
/// and the chain pointer; the mutex keeps those steps together.
#[derive(Clone, Debug, Default)]
pub struct SharedGraphStore {
    inner: Arc<Mutex<GraphStore>>,
}

impl SharedGraphStore {
    /// Wrap an existing store
    pub fn new(store: GraphStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// See [`GraphStore::add_node`]
    pub fn add_node(&self, position: Point3D, name: Option<String>, node_type: NodeType) -> Node {
        self.inner.lock().add_node(position, name, node_type)
    }

    /// See [`GraphStore::reset_chain`]
    pub fn reset_chain(&self) {
        self.inner.lock().reset_chain();
    }

    /// See [`GraphStore::snapshot`]
    pub fn snapshot(&self) -> Result<FloorSnapshot> {
        self.inner.lock().snapshot()
    }

    /// Number of stored nodes
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// True if no nodes are stored
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Run `f` with exclusive access to the store
    pub fn with<R>(&self, f: impl FnOnce(&mut GraphStore) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
