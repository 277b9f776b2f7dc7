//! Immutable, validated view of one floor's nodes.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::{debug, trace};

use crate::core::{Node, NodeType};
use crate::error::{GraphError, Result};

/// All nodes of one floor at a point in time, indexed by id.
///
/// Construction rejects input that would silently corrupt routing:
/// non-finite coordinates and duplicate ids. Dangling neighbor references
/// are allowed and simply never resolve.
#[derive(Clone, Debug, Default)]
pub struct FloorSnapshot {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl FloorSnapshot {
    /// Validate and index a node list. Order is preserved.
    pub fn new(nodes: Vec<Node>) -> Result<Self> {
        let mut index = HashMap::with_capacity(nodes.len());

        for (i, node) in nodes.iter().enumerate() {
            if let Some(axis) = node.position().non_finite_axis() {
                return Err(GraphError::NonFiniteCoordinate {
                    id: node.id.clone(),
                    axis,
                });
            }
            match index.entry(node.id.clone()) {
                Entry::Occupied(_) => return Err(GraphError::DuplicateId(node.id.clone())),
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
            }
        }

        debug!("[FloorSnapshot] indexed {} nodes", nodes.len());
        Ok(Self { nodes, index })
    }

    /// Validate and index a borrowed node list (clones the nodes).
    pub fn from_slice(nodes: &[Node]) -> Result<Self> {
        Self::new(nodes.to_vec())
    }

    /// Number of nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the floor has no nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in their original order
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Look up a node by id
    #[inline]
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// True if a node with this id exists
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[inline]
    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    #[inline]
    pub(crate) fn node_at(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    /// Snapshot indices of a node's resolvable outgoing links, in stored order.
    pub(crate) fn neighbor_indices(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.nodes[idx]
            .neighbor_ids
            .iter()
            .filter_map(|id| {
                let found = self.index_of(id);
                if found.is_none() {
                    trace!("[FloorSnapshot] skipping dangling link {}", id);
                }
                found
            })
    }

    /// Resolve a node's outgoing links against this snapshot.
    ///
    /// Links whose target is absent are skipped.
    pub fn resolve_neighbors<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Node> + 'a {
        node.neighbor_ids.iter().filter_map(|id| self.get(id))
    }

    /// Named nodes, in snapshot order.
    pub fn destinations(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_destination())
    }

    /// Nodes with the given classification.
    pub fn nodes_of_type<'a>(&'a self, node_type: &'a NodeType) -> impl Iterator<Item = &'a Node> {
        self.nodes.iter().filter(move |n| &n.node_type == node_type)
    }

    /// First node whose name matches, ignoring ASCII case.
    pub fn find_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| {
            n.name
                .as_deref()
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name))
        })
    }

    /// `(from, missing)` pairs for every link whose target is absent.
    pub fn dangling_references(&self) -> Vec<(&str, &str)> {
        self.nodes
            .iter()
            .flat_map(|n| {
                n.neighbor_ids
                    .iter()
                    .filter(|id| !self.contains(id))
                    .map(move |id| (n.id.as_str(), id.as_str()))
            })
            .collect()
    }

    /// Consume the snapshot and return its nodes.
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}
