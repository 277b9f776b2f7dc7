//! A* planner over a floor snapshot.

use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::core::{Node, NodeType};
use crate::graph::FloorSnapshot;

use super::types::{AStarNode, RouteFailure, RouteResult, RoutingConfig};

/// A* route planner.
///
/// Edge cost and heuristic are both 3D Euclidean distance, so the heuristic
/// is consistent and the first time the target is popped its cost is
/// optimal. Search state is private to each [`RoutePlanner::plan`] call.
pub struct RoutePlanner<'a> {
    snapshot: &'a FloorSnapshot,
    config: RoutingConfig,
}

impl<'a> RoutePlanner<'a> {
    /// Create a new planner
    pub fn new(snapshot: &'a FloorSnapshot, config: RoutingConfig) -> Self {
        Self { snapshot, config }
    }

    /// Create with default configuration
    pub fn with_defaults(snapshot: &'a FloorSnapshot) -> Self {
        Self::new(snapshot, RoutingConfig::default())
    }

    /// Planner configuration
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Find the shortest route from `start_id` to `target_id`
    pub fn plan(&self, start_id: &str, target_id: &str) -> RouteResult {
        trace!("[AStar] plan: start={} target={}", start_id, target_id);

        let Some(start) = self.snapshot.index_of(start_id) else {
            debug!("[AStar] FAILED: StartNotFound ({})", start_id);
            return RouteResult::failed(RouteFailure::StartNotFound, 0);
        };
        let Some(target) = self.snapshot.index_of(target_id) else {
            debug!("[AStar] FAILED: TargetNotFound ({})", target_id);
            return RouteResult::failed(RouteFailure::TargetNotFound, 0);
        };

        if !self.is_permitted(self.snapshot.node_at(start)) {
            debug!("[AStar] FAILED: StartExcluded ({})", start_id);
            return RouteResult::failed(RouteFailure::StartExcluded, 0);
        }
        if !self.is_permitted(self.snapshot.node_at(target)) {
            debug!("[AStar] FAILED: TargetExcluded ({})", target_id);
            return RouteResult::failed(RouteFailure::TargetExcluded, 0);
        }

        if start == target {
            return RouteResult {
                path: vec![self.snapshot.node_at(start).clone()],
                cost: 0.0,
                nodes_expanded: 0,
                failure_reason: None,
            };
        }

        let n = self.snapshot.len();
        let mut g_scores = vec![f32::INFINITY; n];
        let mut h_scores: Vec<Option<f32>> = vec![None; n];
        let mut came_from: Vec<Option<usize>> = vec![None; n];
        let mut closed = vec![false; n];
        let mut open_set = BinaryHeap::new();
        let mut seq = 0u64;

        let h_start = self.heuristic(start, target);
        g_scores[start] = 0.0;
        h_scores[start] = Some(h_start);
        open_set.push(AStarNode {
            index: start,
            g_cost: 0.0,
            f_cost: h_start,
            seq,
        });

        let mut nodes_expanded = 0;

        while let Some(current) = open_set.pop() {
            // Stale entry superseded by a cheaper push
            if closed[current.index] || current.g_cost > g_scores[current.index] {
                continue;
            }

            nodes_expanded += 1;
            if self.config.max_iterations > 0 && nodes_expanded > self.config.max_iterations {
                debug!(
                    "[AStar] FAILED: MaxIterationsExceeded ({} nodes)",
                    nodes_expanded
                );
                return RouteResult::failed(RouteFailure::MaxIterationsExceeded, nodes_expanded);
            }

            // Target reached
            if current.index == target {
                return self.reconstruct_path(&came_from, target, current.g_cost, nodes_expanded);
            }

            closed[current.index] = true;
            let current_node = self.snapshot.node_at(current.index);

            for neighbor in self.snapshot.neighbor_indices(current.index) {
                if closed[neighbor] {
                    continue;
                }

                let neighbor_node = self.snapshot.node_at(neighbor);
                if !self.is_permitted(neighbor_node) {
                    trace!("[AStar] skipping excluded node {}", neighbor_node.id);
                    continue;
                }

                let tentative_g = g_scores[current.index] + current_node.distance_to(neighbor_node);
                // Undiscovered neighbors are always pushed, even if the edge
                // length overflowed to infinity
                let undiscovered = h_scores[neighbor].is_none();
                if undiscovered || tentative_g < g_scores[neighbor] {
                    came_from[neighbor] = Some(current.index);
                    g_scores[neighbor] = tentative_g;

                    let h = *h_scores[neighbor].get_or_insert_with(|| self.heuristic(neighbor, target));
                    seq += 1;
                    open_set.push(AStarNode {
                        index: neighbor,
                        g_cost: tentative_g,
                        f_cost: tentative_g + h,
                        seq,
                    });
                }
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        RouteResult::failed(RouteFailure::NoPath, nodes_expanded)
    }

    /// Whether the search may enter this node
    #[inline]
    fn is_permitted(&self, node: &Node) -> bool {
        !(self.config.avoid_stairs && node.node_type == NodeType::Stairs)
    }

    /// Straight-line distance between two snapshot nodes
    #[inline]
    fn heuristic(&self, from: usize, to: usize) -> f32 {
        self.snapshot
            .node_at(from)
            .distance_to(self.snapshot.node_at(to))
    }

    /// Walk parent links back from the target and reverse
    fn reconstruct_path(
        &self,
        came_from: &[Option<usize>],
        target: usize,
        cost: f32,
        nodes_expanded: usize,
    ) -> RouteResult {
        let mut indices = vec![target];
        let mut current = target;
        while let Some(prev) = came_from[current] {
            indices.push(prev);
            current = prev;
        }
        indices.reverse();

        let path: Vec<Node> = indices
            .into_iter()
            .map(|i| self.snapshot.node_at(i).clone())
            .collect();

        trace!(
            "[AStar] SUCCESS: path length={} nodes, cost={:.2}, nodes_expanded={}",
            path.len(),
            cost,
            nodes_expanded
        );

        RouteResult {
            path,
            cost,
            nodes_expanded,
            failure_reason: None,
        }
    }
}
