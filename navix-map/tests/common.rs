//! Test utilities for navix-map.
//!
//! Helpers for building small floor graphs by hand and random graphs for
//! property checks.

#![allow(dead_code)]

use navix_map::{Node, NodeType, Point3D};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Node at (x, y, z) with the given outgoing links.
pub fn node(id: &str, x: f32, y: f32, z: f32, links: &[&str]) -> Node {
    Node::new(id, Point3D::new(x, y, z)).with_neighbors(links.iter().copied())
}

/// Ids along a path.
pub fn ids(path: &[Node]) -> Vec<&str> {
    path.iter().map(|n| n.id.as_str()).collect()
}

/// N1(0,0,0) -> N2(1,0,0) -> N3(2,0,0), one-directional.
pub fn three_in_a_line() -> Vec<Node> {
    vec![
        node("N1", 0.0, 0.0, 0.0, &["N2"]),
        node("N2", 1.0, 0.0, 0.0, &["N3"]),
        node("N3", 2.0, 0.0, 0.0, &[]),
    ]
}

/// `w` x `h` grid with unit spacing, 4-connected in both directions.
///
/// Ids are `r{row}c{col}`; neighbors are listed N, E, S, W.
pub fn grid(w: usize, h: usize) -> Vec<Node> {
    let id = |r: usize, c: usize| format!("r{r}c{c}");
    let mut nodes = Vec::with_capacity(w * h);
    for r in 0..h {
        for c in 0..w {
            let mut links = Vec::new();
            if r + 1 < h {
                links.push(id(r + 1, c));
            }
            if c + 1 < w {
                links.push(id(r, c + 1));
            }
            if r > 0 {
                links.push(id(r - 1, c));
            }
            if c > 0 {
                links.push(id(r, c - 1));
            }
            nodes.push(
                Node::new(id(r, c), Point3D::new(c as f32, 0.0, r as f32))
                    .with_neighbors(links),
            );
        }
    }
    nodes
}

/// Random directed graph with `n` nodes and about `degree` links per node.
///
/// Roughly one node in eight is tagged as stairs.
pub fn random_graph(n: usize, degree: usize, seed: u64) -> Vec<Node> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let links: Vec<String> = (0..degree)
                .map(|_| format!("v{}", rng.random_range(0..n)))
                .collect();
            let node_type = if rng.random_range(0..8) == 0 {
                NodeType::Stairs
            } else {
                NodeType::Walking
            };
            Node::new(
                format!("v{i}"),
                Point3D::new(
                    rng.random_range(0.0..20.0),
                    rng.random_range(0.0..3.0),
                    rng.random_range(0.0..20.0),
                ),
            )
            .with_neighbors(links)
            .with_type(node_type)
        })
        .collect()
}

/// Exhaustive shortest simple-path length by DFS (small graphs only).
pub fn brute_force_shortest(
    nodes: &[Node],
    start: &str,
    target: &str,
    avoid_stairs: bool,
) -> Option<f32> {
    fn dfs(
        nodes: &[Node],
        current: &Node,
        target: &str,
        avoid_stairs: bool,
        visited: &mut Vec<String>,
        cost: f32,
        best: &mut Option<f32>,
    ) {
        if current.id == target {
            if best.is_none_or(|b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for next_id in &current.neighbor_ids {
            let Some(next) = nodes.iter().find(|n| &n.id == next_id) else {
                continue;
            };
            if visited.contains(next_id) || (avoid_stairs && next.node_type == NodeType::Stairs)
            {
                continue;
            }
            visited.push(next_id.clone());
            let step = current.distance_to(next);
            dfs(nodes, next, target, avoid_stairs, visited, cost + step, best);
            visited.pop();
        }
    }

    let start_node = nodes.iter().find(|n| n.id == start)?;
    if avoid_stairs && start_node.node_type == NodeType::Stairs {
        return None;
    }
    let mut best = None;
    let mut visited = vec![start.to_string()];
    dfs(nodes, start_node, target, avoid_stairs, &mut visited, 0.0, &mut best);
    best
}
