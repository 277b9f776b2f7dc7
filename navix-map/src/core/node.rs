//! Node types for the wayfinding graph.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::point::Point3D;

/// Classification of a captured point.
///
/// Hosts filter on this, e.g. to find an elevator when crossing floors.
/// Tags written by other tools that this crate does not know survive a
/// round-trip unchanged through [`NodeType::Other`].
///
/// Known tags are matched ignoring case and always written back in their
/// upper-case form, so a stored `"Stairs"` is saved again as `"STAIRS"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeType {
    /// Corridor / open floor waypoint.
    Walking,
    /// Staircase segment.
    Stairs,
    /// Ramp segment.
    Ramp,
    /// Elevator landing.
    Elevator,
    /// Untyped waypoint.
    #[default]
    Normal,
    /// Tag not known to this version.
    Other(String),
}

impl NodeType {
    /// Wire tag for this type.
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Walking => "WALKING",
            NodeType::Stairs => "STAIRS",
            NodeType::Ramp => "RAMP",
            NodeType::Elevator => "ELEVATOR",
            NodeType::Normal => "NORMAL",
            NodeType::Other(tag) => tag,
        }
    }

    /// Stairs and elevators connect floors.
    #[inline]
    pub fn is_vertical_transition(&self) -> bool {
        matches!(self, NodeType::Stairs | NodeType::Elevator)
    }
}

impl FromStr for NodeType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s.to_ascii_uppercase().as_str() {
            "WALKING" => NodeType::Walking,
            "STAIRS" => NodeType::Stairs,
            "RAMP" => NodeType::Ramp,
            "ELEVATOR" => NodeType::Elevator,
            "NORMAL" => NodeType::Normal,
            _ => NodeType::Other(s.to_string()),
        };
        Ok(parsed)
    }
}

impl From<String> for NodeType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(t) => t,
            Err(never) => match never {},
        }
    }
}

impl From<NodeType> for String {
    fn from(t: NodeType) -> Self {
        match t {
            NodeType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A navigable point on one floor.
///
/// Adjacency is stored per node as an ordered list of outgoing neighbor ids.
/// Links are directed: `a.neighbor_ids` containing `b` says nothing about
/// `b.neighbor_ids`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "NodeRecord", rename_all = "camelCase")]
pub struct Node {
    /// Unique id within the floor; sole join key for adjacency.
    pub id: String,
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
    /// Z coordinate
    pub z: f32,
    /// Outgoing links, in insertion order.
    pub neighbor_ids: Vec<String>,
    /// Human-readable label. Named nodes are selectable destinations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Classification tag.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Floor whose graph this node belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_id: Option<String>,
    /// External anchor correlation id, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_anchor_id: Option<String>,
    /// Any other record fields, preserved opaquely.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Node {
    /// Create an unlinked, unnamed `NORMAL` node.
    pub fn new(id: impl Into<String>, position: Point3D) -> Self {
        Self {
            id: id.into(),
            x: position.x,
            y: position.y,
            z: position.z,
            neighbor_ids: Vec::new(),
            name: None,
            node_type: NodeType::Normal,
            floor_id: None,
            cloud_anchor_id: None,
            extra: BTreeMap::new(),
        }
    }

    /// Set the destination label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the classification tag.
    pub fn with_type(mut self, node_type: NodeType) -> Self {
        self.node_type = node_type;
        self
    }

    /// Set the floor id.
    pub fn with_floor(mut self, floor_id: impl Into<String>) -> Self {
        self.floor_id = Some(floor_id.into());
        self
    }

    /// Replace the outgoing links.
    pub fn with_neighbors<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.neighbor_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Position as a point
    #[inline]
    pub fn position(&self) -> Point3D {
        Point3D::new(self.x, self.y, self.z)
    }

    /// Euclidean distance to another node
    #[inline]
    pub fn distance_to(&self, other: &Node) -> f32 {
        self.position().distance(&other.position())
    }

    /// True if this node carries a name.
    #[inline]
    pub fn is_destination(&self) -> bool {
        self.name.is_some()
    }

    /// True if an outgoing link to `id` is stored.
    #[inline]
    pub fn links_to(&self, id: &str) -> bool {
        self.neighbor_ids.iter().any(|n| n == id)
    }

    /// Append an outgoing link unless it is already present.
    ///
    /// Returns true if the link was added.
    pub fn add_neighbor(&mut self, id: &str) -> bool {
        if self.links_to(id) {
            return false;
        }
        self.neighbor_ids.push(id.to_string());
        true
    }
}

/// Stored record shape.
///
/// Older capture builds wrote adjacency under `neighbors`, later ones
/// array-union into `neighborIds`, so a single record may carry both.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NodeRecord {
    id: String,
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    #[serde(default)]
    z: f32,
    #[serde(default)]
    neighbor_ids: Vec<String>,
    #[serde(default)]
    neighbors: Vec<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type", default)]
    node_type: NodeType,
    #[serde(default)]
    floor_id: Option<String>,
    #[serde(default)]
    cloud_anchor_id: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl From<NodeRecord> for Node {
    fn from(record: NodeRecord) -> Self {
        let mut neighbor_ids = record.neighbor_ids;
        for legacy in record.neighbors {
            if !neighbor_ids.contains(&legacy) {
                neighbor_ids.push(legacy);
            }
        }

        Self {
            id: record.id,
            x: record.x,
            y: record.y,
            z: record.z,
            neighbor_ids,
            name: record.name,
            node_type: record.node_type,
            floor_id: record.floor_id,
            cloud_anchor_id: record.cloud_anchor_id,
            extra: record.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type_parse() {
        assert_eq!("STAIRS".parse::<NodeType>().unwrap(), NodeType::Stairs);
        assert_eq!("elevator".parse::<NodeType>().unwrap(), NodeType::Elevator);
        assert_eq!(
            "ESCALATOR".parse::<NodeType>().unwrap(),
            NodeType::Other("ESCALATOR".to_string())
        );
    }

    #[test]
    fn test_node_type_wire_tags() {
        assert_eq!(String::from(NodeType::Ramp), "RAMP");
        assert_eq!(
            String::from(NodeType::Other("Escalator".to_string())),
            "Escalator"
        );
        assert_eq!(NodeType::Walking.to_string(), "WALKING");
    }

    #[test]
    fn test_known_tags_written_upper_case() {
        let node: Node = serde_json::from_str(r#"{"id":"a","type":"Stairs"}"#).unwrap();
        assert_eq!(node.node_type, NodeType::Stairs);

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "STAIRS");

        let node: Node = serde_json::from_str(r#"{"id":"b","type":"Escalator"}"#).unwrap();
        assert_eq!(serde_json::to_value(&node).unwrap()["type"], "Escalator");
    }

    #[test]
    fn test_vertical_transition() {
        assert!(NodeType::Stairs.is_vertical_transition());
        assert!(NodeType::Elevator.is_vertical_transition());
        assert!(!NodeType::Ramp.is_vertical_transition());
        assert!(!NodeType::Other("LIFT".to_string()).is_vertical_transition());
    }

    #[test]
    fn test_builder() {
        let node = Node::new("n1", Point3D::new(1.0, 0.0, 2.0))
            .with_name("Lobby")
            .with_type(NodeType::Walking)
            .with_floor("floor_1")
            .with_neighbors(["n0"]);

        assert_eq!(node.position(), Point3D::new(1.0, 0.0, 2.0));
        assert!(node.is_destination());
        assert!(node.links_to("n0"));
        assert_eq!(node.floor_id.as_deref(), Some("floor_1"));
    }

    #[test]
    fn test_add_neighbor_no_duplicates() {
        let mut node = Node::new("a", Point3D::ZERO);
        assert!(node.add_neighbor("b"));
        assert!(!node.add_neighbor("b"));
        assert_eq!(node.neighbor_ids, vec!["b".to_string()]);
    }

    #[test]
    fn test_record_defaults() {
        let node: Node = serde_json::from_str(r#"{"id":"n1","x":1.5}"#).unwrap();
        assert_eq!(node.x, 1.5);
        assert_eq!(node.y, 0.0);
        assert!(node.neighbor_ids.is_empty());
        assert_eq!(node.node_type, NodeType::Normal);
        assert!(node.name.is_none());
        assert!(node.extra.is_empty());
    }

    #[test]
    fn test_record_merges_legacy_neighbors() {
        let json = r#"{"id":"n2","neighbors":["n1","n3"],"neighborIds":["n3","n4"]}"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.neighbor_ids, vec!["n3", "n4", "n1"]);
    }

    #[test]
    fn test_record_roundtrip_preserves_fields() {
        let json = r#"{
            "id": "n7",
            "x": 1.0, "y": 2.0, "z": 3.0,
            "neighborIds": ["n6"],
            "name": "Room 101",
            "type": "ESCALATOR",
            "floorId": "floor_2",
            "cloudAnchorId": "ua-1234",
            "capturedBy": "admin-tablet"
        }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.node_type, NodeType::Other("ESCALATOR".to_string()));
        assert_eq!(node.extra["capturedBy"], "admin-tablet");

        let encoded = serde_json::to_value(&node).unwrap();
        assert_eq!(encoded["type"], "ESCALATOR");
        assert_eq!(encoded["neighborIds"][0], "n6");
        assert_eq!(encoded["cloudAnchorId"], "ua-1234");
        assert_eq!(encoded["capturedBy"], "admin-tablet");
        assert!(encoded.get("neighbors").is_none());

        let back: Node = serde_json::from_value(encoded).unwrap();
        assert_eq!(back, node);
    }
}
