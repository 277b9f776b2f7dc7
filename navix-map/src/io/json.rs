//! JSON floor documents.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::Node;
use crate::error::{GraphError, IoError};
use crate::graph::FloorSnapshot;

/// One floor's node records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorDocument {
    /// Floor the nodes belong to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_id: Option<String>,
    /// Node records
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl FloorDocument {
    /// Create a document
    pub fn new(floor_id: Option<String>, nodes: Vec<Node>) -> Self {
        Self { floor_id, nodes }
    }

    /// Validated snapshot of the document's nodes
    pub fn snapshot(&self) -> Result<FloorSnapshot, GraphError> {
        FloorSnapshot::from_slice(&self.nodes)
    }

    /// Consume the document into a validated snapshot
    pub fn into_snapshot(self) -> Result<FloorSnapshot, GraphError> {
        FloorSnapshot::new(self.nodes)
    }
}

/// Read a floor document or a bare array of node records
pub fn read_document<R: Read>(reader: R) -> Result<FloorDocument, IoError> {
    let value: Value = serde_json::from_reader(reader)?;
    let document = if value.is_array() {
        FloorDocument::new(None, serde_json::from_value(value)?)
    } else {
        serde_json::from_value(value)?
    };
    Ok(document)
}

/// Write a floor document as pretty-printed JSON
pub fn write_document<W: Write>(document: &FloorDocument, writer: W) -> Result<(), IoError> {
    serde_json::to_writer_pretty(writer, document)?;
    Ok(())
}

/// Load a floor document from a file
pub fn load_document(path: &Path) -> Result<FloorDocument, IoError> {
    let file = File::open(path)?;
    let document = read_document(BufReader::new(file))?;
    debug!(
        "[io] loaded {} nodes from {}",
        document.nodes.len(),
        path.display()
    );
    Ok(document)
}

/// Save a floor document to a file
pub fn save_document(document: &FloorDocument, path: &Path) -> Result<(), IoError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_document(document, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NodeType, Point3D};

    #[test]
    fn test_read_bare_array() {
        let json = r#"[
            {"id": "a", "x": 0, "y": 0, "z": 0, "neighborIds": ["b"]},
            {"id": "b", "x": 1, "y": 0, "z": 0}
        ]"#;
        let document = read_document(json.as_bytes()).unwrap();
        assert!(document.floor_id.is_none());
        assert_eq!(document.nodes.len(), 2);
        assert!(document.nodes[1].neighbor_ids.is_empty());
    }

    #[test]
    fn test_read_floor_document() {
        let json = r#"{"floorId": "floor_1", "nodes": [{"id": "a", "type": "STAIRS"}]}"#;
        let document = read_document(json.as_bytes()).unwrap();
        assert_eq!(document.floor_id.as_deref(), Some("floor_1"));
        assert_eq!(document.nodes[0].node_type, NodeType::Stairs);
    }

    #[test]
    fn test_read_rejects_garbage() {
        assert!(matches!(
            read_document("not json".as_bytes()),
            Err(IoError::Json(_))
        ));
        assert!(matches!(
            read_document(r#"[{"x": 1.0}]"#.as_bytes()),
            Err(IoError::Json(_))
        ));
    }

    #[test]
    fn test_write_then_read() {
        let document = FloorDocument::new(
            Some("floor_3".to_string()),
            vec![
                Node::new("a", Point3D::new(0.5, 0.0, -1.0))
                    .with_name("Elevator Hall")
                    .with_type(NodeType::Elevator)
                    .with_neighbors(["b"]),
                Node::new("b", Point3D::new(2.0, 0.0, -1.0)),
            ],
        );

        let mut buf = Vec::new();
        write_document(&document, &mut buf).unwrap();
        let back = read_document(buf.as_slice()).unwrap();
        assert_eq!(back, document);
    }

    #[test]
    fn test_snapshot_validation() {
        let document = FloorDocument::new(
            None,
            vec![Node::new("a", Point3D::ZERO), Node::new("a", Point3D::ZERO)],
        );
        assert_eq!(
            document.snapshot().unwrap_err(),
            GraphError::DuplicateId("a".to_string())
        );
    }
}
