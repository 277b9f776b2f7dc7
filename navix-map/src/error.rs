//! Error types for navix-map

use thiserror::Error;

/// Graph construction and validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A coordinate is NaN or infinite; distance comparisons would be corrupted
    #[error("Node '{id}' has non-finite {axis} coordinate")]
    NonFiniteCoordinate {
        /// Offending node id
        id: String,
        /// Axis name (`x`, `y` or `z`)
        axis: char,
    },

    /// Two nodes in one snapshot share an id
    #[error("Duplicate node id '{0}'")]
    DuplicateId(String),

    /// Operation referenced a node that is not in the store
    #[error("Unknown node '{0}'")]
    UnknownNode(String),
}

/// Snapshot file errors
#[derive(Error, Debug)]
pub enum IoError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Decoded snapshot is malformed
    #[error("Invalid snapshot: {0}")]
    Graph(#[from] GraphError),
}

pub type Result<T> = std::result::Result<T, GraphError>;
