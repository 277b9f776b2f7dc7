//! Node snapshot serialization.
//!
//! Hosts persist node records however they like; this module covers the
//! JSON record format used for files and fixtures:
//!
//! - [`read_document`] / [`write_document`]: any reader / writer
//! - [`load_document`] / [`save_document`]: file paths
//!
//! A file is either a bare array of node records or a floor document:
//!
//! ```json
//! {
//!   "floorId": "floor_1",
//!   "nodes": [
//!     { "id": "node_1", "x": 0.0, "y": 0.0, "z": 0.0, "neighborIds": ["node_2"], "type": "NORMAL" }
//!   ]
//! }
//! ```

mod json;

pub use crate::error::IoError;
pub use json::{FloorDocument, load_document, read_document, save_document, write_document};
