//! Core types for the navix-map wayfinding library.
//!
//! - [`Point3D`]: position in the mapping frame
//! - [`Node`]: a navigable point with its outgoing links
//! - [`NodeType`]: node classification (walking, stairs, ramp, ...)

mod node;
mod point;

pub use node::{Node, NodeType};
pub use point::Point3D;
