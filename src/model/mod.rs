//! # SWC Graph Model
//!
//! Plain DTOs shared by the parser, the generator and the caller.
//!
//! Design rule: this module is pure data — no I/O, no parsing state.

pub mod vertex;
pub mod edge;
pub mod graph;

pub use vertex::{Vertex, VertexKind, VertexType};
pub use edge::Edge;
pub use graph::Graph;
