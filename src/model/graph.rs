//! Graph — everything read from or written to one SWC document.

use serde::{Deserialize, Serialize};
use super::{Edge, Vertex};

/// A rooted forest of vertices plus the document's comment lines.
///
/// Nothing here is validated: ids may repeat, edges may point at ids that
/// have no vertex, and one child may appear in several edges. The
/// [`Generator`](crate::export::Generator) is responsible for coping with
/// the last case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Vertices in source order.
    pub vertices: Vec<Vertex>,
    /// Edges in source order.
    pub edges: Vec<Edge>,
    /// Ids of vertices whose parent was -1, in source order.
    pub root_ids: Vec<i64>,
    /// Comment lines with the leading `#` stripped.
    pub meta: Vec<String>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.root_ids.clear();
        self.meta.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty() && self.root_ids.is_empty() && self.meta.is_empty()
    }

    /// First vertex with the given id.
    pub fn vertex(&self, id: i64) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }
}
