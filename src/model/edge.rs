//! Parent/child link between two vertices.

use serde::{Deserialize, Serialize};

/// Directed edge: `child_id`'s parent is `parent_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub parent_id: i64,
    pub child_id: i64,
}

impl Edge {
    pub fn new(parent_id: i64, child_id: i64) -> Self {
        Self { parent_id, child_id }
    }
}
