//! Parent-conflict reconciliation.
//!
//! SWC stores exactly one parent per vertex, but a [`Graph`](crate::Graph)
//! built by hand can hold several edges for the same child. The first edge
//! for a child wins. Every later one `(p, c)` is absorbed by handing `p`'s
//! own parent slot to `c`, which may displace `p`'s old parent and so on up
//! the chain:
//!
//! ```text
//! conflict (p, c):   p -> c,  old parent of p -> p,  ...  until a free slot
//! ```
//!
//! This reverses part of the tree. If the walk comes back to `c` before
//! finding a free slot the pair closes a cycle; the walk is abandoned and
//! the slots it already rewrote stay rewritten.

use std::collections::BTreeMap;

use hashbrown::HashMap;
use tracing::trace;

use crate::model::Edge;

/// Working child → parent mapping after reconciliation.
#[derive(Debug, Clone, Default)]
pub struct Reconciliation {
    parents: HashMap<i64, i64>,
    /// Number of edges that conflicted with an earlier edge for the same child.
    pub conflicts: usize,
    /// Start child of every walk that ran into a cycle, in processing order.
    pub loops: Vec<i64>,
}

impl Reconciliation {
    /// Resolved parent of `child`, if it has one.
    pub fn parent_of(&self, child: i64) -> Option<i64> {
        self.parents.get(&child).copied()
    }
}

/// Build the child → parent mapping for `edges`, reconciling conflicts.
pub fn reconcile(edges: &[Edge]) -> Reconciliation {
    let mut parents: HashMap<i64, i64> = HashMap::with_capacity(edges.len());
    // Keyed by parent id: a later conflict from the same parent replaces the
    // earlier one, and walks run in ascending parent order.
    let mut pending: BTreeMap<i64, i64> = BTreeMap::new();
    let mut conflicts = 0;

    for edge in edges {
        if parents.contains_key(&edge.child_id) {
            trace!(parent = edge.parent_id, child = edge.child_id, "parent conflict queued");
            pending.insert(edge.parent_id, edge.child_id);
            conflicts += 1;
        } else {
            parents.insert(edge.child_id, edge.parent_id);
        }
    }

    let mut loops = Vec::new();
    for (&parent, &child) in &pending {
        if !walk(&mut parents, parent, child) {
            loops.push(child);
        }
    }

    Reconciliation { parents, conflicts, loops }
}

/// Give `parent` the parent `child`, pushing displaced parents up the chain.
/// Returns `false` if the chain leads back to `child`.
fn walk(parents: &mut HashMap<i64, i64>, mut parent: i64, mut child: i64) -> bool {
    let start = child;
    loop {
        let Some(slot) = parents.get_mut(&parent) else {
            parents.insert(parent, child);
            return true;
        };
        if parent == start {
            return false;
        }
        let displaced = std::mem::replace(slot, child);
        child = parent;
        parent = displaced;
    }
}
