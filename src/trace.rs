//! Accepting-path reconstruction. When the explorer finds an accepting
//! configuration it walks the arena's parent links back to the root and
//! emits the trace in root-to-leaf order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::explorer::Node;

/// One step of an accepting execution trace: the tape split around the head
/// with the control state in between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Tape contents strictly left of the head.
    pub left: String,
    /// The control state at this step.
    pub state: String,
    /// Tape contents from the head rightward.
    pub right: String,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]{}", self.left, self.state, self.right)
    }
}

/// Walks parent links from `leaf` back to the root and returns the trace in
/// root-to-leaf order.
///
/// The result always has the root as its first element, so its length is the
/// accepting configuration's depth plus one.
pub(crate) fn reconstruct(nodes: &[Node], leaf: usize) -> Vec<Snapshot> {
    let mut path = Vec::new();
    let mut cursor = Some(leaf);

    while let Some(id) = cursor {
        let node = &nodes[id];
        let (left, right) = node.tape.project();
        path.push(Snapshot {
            left,
            state: node.state.clone(),
            right,
        });
        cursor = node.parent;
    }

    path.reverse();
    path
}
