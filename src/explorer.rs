//! This module defines the `Explorer`: the breadth-first search over the
//! tree of nondeterministic branches. Branches are plain data, independent
//! configurations processed one at a time from a FIFO queue; nothing here is
//! concurrent. A call to [`Explorer::run`] always terminates with one of the
//! three [`Outcome`] variants.

use std::collections::VecDeque;

use crate::tape::Tape;
use crate::trace;
use crate::types::{Machine, Outcome, RunResult, DEFAULT_DEPTH_LIMIT};

/// One configuration in the search arena: a control state and an
/// independently owned tape, plus the bookkeeping the search needs.
///
/// Arena indices double as configuration IDs, so parent links are plain
/// `usize` and path reconstruction is an index chase.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) state: String,
    pub(crate) tape: Tape,
    pub(crate) depth: usize,
    pub(crate) parent: Option<usize>,
}

/// The BFS driver for a nondeterministic Turing Machine.
///
/// The explorer borrows the machine; the transition table is shared by every
/// branch while each branch owns its tape outright. Sibling branches are
/// enqueued in transition-registration order, and strict FIFO processing
/// guarantees the first accepting configuration found sits at the minimum
/// accepting depth.
pub struct Explorer<'a> {
    machine: &'a Machine,
    depth_limit: usize,
}

impl<'a> Explorer<'a> {
    /// Creates an explorer with the default depth limit.
    pub fn new(machine: &'a Machine) -> Self {
        Self::with_depth_limit(machine, DEFAULT_DEPTH_LIMIT)
    }

    /// Creates an explorer that cuts the search off at `depth_limit` layers.
    pub fn with_depth_limit(machine: &'a Machine, depth_limit: usize) -> Self {
        Self {
            machine,
            depth_limit,
        }
    }

    /// Explores every nondeterministic branch of the machine on `input`.
    ///
    /// Seeds the queue with the start state over a fresh tape, then expands
    /// configurations layer by layer:
    ///
    /// * a configuration at the depth limit aborts the whole search with
    ///   [`Outcome::Truncated`];
    /// * a configuration with no applicable action either accepts (final
    ///   state) or is silently discarded (dead branch);
    /// * otherwise one child per action is spawned at depth + 1, each with a
    ///   deep copy of the parent's tape and one action applied.
    ///
    /// `action_count` accumulates the size of every action list encountered,
    /// and the reported rejection depth is the deepest dequeued layer.
    pub fn run(&self, input: &str) -> RunResult {
        let mut nodes = vec![Node {
            state: self.machine.start_state.clone(),
            tape: Tape::new(self.machine.blank, input),
            depth: 0,
            parent: None,
        }];
        let mut queue = VecDeque::from([0usize]);
        let mut action_count = 0usize;
        let mut deepest = 0usize;

        while let Some(id) = queue.pop_front() {
            let depth = nodes[id].depth;
            if depth >= self.depth_limit {
                return self.finish(Outcome::Truncated {
                    depth,
                    action_count,
                });
            }
            deepest = deepest.max(depth);

            let read = nodes[id].tape.read();
            let Some(actions) = self.machine.table.lookup(&nodes[id].state, read) else {
                if self.machine.is_final(&nodes[id].state) {
                    let path = trace::reconstruct(&nodes, id);
                    return self.finish(Outcome::Accepted {
                        path,
                        depth,
                        action_count,
                    });
                }
                // Dead branch: dequeued and dropped.
                continue;
            };

            action_count += actions.len();
            for action in actions {
                let mut tape = nodes[id].tape.clone();
                tape.write(action.write);
                tape.move_head(action.direction);
                nodes.push(Node {
                    state: action.next_state.clone(),
                    tape,
                    depth: depth + 1,
                    parent: Some(id),
                });
                queue.push_back(nodes.len() - 1);
            }
        }

        self.finish(Outcome::Rejected {
            depth: deepest,
            action_count,
        })
    }

    fn finish(&self, outcome: Outcome) -> RunResult {
        RunResult {
            machine_name: self.machine.name.clone(),
            outcome,
        }
    }
}
