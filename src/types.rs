//! This module defines the core data structures and types used throughout the
//! nondeterministic Turing Machine simulator: machine definitions, transition
//! actions, execution outcomes, and error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::table::TransitionTable;
use crate::trace::Snapshot;
use crate::Rule;

/// The default maximum BFS layer before a search is cut off.
pub const DEFAULT_DEPTH_LIMIT: usize = 1000;

/// Represents the possible directions a tape head can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Move the head one position to the right.
    Right,
    /// Keep the head in the same position.
    Stay,
}

/// One registered action for a `(state, read symbol)` key.
///
/// A key with more than one action is a nondeterministic choice point; the
/// explorer spawns one branch per action, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The state the machine transitions to.
    pub next_state: String,
    /// The symbol to write under the head, or `None` to keep the cell as is.
    pub write: Option<char>,
    /// The direction the head moves after writing.
    pub direction: Direction,
}

/// A nondeterministic Turing Machine definition: control states, blank
/// symbol, and the transition table the explorer runs against.
///
/// The table is built once, via [`Machine::register`], and treated as
/// immutable during exploration. Branches reference it; they never own it.
#[derive(Debug, Clone)]
pub struct Machine {
    /// The name of the machine, reported back with every result.
    pub name: String,
    /// The state every search starts in.
    pub start_state: String,
    /// The accepting states, in declaration order.
    pub final_states: Vec<String>,
    /// An optional reject-state label. Parsed for completeness; lookup
    /// semantics never consult it.
    pub reject_state: Option<String>,
    /// The blank symbol implicit in every unwritten tape cell.
    pub blank: char,
    /// The transition rules.
    pub table: TransitionTable,
}

impl Machine {
    /// Creates a machine with an empty transition table.
    pub fn new(
        name: impl Into<String>,
        start_state: impl Into<String>,
        final_states: Vec<String>,
        blank: char,
    ) -> Self {
        Self {
            name: name.into(),
            start_state: start_state.into(),
            final_states,
            reject_state: None,
            blank,
            table: TransitionTable::new(),
        }
    }

    /// Registers a transition rule. See [`TransitionTable::register`].
    pub fn register(
        &mut self,
        state: &str,
        read: char,
        next_state: Option<&str>,
        write: Option<char>,
        direction: Direction,
    ) {
        self.table.register(state, read, next_state, write, direction);
    }

    /// Returns whether `state` is one of the accepting states.
    pub fn is_final(&self, state: &str) -> bool {
        self.final_states.iter().any(|s| s == state)
    }
}

/// The terminal outcome of one exploration.
///
/// Depth counts BFS layers (transition applications since the root), and
/// `action_count` sums the action-list sizes encountered at each expansion,
/// i.e. the branching factor seen by the search rather than the number of
/// clones spawned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// A configuration with no applicable action halted in a final state.
    Accepted {
        /// The root-to-leaf trace, one snapshot per BFS layer.
        path: Vec<Snapshot>,
        /// The layer of the accepting configuration.
        depth: usize,
        /// Total actions encountered across all expansions.
        action_count: usize,
    },
    /// Every branch died in a non-final state and the queue drained.
    Rejected {
        /// The deepest layer any dequeued configuration reached.
        depth: usize,
        /// Total actions encountered across all expansions.
        action_count: usize,
    },
    /// The configured depth bound was reached before a verdict.
    Truncated {
        /// The depth bound that was hit.
        depth: usize,
        /// Total actions encountered before the cutoff.
        action_count: usize,
    },
}

/// The structured result returned to the caller for one input string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// The name of the machine that was run.
    pub machine_name: String,
    /// How the search terminated.
    pub outcome: Outcome,
}

/// Represents errors that can occur while loading a machine description.
///
/// The execution engine itself is infallible: once handed a table it always
/// terminates in one of the three [`Outcome`] variants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NtmError {
    /// A syntax error in the machine description, with source span.
    #[error("Description parsing error: {0}")]
    ParseError(#[from] Box<pest::error::Error<Rule>>),
    /// A structurally invalid machine description.
    #[error("Malformed machine description: {0}")]
    MalformedDescription(String),
    /// A file system error while reading a description or input file.
    #[error("File error: {0}")]
    FileError(String),
    /// A catalog lookup that matched no embedded machine.
    #[error("Unknown machine: {0}")]
    UnknownMachine(String),
}
