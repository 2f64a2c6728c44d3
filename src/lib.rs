//! This crate simulates acceptance of strings by a nondeterministic Turing
//! Machine. It includes modules for the tape abstraction, the transition
//! table, the breadth-first exploration of nondeterministic branches with
//! depth bounding and accepting-path reconstruction, plus the thin parsing
//! and loading collaborators around the engine.

pub mod catalog;
pub mod explorer;
pub mod loader;
pub mod parser;
pub mod table;
pub mod tape;
pub mod trace;
pub mod types;

/// Re-exports the `Rule` enum from the parser module, used by the `pest` grammar.
pub use crate::parser::Rule;
/// Re-exports the `MachineCatalog` struct and the shared `MACHINES` catalog.
pub use catalog::{MachineCatalog, MACHINES};
/// Re-exports the `Explorer` struct from the explorer module.
pub use explorer::Explorer;
/// Re-exports the `MachineLoader` struct from the loader module.
pub use loader::MachineLoader;
/// Re-exports the `parse` function from the parser module.
pub use parser::parse;
/// Re-exports the `TransitionTable` struct from the table module.
pub use table::TransitionTable;
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports the `Snapshot` struct from the trace module.
pub use trace::Snapshot;
/// Re-exports the machine-definition and result types from the types module.
pub use types::{Action, Direction, Machine, NtmError, Outcome, RunResult, DEFAULT_DEPTH_LIMIT};
