//! This module defines the `TransitionTable`: the mapping from a
//! `(state, read symbol)` key to its ordered list of actions. Registration
//! order is semantically significant, it fixes the order in which sibling
//! branches are enqueued.

use std::collections::HashMap;

use crate::types::{Action, Direction};

/// The transition rules of a nondeterministic Turing Machine.
///
/// The table is append-only: rules are registered once while a description
/// is loaded and only read afterwards. The first-registered action for a key
/// is the primary branch; later ones are nondeterministic alternatives.
#[derive(Debug, Clone, Default)]
pub struct TransitionTable {
    actions: HashMap<String, HashMap<char, Vec<Action>>>,
}

impl TransitionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an action to the list for `(state, read)`.
    ///
    /// A `next_state` of `None` is the self-loop shorthand and resolves to
    /// `state` here, at registration time, so lookups never see it.
    /// A `write` of `None` means the action keeps the cell under the head.
    pub fn register(
        &mut self,
        state: &str,
        read: char,
        next_state: Option<&str>,
        write: Option<char>,
        direction: Direction,
    ) {
        let next_state = next_state.unwrap_or(state).to_string();

        self.actions
            .entry(state.to_string())
            .or_default()
            .entry(read)
            .or_default()
            .push(Action {
                next_state,
                write,
                direction,
            });
    }

    /// Returns the ordered action list for `(state, read)`, or `None` if no
    /// action was ever registered for the key.
    ///
    /// `None` is the normal dead-branch signal, not an error.
    pub fn lookup(&self, state: &str, read: char) -> Option<&[Action]> {
        self.actions.get(state)?.get(&read).map(Vec::as_slice)
    }

    /// Returns the total number of registered actions.
    pub fn len(&self) -> usize {
        self.actions
            .values()
            .flat_map(|by_symbol| by_symbol.values())
            .map(Vec::len)
            .sum()
    }

    /// Returns whether no action has been registered.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
