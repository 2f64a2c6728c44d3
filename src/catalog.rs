use crate::types::{Machine, NtmError};

use std::sync::RwLock;

// Default embedded machines
const MACHINE_TEXTS: [&str; 3] = [
    include_str!("../machines/ends-with-b.ntm"),
    include_str!("../machines/even-a.ntm"),
    include_str!("../machines/contains-aa.ntm"),
];

lazy_static::lazy_static! {
    pub static ref MACHINES: RwLock<Vec<Machine>> = RwLock::new(Vec::new());
}

pub struct MachineCatalog;

impl MachineCatalog {
    /// Parse the embedded machine descriptions into the shared catalog.
    pub fn load() -> Result<(), NtmError> {
        let mut machines = Vec::new();

        for text in MACHINE_TEXTS {
            machines.push(crate::parser::parse(text)?);
        }

        if let Ok(mut write_guard) = MACHINES.write() {
            *write_guard = machines;
        } else {
            return Err(NtmError::FileError(
                "Failed to acquire write lock".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the number of available machines
    pub fn count() -> usize {
        // Initialize with the embedded machines if not already initialized
        let _ = Self::load();

        MACHINES.read().map(|machines| machines.len()).unwrap_or(0)
    }

    /// Get a machine by its index
    pub fn by_index(index: usize) -> Result<Machine, NtmError> {
        // Initialize with the embedded machines if not already initialized
        let _ = Self::load();

        MACHINES
            .read()
            .map_err(|_| NtmError::FileError("Failed to acquire read lock".to_string()))?
            .get(index)
            .cloned()
            .ok_or_else(|| NtmError::UnknownMachine(format!("index {} out of range", index)))
    }

    /// Get a machine by its name
    pub fn by_name(name: &str) -> Result<Machine, NtmError> {
        // Initialize with the embedded machines if not already initialized
        let _ = Self::load();

        MACHINES
            .read()
            .map_err(|_| NtmError::FileError("Failed to acquire read lock".to_string()))?
            .iter()
            .find(|machine| machine.name == name)
            .cloned()
            .ok_or_else(|| NtmError::UnknownMachine(name.to_string()))
    }

    /// List all machine names
    pub fn names() -> Vec<String> {
        // Initialize with the embedded machines if not already initialized
        let _ = Self::load();

        MACHINES
            .read()
            .map(|machines| machines.iter().map(|m| m.name.clone()).collect())
            .unwrap_or_else(|_| Vec::new())
    }
}
