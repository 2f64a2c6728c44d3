//! This module provides the `MachineLoader` struct, responsible for loading
//! machine descriptions and input-string files from disk.

use std::fs;
use std::path::Path;

use crate::parser::parse;
use crate::types::{Machine, NtmError};

/// `MachineLoader` is a utility struct for the thin file I/O around the
/// engine: it reads machine description files and input files, leaving all
/// interpretation to the parser.
pub struct MachineLoader;

impl MachineLoader {
    /// Loads a machine description from the specified file path.
    ///
    /// # Returns
    ///
    /// * `Ok(Machine)` if the file is successfully read and parsed.
    /// * `Err(NtmError::FileError)` if the file cannot be read.
    /// * `Err(NtmError::ParseError)` or `Err(NtmError::MalformedDescription)`
    ///   if the content is not a valid description.
    pub fn load_machine(path: &Path) -> Result<Machine, NtmError> {
        let content = fs::read_to_string(path).map_err(|e| {
            NtmError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        parse(&content)
    }

    /// Loads a machine description from the provided string content.
    ///
    /// This is useful for descriptions that are not stored in files, e.g.
    /// embedded catalog entries or user input.
    pub fn load_machine_from_str(content: &str) -> Result<Machine, NtmError> {
        parse(content)
    }

    /// Loads a file of input strings, one per line.
    ///
    /// Each line is a separate input to run; only the trailing line break is
    /// stripped. An empty line is a legitimate empty input string, not noise.
    pub fn load_inputs(path: &Path) -> Result<Vec<String>, NtmError> {
        let content = fs::read_to_string(path).map_err(|e| {
            NtmError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        Ok(content.lines().map(str::to_string).collect())
    }
}
