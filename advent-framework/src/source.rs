//! Input sources: where a day's real and example texts come from

use crate::error::InputError;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Which of a day's two inputs to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// The personal puzzle input
    Real,
    /// The example bundled with the puzzle statement
    Example,
}

impl InputKind {
    /// File name of this input inside a day directory
    pub fn file_name(self) -> &'static str {
        match self {
            InputKind::Real => "input.txt",
            InputKind::Example => "test.txt",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Real => f.write_str("real"),
            InputKind::Example => f.write_str("example"),
        }
    }
}

/// Provider of raw input text for a day
pub trait InputSource {
    /// Read the full text of the given day's input
    fn read(&self, day: u8, kind: InputKind) -> Result<String, InputError>;

    /// Human-readable location of the given input, used in diagnostics
    fn describe(&self, day: u8, kind: InputKind) -> String;
}

/// File-based input source
///
/// Directory structure: `{root}/day{day:02}/input.txt` and `{root}/day{day:02}/test.txt`
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    /// Create a source rooted at the given inputs directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Inputs directory this source reads from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the path for a specific day and input kind
    pub fn path(&self, day: u8, kind: InputKind) -> PathBuf {
        self.root
            .join(format!("day{:02}", day))
            .join(kind.file_name())
    }
}

impl InputSource for FileSource {
    fn read(&self, day: u8, kind: InputKind) -> Result<String, InputError> {
        let path = self.path(day, kind);
        log::debug!("reading {} input for day {:02} from {}", kind, day, path.display());
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => InputError::NotFound { path },
            _ => InputError::Io { path, source },
        })
    }

    fn describe(&self, day: u8, kind: InputKind) -> String {
        self.path(day, kind).display().to_string()
    }
}

/// In-memory input source
///
/// Reads of a day/kind that was never added report `NotFound` with a
/// synthetic `memory://` path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    texts: HashMap<(u8, InputKind), String>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the text for a day and input kind
    pub fn with(mut self, day: u8, kind: InputKind, text: impl Into<String>) -> Self {
        self.texts.insert((day, kind), text.into());
        self
    }

    /// Add both inputs for a day at once
    pub fn with_day(self, day: u8, real: impl Into<String>, example: impl Into<String>) -> Self {
        self.with(day, InputKind::Real, real)
            .with(day, InputKind::Example, example)
    }
}

impl InputSource for MemorySource {
    fn read(&self, day: u8, kind: InputKind) -> Result<String, InputError> {
        self.texts
            .get(&(day, kind))
            .cloned()
            .ok_or_else(|| InputError::NotFound {
                path: PathBuf::from(self.describe(day, kind)),
            })
    }

    fn describe(&self, day: u8, kind: InputKind) -> String {
        format!("memory://day{:02}/{}", day, kind.file_name())
    }
}
