//! Line-oriented input parsing helpers
//!
//! Puzzle inputs are newline-delimited text. Many of them come as groups of
//! lines separated by blank lines; the helpers here split such text into
//! groups and optionally convert each line on the way.
//!
//! A line is blank when it is empty once its terminator (`\n` or `\r\n`) is
//! removed. Lines made of spaces are kept as values. Empty groups are never
//! pruned, so a trailing blank line produces a trailing empty group.
//!
//! ```
//! use advent_framework::input::parse_grouped_with;
//!
//! let groups = parse_grouped_with("1\n2\n\n3\n", |line| line.parse::<u32>()).unwrap();
//! assert_eq!(groups, vec![vec![1, 2], vec![3]]);
//! ```

use crate::error::{InputError, ParseError};
use crate::source::{InputKind, InputSource};
use std::fmt::Display;

/// Split text into blank-line separated groups of raw lines
///
/// The number of groups is always the number of blank lines plus one.
pub fn parse_grouped(text: &str) -> Vec<Vec<String>> {
    let mut groups = vec![Vec::new()];
    for line in text.lines() {
        if line.is_empty() {
            groups.push(Vec::new());
        } else if let Some(group) = groups.last_mut() {
            group.push(line.to_string());
        }
    }
    groups
}

/// Split text into blank-line separated groups, converting every non-blank line
///
/// The first conversion failure aborts parsing and is reported with its
/// 1-based line number.
pub fn parse_grouped_with<T, E, F>(text: &str, mut convert: F) -> Result<Vec<Vec<T>>, ParseError>
where
    E: Display,
    F: FnMut(&str) -> Result<T, E>,
{
    let mut groups = vec![Vec::new()];
    for (index, line) in text.lines().enumerate() {
        if line.is_empty() {
            groups.push(Vec::new());
            continue;
        }
        let value = convert(line).map_err(|e| ParseError::InvalidLine {
            line: index + 1,
            message: e.to_string(),
        })?;
        if let Some(group) = groups.last_mut() {
            group.push(value);
        }
    }
    Ok(groups)
}

/// Convert every non-blank line of a flat list input
pub fn parse_lines_with<T, E, F>(text: &str, mut convert: F) -> Result<Vec<T>, ParseError>
where
    E: Display,
    F: FnMut(&str) -> Result<T, E>,
{
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| {
            convert(line).map_err(|e| ParseError::InvalidLine {
                line: index + 1,
                message: e.to_string(),
            })
        })
        .collect()
}

/// Read a day's input from a source and parse it into converted groups
pub fn load_grouped<T, E, F>(
    source: &dyn InputSource,
    day: u8,
    kind: InputKind,
    convert: F,
) -> Result<Vec<Vec<T>>, InputError>
where
    E: Display,
    F: FnMut(&str) -> Result<T, E>,
{
    let text = source.read(day, kind)?;
    parse_grouped_with(&text, convert).map_err(|e| InputError::Parse {
        day,
        kind,
        source: e,
    })
}
