//! Scanner for message definition files.
//!
//! A definition file is a sequence of entries of the form
//! `<code> <name> = "<message>";`, separated by whitespace, line comments
//! (`// ...`) and block comments (`/* ... */`). Only the code and the
//! name of each entry are kept; message texts are matched so that the end
//! of an entry can be found, and then dropped.

use crate::error::{Error, Result};
use log::{debug, trace};
use regex::Regex;

/// Lexical grammar of a definition file.
///
/// The alternatives are tried in order at every position, so the `error`
/// group only matches a character that cannot start a comment or an entry.
const DEFINITION_PATTERN: &str = r##"(?x)
    # Comment
    (?P<comment>
        //.*
        |
        /\*[\s\S]*?\*/
    )
    |
    # Error code + message
    (?:
        (?P<code>\d+(?:_\d+)*)
        \s+
        (?P<name>[a-zA-Z_][a-zA-Z0-9_]*)
        \s*=\s*
        "(?:
            \\[\\"'0abnrt_\-]
            |
            \\u[0-9a-fA-F]{4}
            |
            \\U[0-9a-fA-F]{8}
            |
            [^\\"]
        )*"
        \s*;
    )
    |
    # Error character
    (?P<error>\S)
"##;

/// A single error code extracted from a definition entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCode {
    code: String,
    name: String,
}

impl ErrorCode {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self { code: code.into(), name: name.into() }
    }

    /// Numeric code as written in the definition, digit separators included.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Compiled definition grammar.
#[derive(Debug, Clone)]
pub struct Scanner {
    pattern: Regex,
}

impl Scanner {
    /// Compiles the definition grammar.
    ///
    /// # Errors
    /// * `Error::PatternError` if the grammar cannot be compiled
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(DEFINITION_PATTERN)?;
        Ok(Self { pattern })
    }

    /// Extracts all error codes from `text`, in the order they appear.
    ///
    /// # Arguments
    /// * `text` - Full contents of a definition file
    ///
    /// # Returns
    /// * `Result<Vec<ErrorCode>>` - One record per entry
    ///
    /// # Errors
    /// * `Error::InvalidCharacter` for the first character that belongs to
    ///   neither a comment, an entry nor the whitespace between them.
    ///   No records are returned in that case.
    pub fn scan(&self, text: &str) -> Result<Vec<ErrorCode>> {
        let mut error_codes = Vec::new();

        for captures in self.pattern.captures_iter(text) {
            if captures.name("comment").is_some() {
                continue;
            }

            if let Some(error) = captures.name("error") {
                return Err(invalid_character(text, error.start()));
            }

            if let (Some(code), Some(name)) = (captures.name("code"), captures.name("name")) {
                trace!("Found error code {} = {}", name.as_str(), code.as_str());
                error_codes.push(ErrorCode::new(code.as_str(), name.as_str()));
            }
        }

        debug!("Scanned {} error codes", error_codes.len());
        Ok(error_codes)
    }
}

/// Scans `text` with a freshly compiled [`Scanner`].
pub fn scan(text: &str) -> Result<Vec<ErrorCode>> {
    Scanner::new()?.scan(text)
}

/// Builds the error for the character starting at byte `offset`.
fn invalid_character(text: &str, offset: usize) -> Error {
    let before = &text[..offset];
    let character = text[offset..].chars().next().unwrap_or_default();
    let line = before.matches('\n').count() + 1;
    let column = match before.rfind('\n') {
        Some(newline) => before[newline + 1..].chars().count() + 1,
        None => before.chars().count() + 1,
    };

    Error::InvalidCharacter { character, code_point: character as u32, line, column }
}
