//! Error handling for errcodegen.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating error code declarations.
#[derive(Error, Debug)]
pub enum Error {
    /// The definition text contains a character that is neither whitespace,
    /// part of a comment nor part of an entry.
    #[error(
        "Invalid character: {code_point} ({character:?}) at line {line}, column {column}."
    )]
    InvalidCharacter {
        character: char,
        code_point: u32,
        line: usize,
        column: usize,
    },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// An input file could not be read or is not valid UTF-8.
    #[error("Failed to read '{}': {source}.", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The generated output could not be written.
    #[error("Failed to write '{}': {source}.", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A custom line format failed to parse or render.
    #[error("Line format error: {0}.")]
    LineFormatError(#[from] minijinja::Error),

    /// The definition grammar failed to compile.
    #[error("Pattern error: {0}.")]
    PatternError(#[from] regex::Error),

    /// The template does not contain the placeholder token.
    #[error("Template '{}' does not contain the placeholder '{placeholder}'.", template.display())]
    PlaceholderMissing { template: PathBuf, placeholder: String },
}

/// Convenience type alias for Results with errcodegen's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
