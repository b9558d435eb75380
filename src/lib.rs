//! errcodegen derives error code declarations from a message definition file.
//! Definitions of the form `<code> <name> = "<message>";` are scanned and
//! written, one declaration per entry, into a template at a placeholder.

/// Command-line interface module for the errcodegen application
pub mod cli;

/// Configuration file handling and settings resolution
/// Supports JSON and YAML formats (errcodegen.json, errcodegen.yml, errcodegen.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the errcodegen application
pub mod error;

/// Placeholder substitution and declaration formatting
pub mod expander;

/// Pipeline from input files to the generated output file
pub mod generator;

/// Line format rendering
pub mod renderer;

/// Definition file scanning
pub mod scanner;
