//! Generation pipeline: read definitions and template, scan, expand, write.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::expander::Expander;
use crate::renderer::LineRenderer;
use crate::scanner::Scanner;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Input and output locations of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Message definition file
    pub messages: PathBuf,
    /// Output template containing the placeholder
    pub template: PathBuf,
    /// Destination of the generated text
    pub output: PathBuf,
}

/// Outcome of a successful generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of error codes written
    pub records: usize,
    /// Number of placeholder occurrences replaced
    pub replacements: usize,
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::ReadError { path: path.to_path_buf(), source })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    let to_write_error = |source| Error::WriteError { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_write_error)?;
    }
    fs::write(path, content).map_err(to_write_error)
}

/// Runs the whole pipeline.
///
/// # Arguments
/// * `options` - Paths of the definition file, template and output
/// * `settings` - Placeholder, line format and strictness
/// * `renderer` - Engine used to render the line format
///
/// # Returns
/// * `Result<Summary>` - Number of error codes generated
///
/// # Errors
/// * `Error::ReadError` if an input is missing or not UTF-8
/// * `Error::InvalidCharacter` if the definitions are malformed
/// * `Error::PlaceholderMissing` in strict mode when the template has no placeholder
/// * `Error::WriteError` if the output cannot be written
///
/// The output file is only touched after every other step has succeeded.
pub fn generate(
    options: &GenerateOptions,
    settings: &Settings,
    renderer: &dyn LineRenderer,
) -> Result<Summary> {
    debug!("Reading definitions from {}", options.messages.display());
    let messages = read_file(&options.messages)?;
    let error_codes = Scanner::new()?.scan(&messages)?;

    debug!("Reading template from {}", options.template.display());
    let template = read_file(&options.template)?;

    let expander = Expander::new(renderer, settings.line_format.clone(), settings.placeholder.as_str());
    let expansion = expander.expand(&template, &error_codes)?;

    if expansion.replacements == 0 {
        if settings.strict {
            return Err(Error::PlaceholderMissing {
                template: options.template.clone(),
                placeholder: settings.placeholder.clone(),
            });
        }
        warn!(
            "Template {} does not contain the placeholder {}",
            options.template.display(),
            settings.placeholder
        );
    }

    debug!("Writing output to {}", options.output.display());
    write_file(&options.output, &expansion.text)?;

    Ok(Summary { records: error_codes.len(), replacements: expansion.replacements })
}
