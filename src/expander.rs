//! Template expansion.
//! Turns a list of error codes into declaration lines and substitutes them
//! for the placeholder token of an output template.

use crate::error::Result;
use crate::renderer::LineRenderer;
use crate::scanner::ErrorCode;
use clap::ValueEnum;
use log::debug;
use serde::Deserialize;

/// Marker replaced with the generated declarations.
pub const PLACEHOLDER: &str = "{$errorCodes$}";

/// Built-in output dialects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `public const` members of a C# class
    #[default]
    #[value(name = "csharp")]
    CSharp,
    /// `pub const` items of a Rust module or impl block
    Rust,
}

impl Dialect {
    /// Line format of the dialect.
    pub fn line_format(self) -> &'static str {
        match self {
            Dialect::CSharp => "\tpublic const {{ name }} = {{ code }};\n",
            Dialect::Rust => "    pub const {{ name }}: u32 = {{ code }};\n",
        }
    }
}

/// Template for one generated line, with `name` and `code` in scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFormat(String);

impl LineFormat {
    pub fn new(format: impl Into<String>) -> Self {
        Self(format.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LineFormat {
    fn default() -> Self {
        Dialect::default().into()
    }
}

impl From<Dialect> for LineFormat {
    fn from(dialect: Dialect) -> Self {
        Self::new(dialect.line_format())
    }
}

/// Result of expanding a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Generated text
    pub text: String,
    /// Number of placeholder occurrences that were replaced
    pub replacements: usize,
}

/// Expands templates with generated declarations.
pub struct Expander<'a> {
    renderer: &'a dyn LineRenderer,
    line_format: LineFormat,
    placeholder: String,
}

impl<'a> Expander<'a> {
    pub fn new(
        renderer: &'a dyn LineRenderer,
        line_format: LineFormat,
        placeholder: impl Into<String>,
    ) -> Self {
        Self { renderer, line_format, placeholder: placeholder.into() }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Formats a single error code as one declaration line.
    ///
    /// # Errors
    /// * `Error::LineFormatError` if a custom line format cannot be rendered
    pub fn format_line(&self, error_code: &ErrorCode) -> Result<String> {
        let context = serde_json::json!({
            "name": error_code.name(),
            "code": error_code.code(),
        });
        self.renderer.render(self.line_format.as_str(), &context)
    }

    /// Formats all error codes, one line each, in the given order.
    pub fn format_block(&self, error_codes: &[ErrorCode]) -> Result<String> {
        let mut block = String::new();
        for error_code in error_codes {
            block.push_str(&self.format_line(error_code)?);
        }
        Ok(block)
    }

    /// Replaces the placeholder in `template` with the formatted block.
    ///
    /// The template is otherwise copied verbatim. Zero occurrences of the
    /// placeholder is not an error here; `Expansion::replacements` lets the
    /// caller decide.
    pub fn expand(&self, template: &str, error_codes: &[ErrorCode]) -> Result<Expansion> {
        let block = self.format_block(error_codes)?;
        let replacements = template.matches(self.placeholder.as_str()).count();
        debug!("Replacing {} occurrence(s) of {}", replacements, self.placeholder);

        let text = if replacements == 0 {
            template.to_string()
        } else {
            template.replace(self.placeholder.as_str(), &block)
        };

        Ok(Expansion { text, replacements })
    }
}
