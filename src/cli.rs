//! Command-line interface implementation for errcodegen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::config::Config;
use crate::expander::Dialect;
use crate::generator::GenerateOptions;

/// Command-line arguments structure for errcodegen.
#[derive(Parser, Debug)]
#[command(author, version, about = "errcodegen: generates error code declarations from message definitions", long_about = None)]
pub struct Args {
    /// File that contains all the error codes and messages.
    /// Message texts are ignored; only codes and names are used.
    #[arg(long, value_name = "MESSAGES")]
    pub messages: PathBuf,

    /// Template file in which the placeholder is replaced
    /// with the generated error code list
    #[arg(long, value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Output file where the generated error code list is saved
    #[arg(long, value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Output dialect of the generated declarations
    #[arg(long, value_enum)]
    pub dialect: Option<Dialect>,

    /// Custom line format, a MiniJinja template with `name` and `code`.
    /// Takes precedence over the dialect.
    #[arg(long, value_name = "PATTERN")]
    pub line_format: Option<String>,

    /// Placeholder token replaced in the template
    #[arg(long, value_name = "TOKEN")]
    pub placeholder: Option<String>,

    /// Configuration file (defaults to errcodegen.json/.yml/.yaml in the
    /// current directory, if present)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Fail when the template does not contain the placeholder
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Settings given on the command line, as overrides for the configuration file.
    pub fn overrides(&self) -> Config {
        Config {
            placeholder: self.placeholder.clone(),
            dialect: self.dialect,
            line_format: self.line_format.clone(),
            strict: self.strict.then_some(true),
        }
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            messages: self.messages.clone(),
            template: self.template.clone(),
            output: self.output.clone(),
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                // Nothing sensible is left to do if stdout is gone.
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
