//! errcodegen's main application entry point.
//! Parses the command line, resolves settings and runs the generator.

use errcodegen::{
    cli::{get_args, Args},
    config::{get_config, Settings},
    error::{default_error_handler, Result},
    generator::generate,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the configuration file, if any
/// 2. Applies command line overrides
/// 3. Generates the output file
fn run(args: Args) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let config = get_config(args.config.as_deref(), &current_dir)?;
    let settings = Settings::try_from(config.merge(args.overrides()))?;

    let renderer = MiniJinjaRenderer::new();
    let summary = generate(&args.generate_options(), &settings, &renderer)?;

    println!("Generated {} error codes.", summary.records);
    Ok(())
}
