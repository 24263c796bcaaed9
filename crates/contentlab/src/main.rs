mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Templates { json } => commands::templates::run(config, json, cli.verbose),
        Commands::New {
            template,
            output,
            force,
        } => commands::new::run(config, &template, output.as_deref(), force, cli.verbose),
        Commands::Validate { record, json } => {
            commands::validate::run(config, &record, json, cli.verbose)
        }
        Commands::Render {
            record,
            output,
            no_header,
        } => commands::render::run(config, &record, output.as_deref(), no_header, cli.verbose),
        Commands::Slug {
            text,
            from_title,
            json,
        } => commands::slug::run(&text, from_title, json),
        Commands::Jsx { file, markdown } => commands::jsx::run(config, file.as_deref(), markdown),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins, else `--verbose` turns on debug output
///
/// Logs go to stderr so rendered literals on stdout stay clean.
fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
