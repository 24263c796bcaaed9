//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contentlab")]
#[command(
    version,
    about = "Turn structured content records into data-file literals",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to contentlab.toml (default: searched from the current directory upwards)
    #[arg(long, global = true, env = "CONTENTLAB_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the built-in templates and their fields
    Templates {
        #[arg(long)]
        json: bool,
    },

    /// Write an empty record document for a template
    New {
        /// Template name (blog, customer-story, works)
        template: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing output file
        #[arg(short, long)]
        force: bool,
    },

    /// Check a record document without rendering it
    Validate {
        #[command(flatten)]
        record: RecordArgs,

        #[arg(long)]
        json: bool,
    },

    /// Validate a record document and print its literal
    Render {
        #[command(flatten)]
        record: RecordArgs,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Leave out the `// data/<file>.js` line
        #[arg(long)]
        no_header: bool,
    },

    /// Show the identifier and constant name derived from a text
    Slug {
        text: String,

        /// Treat the text as a title (hyphens in it are dropped)
        #[arg(long)]
        from_title: bool,

        #[arg(long)]
        json: bool,
    },

    /// Rewrite HTML (or Markdown) into JSX-ready markup
    Jsx {
        /// Input file (default: stdin)
        file: Option<PathBuf>,

        /// Convert the input from Markdown first
        #[arg(long)]
        markdown: bool,
    },
}

/// Where a record comes from and how it is adjusted before use
#[derive(Args)]
pub struct RecordArgs {
    /// Template name (blog, customer-story, works)
    pub template: String,

    /// Record document (TOML); `-` reads stdin
    pub input: PathBuf,

    /// Override a field, e.g. `--set meta.year=2024` (repeatable)
    #[arg(long = "set", value_name = "PATH=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,

    /// Replace the rich content field with this file (`.md` is read as Markdown)
    #[arg(long)]
    pub body: Option<PathBuf>,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (path, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected PATH=VALUE, got '{}'", raw))?;
    let path = path.trim();
    if path.is_empty() {
        return Err(format!("missing field path in '{}'", raw));
    }
    Ok((path.to_string(), value.to_string()))
}
