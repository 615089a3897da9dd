//! Quill CLI - blog article reader and admin.
//!
//! Provides commands for:
//! - `list`: List articles, optionally filtered by title
//! - `show`: Render an article from the API
//! - `render`: Render a local markdown file
//! - `create`, `update`, `delete`: Manage articles
//! - `css`: Print the syntax highlighting stylesheet

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    CreateArgs, CssArgs, DeleteArgs, GlobalArgs, ListArgs, RenderArgs, ShowArgs, UpdateArgs,
};
use output::Output;

/// Quill - blog article reader and admin.
#[derive(Parser)]
#[command(name = "quill", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List articles.
    List(ListArgs),
    /// Render an article fetched from the API.
    Show(ShowArgs),
    /// Render a local markdown file.
    Render(RenderArgs),
    /// Create an article.
    Create(CreateArgs),
    /// Update an article.
    Update(UpdateArgs),
    /// Delete an article.
    Delete(DeleteArgs),
    /// Print the syntax highlighting stylesheet.
    Css(CssArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let global = &cli.global;
    let result = match cli.command {
        Commands::List(args) => args.execute(global),
        Commands::Show(args) => args.execute(global),
        Commands::Render(args) => args.execute(global),
        Commands::Create(args) => args.execute(global),
        Commands::Update(args) => args.execute(global),
        Commands::Delete(args) => args.execute(global),
        Commands::Css(args) => args.execute(global),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
