//! doctag CLI
//!
//! `dt` - tag documents and find them with boolean queries.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use doctag_core::Config;

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "dt")]
#[command(about = "doctag - tag documents and find them with boolean queries")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a tag index at ~/.dtdb.json (or $DOCTAG_DB if set)
    Init,
    /// Find docs with a boolean tag query, e.g. `dt find school or (book and class)`
    Find {
        /// Query words; they are joined with spaces before parsing
        #[arg(required = true)]
        query: Vec<String>,
        /// Show tags after each doc
        #[arg(short, long)]
        verbose: bool,
    },
    /// Apply tags to a doc, e.g. `dt tag todo.txt list gtd`
    Tag {
        /// Doc to tag
        doc: String,
        /// Tags to apply
        #[arg(required = true)]
        tags: Vec<String>,
    },
    /// Apply one tag to many docs, e.g. `dt gat list todo.txt movies.txt`
    Gat {
        /// Tag to apply
        tag: String,
        /// Docs to tag
        #[arg(required = true)]
        docs: Vec<String>,
    },
    /// Remove tags from a doc
    Untag {
        /// Doc to untag
        doc: String,
        /// Tags to remove
        #[arg(required = true)]
        tags: Vec<String>,
    },
    /// Remove one tag from many docs
    Ungat {
        /// Tag to remove
        tag: String,
        /// Docs to untag
        #[arg(required = true)]
        docs: Vec<String>,
    },
    /// Print docs or tags
    Show {
        #[command(subcommand)]
        command: ShowCommands,
    },
    /// Remove a doc or tag from the index entirely
    Remove {
        #[command(subcommand)]
        command: RemoveCommands,
    },
    /// Merge old tags into a new tag, e.g. `dt merge lists lits list`
    Merge {
        /// Old tags followed by the new tag (created if absent)
        #[arg(required = true, num_args = 2..)]
        tags: Vec<String>,
    },
}

#[derive(Subcommand)]
enum ShowCommands {
    /// Show all docs currently tagged
    Docs {
        /// Show tags after each doc instead of counts
        #[arg(short, long)]
        verbose: bool,
    },
    /// Show all tags currently used
    Tags {
        /// Show docs after each tag instead of counts
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Subcommand)]
enum RemoveCommands {
    /// Remove a doc from the index (i.e. remove all tags from it)
    Doc {
        /// Doc to remove
        doc: String,
    },
    /// Remove a tag from the index (i.e. remove it from all docs)
    Tag {
        /// Tag to remove
        tag: String,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));
    let config = Config::load().context("Failed to load configuration")?;
    tracing::debug!(path = %config.index_path.display(), "using tag index");

    match cli.command {
        Commands::Init => commands::init::run(&config, &output),
        Commands::Find { query, verbose } => commands::find::run(&config, &query, verbose, &output),
        Commands::Tag { doc, tags } => commands::tag::tag(&config, &doc, &tags, &output),
        Commands::Gat { tag, docs } => commands::tag::gat(&config, &tag, &docs, &output),
        Commands::Untag { doc, tags } => commands::tag::untag(&config, &doc, &tags, &output),
        Commands::Ungat { tag, docs } => commands::tag::ungat(&config, &tag, &docs, &output),
        Commands::Show { command } => match command {
            ShowCommands::Docs { verbose } => commands::show::docs(&config, verbose, &output),
            ShowCommands::Tags { verbose } => commands::show::tags(&config, verbose, &output),
        },
        Commands::Remove { command } => match command {
            RemoveCommands::Doc { doc } => commands::remove::doc(&config, &doc, &output),
            RemoveCommands::Tag { tag } => commands::remove::tag(&config, &tag, &output),
        },
        Commands::Merge { tags } => commands::merge::run(&config, &tags, &output),
    }
}

/// Initialize logging to stderr when DOCTAG_LOG is set
fn init_tracing() {
    if let Ok(filter) = EnvFilter::try_from_env("DOCTAG_LOG") {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
