mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "amodel",
    about = "Keep user-arranged menu and toolbar layouts in sync with the actions an application declares",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .amodel/ or .git/)
    #[arg(long, global = true, env = "AMODEL_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Log debug output to stderr
    #[arg(long, global = true, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize .amodel/ in the current project
    Init {
        /// Namespace prefixed to every model id (default: directory name)
        #[arg(long)]
        namespace: Option<String>,
    },

    /// Synchronize the declared actions of a site into the store and print its tree
    Sync {
        /// Action site, i.e. the first path segment (e.g. global-menus)
        #[arg(long)]
        site: String,
        /// Override the configured namespace
        #[arg(long)]
        namespace: Option<String>,
        /// Compute the result without saving the store
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the tree for a site without touching an existing model
    Tree {
        #[arg(long)]
        site: String,
        #[arg(long)]
        namespace: Option<String>,
    },

    /// List the persisted models
    Models,

    /// Dump the whole store document
    Export {
        /// Output format: yaml, json, or xml
        #[arg(long, default_value = "yaml")]
        format: String,
    },

    /// Merge a legacy XML action model document into the store
    ImportXml {
        /// Path to the XML file
        file: PathBuf,
    },

    /// Validate the project configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init { namespace } => cmd::init::run(&root, namespace.as_deref()),
        Commands::Sync {
            site,
            namespace,
            dry_run,
        } => cmd::sync::run(&root, &site, namespace.as_deref(), dry_run, cli.json),
        Commands::Tree { site, namespace } => {
            cmd::tree::run(&root, &site, namespace.as_deref(), cli.json)
        }
        Commands::Models => cmd::models::run(&root, cli.json),
        Commands::Export { format } => cmd::export::run(&root, &format),
        Commands::ImportXml { file } => cmd::import_xml::run(&root, &file, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
