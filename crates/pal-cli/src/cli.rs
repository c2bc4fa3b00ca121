use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use pal_core::{Backend, VERSION};

/// pal - a personal activity log for short timestamped notes
#[derive(Parser)]
#[command(name = "pal")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file
    #[arg(long, global = true, env = "PAL_PATH")]
    pub path: Option<String>,

    /// Storage backend (sqlite, jsonl)
    #[arg(long, global = true, env = "PAL_BACKEND")]
    pub backend: Option<Backend>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file and create an empty store
    Init(InitArgs),

    /// Record a new entry
    Add(AddArgs),

    /// List entries for an author and project
    List(ListArgs),

    /// Show a specific entry by ID
    Show(ShowArgs),

    /// Delete entries for an author, in one project or all of them
    Delete(DeleteArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the store will be created
    #[arg(value_name = "PATH")]
    pub target: Option<String>,

    /// Default author recorded in the config
    #[arg(short, long)]
    pub author: Option<String>,

    /// Default project recorded in the config
    #[arg(short, long)]
    pub project: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Entry header (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Longer body appended below the header
    #[arg(long)]
    pub body: Option<String>,

    /// Author (defaults to PAL_AUTHOR, config, then the current user)
    #[arg(short, long)]
    pub author: Option<String>,

    /// Project (defaults to PAL_PROJECT, config, then "default")
    #[arg(short, long)]
    pub project: Option<String>,

    /// When the activity happened (ISO-8601 or YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Author to list
    #[arg(short, long)]
    pub author: Option<String>,

    /// Project to list
    #[arg(short, long)]
    pub project: Option<String>,

    /// Show at most this many of the newest entries
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Author whose entries are deleted
    #[arg(short, long)]
    pub author: Option<String>,

    /// Only delete entries in this project
    #[arg(short, long, conflicts_with = "all_projects")]
    pub project: Option<String>,

    /// Delete the author's entries in every project
    #[arg(long)]
    pub all_projects: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,

    /// Disable interactive prompts (requires --force)
    #[arg(long)]
    pub no_input: bool,
}
