//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagtrail")]
#[command(about = "Track a set of tags and the versions it went through", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start tracking tags in a directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Entity the tags belong to (default: directory name)
        #[arg(short, long)]
        owner: Option<String>,
    },

    /// Add tags (a missing @ prefix is added)
    Add {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Delete tags
    Delete {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Replace all tags with the given ones
    Set { names: Vec<String> },

    /// Check whether a tag is present
    Has { name: String },

    /// List current tags
    List {
        /// List every tag ever added instead
        #[arg(short, long)]
        known: bool,
    },

    /// Record the current tags as a new version if they changed
    Checkpoint,

    /// Show recorded versions
    History {
        /// Show a single version
        #[arg(value_name = "VERSION")]
        number: Option<usize>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
