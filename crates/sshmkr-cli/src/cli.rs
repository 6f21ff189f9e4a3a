//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// sshmkr - Manage an ssh_config organised by `####` and `##` headers
///
/// Main headers (`#### Name`) group sub headers (`## Name`); each sub
/// header precedes the host blocks filed under it. New hosts are built from
/// templates kept in a companion file, `<config>_templates` by default.
#[derive(Parser, Debug)]
#[command(name = "sshmkr")]
#[command(author, version, about)]
pub struct Cli {
    /// Path of the ssh config to edit (default: ~/.ssh/config)
    #[arg(short, long, global = true, env = "SSHMKR_CONFIG")]
    pub path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where a new host block goes
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementArgs {
    /// Main header to file under, by 1-based position (prompted if absent)
    #[arg(long, value_name = "N")]
    pub main: Option<usize>,

    /// Sub header to file under, by 1-based position (prompted if absent)
    #[arg(long, value_name = "N")]
    pub sub: Option<usize>,
}

/// How field values are gathered
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptArgs {
    /// Accept every default value without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Host name to write, skipping the prompt for the Host field
    #[arg(long)]
    pub name: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add a new host config built from a template
    ///
    /// Templates come from the templates file; commented-out templates are
    /// ignored. Without --source the first template is used.
    ///
    /// Examples:
    ///   sshmkr add -s basic
    ///   sshmkr add -s basic --main 1 --sub 2 --name db3 --yes
    Add {
        /// Name of the template to use
        #[arg(short, long, default_value = "")]
        source: String,

        #[command(flatten)]
        placement: PlacementArgs,

        #[command(flatten)]
        prompt: PromptArgs,

        /// Print the change instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Copy an existing host config as the basis for a new one
    Copy {
        /// Name of the host to copy
        #[arg(short, long)]
        source: String,

        #[command(flatten)]
        placement: PlacementArgs,

        #[command(flatten)]
        prompt: PromptArgs,

        /// Print the change instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove a host config
    Delete {
        /// Name of the host to remove
        #[arg(short, long)]
        source: String,

        /// Print the change instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Comment a host config out, or back in
    ///
    /// Each line of the block is flipped on its own: commented lines are
    /// uncommented and active lines are commented.
    Comment {
        /// Name of the host to toggle
        #[arg(short, long)]
        source: String,

        /// Print the change instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Edit the values of an existing host config
    ///
    /// Current values are offered as defaults.
    Edit {
        /// Name of the host to edit
        #[arg(short, long)]
        source: String,

        #[command(flatten)]
        prompt: PromptArgs,

        /// Print the change instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Print a host config
    Show {
        /// Name of the host to show
        #[arg(short, long)]
        source: String,
    },

    /// List headers and hosts
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
