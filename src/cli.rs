//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::encoding::Encoding;

/// Top-level CLI entry point for the `gitconfig` tool.
#[derive(Parser, Debug)]
#[command(
    name = "gitconfig",
    about = "Read and edit git configuration files",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Config file to operate on (default: .git/config)
    #[arg(short, long, global = true, conflicts_with = "global_file")]
    pub file: Option<PathBuf>,

    /// Use the per-user ~/.gitconfig
    #[arg(long = "global", global = true)]
    pub global_file: bool,

    /// Text encoding of the config file (utf-8, latin1)
    #[arg(long, global = true, default_value = "utf-8")]
    pub encoding: Encoding,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the value of a key
    Get(GetOpts),
    /// Set a key and save the file
    Set(SetOpts),
    /// Remove a key and save the file
    Unset(UnsetOpts),
    /// List every key and value
    List(ListOpts),
    /// Print version information
    Version,
}

/// Options for the `get` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct GetOpts {
    /// Dotted key, e.g. core.editor or remote.origin.url
    pub key: String,
}

/// Options for the `set` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct SetOpts {
    /// Dotted key, e.g. core.editor or remote.origin.url
    pub key: String,
    /// New value; omitted means empty, which is dropped on save
    pub value: Option<String>,
}

/// Options for the `unset` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct UnsetOpts {
    /// Dotted key to remove
    pub key: String,
}

/// Options for the `list` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ListOpts {
    /// Print a JSON array of {key, value} objects
    #[arg(long)]
    pub json: bool,
}
