//! Reader and writer for the git configuration file dialect.
//!
//! Loads `.gitconfig` / `.git/config` style files into an ordered,
//! multi-valued section store, answers dotted-path queries such as
//! `remote.origin.url`, applies edits, and writes the result back with
//! git's escaping rules. Malformed lines are tolerated and dropped.
//!
//! The public API is organised into three layers:
//!
//! - **[`config`]**: the [`ConfigFile`](config::ConfigFile) facade plus its parser, store and serializer
//! - **[`commands`]**: `get`, `set`, `unset` and `list` as used by the binary
//! - **[`cli`]** / **[`logging`]**: argument parsing and console diagnostics
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use config::ConfigFile;
pub use error::ConfigFileError;
