//! `gitconfig`: read and edit git configuration files.
use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use gitconfig_cli::{cli, commands, logging};

fn main() -> Result<ExitCode> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);

    let mut stdout = std::io::stdout().lock();
    let found = match args.command {
        cli::Command::Get(opts) => {
            let config = commands::open(&args.global)?;
            commands::get::run(&config, &opts, &mut stdout)?
        }
        cli::Command::Set(opts) => {
            let mut config = commands::open(&args.global)?;
            commands::set::run(&mut config, &opts)?;
            true
        }
        cli::Command::Unset(opts) => {
            let mut config = commands::open(&args.global)?;
            commands::unset::run(&mut config, &opts)?
        }
        cli::Command::List(opts) => {
            let config = commands::open(&args.global)?;
            commands::list::run(&config, &opts, &mut stdout)?;
            true
        }
        cli::Command::Version => {
            commands::version::run(&mut stdout)?;
            true
        }
    };

    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
