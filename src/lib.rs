#![deny(clippy::disallowed_methods)]

pub mod app_home;
pub mod batch;
pub mod cache;
pub mod cli;
pub mod compare;
pub mod error;
pub mod export;
pub mod file_info;
pub mod map_service;
pub mod metadata;
pub mod preview;
pub mod recent_files;
pub mod settings;
pub mod strip;
pub mod tracing;

#[cfg(test)]
mod test_utils;

use crate::cli::Cli;
use clap::CommandFactory;
use clap::FromArgMatches;
pub use error::MetadataError;
pub use error::MetadataResult;

pub fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::command();
    let cli = Cli::from_arg_matches(&cli.get_matches())?;

    crate::tracing::init_tracing(
        cli.global_args.log_level(),
        cli.global_args.json_log_behaviour(),
    )?;

    cli.invoke()?;
    Ok(())
}
