use crate::cli::command::cache::cache_clean_command::CacheCleanArgs;
use crate::cli::command::cache::cache_show_command::CacheShowArgs;
use crate::cli::to_args::ToArgs;
use arbitrary::Arbitrary;
use clap::Subcommand;
use std::ffi::OsString;

#[derive(Subcommand, Clone, Arbitrary, PartialEq, Debug)]
pub enum CacheCommand {
    /// Show the cached record for an image, if any
    Show(CacheShowArgs),

    /// Remove every cached metadata record
    Clean(CacheCleanArgs),
}

impl CacheCommand {
    pub fn invoke(self) -> eyre::Result<()> {
        match self {
            CacheCommand::Show(a) => a.invoke(),
            CacheCommand::Clean(a) => a.invoke(),
        }
    }
}

impl ToArgs for CacheCommand {
    fn to_args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        match self {
            CacheCommand::Show(a) => {
                args.push("show".into());
                args.extend(a.to_args());
            }
            CacheCommand::Clean(a) => {
                args.push("clean".into());
                args.extend(a.to_args());
            }
        }
        args
    }
}
