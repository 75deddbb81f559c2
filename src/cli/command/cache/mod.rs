pub mod cache_clean_command;
pub mod cache_command;
pub mod cache_show_command;

use crate::cli::command::cache::cache_command::CacheCommand;
use crate::cli::to_args::ToArgs;
use arbitrary::Arbitrary;
use clap::Args;
use std::ffi::OsString;

#[derive(Args, Arbitrary, Clone, PartialEq, Debug)]
pub struct CacheArgs {
    #[clap(subcommand)]
    pub command: CacheCommand,
}

impl CacheArgs {
    /// # Errors
    ///
    /// Returns an error if the cache subcommand fails.
    pub fn invoke(self) -> eyre::Result<()> {
        self.command.invoke()
    }
}

impl ToArgs for CacheArgs {
    fn to_args(&self) -> Vec<OsString> {
        self.command.to_args()
    }
}
