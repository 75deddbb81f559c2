pub mod recent_clear_command;
pub mod recent_command;
pub mod recent_list_command;

use crate::cli::command::recent::recent_command::RecentCommand;
use crate::cli::to_args::ToArgs;
use arbitrary::Arbitrary;
use clap::Args;
use std::ffi::OsString;

#[derive(Args, Arbitrary, Clone, PartialEq, Debug)]
pub struct RecentArgs {
    #[clap(subcommand)]
    pub command: RecentCommand,
}

impl RecentArgs {
    /// # Errors
    ///
    /// Returns an error if the recent subcommand fails.
    pub fn invoke(self) -> eyre::Result<()> {
        self.command.invoke()
    }
}

impl ToArgs for RecentArgs {
    fn to_args(&self) -> Vec<OsString> {
        self.command.to_args()
    }
}
