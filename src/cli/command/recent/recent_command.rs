use crate::cli::command::recent::recent_clear_command::RecentClearArgs;
use crate::cli::command::recent::recent_list_command::RecentListArgs;
use crate::cli::to_args::ToArgs;
use arbitrary::Arbitrary;
use clap::Subcommand;
use std::ffi::OsString;

#[derive(Subcommand, Clone, Arbitrary, PartialEq, Debug)]
pub enum RecentCommand {
    /// List recently opened images, newest first
    List(RecentListArgs),

    /// Forget all recently opened images
    Clear(RecentClearArgs),
}

impl RecentCommand {
    pub fn invoke(self) -> eyre::Result<()> {
        match self {
            RecentCommand::List(a) => a.invoke(),
            RecentCommand::Clear(a) => a.invoke(),
        }
    }
}

impl ToArgs for RecentCommand {
    fn to_args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        match self {
            RecentCommand::List(a) => {
                args.push("list".into());
                args.extend(a.to_args());
            }
            RecentCommand::Clear(a) => {
                args.push("clear".into());
                args.extend(a.to_args());
            }
        }
        args
    }
}
