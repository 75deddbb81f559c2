use crate::app_home::APP_HOME;
use crate::cli::to_args::ToArgs;
use crate::recent_files;
use arbitrary::Arbitrary;
use clap::Args;
use std::ffi::OsString;

#[derive(Args, Arbitrary, Clone, PartialEq, Debug)]
pub struct RecentClearArgs {}

impl RecentClearArgs {
    pub fn invoke(self) -> eyre::Result<()> {
        let removed = recent_files::clear_recent(&APP_HOME)?;
        println!("Cleared {removed} recent files");
        Ok(())
    }
}

impl ToArgs for RecentClearArgs {
    fn to_args(&self) -> Vec<OsString> {
        vec![]
    }
}
