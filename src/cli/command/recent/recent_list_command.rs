use crate::app_home::APP_HOME;
use crate::cli::to_args::ToArgs;
use crate::recent_files;
use arbitrary::Arbitrary;
use clap::Args;
use std::ffi::OsString;

#[derive(Args, Arbitrary, Clone, PartialEq, Debug)]
pub struct RecentListArgs {}

impl RecentListArgs {
    pub fn invoke(self) -> eyre::Result<()> {
        let list = recent_files::load_recent(&APP_HOME)?;
        if list.is_empty() {
            println!("No recent files.");
        }
        for p in list {
            println!("{}", p.display());
        }
        Ok(())
    }
}

impl ToArgs for RecentListArgs {
    fn to_args(&self) -> Vec<OsString> {
        vec![]
    }
}
