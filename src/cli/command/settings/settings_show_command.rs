use crate::app_home::APP_HOME;
use crate::cli::to_args::ToArgs;
use crate::settings::Settings;
use arbitrary::Arbitrary;
use clap::Args;
use std::ffi::OsString;

#[derive(Args, Arbitrary, Clone, PartialEq, Debug)]
pub struct SettingsShowArgs {}

impl SettingsShowArgs {
    pub fn invoke(self, settings: &Settings) -> eyre::Result<()> {
        println!("# {}", Settings::file_path(&APP_HOME).display());
        println!("{}", serde_json::to_string_pretty(settings)?);
        Ok(())
    }
}

impl ToArgs for SettingsShowArgs {
    fn to_args(&self) -> Vec<OsString> {
        Vec::new()
    }
}
