use crate::app_home::APP_HOME;
use crate::cli::to_args::ToArgs;
use crate::settings::Settings;
use arbitrary::Arbitrary;
use clap::Args;
use std::ffi::OsString;

#[derive(Args, Arbitrary, Clone, PartialEq, Debug)]
pub struct SettingsResetArgs {}

impl SettingsResetArgs {
    pub fn invoke(self) -> eyre::Result<()> {
        let defaults = Settings::default();
        defaults.save(&APP_HOME)?;
        println!("Settings reset to defaults");
        println!("{}", serde_json::to_string_pretty(&defaults)?);
        Ok(())
    }
}

impl ToArgs for SettingsResetArgs {
    fn to_args(&self) -> Vec<OsString> {
        Vec::new()
    }
}
