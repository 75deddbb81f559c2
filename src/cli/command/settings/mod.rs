pub mod settings_command;
pub mod settings_reset_command;
pub mod settings_set_command;
pub mod settings_show_command;

use crate::cli::command::settings::settings_command::SettingsCommand;
use crate::cli::to_args::ToArgs;
use crate::settings::Settings;
use arbitrary::Arbitrary;
use clap::Args;
use std::ffi::OsString;

#[derive(Args, Arbitrary, Clone, PartialEq, Debug)]
pub struct SettingsArgs {
    #[clap(subcommand)]
    pub command: SettingsCommand,
}

impl SettingsArgs {
    /// # Errors
    ///
    /// Returns an error if the settings subcommand fails.
    pub fn invoke(self, settings: &Settings) -> eyre::Result<()> {
        self.command.invoke(settings)
    }
}

impl ToArgs for SettingsArgs {
    fn to_args(&self) -> Vec<OsString> {
        self.command.to_args()
    }
}
