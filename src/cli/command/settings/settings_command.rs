use crate::cli::command::settings::settings_reset_command::SettingsResetArgs;
use crate::cli::command::settings::settings_set_command::SettingsSetArgs;
use crate::cli::command::settings::settings_show_command::SettingsShowArgs;
use crate::cli::to_args::ToArgs;
use crate::settings::Settings;
use arbitrary::Arbitrary;
use clap::Subcommand;
use std::ffi::OsString;

#[derive(Subcommand, Clone, Arbitrary, PartialEq, Debug)]
pub enum SettingsCommand {
    /// Show the current settings
    Show(SettingsShowArgs),

    /// Change one or more settings and write them to the config file
    Set(SettingsSetArgs),

    /// Reset every setting to its default and write it to the config file
    Reset(SettingsResetArgs),
}

impl SettingsCommand {
    pub fn invoke(self, settings: &Settings) -> eyre::Result<()> {
        match self {
            SettingsCommand::Show(args) => args.invoke(settings),
            SettingsCommand::Set(args) => args.invoke(settings),
            SettingsCommand::Reset(args) => args.invoke(),
        }
    }
}

impl ToArgs for SettingsCommand {
    fn to_args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        match self {
            SettingsCommand::Show(a) => {
                args.push("show".into());
                args.extend(a.to_args());
            }
            SettingsCommand::Set(a) => {
                args.push("set".into());
                args.extend(a.to_args());
            }
            SettingsCommand::Reset(a) => {
                args.push("reset".into());
                args.extend(a.to_args());
            }
        }
        args
    }
}
