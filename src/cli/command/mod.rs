pub mod batch;
pub mod cache;
pub mod compare;
pub mod export;
pub mod gps;
pub mod preview;
pub mod recent;
pub mod settings;
pub mod show;
pub mod strip;

use crate::cli::command::batch::batch_command::BatchArgs;
use crate::cli::command::cache::CacheArgs;
use crate::cli::command::compare::compare_command::CompareArgs;
use crate::cli::command::export::export_command::ExportArgs;
use crate::cli::command::gps::gps_command::GpsArgs;
use crate::cli::command::preview::preview_command::PreviewArgs;
use crate::cli::command::recent::RecentArgs;
use crate::cli::command::settings::SettingsArgs;
use crate::cli::command::show::show_command::ShowArgs;
use crate::cli::command::strip::strip_command::StripArgs;
use crate::cli::to_args::ToArgs;
use crate::settings::Settings;
use arbitrary::Arbitrary;
use clap::Subcommand;
use std::ffi::OsString;

#[derive(Subcommand, Arbitrary, PartialEq, Debug)]
pub enum Command {
    /// Show the metadata of an image, grouped by category
    Show(ShowArgs),

    /// Print GPS coordinates and map links
    Gps(GpsArgs),

    /// Export metadata as JSON or a text report
    Export(ExportArgs),

    /// Scan many images for GPS data
    Batch(BatchArgs),

    /// Compare the metadata of two images
    Compare(CompareArgs),

    /// Render an adjusted preview thumbnail
    Preview(PreviewArgs),

    /// Write a copy of an image without metadata
    Strip(StripArgs),

    /// Recently opened images (list/clear)
    Recent(RecentArgs),

    /// Cached metadata records (show/clean)
    Cache(CacheArgs),

    /// Persisted settings (show/set/reset)
    Settings(SettingsArgs),
}

impl Command {
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub fn invoke(self, settings: &Settings) -> eyre::Result<()> {
        match self {
            Command::Show(args) => args.invoke(settings),
            Command::Gps(args) => args.invoke(settings),
            Command::Export(args) => args.invoke(settings),
            Command::Batch(args) => args.invoke(settings),
            Command::Compare(args) => args.invoke(settings),
            Command::Preview(args) => args.invoke(settings),
            Command::Strip(args) => args.invoke(),
            Command::Recent(args) => args.invoke(),
            Command::Cache(args) => args.invoke(),
            Command::Settings(args) => args.invoke(settings),
        }
    }
}

impl ToArgs for Command {
    fn to_args(&self) -> Vec<OsString> {
        let (name, rest): (&str, Vec<OsString>) = match self {
            Command::Show(a) => ("show", a.to_args()),
            Command::Gps(a) => ("gps", a.to_args()),
            Command::Export(a) => ("export", a.to_args()),
            Command::Batch(a) => ("batch", a.to_args()),
            Command::Compare(a) => ("compare", a.to_args()),
            Command::Preview(a) => ("preview", a.to_args()),
            Command::Strip(a) => ("strip", a.to_args()),
            Command::Recent(a) => ("recent", a.to_args()),
            Command::Cache(a) => ("cache", a.to_args()),
            Command::Settings(a) => ("settings", a.to_args()),
        };
        let mut args = vec![OsString::from(name)];
        args.extend(rest);
        args
    }
}
