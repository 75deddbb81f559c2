use crate::cli::json_log_behaviour::JsonLogBehaviour;
use crate::cli::to_args::ToArgs;
use arbitrary::Arbitrary;
use clap::Args;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::Level;

#[derive(Args, Arbitrary, Default, PartialEq, Debug)]
pub struct GlobalArgs {
    /// Enable debug logging
    #[clap(long, global = true)]
    pub debug: bool,

    /// Write logs to stderr as JSON lines
    #[clap(long, global = true)]
    pub json_logs: bool,

    /// Also write JSON logs to this file
    #[clap(long, global = true, value_name = "PATH")]
    pub log_file: Option<String>,
}

impl GlobalArgs {
    #[must_use]
    pub fn log_level(&self) -> Level {
        if self.debug { Level::DEBUG } else { Level::INFO }
    }

    #[must_use]
    pub fn json_log_behaviour(&self) -> JsonLogBehaviour {
        match (&self.log_file, self.json_logs) {
            (None, false) => JsonLogBehaviour::None,
            (None, true) => JsonLogBehaviour::Stderr,
            (Some(path), false) => JsonLogBehaviour::File(PathBuf::from(path)),
            (Some(path), true) => JsonLogBehaviour::StderrAndFile(PathBuf::from(path)),
        }
    }
}

impl ToArgs for GlobalArgs {
    fn to_args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        if self.debug {
            args.push("--debug".into());
        }
        if self.json_logs {
            args.push("--json-logs".into());
        }
        if let Some(path) = &self.log_file {
            args.push(format!("--log-file={path}").into());
        }
        args
    }
}
