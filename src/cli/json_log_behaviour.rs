use std::path::PathBuf;

/// Where JSON formatted log lines go, in addition to or instead of the
/// human-readable stderr output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum JsonLogBehaviour {
    /// Human-readable stderr only.
    #[default]
    None,
    /// JSON lines on stderr.
    Stderr,
    /// Human-readable stderr plus JSON lines in a file.
    File(PathBuf),
    /// JSON lines on stderr and in a file.
    StderrAndFile(PathBuf),
}

impl JsonLogBehaviour {
    #[must_use]
    pub fn stderr_is_json(&self) -> bool {
        matches!(self, Self::Stderr | Self::StderrAndFile(_))
    }

    #[must_use]
    pub fn file(&self) -> Option<&PathBuf> {
        match self {
            Self::File(path) | Self::StderrAndFile(path) => Some(path),
            Self::None | Self::Stderr => None,
        }
    }
}
