use arbitrary::Arbitrary;
use clap::ValueEnum;

#[derive(ValueEnum, Arbitrary, Clone, Copy, PartialEq, Debug)]
pub enum OutputFormat {
    Auto,
    Json,
    Pretty,
}

impl OutputFormat {
    /// `Auto` becomes `Pretty` on a terminal and `Json` otherwise.
    #[must_use]
    pub fn resolve(self) -> OutputFormat {
        match self {
            OutputFormat::Auto => {
                if atty::is(atty::Stream::Stdout) {
                    OutputFormat::Pretty
                } else {
                    OutputFormat::Json
                }
            }
            other => other,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Json => write!(f, "json"),
            Self::Pretty => write!(f, "pretty"),
        }
    }
}
