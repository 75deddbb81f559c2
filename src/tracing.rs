use crate::cli::json_log_behaviour::JsonLogBehaviour;
use std::fs::File;
use std::sync::Mutex;
use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global subscriber. `RUST_LOG` overrides `level` when set.
///
/// Logs always go to stderr so stdout stays clean for command output.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed.
pub fn init_tracing(level: Level, json_behaviour: JsonLogBehaviour) -> eyre::Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let stderr_json = json_behaviour.stderr_is_json();
    let pretty_layer = (!stderr_json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(level == Level::DEBUG)
    });
    let json_stderr_layer = stderr_json.then(|| fmt::layer().json().with_writer(std::io::stderr));

    let file_layer = match json_behaviour.file() {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            let file = File::create(path)?;
            Some(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(pretty_layer)
        .with(json_stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}
