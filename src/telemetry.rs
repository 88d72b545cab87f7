//! Logging setup for the tagtrail binary

use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive (e.g. `tagtrail=debug`)
pub const LOG_ENV: &str = "TAGTRAIL_LOG";

/// Install a stderr subscriber. `TAGTRAIL_LOG` overrides the level implied by
/// `verbosity`. Calling this twice keeps the first subscriber.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_from_verbosity(verbosity).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
