//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr; stdout is reserved for results so the output can be
//! piped. `RUST_LOG`, when set, wins over the `-v`/`-q` flags.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub with_ansi: bool,
}

impl LogConfig {
    /// `quiet` -> error, 0 -> warn, 1 -> debug, 2+ -> trace.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        let level = if quiet {
            Level::ERROR
        } else {
            match verbose {
                0 => Level::WARN,
                1 => Level::DEBUG,
                _ => Level::TRACE,
            }
        };
        Self {
            level,
            with_ansi: std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,geomatch_core={lvl},geomatch={lvl}",
            lvl = level.as_str().to_lowercase()
        ))
    })
}

pub fn init_logging(config: &LogConfig) {
    let layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(LogConfig::from_flags(0, false).level, Level::WARN);
        assert_eq!(LogConfig::from_flags(1, false).level, Level::DEBUG);
        assert_eq!(LogConfig::from_flags(5, false).level, Level::TRACE);
        assert_eq!(LogConfig::from_flags(0, true).level, Level::ERROR);
    }
}
