// Shared entry plumbing for the demo binaries.

use std::process::ExitCode;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::DemoConfig;
use crate::error::PatternError;
use crate::sink::{ConsoleSink, Sink};

/// Installs a stderr subscriber so stdout carries only demo lines.
/// `RUST_LOG` wins over `filter`.
pub fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed (tests, repeated runs in one process).
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init();
}

/// A config that cannot be read or parsed never stops a demo; it falls back to defaults.
pub fn config_or_default(loaded: Result<DemoConfig, PatternError>) -> DemoConfig {
    match loaded {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring config, using defaults");
            DemoConfig::default()
        }
    }
}

pub fn run_demo<F>(name: &str, demo: F) -> Result<(), PatternError>
where
    F: FnOnce(&mut dyn Sink) -> Result<(), PatternError>,
{
    let loaded = DemoConfig::load();
    let filter = loaded
        .as_ref()
        .map(|config| config.log_filter.as_str())
        .unwrap_or("warn");
    init_tracing(filter);
    let config = config_or_default(loaded);

    tracing::info!(demo = name, "starting");
    let mut out = ConsoleSink::new(config.color);
    demo(&mut out)?;
    tracing::info!(demo = name, "finished");
    Ok(())
}

/// Maps a demo result to the process exit code, printing errors with their message.
pub fn report(result: Result<(), PatternError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing("warn");
        init_tracing("debug");
    }

    #[test]
    fn test_unreadable_config_falls_back_to_defaults() {
        let loaded = Err(PatternError::ConfigRead {
            path: PathBuf::from("/nonexistent"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        });
        assert_eq!(config_or_default(loaded), DemoConfig::default());
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let loaded = DemoConfig::from_toml_str("colour = true");
        assert!(loaded.is_err());
        assert_eq!(config_or_default(loaded), DemoConfig::default());
    }

    #[test]
    fn test_valid_config_is_kept() {
        let loaded = DemoConfig::from_toml_str("color = true");
        assert!(config_or_default(loaded).color);
    }

    #[test]
    fn test_demo_error_propagates() {
        let result = run_demo("failing", |_| Err(PatternError::unrecognized("test", "x")));
        assert!(matches!(
            result,
            Err(PatternError::UnrecognizedVariant { kind: "test", .. })
        ));
    }

    #[test]
    fn test_report_distinguishes_failure() {
        let ok = format!("{:?}", report(Ok(())));
        let failed = format!("{:?}", report(Err(PatternError::unrecognized("test", "x"))));
        assert_eq!(ok, format!("{:?}", ExitCode::SUCCESS));
        assert_eq!(failed, format!("{:?}", ExitCode::FAILURE));
        assert_ne!(ok, failed);
    }
}
