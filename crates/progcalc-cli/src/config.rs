//! Calculator defaults loaded from a TOML file.
//!
//! Precedence, lowest to highest: built-in defaults, the `--config` file,
//! then the `--base` / `--word-size` flags.
//!
//! ```toml
//! base = "HEX"
//! word_size = 64
//! history_limit = 50
//! ```

use std::path::{Path, PathBuf};

use progcalc_model::{Base, CalculatorOptions, WordSize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(
        "history_limit {limit} in {path} exceeds the maximum of {max}",
        max = MAX_HISTORY_LIMIT
    )]
    HistoryLimit { path: PathBuf, limit: usize },
}

/// Largest `history_limit` a config file may request.
pub const MAX_HISTORY_LIMIT: usize = 10_000;

/// Reads options from `path`.
pub fn load_options(path: &Path) -> Result<CalculatorOptions, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let options = parse_options(&contents).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    if options.history_limit > MAX_HISTORY_LIMIT {
        return Err(ConfigError::HistoryLimit {
            path: path.to_path_buf(),
            limit: options.history_limit,
        });
    }
    info!(path = %path.display(), "loaded calculator config");
    Ok(options)
}

/// Parses options from TOML text. Missing keys take their defaults.
pub fn parse_options(contents: &str) -> Result<CalculatorOptions, toml::de::Error> {
    toml::from_str(contents)
}

/// Applies the config file and flag overrides on top of the defaults.
pub fn resolve_options(
    config: Option<&Path>,
    base: Option<Base>,
    word_size: Option<WordSize>,
) -> Result<CalculatorOptions, ConfigError> {
    let mut options = match config {
        Some(path) => load_options(path)?,
        None => CalculatorOptions::default(),
    };
    if let Some(base) = base {
        options.base = base;
    }
    if let Some(word_size) = word_size {
        options.word_size = word_size;
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let options = resolve_options(None, Some(Base::Bin), None).unwrap();
        assert_eq!(options.base, Base::Bin);
        assert_eq!(options.word_size, WordSize::W32);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = resolve_options(Some(Path::new("/nonexistent/progcalc.toml")), None, None)
            .unwrap_err();
        assert!(matches!(error, ConfigError::Io { .. }));
        assert!(error.to_string().contains("/nonexistent/progcalc.toml"));
    }

    #[test]
    fn file_then_flags() {
        let path = std::env::temp_dir().join(format!(
            "progcalc_config_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "base = \"OCT\"\nword_size = 16\n").unwrap();
        let options = resolve_options(Some(&path), None, Some(WordSize::W64)).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(options.base, Base::Oct);
        assert_eq!(options.word_size, WordSize::W64);
    }

    #[test]
    fn oversized_history_limit_is_rejected() {
        let path = std::env::temp_dir().join(format!(
            "progcalc_history_limit_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "history_limit = 9223372036854775807\n").unwrap();
        let error = resolve_options(Some(&path), None, None).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(
            error,
            ConfigError::HistoryLimit {
                limit: 9_223_372_036_854_775_807,
                ..
            }
        ));
    }

    #[test]
    fn bad_toml_is_reported() {
        assert!(parse_options("word_size = \"big\"").is_err());
        assert!(parse_options("history_limit = -1").is_err());
    }
}
