//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rscookbook/rscookbook.toml` (or an explicit `--config` file)
//! 3. Environment variables: `RSCOOKBOOK_*` prefix

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::{CookbookError, CookbookResult};

/// Unified configuration for rscookbook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Separator used by `join` when none is given
    pub separator: String,
    /// Placeholder text that marks a missing part on the command line
    pub null_text: String,
    /// Duration of the stopwatch demo sleep in milliseconds
    pub sleep_millis: u64,
    /// Width of the horizontal rule printed between sections
    pub rule_width: usize,
    /// Base directory for relative file arguments
    pub sample_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            separator: ", ".into(),
            null_text: "null".into(),
            sleep_millis: 4200,
            rule_width: 70,
            sample_dir: PathBuf::from("."),
        }
    }
}

/// Get the XDG config directory for rscookbook.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rscookbook").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rscookbook.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}`; unresolvable input is returned unchanged.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    pub fn sleep(&self) -> Duration {
        Duration::from_millis(self.sleep_millis)
    }

    /// Resolve a file argument against `sample_dir`; absolute paths pass through.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.sample_dir.join(path)
        }
    }

    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.sample_dir.to_string_lossy().as_ref());
        self.sample_dir = PathBuf::from(expanded);
    }

    /// Load settings with layered precedence.
    ///
    /// `config_file` replaces the global XDG file when given and must exist.
    pub fn load(config_file: Option<&Path>) -> CookbookResult<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("separator", defaults.separator.clone())
            .map_err(config_err)?
            .set_default("null_text", defaults.null_text.clone())
            .map_err(config_err)?
            .set_default("sleep_millis", defaults.sleep_millis)
            .map_err(config_err)?
            .set_default("rule_width", defaults.rule_width as u64)
            .map_err(config_err)?
            .set_default(
                "sample_dir",
                defaults.sample_dir.to_string_lossy().to_string(),
            )
            .map_err(config_err)?;

        match config_file {
            Some(path) => {
                builder = builder.add_source(File::from(path.to_path_buf()).required(true));
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    builder = builder.add_source(File::from(global_path).required(false));
                }
            }
        }

        builder = builder.add_source(Environment::with_prefix("RSCOOKBOOK").try_parsing(true));

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;

        // Expand ~ and $VAR in path-like fields
        settings.expand_paths();

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> CookbookResult<String> {
        toml::to_string_pretty(self).map_err(|e| CookbookError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# rscookbook configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/rscookbook/rscookbook.toml  (or --config <FILE>)
#   Env:    RSCOOKBOOK_* environment variables

# Separator used by `join` when -s is not given
# separator = ", "

# Command line token that stands for a missing part
# null_text = "null"

# Stopwatch demo sleep in milliseconds
# sleep_millis = 4200

# Width of the rule printed by `rscookbook tour`
# rule_width = 70

# Base directory for relative file arguments (supports ~ and $VAR)
# sample_dir = "."
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> CookbookError {
    CookbookError::Config {
        message: e.to_string(),
    }
}
