// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, GraphDiscrimToml, InputConfig, OutputConfig, StatsConfig};

use crate::discrim::DiscrimOptions;
use crate::error::{DiscrimError, Result};
use regex::Regex;
use std::path::Path;

/// Widest fixed precision that still round-trips an `f64`.
pub const MAX_PRECISION: usize = 17;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new config and loads `graphdiscrim.toml` from the working directory.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new("."))
    }

    #[must_use]
    pub fn load_from(dir: &Path) -> Self {
        let mut config = Self::new();
        io::load_toml_config(&mut config, dir);
        config
    }

    pub fn parse_toml(&mut self, content: &str) {
        io::parse_toml(self, content);
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns [`DiscrimError::Configuration`] for an empty suffix list, a precision
    /// above [`MAX_PRECISION`], an empty delimiter, or a label pattern without a capture group.
    pub fn validate(&self) -> Result<()> {
        if self.input.suffixes.is_empty() {
            return Err(DiscrimError::Configuration(
                "input.suffixes must list at least one suffix".into(),
            ));
        }
        if self.output.precision > MAX_PRECISION {
            return Err(DiscrimError::Configuration(format!(
                "output.precision {} exceeds {MAX_PRECISION}",
                self.output.precision
            )));
        }
        if self.output.delimiter.is_empty() {
            return Err(DiscrimError::Configuration("output.delimiter is empty".into()));
        }
        let re = self.label_regex()?;
        if re.captures_len() < 2 {
            return Err(DiscrimError::Configuration(format!(
                "input.label_pattern '{}' has no capture group",
                self.input.label_pattern
            )));
        }
        Ok(())
    }

    /// Compiles the label pattern.
    ///
    /// # Errors
    /// Returns [`DiscrimError::Regex`] if the pattern is invalid.
    pub fn label_regex(&self) -> Result<Regex> {
        Ok(Regex::new(&self.input.label_pattern)?)
    }

    #[must_use]
    pub fn discrim_options(&self) -> DiscrimOptions {
        DiscrimOptions {
            drop_singletons: self.stats.drop_singletons,
            precomputed: false,
        }
    }

    /// Saves the current configuration to `dir/graphdiscrim.toml`.
    ///
    /// # Errors
    /// Returns error if file write fails.
    pub fn save(&self, dir: &Path) -> Result<()> {
        io::save_to_file(self, dir)
    }
}
