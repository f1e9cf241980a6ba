// src/config/vanishing_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

use crate::core::ring_context::RingContext;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VanishingConfig {
    /// Characteristic m of the coefficient ring Z/m
    pub modulus: u64,

    /// Number of ring variables
    pub variables: usize,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Result output format
    pub output_format: OutputFormat,

    /// Count and report the operations performed by each command
    pub instrumentation: bool,
}

impl Default for VanishingConfig {
    fn default() -> Self {
        VanishingConfig {
            modulus: 4,
            variables: 1,
            log_level: "info".to_string(),
            output_format: OutputFormat::Text,
            instrumentation: false,
        }
    }
}

impl VanishingConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // Try to load from config files (TOML preferred, YAML fallback)
        if Path::new("vanishing.toml").exists() {
            builder = builder.add_source(File::with_name("vanishing.toml"));
        } else if Path::new("vanishing.yaml").exists() {
            builder = builder.add_source(File::with_name("vanishing.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // Load from specified file
        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    /// The ring described by `modulus` and `variables`, validated.
    pub fn ring(&self) -> Result<RingContext, String> {
        if self.modulus < 2 {
            return Err(format!("The modulus must be at least 2, but it is {}.", self.modulus));
        }
        if self.variables < 1 {
            return Err("The ring needs at least one variable.".to_string());
        }
        Ok(RingContext::new(self.modulus, self.variables))
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("modulus", 4)?
            .set_default("variables", 1)?
            .set_default("log_level", "info")?
            .set_default("output_format", "text")?
            .set_default("instrumentation", false)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables (prefix: VANISHING_)
        let builder = builder.add_source(
            Environment::with_prefix("VANISHING")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = VanishingConfig::default();
        assert_eq!(config.modulus, 4);
        assert_eq!(config.variables, 1);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(!config.instrumentation);
        assert_eq!(config.ring(), Ok(RingContext::new(4, 1)));
    }

    #[test]
    fn test_load_without_file() {
        // A missing file leaves the defaults in place
        let path = std::env::temp_dir().join(format!("vanishing_config_missing_{}.toml", std::process::id()));
        let config = VanishingConfig::load_from_file(&path).unwrap();
        assert_eq!(config.modulus, 4);
        assert_eq!(config.variables, 1);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(!config.instrumentation);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("vanishing_config_test_{}.toml", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "modulus = 12\nvariables = 3\noutput_format = \"json\"").unwrap();
        }
        let config = VanishingConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.modulus, 12);
        assert_eq!(config.variables, 3);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_ring() {
        let config = VanishingConfig { modulus: 1, ..VanishingConfig::default() };
        assert!(config.ring().is_err());
    }
}
