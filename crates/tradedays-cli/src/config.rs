//! CLI configuration.
//!
//! Settings come from an optional TOML file; command-line flags override
//! whatever the file says.
//!
//! ```toml
//! default_market = "LSE"
//! output_format = "json"
//! normalize = true
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tradedays_core::calendars::ProfileRegistry;
use tradedays_core::{HolidayProfile, Market};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Contents of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Market used when a command has no `--market`.
    pub default_market: Option<String>,
    /// Output format used when `--format` is not given.
    pub output_format: Option<OutputFormat>,
    /// Normalize offset results to midnight unless the flag says otherwise.
    pub normalize: bool,
}

impl CliConfig {
    /// Loads the config file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Effective settings after merging the config file with flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Default market.
    pub market: Market,
    /// Output format.
    pub format: OutputFormat,
    /// Default for offset normalization.
    pub normalize: bool,
}

impl Settings {
    /// Merges the config file with the `--format` flag.
    pub fn resolve(config: &CliConfig, format: Option<OutputFormat>) -> CliResult<Self> {
        let market = match &config.default_market {
            Some(name) => name.parse::<Market>()?,
            None => Market::default(),
        };
        Ok(Self {
            market,
            format: format.or(config.output_format).unwrap_or_default(),
            normalize: config.normalize,
        })
    }

    /// Looks up the holiday profile for `--market`, falling back to the
    /// default market.
    pub fn profile(&self, name: Option<&str>) -> CliResult<Arc<dyn HolidayProfile>> {
        match name {
            Some(name) => Ok(ProfileRegistry::global().resolve(name)?),
            None => Ok(self.market.profile()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = CliConfig::load(None).unwrap();
        let settings = Settings::resolve(&config, None).unwrap();
        assert_eq!(settings.market, Market::Nyse);
        assert_eq!(settings.format, OutputFormat::Table);
        assert!(!settings.normalize);
    }

    #[test]
    fn test_parse_toml() {
        let config = CliConfig::from_toml(
            "default_market = \"lse\"\noutput_format = \"json\"\nnormalize = true\n",
        )
        .unwrap();
        let settings = Settings::resolve(&config, None).unwrap();
        assert_eq!(settings.market, Market::Lse);
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(settings.normalize);
    }

    #[test]
    fn test_flag_overrides_file() {
        let config = CliConfig {
            output_format: Some(OutputFormat::Json),
            ..CliConfig::default()
        };
        let settings = Settings::resolve(&config, Some(OutputFormat::Table)).unwrap();
        assert_eq!(settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_unknown_market_in_file() {
        let config = CliConfig {
            default_market: Some("NASDAQ".to_string()),
            ..CliConfig::default()
        };
        assert!(matches!(
            Settings::resolve(&config, None),
            Err(CliError::Calendar(_))
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(CliConfig::from_toml("colour = true").is_err());
    }

    #[test]
    fn test_profile_lookup() {
        let settings = Settings::resolve(&CliConfig::default(), None).unwrap();
        assert_eq!(settings.profile(None).unwrap().name(), "NYSE");
        assert_eq!(settings.profile(Some("tse")).unwrap().name(), "TSE");
        assert!(settings.profile(Some("XYZ")).is_err());
    }
}
