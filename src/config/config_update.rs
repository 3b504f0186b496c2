//! Configuration update and merging.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::config_data::{Config, WeaveConfig};
use super::unterminated::UnterminatedPolicy;

/// Partial configuration update that can be merged into a Config.
///
/// All fields are optional. Only specified fields override the base config,
/// which is how a config file and command-line flags layer over the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigUpdate {
    #[serde(default)]
    pub source_patterns: Option<Vec<String>>,

    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    #[serde(default)]
    pub unterminated: Option<UnterminatedPolicy>,

    #[serde(default)]
    pub weave: Option<WeaveConfig>,

    /// Keys this version does not know about.
    #[serde(default, flatten)]
    pub extra: std::collections::HashMap<String, toml::Value>,
}

impl ConfigUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges this update into a base configuration, returning a new Config.
    pub fn merge_into(self, base: &Config) -> Config {
        let mut extra = base.extra.clone();
        extra.extend(self.extra);

        Config {
            source_patterns: self
                .source_patterns
                .unwrap_or_else(|| base.source_patterns.clone()),
            output_dir: self.output_dir.or_else(|| base.output_dir.clone()),
            unterminated: self.unterminated.unwrap_or(base.unterminated),
            weave: self.weave.unwrap_or_else(|| base.weave.clone()),
            extra,
        }
    }
}

impl From<ConfigUpdate> for Config {
    fn from(update: ConfigUpdate) -> Self {
        update.merge_into(&Config::default())
    }
}
