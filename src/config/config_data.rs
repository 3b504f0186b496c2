//! Configuration data structures.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::markers::WeaveMarkers;
use super::unterminated::UnterminatedPolicy;

/// Main configuration structure for noweb.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Glob patterns for documents processed when none are named.
    #[serde(default = "default_source_patterns")]
    pub source_patterns: Vec<String>,

    /// Directory for tangled and woven files. Defaults to each document's directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// What to do with a chunk still open at the end of a document.
    #[serde(default)]
    pub unterminated: UnterminatedPolicy,

    /// Weave output settings.
    #[serde(default)]
    pub weave: WeaveConfig,

    /// Additional custom settings.
    #[serde(default, flatten)]
    pub extra: HashMap<String, toml::Value>,
}

fn default_source_patterns() -> Vec<String> {
    vec!["**/*.nw".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_patterns: default_source_patterns(),
            output_dir: None,
            unterminated: UnterminatedPolicy::default(),
            weave: WeaveConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl Config {
    /// Returns the output directory, if configured.
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }
}

/// Weave output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaveConfig {
    /// Extension of the woven document, replacing the source extension.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Markers placed around each chunk body.
    #[serde(flatten)]
    pub markers: WeaveMarkers,
}

fn default_extension() -> String {
    "html".to_string()
}

impl Default for WeaveConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            markers: WeaveMarkers::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source_patterns, vec!["**/*.nw"]);
        assert!(config.output_dir().is_none());
        assert_eq!(config.unterminated, UnterminatedPolicy::Close);
        assert_eq!(config.weave.extension, "html");
    }

    #[test]
    fn test_weave_section() {
        let config: Config = toml::from_str(
            r#"
[weave]
extension = "md"
begin = "```{name}"
end = "```"
"#,
        )
        .unwrap();

        assert_eq!(config.weave.extension, "md");
        assert_eq!(config.weave.markers, WeaveMarkers::new("```{name}", "```"));
        assert_eq!(config.source_patterns, vec!["**/*.nw"]);
    }

    #[test]
    fn test_extra_keys_preserved() {
        let config: Config = toml::from_str("author = \"knuth\"").unwrap();
        assert_eq!(
            config.extra.get("author"),
            Some(&toml::Value::String("knuth".to_string()))
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut config = Config::default();
        config.output_dir = Some(PathBuf::from("build"));
        config.unterminated = UnterminatedPolicy::Error;

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.output_dir, config.output_dir);
        assert_eq!(parsed.unterminated, UnterminatedPolicy::Error);
        assert_eq!(parsed.weave, config.weave);
    }
}
