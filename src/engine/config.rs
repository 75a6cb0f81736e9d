//! Analyzer configuration loaded from YAML

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Result, anyhow};
use serde::Deserialize;

use crate::engine::constants::{DEFAULT_MAX_PASSAGE_CHARS, DEFAULT_MODEL};
use crate::engine::rules::RuleOverrides;
use crate::types::Mode;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Model name reported when parsed documents do not name one
    pub model_name: String,
    pub default_mode: Mode,
    /// Upper bound applied by callers before analysis
    pub max_passage_chars: usize,
    /// Where unresolved subjects are appended, if anywhere
    pub failure_log: Option<PathBuf>,
    pub rules: RuleOverrides,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL.to_string(),
            default_mode: Mode::default(),
            max_passage_chars: DEFAULT_MAX_PASSAGE_CHARS,
            failure_log: None,
            rules: RuleOverrides::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Reject passages longer than `max_passage_chars` characters
    pub fn check_passage(&self, passage: &str) -> Result<()> {
        let length = passage.chars().count();
        if length > self.max_passage_chars {
            return Err(anyhow!(
                "Passage is too long ({} chars, max {})",
                length, self.max_passage_chars
            ));
        }
        Ok(())
    }
}

/// Load analyzer configuration from a YAML file
pub fn load_config_from_yaml<P: AsRef<Path>>(config_path: P) -> Result<AnalyzerConfig> {
    let path = config_path.as_ref();

    if !path.exists() {
        return Err(anyhow!("Config file not found: {}", path.display()));
    }

    let yaml_str = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;

    let config: AnalyzerConfig = serde_yaml::from_str(&yaml_str)
        .map_err(|e| anyhow!("Invalid YAML config in {}: {}", path.display(), e))?;

    log::info!(
        "Config loaded: model '{}', default mode {}, max {} chars",
        config.model_name, config.default_mode, config.max_passage_chars
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use crate::engine::rules::RuleSet;

    #[test]
    fn test_load_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_mode: CORE\nmax_passage_chars: 50\nrules:\n  subject: \"^nsubj$\"").unwrap();

        let config = load_config_from_yaml(file.path()).unwrap();
        assert_eq!(config.default_mode, Mode::Core);
        assert_eq!(config.max_passage_chars, 50);
        assert_eq!(config.model_name, DEFAULT_MODEL);
        assert_eq!(config.rules.subject.as_deref(), Some("^nsubj$"));
        assert!(config.failure_log.is_none());
    }

    #[test]
    fn test_missing_and_invalid_config() {
        assert!(load_config_from_yaml("/nonexistent/analyzer.yaml").is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_mode: SOMETIMES").unwrap();
        let err = load_config_from_yaml(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid YAML config"));
    }

    #[test]
    fn test_shipped_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/analyzer.yaml");
        let config = load_config_from_yaml(path).unwrap();
        assert_eq!(config.default_mode, Mode::Full);
        assert_eq!(config.max_passage_chars, DEFAULT_MAX_PASSAGE_CHARS);
        assert!(RuleSet::with_overrides(&config.rules).is_ok());
    }

    #[test]
    fn test_check_passage() {
        let config = AnalyzerConfig { max_passage_chars: 5, ..Default::default() };
        assert!(config.check_passage("héllo").is_ok());
        assert!(config.check_passage("hello!").is_err());
        assert!(AnalyzerConfig::default().check_passage(&"a".repeat(2000)).is_ok());
    }
}
