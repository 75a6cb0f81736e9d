use std::fmt;
use std::str::FromStr;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// Difficulty mode of an analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    /// Every qualifying clause root is quizzed
    #[default]
    Full,
    /// One root per sentence, for beginners
    Core,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Full => "FULL",
            Mode::Core => "CORE",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FULL" => Ok(Mode::Full),
            "CORE" => Ok(Mode::Core),
            other => Err(anyhow!("Unknown mode '{}' (expected FULL or CORE)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!("FULL".parse::<Mode>().unwrap(), Mode::Full);
        assert_eq!(" core ".parse::<Mode>().unwrap(), Mode::Core);
        assert!("EASY".parse::<Mode>().is_err());
        assert_eq!(Mode::default(), Mode::Full);
    }

    #[test]
    fn test_mode_serde() {
        assert_eq!(serde_json::to_string(&Mode::Core).unwrap(), "\"CORE\"");
        let mode: Mode = serde_json::from_str("\"FULL\"").unwrap();
        assert_eq!(mode, Mode::Full);
        assert_eq!(Mode::Core.to_string(), "CORE");
    }
}
