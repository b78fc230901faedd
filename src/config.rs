use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::errors::ScanError;

/// Thresholds for the optimization-opportunity flags raised per file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OpportunityThresholds {
    /// Flag "High number of functions" above this count
    #[serde(default = "default_max_functions")]
    pub max_functions: usize,

    /// Flag "Functions with high cyclomatic complexity" above this score
    #[serde(default = "default_high_complexity")]
    pub high_complexity: u32,

    /// Flag "High number of global variables" above this count
    #[serde(default = "default_max_globals")]
    pub max_globals: usize,
}

fn default_max_functions() -> usize {
    20
}

fn default_high_complexity() -> u32 {
    15
}

fn default_max_globals() -> usize {
    10
}

impl Default for OpportunityThresholds {
    fn default() -> Self {
        Self {
            max_functions: default_max_functions(),
            high_complexity: default_high_complexity(),
            max_globals: default_max_globals(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StructmapConfig {
    #[serde(default)]
    pub thresholds: OpportunityThresholds,
}

impl StructmapConfig {
    /// Load configuration for a scan rooted at `root`.
    ///
    /// An explicit `--config` path must exist and parse; otherwise a
    /// `structmap.toml` in the root is used when present, and defaults
    /// apply when it is not.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self, ScanError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join("structmap.toml");
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let raw = fs::read_to_string(&path).map_err(|e| ScanError::unreadable(&path, e))?;
        toml::from_str(&raw)
            .map_err(|e| ScanError::Configuration(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_thresholds() {
        let thresholds = OpportunityThresholds::default();
        assert_eq!(thresholds.max_functions, 20);
        assert_eq!(thresholds.high_complexity, 15);
        assert_eq!(thresholds.max_globals, 10);
    }

    #[test]
    fn partial_toml_falls_back_per_field() {
        let config: StructmapConfig =
            toml::from_str("[thresholds]\nmax_globals = 3\n").unwrap();
        assert_eq!(config.thresholds.max_globals, 3);
        assert_eq!(config.thresholds.max_functions, 20);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config =
            StructmapConfig::load(None, Path::new("/nonexistent/root")).unwrap();
        assert_eq!(config, StructmapConfig::default());
    }
}
