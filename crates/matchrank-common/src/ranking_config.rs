//! Ranking configuration for the match pipeline.
//!
//! Callers can tune the input location, slot count, and export names via
//! TOML/YAML/JSON config files; every field has a sensible default so an
//! empty config is valid.

use serde::{Deserialize, Serialize};

use crate::error::{MatchrankError, Result};

/// Complete pipeline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Where the match table comes from
    #[serde(default)]
    pub input: InputConfig,

    /// Top-K selection options
    #[serde(default)]
    pub ranking: RankingOptions,

    /// Export file naming
    #[serde(default)]
    pub output: OutputConfig,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Input table location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Path to the match table CSV
    #[serde(default = "default_input_path")]
    pub path: String,
}

fn default_input_path() -> String {
    "data/matching_results.csv".to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

// ── Ranking ───────────────────────────────────────────────────────────────────

/// Top-K selection options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingOptions {
    /// Number of expert slots kept per candidate
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Seed used when relevancy scores must be synthesised
    #[serde(default = "default_score_seed")]
    pub score_seed: u64,
}

fn default_top_k() -> usize {
    5
}

fn default_score_seed() -> u64 {
    42
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            score_seed: default_score_seed(),
        }
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

/// Export file naming.
///
/// Templates substitute `{k}` with the slot count and `{candidate}` with
/// the candidate id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// File name template for a single candidate's export
    #[serde(default = "default_single_file_template")]
    pub single_file_template: String,

    /// File name template for the all-candidates wide export
    #[serde(default = "default_wide_file_name")]
    pub wide_file_name: String,
}

fn default_single_file_template() -> String {
    "top_{k}_experts_{candidate}.csv".to_string()
}

fn default_wide_file_name() -> String {
    "all_candidates_with_top_{k}_experts.csv".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            single_file_template: default_single_file_template(),
            wide_file_name: default_wide_file_name(),
        }
    }
}

// ── Helper Methods ─────────────────────────────────────────────────────────────

impl RankingConfig {
    /// Load from a TOML file
    pub fn from_toml(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from a YAML file
    pub fn from_yaml(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn from_json(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load from any supported file, dispatching on the extension.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        match path.rsplit('.').next() {
            Some("toml") => Self::from_toml(path),
            Some("yaml") | Some("yml") => Self::from_yaml(path),
            Some("json") => Self::from_json(path),
            other => anyhow::bail!("Unsupported config extension: {:?}", other),
        }
    }

    /// Reject configurations the pipeline cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.ranking.top_k == 0 {
            return Err(MatchrankError::Config(
                "ranking.top_k must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Export file name for a single candidate.
    pub fn single_export_name(&self, candidate_id: &str) -> String {
        self.output
            .single_file_template
            .replace("{k}", &self.ranking.top_k.to_string())
            .replace("{candidate}", candidate_id)
    }

    /// Export file name for the wide all-candidates table.
    pub fn wide_export_name(&self) -> String {
        self.output
            .wide_file_name
            .replace("{k}", &self.ranking.top_k.to_string())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RankingConfig::default();
        assert_eq!(config.ranking.top_k, 5);
        assert_eq!(config.ranking.score_seed, 42);
        assert_eq!(config.input.path, "data/matching_results.csv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_top_k_rejected() {
        let mut config = RankingConfig::default();
        config.ranking.top_k = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_export_names() {
        let config = RankingConfig::default();
        assert_eq!(config.single_export_name("C1"), "top_5_experts_C1.csv");
        assert_eq!(
            config.wide_export_name(),
            "all_candidates_with_top_5_experts.csv"
        );
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = RankingConfig::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: RankingConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config.ranking.top_k, parsed.ranking.top_k);
        assert_eq!(config.output.wide_file_name, parsed.output.wide_file_name);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: RankingConfig = toml::from_str("[ranking]\ntop_k = 3\n").unwrap();
        assert_eq!(parsed.ranking.top_k, 3);
        assert_eq!(parsed.ranking.score_seed, 42);
        assert_eq!(parsed.input.path, "data/matching_results.csv");
    }
}
