//! Loading configuration from files, strings and the environment.

use std::path::Path;

use crate::config::schema::{GraphwalkConfig, Strategy};
use crate::error::{GraphError, Result};

/// Overrides `search.strategy`.
pub const ENV_STRATEGY: &str = "GRAPHWALK_STRATEGY";
/// Overrides `search.max_depth`; `none` or an empty value clears it.
pub const ENV_MAX_DEPTH: &str = "GRAPHWALK_MAX_DEPTH";
/// Overrides `build.undirected`.
pub const ENV_UNDIRECTED: &str = "GRAPHWALK_UNDIRECTED";

impl GraphwalkConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s)
            .map_err(|e| GraphError::Config(format!("Failed to parse YAML config: {e}")))
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s)
            .map_err(|e| GraphError::Config(format!("Failed to parse JSON config: {e}")))
    }

    /// Load a config file. `.json` files are read as JSON, everything else
    /// as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GraphError::Config(format!(
                "No config found at {}",
                path.display()
            )));
        }
        let contents = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&contents)?,
            _ => Self::from_yaml_str(&contents)?,
        };
        tracing::debug!(path = %path.display(), strategy = %config.search.strategy, "loaded config");
        Ok(config)
    }

    /// Apply `GRAPHWALK_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        let vars = [ENV_STRATEGY, ENV_MAX_DEPTH, ENV_UNDIRECTED]
            .into_iter()
            .filter_map(|key| std::env::var(key).ok().map(|value| (key, value)));
        self.apply_overrides(vars)
    }

    /// Apply `(name, value)` overrides. Unrecognised names are ignored.
    pub fn apply_overrides<I, K, V>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let value = value.as_ref().trim();
            match key.as_ref() {
                ENV_STRATEGY => {
                    self.search.strategy = Strategy::from_str_loose(value).ok_or_else(|| {
                        GraphError::Config(format!("Unknown strategy `{value}` in {ENV_STRATEGY}"))
                    })?;
                }
                ENV_MAX_DEPTH => {
                    self.search.max_depth = parse_max_depth(value)?;
                }
                ENV_UNDIRECTED => {
                    self.build.undirected = parse_bool(value)?;
                }
                _ => {}
            }
        }
        Ok(())
    }
}

fn parse_max_depth(value: &str) -> Result<Option<u32>> {
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    value
        .parse::<u32>()
        .map(Some)
        .map_err(|e| GraphError::Config(format!("Invalid {ENV_MAX_DEPTH} `{value}`: {e}")))
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(GraphError::Config(format!(
            "Invalid {ENV_UNDIRECTED} `{value}`: expected a boolean"
        ))),
    }
}
