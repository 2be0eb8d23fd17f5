// YAML config reader - ZERO external dependencies!
// Implements a minimal flat parser for .munge.yaml

use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = ".munge.yaml";

/// Parsed configuration from .munge.yaml
#[derive(Debug, Clone, Default)]
pub struct YamlConfig {
    // Global flags (apply to all commands)
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,

    // Generation defaults
    pub level: Option<i64>,
    pub threads: Option<usize>,
    pub output: Option<String>,

    // Custom/unknown fields
    pub custom: HashMap<String, String>,
}

impl YamlConfig {
    /// Load config from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config: {}", e))?;
        Ok(Self::parse(&content))
    }

    /// Load `.munge.yaml` from the current directory, if present
    pub fn load_from_cwd() -> Option<Self> {
        let path = Path::new(CONFIG_FILENAME);
        if !path.exists() {
            return None;
        }
        match Self::load(path) {
            Ok(config) => Some(config),
            Err(e) => {
                crate::warn!("Ignoring {}: {}", CONFIG_FILENAME, e);
                None
            }
        }
    }

    /// Parse flat `key: value` lines. Supports comments, blank lines and
    /// single/double quoted scalars. Nested blocks are not supported.
    pub fn parse(content: &str) -> Self {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = match line.split_once(':') {
                Some((k, v)) => (k.trim(), Self::unquote(v.trim())),
                None => continue,
            };
            if value.is_empty() {
                continue;
            }

            match key {
                "verbose" => config.verbose = Self::parse_bool(&value),
                "no_color" => config.no_color = Self::parse_bool(&value),
                "level" => config.level = value.parse().ok(),
                "threads" => config.threads = value.parse().ok(),
                "output" => config.output = Some(value),
                _ => {
                    config.custom.insert(key.to_string(), value);
                }
            }
        }

        config
    }

    fn unquote(value: &str) -> String {
        let value = value
            .split_once(" #")
            .map(|(v, _)| v.trim_end())
            .unwrap_or(value);
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            value[1..value.len() - 1].to_string()
        } else {
            value.to_string()
        }
    }

    fn parse_bool(value: &str) -> Option<bool> {
        match value {
            "true" | "yes" | "on" => Some(true),
            "false" | "no" | "off" => Some(false),
            _ => None,
        }
    }
}
