pub mod commands;
pub mod output;
pub mod parser;

use std::collections::HashMap;

use crate::config::yaml::YamlConfig;

#[derive(Debug, Clone, Default)]
pub struct CliContext {
    /// Full argument vector after `munge`
    pub raw: Vec<String>,
    /// Command to run (e.g. "generate", "estimate")
    pub command: Option<String>,
    /// Positional arguments beyond the command
    pub args: Vec<String>,
    /// Parsed flags (`--flag=value`, `-f value`, etc.)
    pub flags: HashMap<String, String>,
    /// Optional .munge.yaml loaded from the working directory
    pub config: Option<YamlConfig>,
}

impl CliContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_flag(&self, key: &str) -> Option<&String> {
        self.flags.get(key)
    }

    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains_key(key)
    }

    pub fn get_flag_or(&self, key: &str, default: &str) -> String {
        self.flags
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// First matching flag among long and short spellings.
    pub fn flag_any(&self, keys: &[&str]) -> Option<&String> {
        keys.iter().find_map(|k| self.flags.get(*k))
    }
}
