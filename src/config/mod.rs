/// Configuration management for munge
pub mod yaml;

pub use yaml::YamlConfig;

use std::sync::OnceLock;

use crate::modules::munge::MungeLevel;

#[derive(Debug, Clone)]
pub struct MungeConfig {
    // Global settings
    pub verbose: bool,
    pub no_color: bool,

    // Generation defaults, overridable per run by flags
    pub level: i64,
    /// 0 means "size the pool from available CPUs"
    pub threads: usize,
    pub output_file: Option<String>,
}

impl Default for MungeConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            no_color: false,
            level: MungeLevel::DEFAULT.as_number() as i64,
            threads: 0,
            output_file: None,
        }
    }
}

impl MungeConfig {
    /// Build the effective config: defaults overlaid with .munge.yaml.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(file) = YamlConfig::load_from_cwd() {
            if let Some(verbose) = file.verbose {
                config.verbose = verbose;
            }
            if let Some(no_color) = file.no_color {
                config.no_color = no_color;
            }
            if let Some(level) = file.level {
                config.level = level;
            }
            if let Some(threads) = file.threads {
                config.threads = threads;
            }
            if file.output.is_some() {
                config.output_file = file.output;
            }
        }

        config
    }

    /// Worker pool size: configured value, or one worker per CPU.
    pub fn worker_count(&self) -> usize {
        if self.threads > 0 {
            self.threads
        } else {
            num_cpus::get().max(1)
        }
    }
}

static GLOBAL_CONFIG: OnceLock<MungeConfig> = OnceLock::new();

/// Initialize and return the global configuration (idempotent).
pub fn init() -> &'static MungeConfig {
    GLOBAL_CONFIG.get_or_init(MungeConfig::load)
}

/// Access the global configuration, initializing on first use.
pub fn get() -> &'static MungeConfig {
    init()
}
