//! Configuration file parsing and management.
//!
//! This module handles loading configuration from TOML files and merging
//! configurations with proper precedence rules. The historical tool kept a
//! process-wide logger and hardwired file names; here every setting is an
//! explicit value so independent runs and tests don't interfere.

use crate::error::DomainHackError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration loaded from TOML files.
///
/// This represents the structure of configuration files that users can
/// create to set default values:
///
/// ```toml
/// [defaults]
/// length_min = 4
/// length_max = 6
/// delay = 2.0
/// timeout = "1s"
/// wordlist = "dictionary.txt"
/// tld_file = "top-level-domains.txt"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Default values for CLI options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

/// Default configuration values that map to CLI options.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Minimum word length for candidate generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_min: Option<usize>,

    /// Maximum word length for candidate generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_max: Option<usize>,

    /// Pause between lookups, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,

    /// Per-lookup timeout (as string, e.g., "1s", "30s")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,

    /// Default wordlist file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wordlist: Option<String>,

    /// Default TLD list file (IANA format)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tld_file: Option<String>,

    /// Default report log file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,

    /// Default pretty output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,

    /// Default JSON output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
}

/// Configuration discovery and loading functionality.
pub struct ConfigManager {
    /// Whether to emit warnings for config issues
    pub verbose: bool,
}

impl ConfigManager {
    /// Create a new configuration manager.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Load configuration from a specific file.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<FileConfig, DomainHackError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DomainHackError::file_error(
                path.to_string_lossy(),
                "Configuration file not found",
            ));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            DomainHackError::file_error(
                path.to_string_lossy(),
                format!("Failed to read configuration file: {}", e),
            )
        })?;

        let config: FileConfig = toml::from_str(&content).map_err(|e| {
            DomainHackError::config(format!("Failed to parse TOML configuration: {}", e))
        })?;

        // Validate the loaded configuration
        self.validate_config(&config)?;

        Ok(config)
    }

    /// Discover and load configuration files in precedence order.
    ///
    /// Looks for configuration files in standard locations and merges them,
    /// later (more local) files winning over earlier ones.
    pub fn discover_and_load(&self) -> Result<FileConfig, DomainHackError> {
        let mut merged_config = FileConfig::default();
        let mut loaded_files = Vec::new();

        // 1. Load XDG config (lowest precedence)
        if let Some(xdg_path) = self.get_xdg_config_path() {
            if let Ok(config) = self.load_file(&xdg_path) {
                merged_config = self.merge_configs(merged_config, config);
                loaded_files.push(xdg_path);
            }
        }

        // 2. Load global config
        if let Some(global_path) = self.get_global_config_path() {
            if let Ok(config) = self.load_file(&global_path) {
                merged_config = self.merge_configs(merged_config, config);
                loaded_files.push(global_path);
            }
        }

        // 3. Load local config (highest precedence)
        if let Some(local_path) = self.get_local_config_path() {
            if let Ok(config) = self.load_file(&local_path) {
                merged_config = self.merge_configs(merged_config, config);
                loaded_files.push(local_path);
            }
        }

        // Warn about multiple config files if verbose
        if self.verbose && loaded_files.len() > 1 {
            eprintln!("⚠️  Multiple config files found. Using precedence:");
            for (i, path) in loaded_files.iter().enumerate() {
                let status = if i == loaded_files.len() - 1 {
                    "active"
                } else {
                    "overridden"
                };
                eprintln!("   {} ({})", path.display(), status);
            }
        }

        Ok(merged_config)
    }

    /// Get the local configuration file path.
    ///
    /// Looks for configuration files in the current directory.
    fn get_local_config_path(&self) -> Option<PathBuf> {
        let candidates = ["./domain-hack.toml", "./.domain-hack.toml"];

        for candidate in &candidates {
            let path = Path::new(candidate);
            if path.exists() {
                return Some(path.to_path_buf());
            }
        }

        None
    }

    /// Get the global configuration file path.
    ///
    /// Looks for configuration files in the user's home directory.
    fn get_global_config_path(&self) -> Option<PathBuf> {
        if let Some(home) = env::var_os("HOME") {
            let candidates = [".domain-hack.toml", "domain-hack.toml"];

            for candidate in &candidates {
                let path = Path::new(&home).join(candidate);
                if path.exists() {
                    return Some(path);
                }
            }
        }

        None
    }

    /// Get the XDG configuration file path.
    ///
    /// Follows the XDG Base Directory Specification.
    fn get_xdg_config_path(&self) -> Option<PathBuf> {
        let config_dir = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| env::var_os("HOME").map(|home| Path::new(&home).join(".config")))?;

        let path = config_dir.join("domain-hack").join("config.toml");
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// Merge two configurations with proper precedence.
    ///
    /// Values from `higher` take precedence over values from `lower`.
    fn merge_configs(&self, lower: FileConfig, higher: FileConfig) -> FileConfig {
        FileConfig {
            defaults: match (lower.defaults, higher.defaults) {
                (Some(lower_defaults), Some(higher_defaults)) => Some(DefaultsConfig {
                    length_min: higher_defaults.length_min.or(lower_defaults.length_min),
                    length_max: higher_defaults.length_max.or(lower_defaults.length_max),
                    delay: higher_defaults.delay.or(lower_defaults.delay),
                    timeout: higher_defaults.timeout.or(lower_defaults.timeout),
                    wordlist: higher_defaults.wordlist.or(lower_defaults.wordlist),
                    tld_file: higher_defaults.tld_file.or(lower_defaults.tld_file),
                    log_file: higher_defaults.log_file.or(lower_defaults.log_file),
                    pretty: higher_defaults.pretty.or(lower_defaults.pretty),
                    json: higher_defaults.json.or(lower_defaults.json),
                }),
                (None, Some(higher_defaults)) => Some(higher_defaults),
                (Some(lower_defaults), None) => Some(lower_defaults),
                (None, None) => None,
            },
        }
    }

    /// Validate a configuration for common issues.
    fn validate_config(&self, config: &FileConfig) -> Result<(), DomainHackError> {
        if let Some(defaults) = &config.defaults {
            if let Some(length_min) = defaults.length_min {
                if length_min == 0 {
                    return Err(DomainHackError::config("length_min must be at least 1"));
                }
            }

            if let (Some(length_min), Some(length_max)) = (defaults.length_min, defaults.length_max)
            {
                if length_min > length_max {
                    return Err(DomainHackError::config(format!(
                        "length_min ({}) cannot exceed length_max ({})",
                        length_min, length_max
                    )));
                }
            }

            if let Some(delay) = defaults.delay {
                if delay < 0.0 || !delay.is_finite() {
                    return Err(DomainHackError::config(
                        "delay must be a non-negative number of seconds",
                    ));
                }
            }

            // Validate timeout format
            if let Some(timeout_str) = &defaults.timeout {
                match parse_timeout_string(timeout_str) {
                    Some(secs) if secs > 0 => {}
                    Some(_) => {
                        return Err(DomainHackError::config("timeout must be positive"));
                    }
                    None => {
                        return Err(DomainHackError::config(format!(
                            "Invalid timeout format '{}'. Use format like '1s', '30s', '2m'",
                            timeout_str
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

/// Environment variable configuration that mirrors CLI options.
///
/// This represents configuration values that can be set via DH_* environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub length_min: Option<usize>,
    pub length_max: Option<usize>,
    pub delay: Option<f64>,
    pub timeout: Option<String>,
    pub wordlist: Option<String>,
    pub tld_file: Option<String>,
    pub log_file: Option<String>,
    pub json: Option<bool>,
    pub pretty: Option<bool>,
    pub config: Option<String>,
}

/// Load configuration from environment variables.
///
/// Parses all DH_* environment variables and returns a structured
/// configuration. Invalid values are logged as warnings and ignored.
pub fn load_env_config(verbose: bool) -> EnvConfig {
    let mut env_config = EnvConfig::default();

    // DH_MIN / DH_MAX - word length bounds
    if let Ok(val) = env::var("DH_MIN") {
        match val.parse::<usize>() {
            Ok(length_min) if length_min > 0 => {
                env_config.length_min = Some(length_min);
                if verbose {
                    println!("🔧 Using DH_MIN={}", length_min);
                }
            }
            _ => {
                if verbose {
                    eprintln!("⚠️ Invalid DH_MIN='{}', must be a positive integer", val);
                }
            }
        }
    }

    if let Ok(val) = env::var("DH_MAX") {
        match val.parse::<usize>() {
            Ok(length_max) if length_max > 0 => {
                env_config.length_max = Some(length_max);
                if verbose {
                    println!("🔧 Using DH_MAX={}", length_max);
                }
            }
            _ => {
                if verbose {
                    eprintln!("⚠️ Invalid DH_MAX='{}', must be a positive integer", val);
                }
            }
        }
    }

    // DH_DELAY - pause between lookups, in seconds
    if let Ok(val) = env::var("DH_DELAY") {
        match val.parse::<f64>() {
            Ok(delay) if delay >= 0.0 && delay.is_finite() => {
                env_config.delay = Some(delay);
                if verbose {
                    println!("🔧 Using DH_DELAY={}", delay);
                }
            }
            _ => {
                if verbose {
                    eprintln!("⚠️ Invalid DH_DELAY='{}', must be non-negative seconds", val);
                }
            }
        }
    }

    // DH_TIMEOUT - per-lookup timeout
    if let Ok(timeout_str) = env::var("DH_TIMEOUT") {
        if parse_timeout_string(&timeout_str).is_some() {
            env_config.timeout = Some(timeout_str.clone());
            if verbose {
                println!("🔧 Using DH_TIMEOUT={}", timeout_str);
            }
        } else if verbose {
            eprintln!(
                "⚠️ Invalid DH_TIMEOUT='{}', use format like '1s', '30s', '2m'",
                timeout_str
            );
        }
    }

    // DH_WORDLIST - default wordlist file
    if let Ok(path) = env::var("DH_WORDLIST") {
        if !path.trim().is_empty() {
            env_config.wordlist = Some(path.clone());
            if verbose {
                println!("🔧 Using DH_WORDLIST={}", path);
            }
        }
    }

    // DH_TLD_FILE - default TLD list file
    if let Ok(path) = env::var("DH_TLD_FILE") {
        if !path.trim().is_empty() {
            env_config.tld_file = Some(path.clone());
            if verbose {
                println!("🔧 Using DH_TLD_FILE={}", path);
            }
        }
    }

    // DH_LOG_FILE - default report log file
    if let Ok(path) = env::var("DH_LOG_FILE") {
        if !path.trim().is_empty() {
            env_config.log_file = Some(path.clone());
            if verbose {
                println!("🔧 Using DH_LOG_FILE={}", path);
            }
        }
    }

    // DH_JSON - enable JSON output
    if let Ok(val) = env::var("DH_JSON") {
        match parse_bool_value(&val) {
            Some(enabled) => {
                env_config.json = Some(enabled);
                if verbose {
                    println!("🔧 Using DH_JSON={}", enabled);
                }
            }
            None => {
                if verbose {
                    eprintln!("⚠️ Invalid DH_JSON='{}', use true/false", val);
                }
            }
        }
    }

    // DH_PRETTY - enable pretty output
    if let Ok(val) = env::var("DH_PRETTY") {
        match parse_bool_value(&val) {
            Some(enabled) => {
                env_config.pretty = Some(enabled);
                if verbose {
                    println!("🔧 Using DH_PRETTY={}", enabled);
                }
            }
            None => {
                if verbose {
                    eprintln!("⚠️ Invalid DH_PRETTY='{}', use true/false", val);
                }
            }
        }
    }

    // DH_CONFIG - explicit config file
    if let Ok(config_path) = env::var("DH_CONFIG") {
        if !config_path.trim().is_empty() {
            env_config.config = Some(config_path.clone());
            if verbose {
                println!("🔧 Using DH_CONFIG={}", config_path);
            }
        }
    }

    env_config
}

impl EnvConfig {
    /// Check if output format conflicts exist (JSON and pretty both set).
    pub fn has_output_format_conflict(&self) -> bool {
        matches!((self.json, self.pretty), (Some(true), Some(true)))
    }
}

/// Parse a boolean-ish environment value.
fn parse_bool_value(val: &str) -> Option<bool> {
    match val.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a timeout string like "1s", "30s", "2m" into seconds.
///
/// Returns the number of seconds, or None if parsing fails.
pub fn parse_timeout_string(timeout_str: &str) -> Option<u64> {
    let timeout_str = timeout_str.trim().to_lowercase();

    if timeout_str.ends_with('s') {
        timeout_str
            .strip_suffix('s')
            .and_then(|s| s.parse::<u64>().ok())
    } else if timeout_str.ends_with('m') {
        timeout_str
            .strip_suffix('m')
            .and_then(|s| s.parse::<u64>().ok())
            .map(|m| m * 60)
    } else {
        // Assume seconds if no unit
        timeout_str.parse::<u64>().ok()
    }
}
