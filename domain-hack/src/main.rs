//! Domain Hack CLI Application
//!
//! A command-line interface for discovering domain hacks in a wordlist and
//! checking their registration status over WHOIS. This CLI application
//! provides a user-friendly interface to the domain-hack-lib library.

mod report;
mod ui;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use domain_hack_lib::{
    builtin_tlds, generate, load_env_config, parse_timeout_string, parse_tld_list, parse_wordlist,
    CandidateDomain, CheckConfig, CheckResult, ConfigManager, EnvConfig, FileConfig, HackChecker,
};
use futures::StreamExt;
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// CLI arguments for domain-hack
#[derive(Parser, Debug)]
#[command(name = "domain-hack")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Sai Dutt G.V <gvs46@protonmail.com>")]
#[command(about = "Find domain hacks in a wordlist and check their availability over WHOIS")]
#[command(
    long_about = "Find domain hacks (words whose suffix spells a valid TLD, like \"cathode\" -> catho.de) in a wordlist, then check each candidate's registration status over WHOIS.\n\nLookups are strictly serialized and paced with a constant delay to respect registry rate limits."
)]
#[command(styles = STYLES)]
pub struct Args {
    /// Minimum length of a word to consider [default: 4]
    #[arg(value_name = "MIN", help_heading = "Candidate Selection")]
    pub min: Option<usize>,

    /// Maximum length of a word to consider [default: 5]
    #[arg(value_name = "MAX", help_heading = "Candidate Selection")]
    pub max: Option<usize>,

    /// TLD to match, or "any" to try the whole TLD set [default: any]
    #[arg(
        short = 't',
        long = "tld",
        value_name = "TLD",
        help_heading = "Candidate Selection"
    )]
    pub tld: Option<String>,

    /// Wordlist file, one word per line [default: dictionary.txt]
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        help_heading = "Candidate Selection"
    )]
    pub file: Option<String>,

    /// TLD list file in IANA format (falls back to the built-in set)
    #[arg(long = "tld-file", value_name = "FILE", help_heading = "Candidate Selection")]
    pub tld_file: Option<String>,

    /// Seconds to pause between lookups [default: 2]
    #[arg(short = 'd', long = "delay", value_name = "SECS", help_heading = "Pacing")]
    pub delay: Option<f64>,

    /// Per-lookup timeout, e.g. "1s" or "2m" [default: 1s]
    #[arg(long = "timeout", value_name = "DURATION", help_heading = "Pacing")]
    pub timeout: Option<String>,

    /// Preview candidates without checking availability
    #[arg(long = "dry-run", help_heading = "Output Format")]
    pub dry_run: bool,

    /// Output results as a JSON array
    #[arg(short = 'j', long = "json", help_heading = "Output Format")]
    pub json: bool,

    /// Styled output with a header and padded status columns
    #[arg(short = 'p', long = "pretty", help_heading = "Output Format")]
    pub pretty: bool,

    /// Append availability results to this report file
    #[arg(long = "log-file", value_name = "FILE", help_heading = "Output Format")]
    pub log_file: Option<String>,

    /// Use specific config file instead of automatic discovery
    #[arg(long = "config", value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Show per-lookup debug details
    #[arg(long = "debug", help_heading = "Configuration")]
    pub debug: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose", help_heading = "Configuration")]
    pub verbose: bool,
}

/// Fully resolved run settings after merging CLI args, environment
/// variables, and config files.
#[derive(Debug, Clone)]
pub(crate) struct RunOptions {
    pub(crate) wordlist: String,
    pub(crate) tld: String,
    pub(crate) tld_file: Option<String>,
    pub(crate) log_file: Option<String>,
    pub(crate) json: bool,
    pub(crate) pretty: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            wordlist: "dictionary.txt".to_string(),
            tld: "any".to_string(),
            tld_file: None,
            log_file: None,
            json: false,
            pretty: false,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    init_tracing(&args);

    // Validate arguments
    if let Err(e) = validate_args(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    // Run the domain-hack hunt
    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Initialize the tracing subscriber.
///
/// RUST_LOG wins when set; otherwise --debug/-v pick the default level.
fn init_tracing(args: &Args) {
    let default_level = if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Validate command line arguments
fn validate_args(args: &Args) -> Result<(), String> {
    if let Some(min) = args.min {
        if min == 0 {
            return Err("Minimum length must be at least 1".to_string());
        }
    }

    if let (Some(min), Some(max)) = (args.min, args.max) {
        if min > max {
            return Err(format!(
                "Minimum length ({}) cannot exceed maximum length ({})",
                min, max
            ));
        }
    }

    if let Some(delay) = args.delay {
        if delay < 0.0 || !delay.is_finite() {
            return Err("Delay must be a non-negative number of seconds".to_string());
        }
    }

    if let Some(timeout_str) = &args.timeout {
        match parse_timeout_string(timeout_str) {
            Some(secs) if secs > 0 => {}
            Some(_) => return Err("Timeout must be positive".to_string()),
            None => {
                return Err(format!(
                    "Invalid timeout '{}'. Use format like '1s', '30s', '2m'",
                    timeout_str
                ))
            }
        }
    }

    // Can't have multiple output formats
    if args.json && args.pretty {
        return Err("Cannot specify both --json and --pretty output".to_string());
    }

    Ok(())
}

/// Main candidate generation and checking logic
async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Build configuration from CLI args, environment, and config files
    let (config, opts) = build_config(&args)?;

    // Load the wordlist
    let wordlist_content = std::fs::read_to_string(&opts.wordlist)
        .map_err(|e| format!("Failed to read wordlist '{}': {}", opts.wordlist, e))?;
    let words = parse_wordlist(&wordlist_content);
    if words.is_empty() {
        return Err(format!("No words found in '{}'", opts.wordlist).into());
    }

    // Resolve the TLD set
    let tlds = resolve_tlds(&opts)?;

    tracing::info!(
        words = words.len(),
        tlds = tlds.len(),
        length_min = config.length_min,
        length_max = config.length_max,
        "inputs loaded"
    );

    // Generate candidates across the whole wordlist
    let candidates = generate_candidates(&words, &tlds, &config, &opts);
    if candidates.is_empty() {
        if opts.json {
            println!("[]");
        } else {
            println!("No domain hacks found for the given bounds and TLD set.");
        }
        return Ok(());
    }

    // Dry-run: print candidates and exit without checking
    if args.dry_run {
        if opts.json {
            println!("{}", serde_json::to_string_pretty(&candidates)?);
        } else {
            for candidate in &candidates {
                println!("{}", candidate);
            }
        }
        eprintln!("{} domains would be checked", candidates.len());
        return Ok(());
    }

    run_check(&candidates, config, &opts, &args).await
}

/// Resolve the TLD set from the run options.
///
/// A specific `--tld` wins; otherwise the TLD file is parsed; otherwise
/// the built-in set is used.
fn resolve_tlds(opts: &RunOptions) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    if opts.tld != "any" {
        let tld = opts.tld.trim().trim_start_matches('.').to_lowercase();
        if tld.is_empty() {
            return Err("TLD cannot be empty".into());
        }
        return Ok(vec![tld]);
    }

    match &opts.tld_file {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read TLD list '{}': {}", path, e))?;
            let tlds = parse_tld_list(&content);
            if tlds.is_empty() {
                return Err(format!("No TLDs found in '{}'", path).into());
            }
            Ok(tlds)
        }
        None => Ok(builtin_tlds()),
    }
}

/// Generate candidates for the whole wordlist, with a progress bar when
/// the terminal allows it.
///
/// Degenerate candidates (the TLD matched the entire word, leaving an
/// empty label) come out of the generator per its contract but are not
/// registrable domains, so they are filtered here.
fn generate_candidates(
    words: &[String],
    tlds: &[String],
    config: &CheckConfig,
    opts: &RunOptions,
) -> Vec<CandidateDomain> {
    let bar = if console::Term::stderr().is_term() && !opts.json {
        Some(ui::generation_bar(words.len() as u64))
    } else {
        None
    };

    let mut candidates = Vec::new();
    let mut degenerate = 0usize;
    for word in words {
        for candidate in generate(word, tlds, config.length_min, config.length_max) {
            if candidate.is_degenerate() {
                degenerate += 1;
                continue;
            }
            candidates.push(candidate);
        }
        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }
    if degenerate > 0 {
        tracing::debug!(count = degenerate, "degenerate empty-label candidates filtered");
    }

    candidates
}

/// Run the sequential check over all candidates.
///
/// Results stream in one at a time; Ctrl-C stops the run cleanly between
/// candidates, keeping everything checked so far.
async fn run_check(
    candidates: &[CandidateDomain],
    config: CheckConfig,
    opts: &RunOptions,
    args: &Args,
) -> Result<(), Box<dyn std::error::Error>> {
    let total = candidates.len();

    if !opts.json {
        if opts.pretty {
            ui::print_header(total, &config);
        } else {
            println!("Checking {} domains...", total);
        }
    }

    let mut reporter = match &opts.log_file {
        Some(path) => {
            let mut writer = report::ReportWriter::open(path)
                .map_err(|e| format!("Failed to open report file '{}': {}", path, e))?;
            writer.write_run_header()?;
            Some(writer)
        }
        None => None,
    };

    let checker = HackChecker::with_config(config);
    let started = std::time::Instant::now();
    let mut results: Vec<CheckResult> = Vec::with_capacity(total);
    let mut interrupted = false;

    {
        let mut stream = checker.check_candidates_stream(candidates);
        loop {
            tokio::select! {
                maybe_result = stream.next() => {
                    match maybe_result {
                        Some(result) => {
                            if !opts.json {
                                if opts.pretty {
                                    ui::print_result_pretty(&result, args.debug, (results.len() + 1, total));
                                } else {
                                    ui::print_result(&result, args.debug, (results.len() + 1, total));
                                }
                            }
                            if let Some(writer) = reporter.as_mut() {
                                writer.record(&result)?;
                            }
                            results.push(result);
                        }
                        None => break,
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    interrupted = true;
                    break;
                }
            }
        }
    }

    if interrupted {
        eprintln!("Interrupted by user.");
    }

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.len() > 1 {
        println!();
        ui::print_summary(&results, started.elapsed());
    }

    Ok(())
}

/// Build the check configuration and run options with proper precedence.
///
/// Precedence order (highest to lowest):
/// 1. CLI arguments (explicit user input)
/// 2. Environment variables (DH_*)
/// 3. Local config file (./.domain-hack.toml)
/// 4. Global config file (~/.domain-hack.toml)
/// 5. XDG config file (~/.config/domain-hack/config.toml)
/// 6. Built-in defaults
fn build_config(args: &Args) -> Result<(CheckConfig, RunOptions), Box<dyn std::error::Error>> {
    let mut config = CheckConfig::default();
    let mut opts = RunOptions::default();

    let config_manager = ConfigManager::new(args.verbose);

    // Step 1: Determine config file path and load config files
    let file_config = if let Some(explicit_config_path) = &args.config {
        // CLI --config flag provided
        if args.verbose {
            println!(
                "🔧 Using explicit config file (CLI --config): {}",
                explicit_config_path
            );
        }
        Some(config_manager.load_file(explicit_config_path).map_err(|e| {
            format!(
                "Failed to load config file '{}': {}",
                explicit_config_path, e
            )
        })?)
    } else if let Ok(env_config_path) = std::env::var("DH_CONFIG") {
        // DH_CONFIG environment variable provided
        if args.verbose {
            println!(
                "🔧 Using explicit config file (DH_CONFIG env var): {}",
                env_config_path
            );
        }
        Some(
            config_manager
                .load_file(&env_config_path)
                .map_err(|e| format!("Failed to load config file '{}': {}", env_config_path, e))?,
        )
    } else {
        // No explicit config: use automatic discovery
        config_manager.discover_and_load().ok()
    };

    if let Some(file_config) = file_config {
        apply_file_config(&mut config, &mut opts, file_config);
    }

    // Step 2: Apply environment variables (DH_*)
    let env_config = load_env_config(args.verbose);
    if env_config.has_output_format_conflict() && args.verbose {
        eprintln!("⚠️ Both DH_JSON and DH_PRETTY are set, CLI args will resolve the conflict");
    }
    apply_env_config(&mut config, &mut opts, &env_config);

    // Step 3: Apply CLI arguments (highest precedence)
    apply_cli_args(&mut config, &mut opts, args);

    // Validate the resolved settings as a whole: values from different
    // sources can combine into bounds no single source would have passed.
    if config.length_min == 0 {
        return Err("Minimum length must be at least 1".into());
    }
    if config.length_min > config.length_max {
        return Err(format!(
            "Minimum length ({}) cannot exceed maximum length ({})",
            config.length_min, config.length_max
        )
        .into());
    }
    if opts.json && opts.pretty {
        return Err("Cannot use both JSON and pretty output".into());
    }

    Ok((config, opts))
}

/// Merge FileConfig defaults into the config and run options.
fn apply_file_config(config: &mut CheckConfig, opts: &mut RunOptions, file_config: FileConfig) {
    if let Some(defaults) = file_config.defaults {
        if let Some(length_min) = defaults.length_min {
            config.length_min = length_min;
        }
        if let Some(length_max) = defaults.length_max {
            config.length_max = length_max;
        }
        if let Some(delay) = defaults.delay {
            config.delay = Duration::from_secs_f64(delay);
        }
        if let Some(timeout_str) = defaults.timeout {
            if let Some(timeout_secs) = parse_timeout_string(&timeout_str) {
                config.lookup_timeout = Duration::from_secs(timeout_secs);
            }
        }
        if let Some(wordlist) = defaults.wordlist {
            opts.wordlist = wordlist;
        }
        if let Some(tld_file) = defaults.tld_file {
            opts.tld_file = Some(tld_file);
        }
        if let Some(log_file) = defaults.log_file {
            opts.log_file = Some(log_file);
        }
        if let Some(json) = defaults.json {
            opts.json = json;
        }
        if let Some(pretty) = defaults.pretty {
            opts.pretty = pretty;
        }
    }
}

/// Apply environment variables on top of file config values.
fn apply_env_config(config: &mut CheckConfig, opts: &mut RunOptions, env_config: &EnvConfig) {
    if let Some(length_min) = env_config.length_min {
        config.length_min = length_min;
    }
    if let Some(length_max) = env_config.length_max {
        config.length_max = length_max;
    }
    if let Some(delay) = env_config.delay {
        config.delay = Duration::from_secs_f64(delay);
    }
    if let Some(timeout_str) = &env_config.timeout {
        if let Some(timeout_secs) = parse_timeout_string(timeout_str) {
            config.lookup_timeout = Duration::from_secs(timeout_secs);
        }
    }
    if let Some(wordlist) = &env_config.wordlist {
        opts.wordlist = wordlist.clone();
    }
    if let Some(tld_file) = &env_config.tld_file {
        opts.tld_file = Some(tld_file.clone());
    }
    if let Some(log_file) = &env_config.log_file {
        opts.log_file = Some(log_file.clone());
    }
    if let Some(json) = env_config.json {
        opts.json = json;
    }
    if let Some(pretty) = env_config.pretty {
        opts.pretty = pretty;
    }
}

/// Apply CLI arguments (highest precedence).
fn apply_cli_args(config: &mut CheckConfig, opts: &mut RunOptions, args: &Args) {
    if let Some(min) = args.min {
        config.length_min = min;
    }
    if let Some(max) = args.max {
        config.length_max = max;
    }
    if let Some(delay) = args.delay {
        config.delay = Duration::from_secs_f64(delay);
    }
    if let Some(timeout_str) = &args.timeout {
        if let Some(timeout_secs) = parse_timeout_string(timeout_str) {
            config.lookup_timeout = Duration::from_secs(timeout_secs);
        }
    }
    if let Some(tld) = &args.tld {
        opts.tld = tld.clone();
    }
    if let Some(file) = &args.file {
        opts.wordlist = file.clone();
    }
    if let Some(tld_file) = &args.tld_file {
        opts.tld_file = Some(tld_file.clone());
    }
    if let Some(log_file) = &args.log_file {
        opts.log_file = Some(log_file.clone());
    }

    // Only override output flags when the user explicitly passes them.
    // Without this guard, the default (false) would always overwrite
    // config/env values.
    if args.json {
        opts.json = true;
        opts.pretty = false;
    }
    if args.pretty {
        opts.pretty = true;
        opts.json = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper function with all required fields
    fn create_test_args() -> Args {
        Args {
            min: None,
            max: None,
            tld: None,
            file: None,
            tld_file: None,
            delay: None,
            timeout: None,
            dry_run: false,
            json: false,
            pretty: false,
            log_file: None,
            config: None,
            debug: false,
            verbose: false,
        }
    }

    #[test]
    fn test_validate_args_defaults_ok() {
        let args = create_test_args();
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_zero_min_rejected() {
        let mut args = create_test_args();
        args.min = Some(0);
        let result = validate_args(&args);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("at least 1"));
    }

    #[test]
    fn test_validate_args_min_exceeding_max_rejected() {
        let mut args = create_test_args();
        args.min = Some(9);
        args.max = Some(4);
        let result = validate_args(&args);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cannot exceed"));
    }

    #[test]
    fn test_validate_args_negative_delay_rejected() {
        let mut args = create_test_args();
        args.delay = Some(-0.5);
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_zero_delay_allowed() {
        let mut args = create_test_args();
        args.delay = Some(0.0);
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_bad_timeout_rejected() {
        let mut args = create_test_args();
        args.timeout = Some("soon".to_string());
        assert!(validate_args(&args).is_err());

        args.timeout = Some("0s".to_string());
        assert!(validate_args(&args).is_err());

        args.timeout = Some("2s".to_string());
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_json_and_pretty_conflict() {
        let mut args = create_test_args();
        args.json = true;
        args.pretty = true;
        let result = validate_args(&args);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("--json"));
    }

    #[test]
    fn test_resolve_specific_tld_trims_leading_dot() {
        let opts = RunOptions {
            tld: ".DE".to_string(),
            ..RunOptions::default()
        };
        let tlds = resolve_tlds(&opts).unwrap();
        assert_eq!(tlds, vec!["de"]);
    }

    #[test]
    fn test_resolve_any_without_file_uses_builtin_set() {
        let opts = RunOptions::default();
        let tlds = resolve_tlds(&opts).unwrap();
        assert_eq!(tlds, builtin_tlds());
    }

    #[test]
    fn test_resolve_tld_file() {
        use std::io::Write;
        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        temp_file.write_all(b"# IANA header\nDE\nPARTY\n").unwrap();
        temp_file.flush().unwrap();

        let opts = RunOptions {
            tld_file: Some(temp_file.path().to_string_lossy().into_owned()),
            ..RunOptions::default()
        };
        let tlds = resolve_tlds(&opts).unwrap();
        assert_eq!(tlds, vec!["de", "party"]);
    }

    #[test]
    fn test_resolve_missing_tld_file_errors() {
        let opts = RunOptions {
            tld_file: Some("/nonexistent/tlds.txt".to_string()),
            ..RunOptions::default()
        };
        assert!(resolve_tlds(&opts).is_err());
    }

    #[test]
    fn test_cli_args_override_config() {
        let mut config = CheckConfig::default();
        let mut opts = RunOptions::default();
        let mut args = create_test_args();
        args.min = Some(3);
        args.max = Some(9);
        args.delay = Some(0.5);
        args.timeout = Some("3s".to_string());
        args.tld = Some("be".to_string());

        apply_cli_args(&mut config, &mut opts, &args);

        assert_eq!(config.length_min, 3);
        assert_eq!(config.length_max, 9);
        assert_eq!(config.delay, Duration::from_secs_f64(0.5));
        assert_eq!(config.lookup_timeout, Duration::from_secs(3));
        assert_eq!(opts.tld, "be");
    }

    #[test]
    fn test_output_flags_only_enable() {
        // When --pretty is NOT passed, config/env values should be preserved
        let mut config = CheckConfig::default();
        let mut opts = RunOptions {
            pretty: true,
            ..RunOptions::default()
        };
        let args = create_test_args();

        apply_cli_args(&mut config, &mut opts, &args);
        assert!(opts.pretty, "config pretty=true preserved without flags");

        // An explicit --json flag wins over a configured pretty default
        let mut args = create_test_args();
        args.json = true;
        apply_cli_args(&mut config, &mut opts, &args);
        assert!(opts.json);
        assert!(!opts.pretty);
    }

    #[test]
    fn test_generate_candidates_filters_degenerate() {
        let config = CheckConfig::default().with_length_bounds(1, 20);
        let opts = RunOptions {
            json: true, // suppress the progress bar
            ..RunOptions::default()
        };
        let words = vec!["party".to_string(), "sadnessparty".to_string()];
        let tlds = vec!["party".to_string()];

        let candidates = generate_candidates(&words, &tlds, &config, &opts);
        // "party" == the TLD itself -> degenerate, filtered; only the
        // real hack survives.
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].fqdn(), "sadness.party");
    }
}
