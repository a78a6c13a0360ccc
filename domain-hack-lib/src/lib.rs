//! # Domain Hack Library
//!
//! A library for discovering "domain hacks" (words whose suffix matches a
//! valid top-level domain, so that the remainder plus a dot plus the TLD
//! forms a readable domain: "cathode" becomes `catho.de`) and for checking
//! their registration status over WHOIS under a strict rate limit.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use domain_hack_lib::{generate_all, HackChecker};
//!
//! #[tokio::main]
//! async fn main() {
//!     let words = vec!["cathode".to_string(), "sadnessparty".to_string()];
//!     let tlds = vec!["de".to_string(), "party".to_string()];
//!
//!     let candidates = generate_all(&words, &tlds, 1, 20);
//!     let checker = HackChecker::new();
//!     for result in checker.check_candidates(&candidates).await {
//!         println!("{} -> {}", result.candidate, result.status);
//!     }
//! }
//! ```
//!
//! ## Features
//!
//! - **Candidate generation**: TLD-suffix matching under length constraints
//! - **Sequential checking**: strictly serialized, constant-delay pacing
//!   that respects registry rate limits
//! - **Status taxonomy**: every lookup outcome is data, never an exception
//! - **Pluggable lookup**: the WHOIS client sits behind a narrow trait so
//!   the engine can be tested against deterministic stubs

// Re-export main public API types and functions
// This makes them available as domain_hack_lib::TypeName
pub use checker::{classify_outcome, classify_response, HackChecker};
pub use config::{
    load_env_config, parse_timeout_string, ConfigManager, DefaultsConfig, EnvConfig, FileConfig,
};
pub use error::DomainHackError;
pub use protocols::whois::is_whois_available;
pub use protocols::{Lookup, WhoisClient};
pub use tlds::{builtin_tlds, parse_tld_list};
pub use types::{CandidateDomain, CheckConfig, CheckResult, LookupOutcome, LookupStatus};
pub use utils::parse_wordlist;

// Public modules
pub mod generate;

// Re-export generation functions for convenience
pub use generate::{generate, generate_all};

// Internal modules - these are not part of the public API
mod checker;
mod config;
mod error;
mod protocols;
mod tlds;
mod types;
mod utils;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, DomainHackError>;

// Library version and metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
