//! Utility functions for wordlist processing.

/// Parse a wordlist file's contents into an ordered word sequence.
///
/// One word per line; entries are trimmed and lowercased, blank lines and
/// `#`-comments are skipped. No deduplication; the wordlist's own order
/// and repetition are preserved.
///
/// Hyphenated words are NOT filtered here; the generator rejects them
/// itself so the policy lives next to the matching logic.
pub fn parse_wordlist(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_lowercase())
        .collect()
}
