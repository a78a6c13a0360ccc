//! TLD set handling: parsing IANA-format lists and a built-in fallback.
//!
//! The generator treats the TLD set as an opaque ordered sequence; this
//! module only produces such sequences. Callers normally load the official
//! IANA list (`top-level-domains.txt`) and fall back to [`builtin_tlds`]
//! when no file is supplied.

/// Built-in TLD set, sorted alphabetically.
///
/// A curated subset of the IANA root zone: the common gTLDs plus the
/// ccTLDs that actually show up in domain hacks (short, English-suffix
/// friendly). Not exhaustive; supply an IANA list file for full coverage.
const BUILTIN_TLDS: &[&str] = &[
    "ag", "ai", "am", "app", "at", "be", "best", "bid", "bike", "bio", "biz", "blog", "blue",
    "cab", "cafe", "camp", "care", "cash", "cat", "cc", "ch", "city", "cloud", "club", "codes",
    "coffee", "com", "cool", "cx", "date", "de", "deals", "design", "dev", "digital", "do",
    "email", "es", "et", "expert", "fm", "fr", "fun", "gg", "gl", "gs", "guru", "hn", "house",
    "icu", "ie", "im", "in", "info", "ink", "io", "is", "it", "kim", "kz", "la", "li", "life",
    "link", "live", "lk", "ly", "md", "me", "media", "ms", "mu", "mx", "ne", "net", "ng", "ninja",
    "nl", "nu", "om", "one", "online", "org", "party", "pe", "ph", "pl", "pm", "pr", "press",
    "pro", "ps", "pt", "pub", "re", "red", "rest", "ro", "rocks", "rs", "ru", "run", "sc", "se",
    "sh", "shop", "si", "site", "sk", "so", "social", "space", "st", "store", "studio", "style",
    "tc", "team", "tech", "tips", "tk", "tm", "to", "today", "top", "tt", "tv", "tw", "uk", "us",
    "uz", "ve", "vg", "vip", "wiki", "win", "work", "world", "ws", "wtf", "xyz", "za", "zone",
];

/// Get the built-in TLD set as owned strings, sorted alphabetically.
pub fn builtin_tlds() -> Vec<String> {
    BUILTIN_TLDS.iter().map(|tld| tld.to_string()).collect()
}

/// Parse a TLD list file's contents into an ordered TLD set.
///
/// Handles the IANA root-zone format (`top-level-domains.txt`): a
/// `#`-comment header line, then one upper-case TLD per line. Entries are
/// trimmed, lowercased, and stripped of any leading dot; blank lines and
/// comments are skipped. Order is preserved; duplicates are not removed
/// (the generator tries every entry regardless).
pub fn parse_tld_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.trim_start_matches('.').to_lowercase())
        .filter(|tld| !tld.is_empty())
        .collect()
}
