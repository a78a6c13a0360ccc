//! Domain-hack candidate generation.
//!
//! This module finds words whose suffix matches a known TLD, so that the
//! remainder plus a dot plus the TLD forms a readable domain
//! ("cathode" → `catho.de`). Generation is a pure, total computation:
//! it never fails and has no error channel.
//!
//! # Examples
//!
//! ```
//! use domain_hack_lib::generate::generate;
//!
//! let tlds = vec!["de".to_string(), "party".to_string()];
//! let candidates = generate("cathode", &tlds, 1, 20);
//! assert_eq!(candidates.len(), 1);
//! assert_eq!(candidates[0].fqdn(), "catho.de");
//! ```

use crate::types::CandidateDomain;

/// Generate all domain-hack candidates for a single word.
///
/// A candidate is emitted for every TLD in `tlds` (in set order) that is a
/// case-insensitive suffix of `word`, provided the word's length falls
/// within `length_min..=length_max` (measured on the whole word, not the
/// prefix). A word may match several TLDs; all matches are emitted, not
/// just the longest.
///
/// Words containing a hyphen are rejected outright; hyphenated domains
/// are not considered valid domain hacks.
///
/// When the TLD equals the entire word, the candidate is still emitted
/// with an empty prefix. Callers that need registrable domains filter
/// those with [`CandidateDomain::is_degenerate`].
pub fn generate(
    word: &str,
    tlds: &[String],
    length_min: usize,
    length_max: usize,
) -> Vec<CandidateDomain> {
    if word.contains('-') {
        return Vec::new();
    }

    let word = word.trim().to_lowercase();
    let length = word.chars().count();
    if length < length_min || length > length_max {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for tld in tlds {
        let tld = tld.trim().to_lowercase();
        if tld.is_empty() {
            continue;
        }
        if let Some(prefix) = word.strip_suffix(tld.as_str()) {
            candidates.push(CandidateDomain::new(prefix, tld));
        }
    }

    candidates
}

/// Generate candidates for an entire wordlist.
///
/// Candidates appear in wordlist order, and within one word in TLD-set
/// order. This is the order in which they will be checked.
pub fn generate_all(
    words: &[String],
    tlds: &[String],
    length_min: usize,
    length_max: usize,
) -> Vec<CandidateDomain> {
    words
        .iter()
        .flat_map(|word| generate(word, tlds, length_min, length_max))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tlds(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_simple_suffix_match() {
        let candidates = generate("cathode", &tlds(&["de"]), 1, 20);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0], CandidateDomain::new("catho", "de"));
    }

    #[test]
    fn test_prefix_plus_tld_reconstructs_word() {
        let candidates = generate("sadnessparty", &tlds(&["party", "ty"]), 1, 20);
        for candidate in &candidates {
            assert_eq!(candidate.word(), "sadnessparty");
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let candidates = generate("CATHODE", &tlds(&["de"]), 1, 20);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].fqdn(), "catho.de");
    }

    #[test]
    fn test_multiple_tld_matches_in_set_order() {
        let candidates = generate("sadnessparty", &tlds(&["party", "ty"]), 1, 20);
        assert_eq!(
            candidates,
            vec![
                CandidateDomain::new("sadness", "party"),
                CandidateDomain::new("sadnesspar", "ty"),
            ]
        );

        // Reversed set order reverses emission order
        let reversed = generate("sadnessparty", &tlds(&["ty", "party"]), 1, 20);
        assert_eq!(reversed[0].tld, "ty");
        assert_eq!(reversed[1].tld, "party");
    }

    #[test]
    fn test_hyphenated_words_are_rejected() {
        let candidates = generate("hyphen-ated", &tlds(&["ed", "ated"]), 1, 20);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_length_bounds_measured_on_word() {
        // "cathode" is 7 chars; prefix "catho" is 5
        assert!(generate("cathode", &tlds(&["de"]), 1, 6).is_empty());
        assert!(generate("cathode", &tlds(&["de"]), 8, 20).is_empty());
        assert_eq!(generate("cathode", &tlds(&["de"]), 7, 7).len(), 1);
    }

    #[test]
    fn test_tld_equal_to_word_emits_degenerate_candidate() {
        let candidates = generate("party", &tlds(&["party"]), 1, 20);
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].is_degenerate());
        assert_eq!(candidates[0].tld, "party");
    }

    #[test]
    fn test_empty_tld_set_yields_nothing() {
        assert!(generate("cathode", &[], 1, 20).is_empty());
    }

    #[test]
    fn test_no_suffix_match_yields_nothing() {
        assert!(generate("cathode", &tlds(&["com", "org"]), 1, 20).is_empty());
    }

    #[test]
    fn test_generate_all_preserves_word_order_and_skips_hyphens() {
        let words: Vec<String> = ["cathode", "sadnessparty", "hyphen-ated"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let candidates = generate_all(&words, &tlds(&["de", "party"]), 1, 20);
        let fqdns: Vec<String> = candidates.iter().map(|c| c.fqdn()).collect();
        assert_eq!(fqdns, vec!["catho.de", "sadness.party"]);
    }
}
