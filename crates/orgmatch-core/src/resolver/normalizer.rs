//! Organization-name normalizer.
//!
//! Handles:
//! - Case and punctuation folding ("St. Luke's" → "st lukes")
//! - Generic corporate/facility suffix stripping (Hospital, Inc, Center, ...)
//! - Trailing US-state abbreviation stripping ("Example Hospital MT")
//! - St. ↔ Saint alternation (both spellings kept for matching)
//!
//! Healthcare identifier tokens (medical, health, healthcare, clinic) are
//! never stripped: they are the only signal separating a facility from an
//! unrelated business sharing a place-name ("Portneuf Medical Center" must
//! not collapse to bare "portneuf", which would match "Portneuf Bakery").

use std::collections::HashSet;

use crate::models::NormalizedName;

/// Tokens that must survive normalization no matter what the configured
/// denylist says.
pub const HEALTHCARE_TOKENS: [&str; 4] = ["medical", "health", "healthcare", "clinic"];

/// Immutable configuration for a [`Normalizer`].
///
/// Injected at construction time so markets can customize the token lists
/// without mutating globals.
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Generic organizational suffix words to strip (whole-word match)
    pub generic_suffixes: Vec<String>,
    /// Two-letter state codes to strip from the trailing position
    pub state_abbreviations: Vec<String>,
    /// Tokens that may never be stripped, even if listed as suffixes
    pub protected_tokens: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            generic_suffixes: default_suffixes(),
            state_abbreviations: default_states(),
            protected_tokens: HEALTHCARE_TOKENS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Normalizer for organization names.
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Suffix denylist, already filtered against the protected set
    suffixes: HashSet<String>,
    /// Trailing state codes
    states: HashSet<String>,
    /// Tokens exempt from stripping
    protected: HashSet<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Create a normalizer with the default healthcare-market token lists.
    pub fn new() -> Self {
        Self::with_config(NormalizerConfig::default())
    }

    /// Create a normalizer from explicit configuration.
    ///
    /// Protected tokens are removed from the suffix denylist here, so a
    /// caller-supplied list containing "health" cannot break matching.
    pub fn with_config(config: NormalizerConfig) -> Self {
        let protected: HashSet<String> = config
            .protected_tokens
            .iter()
            .map(|t| t.to_lowercase())
            .collect();

        let suffixes = config
            .generic_suffixes
            .iter()
            .map(|t| t.to_lowercase())
            .filter(|t| !protected.contains(t))
            .collect();

        let states = config
            .state_abbreviations
            .iter()
            .map(|t| t.to_lowercase())
            .collect();

        Self {
            suffixes,
            states,
            protected,
        }
    }

    /// Normalize a raw organization name into its comparable form.
    ///
    /// If stripping would empty the name, the pre-strip folded form is
    /// returned unchanged: a non-empty input never normalizes to empty.
    pub fn normalize(&self, raw: &str) -> NormalizedName {
        let folded = fold(raw);

        let mut kept: Vec<&str> = folded
            .split_whitespace()
            .filter(|token| !self.suffixes.contains(*token))
            .collect();

        // Trailing state codes only; repeated so the result is stable
        // under re-normalization.
        while let Some(last) = kept.last() {
            if self.states.contains(*last) {
                kept.pop();
            } else {
                break;
            }
        }

        let stripped = kept.join(" ");
        let base = if stripped.is_empty() { folded } else { stripped };

        // "st" is assumed to abbreviate "saint" in facility names.
        let saint_form = swap_token(&base, "st", "saint");
        let st_form = swap_token(&base, "saint", "st");

        let mut forms = vec![saint_form.clone()];
        if st_form != saint_form {
            forms.push(st_form);
        }

        NormalizedName {
            text: saint_form,
            forms,
        }
    }

    /// Add a suffix to the denylist. Protected tokens are ignored.
    pub fn add_suffix(&mut self, suffix: &str) {
        let lower = suffix.to_lowercase();
        if !self.protected.contains(&lower) {
            self.suffixes.insert(lower);
        }
    }

    /// Whether a token is protected from stripping.
    pub fn is_protected(&self, token: &str) -> bool {
        self.protected.contains(&token.to_lowercase())
    }
}

/// Lowercase, drop possessive/abbreviation punctuation, map remaining
/// punctuation to spaces, and collapse whitespace runs.
fn fold(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        for lower in ch.to_lowercase() {
            if lower.is_alphanumeric() {
                out.push(lower);
            } else if matches!(lower, '.' | '\'' | '\u{2019}' | ',') {
                // dropped entirely: "St. Luke's" → "st lukes"
            } else {
                out.push(' ');
            }
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace whole-word occurrences of `from` with `to`.
fn swap_token(text: &str, from: &str, to: &str) -> String {
    text.split_whitespace()
        .map(|token| if token == from { to } else { token })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Default generic-suffix denylist for US healthcare organizations.
fn default_suffixes() -> Vec<String> {
    [
        "hospital",
        "inc",
        "incorporated",
        "llc",
        "ltd",
        "corp",
        "corporation",
        "company",
        "co",
        "regional",
        "network",
        "foundation",
        "trust",
        "group",
        "center",
        "centre",
        "system",
        "systems",
        "institute",
        "associates",
        "partners",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// The 50 US state postal abbreviations.
fn default_states() -> Vec<String> {
    [
        "al", "ak", "az", "ar", "ca", "co", "ct", "de", "fl", "ga", "hi", "id", "il", "in", "ia",
        "ks", "ky", "la", "me", "md", "ma", "mi", "mn", "ms", "mo", "mt", "ne", "nv", "nh", "nj",
        "nm", "ny", "nc", "nd", "oh", "ok", "or", "pa", "ri", "sc", "sd", "tn", "tx", "ut", "vt",
        "va", "wa", "wv", "wi", "wy",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_punctuation() {
        assert_eq!(fold("St. Luke's"), "st lukes");
        assert_eq!(fold("  Mercy   General  "), "mercy general");
        assert_eq!(fold("Intermountain Health - Billings Region"), "intermountain health billings region");
    }

    #[test]
    fn test_suffix_stripping_whole_words_only() {
        let normalizer = Normalizer::new();

        assert_eq!(normalizer.normalize("Mercy Hospital").text, "mercy");
        // "Hospitality" must not lose its "hospital" prefix
        assert_eq!(
            normalizer.normalize("Sunrise Hospitality").text,
            "sunrise hospitality"
        );
    }

    #[test]
    fn test_healthcare_tokens_survive() {
        let normalizer = Normalizer::new();

        assert_eq!(
            normalizer.normalize("Portneuf Medical Center").text,
            "portneuf medical"
        );
        assert_eq!(
            normalizer.normalize("Mercy Health System").text,
            "mercy health"
        );
        assert_eq!(
            normalizer.normalize("Lakeview Clinic LLC").text,
            "lakeview clinic"
        );
    }

    #[test]
    fn test_protected_tokens_cannot_be_configured_away() {
        let mut config = NormalizerConfig::default();
        config.generic_suffixes.push("medical".into());
        config.generic_suffixes.push("Health".into());

        let normalizer = Normalizer::with_config(config);
        assert_eq!(
            normalizer.normalize("Portneuf Medical Center").text,
            "portneuf medical"
        );
        assert!(normalizer.is_protected("MEDICAL"));
    }

    #[test]
    fn test_add_suffix_ignores_protected() {
        let mut normalizer = Normalizer::new();
        normalizer.add_suffix("clinic");
        normalizer.add_suffix("campus");

        assert_eq!(normalizer.normalize("Westside Clinic").text, "westside clinic");
        assert_eq!(normalizer.normalize("Westside Campus").text, "westside");
    }

    #[test]
    fn test_trailing_state_stripped() {
        let normalizer = Normalizer::new();

        assert_eq!(
            normalizer.normalize("Example Hospital MT").text,
            normalizer.normalize("Example Hospital").text
        );
        // Mid-string state codes stay put
        assert_eq!(
            normalizer.normalize("MT Mercy Medical").text,
            "mt mercy medical"
        );
    }

    #[test]
    fn test_saint_forms() {
        let normalizer = Normalizer::new();

        let from_st = normalizer.normalize("St. Patrick Hospital");
        assert_eq!(from_st.text, "saint patrick");
        assert!(from_st.forms.contains(&"st patrick".to_string()));

        let from_saint = normalizer.normalize("Saint Patrick Hospital");
        assert_eq!(from_saint.text, "saint patrick");
        assert!(from_saint.forms.contains(&"st patrick".to_string()));
    }

    #[test]
    fn test_empty_after_strip_returns_prestrip_form() {
        let normalizer = Normalizer::new();

        assert_eq!(normalizer.normalize("Hospital Inc").text, "hospital inc");
        assert_eq!(normalizer.normalize("MT").text, "mt");
    }

    #[test]
    fn test_normalize_idempotent() {
        let normalizer = Normalizer::new();

        for raw in [
            "St. Vincent Healthcare",
            "Portneuf Medical Center",
            "Example Hospital MT",
            "Hospital Inc",
            "Mercy Health System of Ohio",
        ] {
            let once = normalizer.normalize(raw);
            let twice = normalizer.normalize(&once.text);
            assert_eq!(once.text, twice.text, "not idempotent for {raw:?}");
        }
    }
}
