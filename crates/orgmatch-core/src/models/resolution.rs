//! Resolution models: normalized names, variant sets, match results, and
//! employment classification.

use serde::{Deserialize, Serialize};

/// A canonicalized organization name ready for comparison.
///
/// `text` is the canonical form ("saint"-expanded, lowercased, suffix- and
/// state-stripped). `forms` additionally carries the literal-"st" spelling
/// when it differs, because source systems use either spelling
/// inconsistently and the matcher must try both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedName {
    /// Canonical comparable form
    pub text: String,
    /// All acceptable spellings of this name (canonical first)
    pub forms: Vec<String>,
}

impl NormalizedName {
    /// The canonical form as a string slice.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether any spelling of this name is a substring of `haystack`.
    pub fn is_contained_in(&self, haystack: &str) -> bool {
        self.forms.iter().any(|form| haystack.contains(form.as_str()))
    }
}

/// The ordered, deduplicated set of acceptable name variants for one
/// organization identity. Rebuilt from scratch per request, never mutated
/// incrementally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct VariantSet {
    variants: Vec<NormalizedName>,
}

impl VariantSet {
    /// Build a set from already-deduplicated variants in priority order.
    pub fn new(variants: Vec<NormalizedName>) -> Self {
        Self { variants }
    }

    /// Variants in priority order (full forms before city-qualified forms).
    pub fn iter(&self) -> impl Iterator<Item = &NormalizedName> {
        self.variants.iter()
    }

    /// Number of variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Canonical texts in priority order, for serialization into a
    /// downstream bulk-search request.
    pub fn texts(&self) -> Vec<&str> {
        self.variants.iter().map(|v| v.as_str()).collect()
    }
}

/// Confidence that a matched employer string refers to the target
/// organization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchConfidence {
    /// Exact canonical equality
    High,
    /// Substring containment
    Medium,
    /// No match, or match via weak evidence
    Low,
}

impl MatchConfidence {
    /// One level weaker, used when a match came from fallback data.
    pub fn downgraded(self) -> Self {
        match self {
            MatchConfidence::High => MatchConfidence::Medium,
            MatchConfidence::Medium | MatchConfidence::Low => MatchConfidence::Low,
        }
    }
}

/// Outcome of matching one employment claim against a variant set.
///
/// Computed and consumed per candidate; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    /// Whether any variant matched
    pub matched: bool,
    /// Canonical text of the longest matching variant
    pub matched_variant: Option<String>,
    /// Confidence in the match
    pub confidence: MatchConfidence,
}

impl MatchResult {
    /// The no-match result.
    pub fn no_match() -> Self {
        Self {
            matched: false,
            matched_variant: None,
            confidence: MatchConfidence::Low,
        }
    }
}

/// Classified employment relationship between a candidate and the target
/// organization. Each variant carries a confidence score in 0..=100.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum EmploymentStatus {
    /// Candidate appears to work at the organization now
    Current { confidence: u8 },
    /// Candidate used to work there (e.g., title marked retired)
    Former { confidence: u8 },
    /// Employment cannot be asserted
    Unknown { confidence: u8 },
}

impl EmploymentStatus {
    /// The confidence score carried by this status.
    pub fn confidence(&self) -> u8 {
        match self {
            EmploymentStatus::Current { confidence }
            | EmploymentStatus::Former { confidence }
            | EmploymentStatus::Unknown { confidence } => *confidence,
        }
    }

    /// The confidence band the score falls in.
    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::from_score(self.confidence())
    }

    /// Whether the candidate is classified as currently employed.
    pub fn is_current(&self) -> bool {
        matches!(self, EmploymentStatus::Current { .. })
    }
}

/// Banding of a 0..=100 confidence score.
///
/// Low-band results earn no bonus weight in downstream ranking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConfidenceBand {
    /// 90 and above
    High,
    /// 70 through 89
    Medium,
    /// Below 70
    Low,
}

impl ConfidenceBand {
    /// Band for a raw score.
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => ConfidenceBand::High,
            70..=89 => ConfidenceBand::Medium,
            _ => ConfidenceBand::Low,
        }
    }
}

/// Whether a job title suggests a purchasing decision-maker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TitleDecision {
    /// Title matched an accept rule
    Accept,
    /// Title matched a reject rule (clinical/irrelevant role)
    Reject,
    /// No rule matched
    Neutral,
}

/// Outcome of screening a claim's title against the rule table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TitleVerdict {
    /// Accept, reject, or neutral
    pub decision: TitleDecision,
    /// Accumulated accept weight (0 unless accepted)
    pub weight: i32,
}

impl TitleVerdict {
    /// The neutral verdict.
    pub fn neutral() -> Self {
        Self {
            decision: TitleDecision::Neutral,
            weight: 0,
        }
    }
}

/// Per-candidate output handed to the downstream ranking stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidateAssessment {
    /// Company-name match outcome
    pub match_result: MatchResult,
    /// Employment classification
    pub employment: EmploymentStatus,
    /// Title screen verdict
    pub title: TitleVerdict,
}
