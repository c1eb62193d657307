//! Employer matching under "includes" semantics.
//!
//! A variant matches when one of its spellings is a substring of the
//! claim's normalized employer string. This reproduces the containment
//! operator of the downstream search backend; equality is not required and
//! fuzzy/edit-distance matching is deliberately out of contract.

use crate::models::{EmploymentClaim, MatchConfidence, MatchResult, NormalizedName, VariantSet};

use super::Normalizer;

/// Matcher for employment claims against organization variant sets.
#[derive(Debug, Clone)]
pub struct Matcher {
    normalizer: Normalizer,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(Normalizer::new())
    }
}

impl Matcher {
    /// Create a matcher sharing the resolver's normalizer configuration.
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    /// Match a claim against a variant set.
    ///
    /// The employer string comes from the claim's company field, falling
    /// back to the most recent work-experience entry when the field is null
    /// or blank. Scraped profiles frequently lack the top-level field even
    /// when valid experience data exists, and skipping the fallback loses
    /// every one of those candidates.
    pub fn matches(&self, claim: &EmploymentClaim, variants: &VariantSet) -> MatchResult {
        let source = match claim.stated_company() {
            Some(source) => source,
            None => return MatchResult::no_match(),
        };

        let company = self.normalizer.normalize(source.name());

        let mut best: Option<(&NormalizedName, MatchConfidence)> = None;
        for variant in variants.iter() {
            let confidence = match self.match_variant(variant, &company) {
                Some(confidence) => confidence,
                None => continue,
            };
            // Longest matching variant wins; first-seen order breaks ties.
            let is_better = match best {
                Some((current, _)) => variant.text.len() > current.text.len(),
                None => true,
            };
            if is_better {
                best = Some((variant, confidence));
            }
        }

        match best {
            Some((variant, confidence)) => {
                let confidence = if source.is_fallback() {
                    confidence.downgraded()
                } else {
                    confidence
                };
                MatchResult {
                    matched: true,
                    matched_variant: Some(variant.text.clone()),
                    confidence,
                }
            }
            None => MatchResult::no_match(),
        }
    }

    /// Containment check across all spellings of both sides.
    fn match_variant(
        &self,
        variant: &NormalizedName,
        company: &NormalizedName,
    ) -> Option<MatchConfidence> {
        if variant.text == company.text {
            return Some(MatchConfidence::High);
        }
        let contained = company
            .forms
            .iter()
            .any(|haystack| variant.is_contained_in(haystack));
        contained.then_some(MatchConfidence::Medium)
    }

    /// The normalizer backing this matcher.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceEntry, OrganizationIdentity};
    use crate::resolver::VariantGenerator;

    fn variants_for(identity: &OrganizationIdentity) -> VariantSet {
        VariantGenerator::default().generate(identity).unwrap()
    }

    #[test]
    fn test_exact_match_is_high_confidence() {
        let variants = variants_for(&OrganizationIdentity::new("Providence Medical Group"));
        let claim = EmploymentClaim::new("Providence Medical", "Buyer");

        let result = Matcher::default().matches(&claim, &variants);
        assert!(result.matched);
        assert_eq!(result.matched_variant.as_deref(), Some("providence medical"));
        assert_eq!(result.confidence, MatchConfidence::High);
    }

    #[test]
    fn test_substring_match_is_medium_confidence() {
        let variants = variants_for(&OrganizationIdentity::new("Providence Medical Group"));
        let claim = EmploymentClaim::new("Providence Medical - Oregon Region", "Buyer");

        let result = Matcher::default().matches(&claim, &variants);
        assert!(result.matched);
        assert_eq!(result.confidence, MatchConfidence::Medium);
    }

    #[test]
    fn test_saint_and_st_spellings_match_both_ways() {
        let matcher = Matcher::default();

        let variants = variants_for(&OrganizationIdentity::new("St. Patrick Hospital"));
        let claim = EmploymentClaim::new("Saint Patrick Hospital", "Facilities Manager");
        assert!(matcher.matches(&claim, &variants).matched);

        let variants = variants_for(&OrganizationIdentity::new("Saint Patrick Hospital"));
        let claim = EmploymentClaim::new("St. Patrick Hospital", "Facilities Manager");
        assert!(matcher.matches(&claim, &variants).matched);
    }

    #[test]
    fn test_longest_variant_wins() {
        let identity = OrganizationIdentity::new("St. Vincent Healthcare")
            .with_parent("Intermountain Health")
            .with_city("Billings");
        let variants = variants_for(&identity);
        let claim = EmploymentClaim::new("Intermountain Health - Billings Region", "Director");

        let result = Matcher::default().matches(&claim, &variants);
        assert!(result.matched);
        assert_eq!(
            result.matched_variant.as_deref(),
            Some("intermountain health billings")
        );
    }

    #[test]
    fn test_experience_fallback_used_when_company_missing() {
        let variants = variants_for(&OrganizationIdentity::new("Providence Medical Center"));
        let claim = EmploymentClaim {
            company_name: None,
            title: "Supply Chain Analyst".into(),
            tenure_months: None,
            experience_history: Some(vec![ExperienceEntry::new("Providence Medical")]),
        };

        let result = Matcher::default().matches(&claim, &variants);
        assert!(result.matched);
        // Fallback evidence downgrades one level from exact-match High
        assert_eq!(result.confidence, MatchConfidence::Medium);
    }

    #[test]
    fn test_no_employer_anywhere_is_no_match() {
        let variants = variants_for(&OrganizationIdentity::new("Providence Medical Center"));
        let claim = EmploymentClaim {
            company_name: None,
            title: "Consultant".into(),
            tenure_months: None,
            experience_history: Some(vec![]),
        };

        let result = Matcher::default().matches(&claim, &variants);
        assert_eq!(result, MatchResult::no_match());
    }

    #[test]
    fn test_unrelated_business_sharing_place_name_rejected() {
        let identity = OrganizationIdentity::new("Portneuf Medical Center").with_city("Pocatello");
        let variants = variants_for(&identity);
        let claim = EmploymentClaim::new("Portneuf Bakery", "Owner");

        let result = Matcher::default().matches(&claim, &variants);
        assert!(!result.matched);
    }

    #[test]
    fn test_whitespace_and_case_insensitive() {
        let variants = variants_for(&OrganizationIdentity::new("Mercy Health"));
        let claim = EmploymentClaim::new("  MERCY   HEALTH   ", "Purchasing Agent");

        let result = Matcher::default().matches(&claim, &variants);
        assert!(result.matched);
        assert_eq!(result.confidence, MatchConfidence::High);
    }
}
