//! Variant generation: expands an organization identity into the acceptable
//! name forms a candidate's employer string may match.

use crate::models::{NormalizedName, OrganizationIdentity, VariantSet};

use super::{Normalizer, ResolverError, ResolverResult};

/// Hard cap on variants imposed by the downstream bulk-search service: a
/// request whose match-clause count exceeds this is rejected outright rather
/// than degrading.
pub const SEARCH_CLAUSE_LIMIT: usize = 20;

/// Generator for organization name variants.
#[derive(Debug, Clone)]
pub struct VariantGenerator {
    normalizer: Normalizer,
    max_variants: usize,
}

impl Default for VariantGenerator {
    fn default() -> Self {
        Self::new(Normalizer::new())
    }
}

impl VariantGenerator {
    /// Create a generator with the downstream clause limit as its cap.
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            max_variants: SEARCH_CLAUSE_LIMIT,
        }
    }

    /// Lower the variant cap. Values above [`SEARCH_CLAUSE_LIMIT`] are
    /// clamped to it; the downstream service rejects anything larger.
    pub fn with_max_variants(mut self, max_variants: usize) -> Self {
        self.max_variants = max_variants.min(SEARCH_CLAUSE_LIMIT).max(1);
        self
    }

    /// The effective variant cap.
    pub fn max_variants(&self) -> usize {
        self.max_variants
    }

    /// Generate the variant set for an identity.
    ///
    /// Build order doubles as truncation priority: full local and parent
    /// forms come before their city-qualified forms, so a tight cap keeps
    /// the most general names. Members are normalized, deduplicated
    /// case-insensitively, and returned in first-seen order.
    pub fn generate(&self, identity: &OrganizationIdentity) -> ResolverResult<VariantSet> {
        let local = identity.local_name.trim();
        if local.is_empty() {
            return Err(ResolverError::InvalidIdentity(
                "local_name is empty".into(),
            ));
        }

        let parent = identity
            .parent_name
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty() && !p.eq_ignore_ascii_case(local));

        let city = identity
            .city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        let mut raw_variants: Vec<String> = vec![local.to_string()];
        if let Some(parent) = parent {
            raw_variants.push(parent.to_string());
        }
        if let Some(city) = city {
            raw_variants.push(format!("{local} {city}"));
            if let Some(parent) = parent {
                raw_variants.push(format!("{parent} {city}"));
            }
        }

        let mut variants: Vec<NormalizedName> = Vec::with_capacity(raw_variants.len());
        for raw in &raw_variants {
            if variants.len() >= self.max_variants {
                break;
            }
            let normalized = self.normalizer.normalize(raw);
            if normalized.text.is_empty() {
                continue;
            }
            if variants.iter().any(|v| v.text == normalized.text) {
                continue;
            }
            variants.push(normalized);
        }

        Ok(VariantSet::new(variants))
    }

    /// The normalizer backing this generator.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }
}
