//! Company identity resolver.
//!
//! Pipeline: Variant Generation → Matching → Employment Classification → Title Screen

mod matcher;
mod normalizer;
mod title;
mod validator;
mod variants;

pub use matcher::*;
pub use normalizer::*;
pub use title::*;
pub use validator::*;
pub use variants::*;

use crate::models::{CandidateAssessment, EmploymentClaim, OrganizationIdentity, VariantSet};
use thiserror::Error;

/// Resolver errors.
#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),
}

pub type ResolverResult<T> = Result<T, ResolverError>;

/// Main resolver that coordinates the full pipeline.
///
/// Pure and immutable after construction; safe to share across threads and
/// call concurrently, one invocation per scraped candidate profile.
#[derive(Debug, Clone)]
pub struct Resolver {
    generator: VariantGenerator,
    matcher: Matcher,
    validator: EmploymentValidator,
    title_screen: TitleScreen,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Create a resolver with default configuration.
    pub fn new() -> Self {
        Self::with_normalizer(Normalizer::new())
    }

    /// Create a resolver whose stages share one normalizer configuration.
    pub fn with_normalizer(normalizer: Normalizer) -> Self {
        Self {
            generator: VariantGenerator::new(normalizer.clone()),
            matcher: Matcher::new(normalizer),
            validator: EmploymentValidator::new(),
            title_screen: TitleScreen::new(),
        }
    }

    /// Replace the variant cap (clamped to the downstream clause limit).
    pub fn with_max_variants(mut self, max_variants: usize) -> Self {
        self.generator = self.generator.with_max_variants(max_variants);
        self
    }

    /// Replace the title screen rule table.
    pub fn with_title_screen(mut self, title_screen: TitleScreen) -> Self {
        self.title_screen = title_screen;
        self
    }

    /// Resolve a batch of candidate claims against one target identity.
    ///
    /// The variant set is generated once and reused for every claim.
    /// `InvalidIdentity` is recoverable at the batch level: callers skip the
    /// identity and continue with the rest.
    pub fn resolve(
        &self,
        identity: &OrganizationIdentity,
        claims: &[EmploymentClaim],
    ) -> ResolverResult<Vec<CandidateAssessment>> {
        let variants = self.generator.generate(identity)?;
        Ok(claims
            .iter()
            .map(|claim| self.assess(&variants, claim))
            .collect())
    }

    /// Assess a single claim against a pre-generated variant set.
    pub fn assess(&self, variants: &VariantSet, claim: &EmploymentClaim) -> CandidateAssessment {
        let match_result = self.matcher.matches(claim, variants);
        let employment = self.validator.classify(claim, &match_result);
        let title = self.title_screen.evaluate(claim);

        CandidateAssessment {
            match_result,
            employment,
            title,
        }
    }

    /// Generate the variant set for an identity (for callers that serialize
    /// it into a downstream bulk-search request).
    pub fn variants(&self, identity: &OrganizationIdentity) -> ResolverResult<VariantSet> {
        self.generator.generate(identity)
    }

    /// The variant generator.
    pub fn generator(&self) -> &VariantGenerator {
        &self.generator
    }

    /// The matcher.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// The title screen.
    pub fn title_screen(&self) -> &TitleScreen {
        &self.title_screen
    }
}
