//! Orgmatch Core Library
//!
//! Company identity resolution for healthcare B2B prospect discovery:
//! decides whether a scraped candidate profile's stated employer matches a
//! target healthcare organization, and classifies the employment
//! relationship with a confidence score.
//!
//! # Architecture
//!
//! ```text
//! OrganizationIdentity ──► Variant Generation ──► VariantSet
//!                                                    │
//! EmploymentClaim ────────────────► Matching ◄───────┘
//!   (per candidate)                    │
//!                                 MatchResult
//!                                      │
//!                        Employment Classification
//!                                      │
//!                                Title Screen
//!                                      │
//!                            CandidateAssessment ──► ranking stage
//! ```
//!
//! # Core Principle
//!
//! **Healthcare identifier tokens survive normalization.** Stripping
//! "Medical"/"Health"/"Healthcare"/"Clinic" collapses facility names to bare
//! place-names and matches unrelated businesses; the normalizer refuses to
//! strip them regardless of configuration.
//!
//! Everything here is a pure function of its inputs: no I/O, no shared
//! mutable state, safe to call concurrently across any number of candidate
//! profiles.
//!
//! # Modules
//!
//! - [`models`]: Domain types (OrganizationIdentity, EmploymentClaim, MatchResult, etc.)
//! - [`resolver`]: The pipeline stages (normalizer, variant generator, matcher, validator, title screen)

pub mod models;
pub mod resolver;

// Re-export commonly used types
pub use models::{
    CandidateAssessment, ConfidenceBand, EmploymentClaim, EmploymentStatus, ExperienceEntry,
    MatchConfidence, MatchResult, NormalizedName, OrganizationIdentity, TitleDecision,
    TitleVerdict, VariantSet,
};
pub use resolver::{
    EmploymentValidator, Matcher, Normalizer, NormalizerConfig, Resolver, ResolverError,
    ResolverResult, TitleRule, TitleScreen, VariantGenerator, SEARCH_CLAUSE_LIMIT,
};
