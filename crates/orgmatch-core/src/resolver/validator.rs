//! Employment classification.
//!
//! A pure, infallible classification applied once per candidate: missing
//! data degrades confidence instead of erroring, because the downstream
//! ranking stage needs a usable signal for every candidate rather than
//! dropped records.

use crate::models::{EmploymentClaim, EmploymentStatus, MatchResult};

/// Confidence floor below which a candidate is not treated as a confident
/// current employee downstream.
pub const CURRENT_EMPLOYEE_FLOOR: u8 = 70;

/// Confidence when a match exists but no tenure signal does.
const MATCHED_NO_TENURE_CONFIDENCE: u8 = 50;

/// Ceiling for tenure-derived confidence; tenure alone never proves
/// current employment.
const TENURE_CONFIDENCE_CAP: u8 = 95;

/// Classifier for a candidate's employment relationship.
#[derive(Debug, Clone, Default)]
pub struct EmploymentValidator;

impl EmploymentValidator {
    /// Create a validator.
    pub fn new() -> Self {
        Self
    }

    /// Classify a claim given its match outcome. Never errors.
    ///
    /// A "retired" marker in the title overrides everything, including a
    /// positive match: the candidate used to work there.
    pub fn classify(&self, claim: &EmploymentClaim, match_result: &MatchResult) -> EmploymentStatus {
        if claim.title.to_lowercase().contains("retired") {
            return EmploymentStatus::Former { confidence: 100 };
        }

        if !match_result.matched {
            return EmploymentStatus::Unknown { confidence: 0 };
        }

        match claim.tenure_months {
            Some(months) if months > 0 => EmploymentStatus::Current {
                confidence: tenure_confidence(months),
            },
            _ => EmploymentStatus::Current {
                confidence: MATCHED_NO_TENURE_CONFIDENCE,
            },
        }
    }
}

/// Longer ongoing tenure is stronger evidence the employment is current.
/// 20 months reaches the 70-point floor; the scale caps at 95.
fn tenure_confidence(months: u32) -> u8 {
    let scaled = 50u32.saturating_add(months);
    scaled.min(TENURE_CONFIDENCE_CAP as u32) as u8
}
