//! Declarative title screening.
//!
//! A rule table (keyword → accept/reject weight) replacing ad hoc string
//! checks: clinical roles are rejected outright, purchasing and leadership
//! keywords accumulate accept weight, anything else is neutral. This only
//! classifies titles it is given; it never broadens the candidate pool.

use crate::models::{EmploymentClaim, TitleDecision, TitleVerdict};

/// Action a rule takes when its keyword appears in a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleAction {
    /// Count toward decision-maker relevance
    Accept,
    /// Disqualify (clinical or otherwise irrelevant role)
    Reject,
}

/// One keyword rule.
#[derive(Debug, Clone)]
pub struct TitleRule {
    /// Lowercase keyword matched as a substring of the title
    pub keyword: String,
    /// Accept or reject
    pub action: TitleAction,
    /// Relevance weight contributed when an accept rule matches
    pub weight: i32,
}

impl TitleRule {
    /// An accept rule.
    pub fn accept(keyword: &str, weight: i32) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
            action: TitleAction::Accept,
            weight,
        }
    }

    /// A reject rule.
    pub fn reject(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
            action: TitleAction::Reject,
            weight: 0,
        }
    }
}

/// Screen for candidate job titles.
#[derive(Debug, Clone)]
pub struct TitleScreen {
    rules: Vec<TitleRule>,
}

impl Default for TitleScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleScreen {
    /// Create a screen with the default healthcare-purchasing rule table.
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Create a screen from an explicit rule table.
    pub fn with_rules(rules: Vec<TitleRule>) -> Self {
        Self { rules }
    }

    /// Add a rule to the table.
    pub fn add_rule(&mut self, rule: TitleRule) {
        self.rules.push(rule);
    }

    /// Evaluate a claim's title.
    ///
    /// Any matching reject rule rejects: a "Nurse Manager" is a clinical
    /// role even though "manager" is an accept keyword. Otherwise matching
    /// accept rules accumulate weight; no match at all is neutral.
    pub fn evaluate(&self, claim: &EmploymentClaim) -> TitleVerdict {
        let title = claim.title.to_lowercase();
        if title.trim().is_empty() {
            return TitleVerdict::neutral();
        }

        let mut accept_weight = 0i32;
        let mut accepted = false;

        for rule in &self.rules {
            if !title.contains(rule.keyword.as_str()) {
                continue;
            }
            match rule.action {
                TitleAction::Reject => {
                    return TitleVerdict {
                        decision: TitleDecision::Reject,
                        weight: 0,
                    };
                }
                TitleAction::Accept => {
                    accepted = true;
                    accept_weight += rule.weight;
                }
            }
        }

        if accepted {
            TitleVerdict {
                decision: TitleDecision::Accept,
                weight: accept_weight,
            }
        } else {
            TitleVerdict::neutral()
        }
    }
}

/// Default rule table for healthcare purchasing decision-makers.
fn default_rules() -> Vec<TitleRule> {
    vec![
        // Clinical and care-delivery roles are never purchasing leads
        TitleRule::reject("nurse"),
        TitleRule::reject("physician"),
        TitleRule::reject("surgeon"),
        TitleRule::reject("therapist"),
        TitleRule::reject("pharmacist"),
        TitleRule::reject("technician"),
        TitleRule::reject("paramedic"),
        TitleRule::reject("resident"),
        TitleRule::reject("student"),
        TitleRule::reject("volunteer"),
        // Purchasing signals
        TitleRule::accept("procurement", 30),
        TitleRule::accept("purchasing", 30),
        TitleRule::accept("supply chain", 25),
        TitleRule::accept("materials management", 25),
        TitleRule::accept("sourcing", 20),
        // Facilities and operations leadership
        TitleRule::accept("facilities", 20),
        TitleRule::accept("plant operations", 20),
        TitleRule::accept("administrator", 15),
        TitleRule::accept("director", 10),
        TitleRule::accept("manager", 5),
        // Executives
        TitleRule::accept("chief", 15),
        TitleRule::accept("president", 15),
        TitleRule::accept("vice president", 10),
        TitleRule::accept("vp", 10),
    ]
}
