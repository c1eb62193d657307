//! Input models supplied by the orchestration pipeline.

use serde::{Deserialize, Serialize};

/// A target business entity to resolve candidates against.
///
/// Constructed once per search request from CRM account data and read-only
/// afterward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrganizationIdentity {
    /// The specific facility name (e.g., "St. Vincent Healthcare")
    pub local_name: String,
    /// The owning health system, if any (e.g., "Intermountain Health")
    pub parent_name: Option<String>,
    /// City, for geo-disambiguation of common facility names
    pub city: Option<String>,
}

impl OrganizationIdentity {
    /// Create an identity with only a local facility name.
    pub fn new(local_name: impl Into<String>) -> Self {
        Self {
            local_name: local_name.into(),
            parent_name: None,
            city: None,
        }
    }

    /// Attach the owning health system.
    pub fn with_parent(mut self, parent_name: impl Into<String>) -> Self {
        self.parent_name = Some(parent_name.into());
        self
    }

    /// Attach a city for geo-disambiguation.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }
}

/// One entry of a candidate's listed work history.
///
/// Histories arrive ordered most-recent-first, as scraped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperienceEntry {
    /// Employer name as stated on the profile
    pub company: String,
    /// Role title for that entry, if listed
    pub title: Option<String>,
}

impl ExperienceEntry {
    /// Create an entry with just a company name.
    pub fn new(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            title: None,
        }
    }
}

/// A candidate's self-reported employment data, as scraped from their
/// profile.
///
/// The top-level `company_name` is frequently null in scraped data even when
/// valid experience entries exist; consumers must fall back to
/// `experience_history` before concluding no employer is listed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmploymentClaim {
    /// Stated current employer, if the scraper returned one
    pub company_name: Option<String>,
    /// Stated job title
    pub title: String,
    /// Months at the stated employer, if derivable from profile dates
    pub tenure_months: Option<u32>,
    /// Work history, most recent first, if the scraper returned one
    pub experience_history: Option<Vec<ExperienceEntry>>,
}

impl EmploymentClaim {
    /// Create a claim with a stated employer and title.
    pub fn new(company_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            company_name: Some(company_name.into()),
            title: title.into(),
            tenure_months: None,
            experience_history: None,
        }
    }

    /// The best available employer string: the top-level company field when
    /// non-empty, else the most recent experience entry with a non-empty
    /// company.
    pub fn stated_company(&self) -> Option<CompanySource<'_>> {
        if let Some(name) = self.company_name.as_deref() {
            if !name.trim().is_empty() {
                return Some(CompanySource::Direct(name));
            }
        }
        self.experience_history
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|entry| !entry.company.trim().is_empty())
            .map(|entry| CompanySource::Experience(entry.company.as_str()))
    }
}

/// Where a claim's employer string was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanySource<'a> {
    /// Top-level company field
    Direct(&'a str),
    /// Fallback: most recent work-experience entry
    Experience(&'a str),
}

impl<'a> CompanySource<'a> {
    /// The employer string itself.
    pub fn name(&self) -> &'a str {
        match self {
            CompanySource::Direct(name) | CompanySource::Experience(name) => name,
        }
    }

    /// Whether the string came from the experience-history fallback.
    pub fn is_fallback(&self) -> bool {
        matches!(self, CompanySource::Experience(_))
    }
}
