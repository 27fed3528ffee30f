//! Catalogue types: the immutable per-sector templates that compliance items
//! and employee requirements are instantiated from.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::sector::Sector;

/// What kind of artefact a compliance item is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Policy,
    Procedure,
    RiskAssessment,
    Audit,
    Poster,
    Template,
    Operational,
}

impl ItemType {
    /// Default review cadence for items of this type. Policies, procedures,
    /// risk assessments and audits go stale; posters, blank templates and
    /// operational evidence do not carry a cycle of their own.
    pub fn default_review_cycle(self) -> Option<ReviewCycle> {
        match self {
            ItemType::Policy | ItemType::Procedure | ItemType::RiskAssessment | ItemType::Audit => {
                Some(ReviewCycle::Annual)
            }
            ItemType::Poster | ItemType::Template | ItemType::Operational => None,
        }
    }
}

/// How often a completed item must be re-reviewed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewCycle {
    Annual,
    Biennial,
}

impl ReviewCycle {
    pub fn months(self) -> u32 {
        match self {
            ReviewCycle::Annual => 12,
            ReviewCycle::Biennial => 24,
        }
    }

    /// Next review date counted from a completion date
    pub fn next_due(self, from: NaiveDate) -> NaiveDate {
        from + Months::new(self.months())
    }
}

/// A catalogue-defined compliance item template. One key may be shared by
/// several industry profiles (e.g. `health_safety_policy`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceItemTemplate {
    pub key: String,
    pub title: String,
    pub item_type: ItemType,
    pub category: String,
    pub is_required: bool,
    pub review_cycle: Option<ReviewCycle>,
}

impl ComplianceItemTemplate {
    /// A mandatory template with the type's default review cycle
    pub fn required(key: &str, title: &str, item_type: ItemType, category: &str) -> Self {
        ComplianceItemTemplate {
            key: key.to_string(),
            title: title.to_string(),
            item_type,
            category: category.to_string(),
            is_required: true,
            review_cycle: item_type.default_review_cycle(),
        }
    }

    /// An optional template with the type's default review cycle
    pub fn optional(key: &str, title: &str, item_type: ItemType, category: &str) -> Self {
        ComplianceItemTemplate {
            is_required: false,
            ..Self::required(key, title, item_type, category)
        }
    }

    pub fn with_cycle(mut self, cycle: ReviewCycle) -> Self {
        self.review_cycle = Some(cycle);
        self
    }
}

/// A catalogue-defined employee requirement template (certification, check,
/// registration) seeded onto every new employee of a business in the sector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementTemplate {
    pub requirement_type: String,
    pub title: String,
    pub description: String,
    /// Renewal period in months; `None` for one-time requirements
    pub renewal_months: Option<u32>,
    pub mandatory: bool,
}

impl RequirementTemplate {
    pub fn mandatory(
        requirement_type: &str,
        title: &str,
        description: &str,
        renewal_months: Option<u32>,
    ) -> Self {
        RequirementTemplate {
            requirement_type: requirement_type.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            renewal_months,
            mandatory: true,
        }
    }

    pub fn optional(
        requirement_type: &str,
        title: &str,
        description: &str,
        renewal_months: Option<u32>,
    ) -> Self {
        RequirementTemplate {
            mandatory: false,
            ..Self::mandatory(requirement_type, title, description, renewal_months)
        }
    }
}

/// An immutable industry profile: everything the platform knows a business in
/// this sector must keep on top of. Defined at deploy time, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryProfile {
    pub sector: Sector,
    pub name: String,
    pub item_templates: Vec<ComplianceItemTemplate>,
    pub requirement_templates: Vec<RequirementTemplate>,
}

impl IndustryProfile {
    pub fn new(
        sector: Sector,
        item_templates: Vec<ComplianceItemTemplate>,
        requirement_templates: Vec<RequirementTemplate>,
    ) -> Self {
        IndustryProfile {
            sector,
            name: sector.name().to_string(),
            item_templates,
            requirement_templates,
        }
    }

    pub fn template(&self, key: &str) -> Option<&ComplianceItemTemplate> {
        self.item_templates.iter().find(|t| t.key == key)
    }

    pub fn has_template(&self, key: &str) -> bool {
        self.template(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cycles_by_item_type() {
        assert_eq!(
            ItemType::Policy.default_review_cycle(),
            Some(ReviewCycle::Annual)
        );
        assert_eq!(ItemType::Poster.default_review_cycle(), None);
    }

    #[test]
    fn test_annual_cycle_rolls_forward_one_year() {
        let completed = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(
            ReviewCycle::Annual.next_due(completed),
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
        );
    }

    #[test]
    fn test_cycle_clamps_month_end() {
        // 31 Jan + 12 months lands on an existing date; leap-day handling is
        // what matters here.
        let completed = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(
            ReviewCycle::Annual.next_due(completed),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_template_lookup_by_key() {
        let profile = IndustryProfile::new(
            Sector::Retail,
            vec![ComplianceItemTemplate::required(
                "health_safety_policy",
                "Health & Safety Policy",
                ItemType::Policy,
                "Health & Safety",
            )],
            vec![],
        );
        assert!(profile.has_template("health_safety_policy"));
        assert!(profile.template("fire_risk_assessment").is_none());
    }
}
