//! Engine output types, serialized to JSON by the request layer as-is

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Traffic-light summary of a business's overall standing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLabel {
    OnTrack,
    NeedsAttention,
    Overdue,
}

/// Per-category completion counts over required items only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub required_total: u32,
    pub required_completed: u32,
}

/// Compliance readiness score for one business
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceScore {
    pub business_id: Uuid,
    /// Percentage of required items complete, 0..=100; 100 when nothing is
    /// required (vacuous completeness)
    pub score_percent: u8,
    pub required_total: u32,
    pub completed_total: u32,
    pub missing_count: u32,
    pub needs_review_count: u32,
    pub overdue_count: u32,
    /// Category name -> counts; categories with no required items are omitted.
    /// BTreeMap so iteration (and JSON key) order is deterministic.
    pub breakdown: BTreeMap<String, CategoryBreakdown>,
    pub status_label: StatusLabel,
}

/// Per-employee requirement summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    pub employee_id: Uuid,
    pub total_requirements: u32,
    pub valid_count: u32,
    pub expiring_soon_count: u32,
    pub expired_count: u32,
    pub pending_count: u32,
    /// Percentage of requirements currently valid; 100 when there are none
    pub compliance_rate: u8,
}

/// An expired requirement, annotated for the dashboard's overdue list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverdueEntry {
    pub employee_id: Uuid,
    pub employee_name: String,
    pub requirement_id: Uuid,
    pub requirement_title: String,
    pub expiry_date: NaiveDate,
    pub days_overdue: i64,
}

/// A requirement inside the 30-day expiry window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiringEntry {
    pub employee_id: Uuid,
    pub employee_name: String,
    pub requirement_id: Uuid,
    pub requirement_title: String,
    pub expiry_date: NaiveDate,
    pub days_until_expiry: i64,
}

/// Workforce compliance overview across every employee of a business
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewReport {
    pub total_employees: u32,
    pub total_requirements: u32,
    pub valid_requirements: u32,
    pub expired_requirements: u32,
    pub expiring_soon_requirements: u32,
    pub pending_requirements: u32,
    pub overall_compliance_rate: u8,
    /// Every expired requirement, most overdue first
    pub overdue_items: Vec<OverdueEntry>,
    /// Every requirement expiring within 30 days, soonest first
    pub expiring_soon_items: Vec<ExpiringEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_wire_shape() {
        let mut breakdown = BTreeMap::new();
        breakdown.insert(
            "Fire Safety".to_string(),
            CategoryBreakdown {
                required_total: 2,
                required_completed: 1,
            },
        );
        let score = ComplianceScore {
            business_id: Uuid::nil(),
            score_percent: 50,
            required_total: 2,
            completed_total: 1,
            missing_count: 1,
            needs_review_count: 0,
            overdue_count: 0,
            breakdown,
            status_label: StatusLabel::NeedsAttention,
        };

        let json: serde_json::Value = serde_json::to_value(&score).unwrap();
        assert_eq!(json["status_label"], "needs_attention");
        assert_eq!(json["breakdown"]["Fire Safety"]["required_total"], 2);
        assert_eq!(json["score_percent"], 50);
    }

    #[test]
    fn test_breakdown_keys_are_sorted() {
        let mut breakdown = BTreeMap::new();
        breakdown.insert("Safeguarding".to_string(), CategoryBreakdown::default());
        breakdown.insert("Fire Safety".to_string(), CategoryBreakdown::default());
        let keys: Vec<_> = breakdown.keys().cloned().collect();
        assert_eq!(keys, vec!["Fire Safety", "Safeguarding"]);
    }
}
