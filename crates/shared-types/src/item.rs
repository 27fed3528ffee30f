//! Per-business compliance item instances

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalogue::{ComplianceItemTemplate, ItemType, ReviewCycle};

/// Lifecycle status of a compliance item. Closed set; scoring and transition
/// logic match on it exhaustively so a new status is a compile-time change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Missing,
    Draft,
    Uploaded,
    Acknowledged,
    Approved,
    NeedsReview,
    Overdue,
}

impl ItemStatus {
    /// Statuses that count as complete for scoring purposes
    pub fn is_complete(self) -> bool {
        matches!(
            self,
            ItemStatus::Uploaded | ItemStatus::Acknowledged | ItemStatus::Approved
        )
    }
}

/// One trackable compliance artefact owned by a business, instantiated from a
/// catalogue template at onboarding or industry-change time. Category, type,
/// required flag and review cycle are copied from the template so the item
/// stays stable if the catalogue changes underneath it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceItem {
    pub id: Uuid,
    pub business_id: Uuid,
    pub template_key: String,
    pub title: String,
    pub item_type: ItemType,
    pub category: String,
    pub is_required: bool,
    pub review_cycle: Option<ReviewCycle>,
    pub status: ItemStatus,
    pub last_reviewed: Option<DateTime<Utc>>,
    /// Set when the item is marked complete; `None` until then
    pub next_review_due: Option<NaiveDate>,
    pub acknowledged_at: Option<DateTime<Utc>>,
}

impl ComplianceItem {
    /// Instantiate a fresh item from a catalogue template. New items start
    /// `missing` with no review history.
    pub fn from_template(business_id: Uuid, template: &ComplianceItemTemplate) -> Self {
        ComplianceItem {
            id: Uuid::new_v4(),
            business_id,
            template_key: template.key.clone(),
            title: template.title.clone(),
            item_type: template.item_type,
            category: template.category.clone(),
            is_required: template.is_required,
            review_cycle: template.review_cycle,
            status: ItemStatus::Missing,
            last_reviewed: None,
            next_review_due: None,
            acknowledged_at: None,
        }
    }
}
