//! Compliance item state transitions
//!
//! Pure helpers the request layer calls when a user acts on an item. Every
//! transition takes an explicit `now`; completing transitions stamp the
//! review history and roll `next_review_due` forward from the item's cycle.

use chrono::{DateTime, Utc};

use shared_types::{ComplianceItem, ItemStatus};

/// Mark an item as acknowledged by the business
pub fn acknowledge(item: &mut ComplianceItem, now: DateTime<Utc>) {
    item.status = ItemStatus::Acknowledged;
    item.acknowledged_at = Some(now);
    stamp_review(item, now);
}

/// Record that supporting evidence has been uploaded for an item
pub fn record_upload(item: &mut ComplianceItem, now: DateTime<Utc>) {
    item.status = ItemStatus::Uploaded;
    stamp_review(item, now);
}

/// Direct status write. Completing statuses stamp the review history;
/// anything else leaves the existing history untouched.
pub fn set_status(item: &mut ComplianceItem, status: ItemStatus, now: DateTime<Utc>) {
    item.status = status;
    if status.is_complete() {
        stamp_review(item, now);
    }
}

fn stamp_review(item: &mut ComplianceItem, now: DateTime<Utc>) {
    item.last_reviewed = Some(now);
    item.next_review_due = item
        .review_cycle
        .map(|cycle| cycle.next_due(now.date_naive()));
}
