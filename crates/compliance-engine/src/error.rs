use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The engine's functions are total over well-formed input; these are the only
/// two conditions treated as invalid rather than defaulted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("compliance item {item_id} belongs to business {found}, expected {expected}")]
    ForeignItem {
        item_id: Uuid,
        expected: Uuid,
        found: Uuid,
    },

    #[error("requirement {requirement_id}: issue date {issue_date} is after expiry date {expiry_date}")]
    InvertedDates {
        requirement_id: Uuid,
        issue_date: NaiveDate,
        expiry_date: NaiveDate,
    },
}
