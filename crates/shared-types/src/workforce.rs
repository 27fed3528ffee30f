//! Employees and their dated compliance requirements

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalogue::RequirementTemplate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub business_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub start_date: Option<NaiveDate>,
    pub is_active: bool,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A dated credential or certification tracked per employee, independent of
/// the business-level compliance items. Status is derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRequirement {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub requirement_type: String,
    pub title: String,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub reference_number: Option<String>,
}

impl EmployeeRequirement {
    /// Seed a blank requirement from a catalogue template. No dates yet, so
    /// it classifies as `pending` until the employer records them.
    pub fn from_template(employee_id: Uuid, template: &RequirementTemplate) -> Self {
        EmployeeRequirement {
            id: Uuid::new_v4(),
            employee_id,
            requirement_type: template.requirement_type.clone(),
            title: template.title.clone(),
            issue_date: None,
            expiry_date: None,
            reference_number: None,
        }
    }
}

/// Derived lifecycle state of a requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementStatus {
    Valid,
    ExpiringSoon,
    Expired,
    Pending,
}

/// Classifier output: status plus signed days to expiry (negative when the
/// requirement has lapsed, `None` when there is no expiry date).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementState {
    pub status: RequirementStatus,
    pub days_until_expiry: Option<i64>,
}
