//! Checklist derivation and resync
//!
//! Keeps a business's compliance item set consistent with its industry
//! profile. The engine only reports the delta; applying it (and archiving
//! retired items) is the persistence layer's job, so historical completion
//! evidence never vanishes inside the core.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use shared_types::{Business, ComplianceItem, Employee, EmployeeRequirement, IndustryProfile};

use crate::error::EngineError;

/// The changes needed to bring an item set in line with a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChecklistDelta {
    /// Fresh items for templates the business has no item for yet
    pub to_create: Vec<ComplianceItem>,
    /// Ids of items whose template is no longer in the profile; retire, do
    /// not delete
    pub to_retire: Vec<Uuid>,
}

impl ChecklistDelta {
    pub fn is_empty(&self) -> bool {
        self.to_create.is_empty() && self.to_retire.is_empty()
    }
}

/// Diff a business's existing items against its current industry profile.
///
/// Idempotent once applied: deriving again over the post-delta item set
/// yields an empty delta. Existing items must belong to the business.
pub fn derive_checklist(
    business: &Business,
    profile: &IndustryProfile,
    existing: &[ComplianceItem],
) -> Result<ChecklistDelta, EngineError> {
    for item in existing {
        if item.business_id != business.id {
            return Err(EngineError::ForeignItem {
                item_id: item.id,
                expected: business.id,
                found: item.business_id,
            });
        }
    }

    let to_create: Vec<ComplianceItem> = profile
        .item_templates
        .iter()
        .filter(|template| !existing.iter().any(|item| item.template_key == template.key))
        .map(|template| ComplianceItem::from_template(business.id, template))
        .collect();

    let to_retire: Vec<Uuid> = existing
        .iter()
        .filter(|item| !profile.has_template(&item.template_key))
        .map(|item| item.id)
        .collect();

    debug!(
        business_id = %business.id,
        sector = %profile.sector,
        created = to_create.len(),
        retired = to_retire.len(),
        "derived checklist delta"
    );

    Ok(ChecklistDelta {
        to_create,
        to_retire,
    })
}

/// Seed a new employee's requirement list from the profile's requirement
/// templates. All requirements start with no dates and classify as pending.
pub fn derive_requirements(
    employee: &Employee,
    profile: &IndustryProfile,
) -> Vec<EmployeeRequirement> {
    profile
        .requirement_templates
        .iter()
        .map(|template| EmployeeRequirement::from_template(employee.id, template))
        .collect()
}
