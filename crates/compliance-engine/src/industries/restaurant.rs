//! Restaurant / Cafe Compliance Profile
//!
//! EHO and FSA oversight: HACCP-based food safety management, allergen
//! control, and the food hygiene rating scheme.

use shared_types::{
    ComplianceItemTemplate, IndustryProfile, ItemType, RequirementTemplate, Sector,
};

pub fn profile() -> IndustryProfile {
    IndustryProfile::new(
        Sector::Restaurant,
        vec![
            ComplianceItemTemplate::required(
                "health_safety_policy",
                "Health & Safety Policy",
                ItemType::Policy,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "gdpr_privacy_notice",
                "Customer Data Policy",
                ItemType::Policy,
                "GDPR & Data Protection",
            ),
            ComplianceItemTemplate::required(
                "food_safety_management",
                "Food Safety Management System",
                ItemType::Policy,
                "Food Safety",
            ),
            ComplianceItemTemplate::required(
                "allergen_policy",
                "Allergen Policy",
                ItemType::Policy,
                "Food Safety",
            ),
            ComplianceItemTemplate::required(
                "fire_safety_policy",
                "Fire Safety Policy",
                ItemType::Policy,
                "Fire Safety",
            ),
            ComplianceItemTemplate::required(
                "staff_handbook",
                "Staff Handbook",
                ItemType::Policy,
                "Staff Management",
            ),
            ComplianceItemTemplate::required(
                "food_hygiene_rating_guide",
                "Food Hygiene Rating Guide",
                ItemType::Operational,
                "Regulatory",
            ),
        ],
        vec![
            RequirementTemplate::mandatory(
                "right_to_work",
                "Right to Work",
                "Proof of eligibility to work in the UK",
                None,
            ),
            RequirementTemplate::mandatory(
                "food_hygiene",
                "Food Hygiene Certificate",
                "Level 2 food safety",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "allergen_training",
                "Allergen Awareness",
                "14 allergens training",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "haccp",
                "HACCP Training",
                "Food safety management",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "first_aid",
                "First Aid Certificate",
                "Emergency first aid",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "fire_safety",
                "Fire Safety Training",
                "Fire safety awareness",
                Some(12),
            ),
        ],
    )
}
