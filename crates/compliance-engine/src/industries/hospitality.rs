//! Hospitality Compliance Profile
//!
//! EHO-inspected hotels and B&Bs: HACCP food safety, Natasha's Law allergen
//! management, fire safety under the Regulatory Reform Order 2005 and
//! premises licensing.

use shared_types::{
    ComplianceItemTemplate, IndustryProfile, ItemType, RequirementTemplate, Sector,
};

pub fn profile() -> IndustryProfile {
    IndustryProfile::new(
        Sector::Hospitality,
        vec![
            ComplianceItemTemplate::required(
                "health_safety_policy",
                "Health & Safety Policy",
                ItemType::Policy,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "gdpr_privacy_notice",
                "Guest Data Protection Policy",
                ItemType::Policy,
                "GDPR & Data Protection",
            ),
            ComplianceItemTemplate::required(
                "equality_accessibility_policy",
                "Equality & Accessibility Policy",
                ItemType::Policy,
                "Equality & Diversity",
            ),
            ComplianceItemTemplate::required(
                "complaints_procedure",
                "Guest Complaints Procedure",
                ItemType::Procedure,
                "Complaints",
            ),
            ComplianceItemTemplate::required(
                "food_safety_risk_assessment",
                "Food Safety Risk Assessment",
                ItemType::RiskAssessment,
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
                "allergen_policy",
                "Allergen Management Policy",
                ItemType::Policy,
                "Food Safety",
            ),
            ComplianceItemTemplate::required(
                "licensing_guide",
                "Licensing Compliance Guide",
                ItemType::Operational,
                "Regulatory",
            ),
            ComplianceItemTemplate::required(
                "fire_risk_assessment",
                "Fire Risk Assessment",
                ItemType::RiskAssessment,
                "Fire Safety",
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
                "Level 2 food safety in catering",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "allergen_training",
                "Allergen Awareness",
                "Food allergen training (Natasha's Law)",
                Some(36),
            ),
            RequirementTemplate::optional(
                "personal_licence",
                "Personal Licence",
                "Alcohol licensing qualification",
                None,
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
                "Fire awareness and evacuation",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "health_safety",
                "Health & Safety",
                "General H&S awareness",
                Some(36),
            ),
        ],
    )
}
