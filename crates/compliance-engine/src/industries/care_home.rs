//! Care Home Compliance Profile
//!
//! CQC-registered residential care: safeguarding under the Care Act 2014,
//! mental capacity and DoLS, medication administration and falls prevention.

use shared_types::{
    ComplianceItemTemplate, IndustryProfile, ItemType, RequirementTemplate, Sector,
};

pub fn profile() -> IndustryProfile {
    IndustryProfile::new(
        Sector::CareHome,
        vec![
            ComplianceItemTemplate::required(
                "safeguarding_adults_policy",
                "Safeguarding Adults Policy",
                ItemType::Policy,
                "Safeguarding",
            ),
            ComplianceItemTemplate::required(
                "mental_capacity_policy",
                "Mental Capacity & Best Interests Policy",
                ItemType::Policy,
                "Regulatory",
            ),
            ComplianceItemTemplate::required(
                "medication_administration_policy",
                "Medication Administration Policy",
                ItemType::Policy,
                "Medication",
            ),
            ComplianceItemTemplate::required(
                "falls_prevention_policy",
                "Falls Prevention Policy",
                ItemType::Policy,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "moving_handling_policy",
                "Moving & Handling Policy",
                ItemType::Policy,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "infection_control_policy",
                "Infection Control Policy",
                ItemType::Policy,
                "Infection Control",
            ),
            ComplianceItemTemplate::required(
                "complaints_procedure",
                "Complaints Procedure",
                ItemType::Procedure,
                "Complaints",
            ),
            ComplianceItemTemplate::required(
                "care_plan_templates",
                "Care Plan Templates",
                ItemType::Template,
                "Client Care",
            ),
            ComplianceItemTemplate::required(
                "staff_supervision_policy",
                "Staff Supervision Policy",
                ItemType::Policy,
                "Staff Management",
            ),
            ComplianceItemTemplate::required(
                "resident_privacy_notice",
                "Resident Privacy Notice",
                ItemType::Policy,
                "GDPR & Data Protection",
            ),
            ComplianceItemTemplate::required(
                "fire_risk_assessment",
                "Fire Risk Assessment",
                ItemType::RiskAssessment,
                "Fire Safety",
            ),
            ComplianceItemTemplate::required(
                "manual_handling_risk_assessment",
                "Manual Handling Risk Assessment",
                ItemType::RiskAssessment,
                "Health & Safety",
            ),
        ],
        vec![
            RequirementTemplate::mandatory(
                "dbs",
                "Enhanced DBS Check",
                "Enhanced DBS with adults barred list",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "right_to_work",
                "Right to Work",
                "Proof of eligibility to work in the UK",
                None,
            ),
            RequirementTemplate::mandatory(
                "care_certificate",
                "Care Certificate",
                "15 standards care certificate completion",
                None,
            ),
            RequirementTemplate::mandatory(
                "safeguarding",
                "Safeguarding Adults Training",
                "Adult safeguarding level 2",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "manual_handling",
                "Manual Handling Training",
                "Moving and handling of residents",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "medication",
                "Medication Administration",
                "Safe handling of medication",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "first_aid",
                "First Aid Certificate",
                "First aid at work certificate",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "fire_safety",
                "Fire Safety Training",
                "Fire awareness and evacuation",
                Some(12),
            ),
            RequirementTemplate::optional(
                "food_hygiene",
                "Food Hygiene Certificate",
                "Level 2 food hygiene",
                Some(36),
            ),
            RequirementTemplate::optional(
                "dementia",
                "Dementia Awareness",
                "Dementia care training",
                Some(24),
            ),
        ],
    )
}
