//! Cleaning Services Compliance Profile
//!
//! HSE-regulated contract cleaning: COSHH for cleaning chemicals, manual
//! handling, and DBS-checked staff working on client premises.

use shared_types::{
    ComplianceItemTemplate, IndustryProfile, ItemType, RequirementTemplate, Sector,
};

pub fn profile() -> IndustryProfile {
    IndustryProfile::new(
        Sector::Cleaning,
        vec![
            ComplianceItemTemplate::required(
                "health_safety_policy",
                "Health & Safety Policy",
                ItemType::Policy,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "gdpr_privacy_notice",
                "Data Protection Policy",
                ItemType::Policy,
                "GDPR & Data Protection",
            ),
            ComplianceItemTemplate::required(
                "complaints_procedure",
                "Complaints Procedure",
                ItemType::Procedure,
                "Complaints",
            ),
            ComplianceItemTemplate::required(
                "coshh_assessment",
                "COSHH Assessment",
                ItemType::RiskAssessment,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "manual_handling_policy",
                "Manual Handling Policy",
                ItemType::Policy,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "staff_handbook",
                "Staff Handbook",
                ItemType::Policy,
                "Staff Management",
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
                "dbs",
                "Basic DBS Check",
                "Criminal record check",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "coshh",
                "COSHH Training",
                "Safe use of cleaning chemicals",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "manual_handling",
                "Manual Handling",
                "Safe lifting and carrying",
                Some(36),
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
