//! Security Services Compliance Profile
//!
//! SIA-licensed workforce: surveillance camera code compliance, lone
//! working and conflict risk assessments, and de-escalation training.

use shared_types::{
    ComplianceItemTemplate, IndustryProfile, ItemType, RequirementTemplate, Sector,
};

pub fn profile() -> IndustryProfile {
    IndustryProfile::new(
        Sector::Security,
        vec![
            ComplianceItemTemplate::required(
                "health_safety_policy",
                "Health & Safety Policy",
                ItemType::Policy,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "gdpr_privacy_notice",
                "Data Protection & CCTV Policy",
                ItemType::Policy,
                "GDPR & Data Protection",
            ),
            ComplianceItemTemplate::required(
                "equality_diversity_policy",
                "Equality & Diversity Policy",
                ItemType::Policy,
                "Equality & Diversity",
            ),
            ComplianceItemTemplate::required(
                "complaints_procedure",
                "Complaints Procedure",
                ItemType::Procedure,
                "Complaints",
            ),
            ComplianceItemTemplate::required(
                "violence_aggression_risk_assessment",
                "Violence & Aggression Risk Assessment",
                ItemType::RiskAssessment,
                "Risk Assessments",
            ),
            ComplianceItemTemplate::required(
                "staff_handbook",
                "Security Officer Handbook",
                ItemType::Policy,
                "Staff Management",
            ),
            ComplianceItemTemplate::required(
                "sia_compliance_guide",
                "SIA Compliance Guide",
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
                "sia_licence",
                "SIA Licence",
                "Security Industry Authority licence",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "dbs",
                "Enhanced DBS Check",
                "Criminal record check",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "first_aid",
                "First Aid Certificate",
                "Emergency first aid",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "conflict_management",
                "Conflict Management",
                "De-escalation training",
                Some(24),
            ),
            RequirementTemplate::mandatory(
                "fire_safety",
                "Fire Safety Training",
                "Fire warden duties",
                Some(12),
            ),
        ],
    )
}
