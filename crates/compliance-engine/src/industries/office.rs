//! Office / Professional Services Compliance Profile
//!
//! HSE and ICO obligations for desk-based businesses: DSE assessments, UK
//! GDPR documentation and remote working arrangements.

use shared_types::{
    ComplianceItemTemplate, IndustryProfile, ItemType, RequirementTemplate, Sector,
};

pub fn profile() -> IndustryProfile {
    IndustryProfile::new(
        Sector::Office,
        vec![
            ComplianceItemTemplate::required(
                "health_safety_policy",
                "Office Health & Safety Policy",
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
                "dse_risk_assessment",
                "DSE Risk Assessment",
                ItemType::RiskAssessment,
                "Risk Assessments",
            ),
            ComplianceItemTemplate::required(
                "fire_safety_policy",
                "Fire Safety Policy",
                ItemType::Policy,
                "Fire Safety",
            ),
            ComplianceItemTemplate::required(
                "staff_handbook",
                "Employee Handbook",
                ItemType::Policy,
                "Staff Management",
            ),
            ComplianceItemTemplate::required(
                "ico_gdpr_guide",
                "ICO GDPR Guide",
                ItemType::Operational,
                "Regulatory",
            ),
            ComplianceItemTemplate::required(
                "remote_working_policy",
                "Remote Working Policy",
                ItemType::Policy,
                "Health & Safety",
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
                "dse",
                "DSE Assessment",
                "Display screen equipment assessment",
                Some(24),
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
                "Fire warden training",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "gdpr",
                "GDPR Training",
                "Data protection awareness",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "health_safety",
                "Health & Safety",
                "Office H&S awareness",
                Some(36),
            ),
        ],
    )
}
