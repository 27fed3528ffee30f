//! Construction Compliance Profile
//!
//! HSE-regulated site work under CDM 2015: asbestos management, method
//! statements, COSHH and CSCS-carded workers.

use shared_types::{
    ComplianceItemTemplate, IndustryProfile, ItemType, RequirementTemplate, Sector,
};

pub fn profile() -> IndustryProfile {
    IndustryProfile::new(
        Sector::Construction,
        vec![
            ComplianceItemTemplate::required(
                "health_safety_policy",
                "Construction H&S Policy",
                ItemType::Policy,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "gdpr_privacy_notice",
                "Employee Data Protection Policy",
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
                "site_risk_assessment",
                "Site Risk Assessment",
                ItemType::RiskAssessment,
                "Risk Assessments",
            ),
            ComplianceItemTemplate::required(
                "coshh_assessment",
                "COSHH Assessment",
                ItemType::RiskAssessment,
                "Risk Assessments",
            ),
            ComplianceItemTemplate::required(
                "staff_handbook",
                "Site Worker Handbook",
                ItemType::Policy,
                "Staff Management",
            ),
            ComplianceItemTemplate::required(
                "asbestos_management_plan",
                "Asbestos Management Plan",
                ItemType::Policy,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "method_statements",
                "Method Statement Templates",
                ItemType::Template,
                "Risk Assessments",
            ),
            ComplianceItemTemplate::required(
                "environmental_policy",
                "Environmental Policy",
                ItemType::Policy,
                "Environmental",
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
                "cscs",
                "CSCS Card",
                "Construction Skills Certification Scheme card",
                Some(60),
            ),
            RequirementTemplate::mandatory(
                "health_safety",
                "Site Safety (SMSTS/SSSTS)",
                "Site management safety training scheme",
                Some(60),
            ),
            RequirementTemplate::mandatory(
                "first_aid",
                "First Aid Certificate",
                "Emergency first aid at work",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "asbestos",
                "Asbestos Awareness",
                "CAT A asbestos awareness",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "working_at_height",
                "Working at Height",
                "Ladder and scaffold safety",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "manual_handling",
                "Manual Handling",
                "Safe lifting techniques",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "coshh",
                "COSHH Training",
                "Control of substances hazardous to health",
                Some(36),
            ),
        ],
    )
}
