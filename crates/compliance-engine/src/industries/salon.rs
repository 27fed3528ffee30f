//! Hair / Beauty Salon Compliance Profile
//!
//! EHO-inspected treatments: tool sterilisation, COSHH for chemical
//! products, and NVQ-qualified, insured staff.

use shared_types::{
    ComplianceItemTemplate, IndustryProfile, ItemType, RequirementTemplate, Sector,
};

pub fn profile() -> IndustryProfile {
    IndustryProfile::new(
        Sector::Salon,
        vec![
            ComplianceItemTemplate::required(
                "health_safety_policy",
                "Health & Safety Policy",
                ItemType::Policy,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "gdpr_privacy_notice",
                "Client Data Protection Policy",
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
                "hygiene_policy",
                "Hygiene & Infection Control Policy",
                ItemType::Policy,
                "Infection Control",
            ),
            ComplianceItemTemplate::required(
                "treatment_risk_assessments",
                "Treatment Risk Assessments",
                ItemType::RiskAssessment,
                "Risk Assessments",
            ),
            ComplianceItemTemplate::required(
                "staff_handbook",
                "Staff Handbook",
                ItemType::Policy,
                "Staff Management",
            ),
            ComplianceItemTemplate::required(
                "coshh_assessment",
                "COSHH Assessment",
                ItemType::RiskAssessment,
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
                "nvq_qualification",
                "NVQ Qualification",
                "Level 2/3 hairdressing or beauty",
                None,
            ),
            RequirementTemplate::mandatory(
                "insurance",
                "Public Liability Insurance",
                "Treatment liability cover",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "first_aid",
                "First Aid Certificate",
                "Emergency first aid",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "infection_control",
                "Infection Control",
                "Hygiene and sterilisation",
                Some(24),
            ),
            RequirementTemplate::mandatory(
                "coshh",
                "COSHH Training",
                "Chemical handling safety",
                Some(36),
            ),
        ],
    )
}
