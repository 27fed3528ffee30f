//! Veterinary Practice Compliance Profile
//!
//! RCVS Practice Standards Scheme: controlled drugs handling, zoonotic risk
//! assessment, X-ray safety and RCVS-registered clinical staff.

use shared_types::{
    ComplianceItemTemplate, IndustryProfile, ItemType, RequirementTemplate, Sector,
};

pub fn profile() -> IndustryProfile {
    IndustryProfile::new(
        Sector::Veterinary,
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
                "clinical_risk_assessment",
                "Clinical Risk Assessment",
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
                "rcvs_practice_standards",
                "RCVS Practice Standards",
                ItemType::Operational,
                "Regulatory",
            ),
            ComplianceItemTemplate::required(
                "controlled_drugs_policy",
                "Controlled Drugs Policy",
                ItemType::Policy,
                "Regulatory",
            ),
            ComplianceItemTemplate::required(
                "infection_control_policy",
                "Infection Control Policy",
                ItemType::Policy,
                "Infection Control",
            ),
            ComplianceItemTemplate::required(
                "radiation_protection_policy",
                "Radiation Protection Policy",
                ItemType::Policy,
                "Health & Safety",
            ),
        ],
        vec![
            RequirementTemplate::mandatory(
                "dbs",
                "Basic DBS Check",
                "Basic criminal record check",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "right_to_work",
                "Right to Work",
                "Proof of eligibility to work in the UK",
                None,
            ),
            RequirementTemplate::mandatory(
                "rcvs_registration",
                "RCVS Registration",
                "Royal College of Veterinary Surgeons registration",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "cpd",
                "CPD Record",
                "35 hours CPD annually",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "indemnity",
                "Professional Indemnity",
                "Veterinary defence insurance",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "controlled_drugs",
                "Controlled Drugs Training",
                "Handling of veterinary medicines",
                Some(24),
            ),
            RequirementTemplate::optional(
                "radiation_protection",
                "Radiation Protection",
                "X-ray safety training",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "first_aid",
                "First Aid Certificate",
                "Workplace first aid",
                Some(36),
            ),
        ],
    )
}
