//! Healthcare Provider Compliance Profile
//!
//! CQC-registered providers: fundamental standards documentation, duty of
//! candour, medicines management and NMC/GMC professional registration.

use shared_types::{
    ComplianceItemTemplate, IndustryProfile, ItemType, RequirementTemplate, Sector,
};

pub fn profile() -> IndustryProfile {
    IndustryProfile::new(
        Sector::Healthcare,
        vec![
            ComplianceItemTemplate::required(
                "health_safety_policy",
                "Health & Safety Policy",
                ItemType::Policy,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "safeguarding_policy",
                "Safeguarding Policy (Adults & Children)",
                ItemType::Policy,
                "Safeguarding",
            ),
            ComplianceItemTemplate::required(
                "infection_control_policy",
                "Infection Prevention & Control Policy",
                ItemType::Policy,
                "Infection Control",
            ),
            ComplianceItemTemplate::required(
                "medicines_management_policy",
                "Medicines Management Policy",
                ItemType::Policy,
                "Medication",
            ),
            ComplianceItemTemplate::required(
                "information_governance_policy",
                "Information Governance Policy",
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
                "clinical_risk_assessment",
                "Clinical Risk Assessment",
                ItemType::RiskAssessment,
                "Risk Assessments",
            ),
            ComplianceItemTemplate::required(
                "consent_policy",
                "Consent Policy",
                ItemType::Policy,
                "Client Care",
            ),
            ComplianceItemTemplate::required(
                "duty_of_candour_policy",
                "Duty of Candour Policy",
                ItemType::Policy,
                "Regulatory",
            ),
            ComplianceItemTemplate::required(
                "staff_training_matrix",
                "Staff Training Matrix",
                ItemType::Audit,
                "Staff Management",
            ),
            ComplianceItemTemplate::required(
                "fire_risk_assessment",
                "Fire Risk Assessment",
                ItemType::RiskAssessment,
                "Fire Safety",
            ),
            ComplianceItemTemplate::required(
                "cqc_statement_of_purpose",
                "CQC Statement of Purpose",
                ItemType::Operational,
                "Regulatory",
            ),
        ],
        vec![
            RequirementTemplate::mandatory(
                "dbs",
                "Enhanced DBS Check",
                "Enhanced DBS with barred lists check",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "right_to_work",
                "Right to Work",
                "Proof of eligibility to work in the UK",
                None,
            ),
            RequirementTemplate::mandatory(
                "nmc_registration",
                "NMC Registration",
                "Nursing and Midwifery Council registration",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "indemnity",
                "Professional Indemnity",
                "Valid professional indemnity insurance",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "revalidation",
                "Professional Revalidation",
                "NMC/GMC revalidation completed",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "hep_b",
                "Hepatitis B Vaccination",
                "Hepatitis B vaccination status",
                Some(60),
            ),
            RequirementTemplate::mandatory(
                "basic_life_support",
                "Basic Life Support Training",
                "BLS/ILS certification",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "safeguarding",
                "Safeguarding Training",
                "Level 3 safeguarding training",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "manual_handling",
                "Manual Handling Training",
                "Moving and handling certification",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "infection_control",
                "Infection Control Training",
                "Infection prevention and control",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "information_governance",
                "Information Governance",
                "Data Security & Protection Toolkit",
                Some(12),
            ),
        ],
    )
}
