//! Dental Practice Compliance Profile
//!
//! CQC-registered primary care: HTM 01-05 decontamination, IR(ME)R radiation
//! protection, and GDC registration for the clinical team. Heaviest employee
//! requirement set in the catalogue alongside healthcare.

use shared_types::{
    ComplianceItemTemplate, IndustryProfile, ItemType, RequirementTemplate, Sector,
};

pub fn profile() -> IndustryProfile {
    IndustryProfile::new(
        Sector::Dental,
        vec![
            ComplianceItemTemplate::required(
                "health_safety_policy",
                "Health & Safety Policy",
                ItemType::Policy,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "infection_control_policy",
                "Infection Control Policy (Decontamination)",
                ItemType::Policy,
                "Infection Control",
            ),
            ComplianceItemTemplate::required(
                "safeguarding_policy",
                "Safeguarding Adults & Children Policy",
                ItemType::Policy,
                "Safeguarding",
            ),
            ComplianceItemTemplate::required(
                "gdpr_privacy_notice",
                "GDPR Patient Privacy Notice",
                ItemType::Policy,
                "GDPR & Data Protection",
            ),
            ComplianceItemTemplate::required(
                "complaints_procedure",
                "Complaints Handling Procedure",
                ItemType::Procedure,
                "Complaints",
            ),
            ComplianceItemTemplate::required(
                "sharps_protocol",
                "Sharps & Needlestick Protocol",
                ItemType::Procedure,
                "Infection Control",
            ),
            ComplianceItemTemplate::required(
                "radiation_protection_policy",
                "Radiation Protection Policy",
                ItemType::Policy,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "medical_emergency_procedures",
                "Medical Emergency Procedures",
                ItemType::Procedure,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "staff_induction_checklist",
                "Staff Induction Checklist",
                ItemType::Template,
                "Staff Management",
            ),
            ComplianceItemTemplate::required(
                "cqc_statement_of_purpose",
                "CQC Statement of Purpose",
                ItemType::Operational,
                "Regulatory",
            ),
            ComplianceItemTemplate::required(
                "clinical_risk_assessment",
                "Clinical Risk Assessment",
                ItemType::RiskAssessment,
                "Risk Assessments",
            ),
            ComplianceItemTemplate::required(
                "fire_risk_assessment",
                "Fire Risk Assessment",
                ItemType::RiskAssessment,
                "Fire Safety",
            ),
            ComplianceItemTemplate::required(
                "coshh_assessment",
                "COSHH Assessment",
                ItemType::RiskAssessment,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "staff_handbook",
                "Staff Handbook",
                ItemType::Policy,
                "Staff Management",
            ),
            ComplianceItemTemplate::required(
                "hs_law_poster",
                "Health & Safety Law Poster",
                ItemType::Poster,
                "Mandatory Posters",
            ),
            ComplianceItemTemplate::required(
                "cqc_rating_display",
                "CQC Registration Certificate Display",
                ItemType::Poster,
                "Mandatory Posters",
            ),
            ComplianceItemTemplate::required(
                "sterilisation_log",
                "Sterilisation & Autoclave Log",
                ItemType::Audit,
                "Infection Control",
            ),
            ComplianceItemTemplate::required(
                "waste_disposal_log",
                "Clinical Waste Disposal Log",
                ItemType::Audit,
                "Infection Control",
            ),
            ComplianceItemTemplate::required(
                "annual_policy_review",
                "Annual Policy Review",
                ItemType::Audit,
                "Compliance",
            ),
        ],
        vec![
            RequirementTemplate::mandatory(
                "dbs",
                "Enhanced DBS Check",
                "Enhanced Disclosure and Barring Service check required for patient-facing roles",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "right_to_work",
                "Right to Work",
                "Proof of eligibility to work in the UK",
                None,
            ),
            RequirementTemplate::mandatory(
                "gdc_registration",
                "GDC Registration",
                "General Dental Council registration for dentists and dental nurses",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "indemnity",
                "Professional Indemnity",
                "Valid professional indemnity insurance",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "cpd",
                "CPD Record",
                "Continuing Professional Development hours",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "hep_b",
                "Hepatitis B Vaccination",
                "Hepatitis B vaccination and immunity check",
                Some(60),
            ),
            RequirementTemplate::mandatory(
                "basic_life_support",
                "Basic Life Support Training",
                "BLS/CPR certification",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "safeguarding",
                "Safeguarding Training",
                "Adult and child safeguarding awareness",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "infection_control",
                "Infection Control Training",
                "HTM 01-05 compliant training",
                Some(12),
            ),
            RequirementTemplate::optional(
                "radiation_protection",
                "Radiation Protection Training",
                "IR(ME)R training for radiography",
                Some(36),
            ),
        ],
    )
}
