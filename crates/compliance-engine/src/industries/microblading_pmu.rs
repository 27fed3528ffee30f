//! Microblading / Permanent Makeup Compliance Profile
//!
//! Semi-permanent pigmentation treatments: patch testing, contraindication
//! screening and photo consent sit alongside the body-art infection control
//! core. Registered with the local authority and inspected by EHOs.

use shared_types::{
    ComplianceItemTemplate, IndustryProfile, ItemType, RequirementTemplate, Sector,
};

pub fn profile() -> IndustryProfile {
    IndustryProfile::new(
        Sector::MicrobladingPmu,
        vec![
            ComplianceItemTemplate::required(
                "health_safety_policy",
                "Health & Safety Policy",
                ItemType::Policy,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "infection_control_policy",
                "Infection Prevention & Control Policy",
                ItemType::Policy,
                "Infection Control",
            ),
            ComplianceItemTemplate::required(
                "client_consent_form",
                "Client Consultation & Consent Form",
                ItemType::Template,
                "Client Care",
            ),
            ComplianceItemTemplate::required(
                "patch_test_record",
                "Patch Test Record & Policy",
                ItemType::Template,
                "Client Care",
            ),
            ComplianceItemTemplate::required(
                "contraindications_checklist",
                "Contraindications Checklist",
                ItemType::Template,
                "Client Care",
            ),
            ComplianceItemTemplate::required(
                "aftercare_instructions",
                "Aftercare Instructions",
                ItemType::Template,
                "Client Care",
            ),
            ComplianceItemTemplate::required(
                "medical_questionnaire",
                "Medical History Questionnaire",
                ItemType::Template,
                "Client Care",
            ),
            ComplianceItemTemplate::required(
                "coshh_assessment",
                "COSHH Assessment (Pigments, Numbing)",
                ItemType::RiskAssessment,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "sharps_procedure",
                "Sharps & Clinical Waste Procedure",
                ItemType::Procedure,
                "Infection Control",
            ),
            ComplianceItemTemplate::required(
                "sterilisation_records",
                "Sterilisation Records",
                ItemType::Audit,
                "Infection Control",
            ),
            ComplianceItemTemplate::required(
                "cleaning_checklist",
                "Equipment Cleaning Checklist",
                ItemType::Audit,
                "Infection Control",
            ),
            ComplianceItemTemplate::required(
                "gdpr_privacy_notice",
                "Client Privacy Notice (GDPR)",
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
                "photo_consent",
                "Before & After Photo Consent",
                ItemType::Template,
                "GDPR & Data Protection",
            ),
            ComplianceItemTemplate::required(
                "colour_expectations_record",
                "Colour Selection & Expectations Record",
                ItemType::Template,
                "Client Care",
            ),
            ComplianceItemTemplate::required(
                "touchup_policy",
                "Touch-Up & Aftercare Policy",
                ItemType::Policy,
                "Client Care",
            ),
            ComplianceItemTemplate::required(
                "fire_risk_assessment",
                "Fire Risk Assessment",
                ItemType::RiskAssessment,
                "Fire Safety",
            ),
            ComplianceItemTemplate::required(
                "general_hs_risk_assessment",
                "General Health & Safety Risk Assessment",
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
                "first_aid",
                "First Aid Certificate",
                "Emergency first aid at work",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "infection_control",
                "Infection Control Training",
                "Bloodborne pathogens, hygiene and sterilisation",
                Some(24),
            ),
            RequirementTemplate::mandatory(
                "coshh",
                "COSHH Training",
                "Safe handling of pigments and numbing agents",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "fire_safety",
                "Fire Safety Training",
                "Fire awareness and evacuation",
                Some(12),
            ),
        ],
    )
}
