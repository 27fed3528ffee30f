//! Piercing Studio Compliance Profile
//!
//! Local authority registration and EHO inspection, with parental consent
//! requirements for minors on top of the body-art infection control core.

use shared_types::{
    ComplianceItemTemplate, IndustryProfile, ItemType, RequirementTemplate, Sector,
};

pub fn profile() -> IndustryProfile {
    IndustryProfile::new(
        Sector::PiercingStudio,
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
                "parental_consent_form",
                "Parental Consent Form (for minors)",
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
                "COSHH Assessment",
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
                "Sterilisation Records & Autoclave Log",
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
                "staff_training_records",
                "Staff Training Records",
                ItemType::Audit,
                "Staff Management",
            ),
            ComplianceItemTemplate::required(
                "accident_report_form",
                "Accident & Incident Report Form",
                ItemType::Template,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "age_verification_policy",
                "Age Verification Policy",
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
                "Safe handling of cleaning chemicals",
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
