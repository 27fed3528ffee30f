//! Barber / Hairdresser Compliance Profile
//!
//! EHO-inspected personal services: allergy alert testing for colours,
//! COSHH for hair products, and sharps handling for razors.

use shared_types::{
    ComplianceItemTemplate, IndustryProfile, ItemType, RequirementTemplate, Sector,
};

pub fn profile() -> IndustryProfile {
    IndustryProfile::new(
        Sector::BarberHairdresser,
        vec![
            ComplianceItemTemplate::required(
                "health_safety_policy",
                "Health & Safety Policy",
                ItemType::Policy,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "hygiene_policy",
                "Hygiene & Infection Control Policy",
                ItemType::Policy,
                "Infection Control",
            ),
            ComplianceItemTemplate::required(
                "client_consultation_card",
                "Client Consultation Card",
                ItemType::Template,
                "Client Care",
            ),
            ComplianceItemTemplate::required(
                "allergy_test_record",
                "Allergy Alert Test Record (colours)",
                ItemType::Template,
                "Client Care",
            ),
            ComplianceItemTemplate::required(
                "coshh_assessment",
                "COSHH Assessment (Hair Products)",
                ItemType::RiskAssessment,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "sharps_procedure",
                "Sharps Procedure (razors)",
                ItemType::Procedure,
                "Infection Control",
            ),
            ComplianceItemTemplate::required(
                "cleaning_checklist",
                "Equipment Cleaning & Sterilisation Checklist",
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
                "staff_handbook",
                "Staff Handbook",
                ItemType::Policy,
                "Staff Management",
            ),
            ComplianceItemTemplate::required(
                "accident_report_form",
                "Accident & Incident Report Form",
                ItemType::Template,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "first_aid_procedures",
                "First Aid Procedures",
                ItemType::Procedure,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "fire_safety_procedures",
                "Fire Safety Procedures",
                ItemType::Procedure,
                "Fire Safety",
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
                "nvq_qualification",
                "NVQ Qualification",
                "Level 2/3 hairdressing or barbering",
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
