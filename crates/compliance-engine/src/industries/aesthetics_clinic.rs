//! Aesthetics Clinic Compliance Profile
//!
//! Injectables and skin treatments: emergency protocols, product
//! traceability and prescriber arrangements on top of the infection control
//! core. Practitioners carry individual indemnity and CPD obligations.

use shared_types::{
    ComplianceItemTemplate, IndustryProfile, ItemType, RequirementTemplate, Sector,
};

pub fn profile() -> IndustryProfile {
    IndustryProfile::new(
        Sector::AestheticsClinic,
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
                "client_assessment_form",
                "Client Consultation & Assessment Form",
                ItemType::Template,
                "Client Care",
            ),
            ComplianceItemTemplate::required(
                "treatment_consent_form",
                "Treatment Consent Form",
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
                "contraindications_checklist",
                "Contraindications & Screening Checklist",
                ItemType::Template,
                "Client Care",
            ),
            ComplianceItemTemplate::required(
                "aftercare_instructions",
                "Aftercare Instructions (per treatment)",
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
                "equipment_maintenance_log",
                "Equipment Maintenance Log",
                ItemType::Audit,
                "Equipment",
            ),
            ComplianceItemTemplate::required(
                "product_batch_records",
                "Product Batch & Traceability Records",
                ItemType::Audit,
                "Equipment",
            ),
            ComplianceItemTemplate::required(
                "gdpr_privacy_notice",
                "Client Privacy Notice (GDPR)",
                ItemType::Policy,
                "GDPR & Data Protection",
            ),
            ComplianceItemTemplate::required(
                "complaints_procedure",
                "Complaints & Complications Procedure",
                ItemType::Procedure,
                "Complaints",
            ),
            ComplianceItemTemplate::required(
                "emergency_protocol",
                "Emergency & Adverse Reaction Protocol",
                ItemType::Procedure,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "photo_consent",
                "Before & After Photo Consent",
                ItemType::Template,
                "GDPR & Data Protection",
            ),
            ComplianceItemTemplate::required(
                "cooling_off_policy",
                "Cooling-Off Period Policy",
                ItemType::Policy,
                "Client Care",
            ),
            ComplianceItemTemplate::required(
                "staff_qualifications_records",
                "Staff Qualifications & Insurance Records",
                ItemType::Audit,
                "Staff Management",
            ),
            ComplianceItemTemplate::optional(
                "prescriber_documentation",
                "Prescriber Arrangement Documentation",
                ItemType::Operational,
                "Regulatory",
            ),
            ComplianceItemTemplate::required(
                "clinical_procedures_risk_assessment",
                "Clinical Procedures Risk Assessment",
                ItemType::RiskAssessment,
                "Health & Safety",
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
                "indemnity",
                "Professional Indemnity",
                "Valid treatment indemnity insurance",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "cpd",
                "CPD Record",
                "Continuing Professional Development hours",
                Some(12),
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
                "Hygiene, sterilisation and sharps safety",
                Some(24),
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
