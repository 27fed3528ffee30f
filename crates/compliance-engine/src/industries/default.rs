//! Generic Small-Business Compliance Templates
//!
//! Baseline every UK employer must meet regardless of sector: H&S policy,
//! fire risk assessment, GDPR documentation and the HSE law poster. Served
//! for any sector without a dedicated profile module.

use shared_types::{ComplianceItemTemplate, ItemType, RequirementTemplate};

pub fn item_templates() -> Vec<ComplianceItemTemplate> {
    vec![
        ComplianceItemTemplate::required(
            "health_safety_policy",
            "Health & Safety Policy",
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
            "workplace_risk_assessment",
            "Workplace Risk Assessment",
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
            "staff_handbook",
            "Employee Handbook",
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
            "accident_report_form",
            "Accident Report Form",
            ItemType::Template,
            "Health & Safety",
        ),
        ComplianceItemTemplate::required(
            "annual_policy_review",
            "Annual Policy Review",
            ItemType::Audit,
            "Compliance",
        ),
    ]
}

pub fn requirement_templates() -> Vec<RequirementTemplate> {
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
            "fire_safety",
            "Fire Safety Training",
            "Fire awareness and evacuation",
            Some(12),
        ),
        RequirementTemplate::mandatory(
            "health_safety",
            "Health & Safety",
            "General H&S induction",
            Some(36),
        ),
    ]
}
