//! School / College Compliance Profile
//!
//! Ofsted-inspected settings: KCSIE-compliant child protection, the Prevent
//! duty, and QTS-qualified, enhanced-DBS-checked staff.

use shared_types::{
    ComplianceItemTemplate, IndustryProfile, ItemType, RequirementTemplate, Sector,
};

pub fn profile() -> IndustryProfile {
    IndustryProfile::new(
        Sector::Education,
        vec![
            ComplianceItemTemplate::required(
                "health_safety_policy",
                "Health & Safety Policy",
                ItemType::Policy,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "gdpr_privacy_notice",
                "Student Data Protection Policy",
                ItemType::Policy,
                "GDPR & Data Protection",
            ),
            ComplianceItemTemplate::required(
                "equality_accessibility_plan",
                "Equality & Accessibility Plan",
                ItemType::Policy,
                "Equality & Diversity",
            ),
            ComplianceItemTemplate::required(
                "safeguarding_policy",
                "Child Protection Policy",
                ItemType::Policy,
                "Safeguarding",
            ),
            ComplianceItemTemplate::required(
                "complaints_procedure",
                "Complaints Procedure",
                ItemType::Procedure,
                "Complaints",
            ),
            ComplianceItemTemplate::required(
                "educational_visit_risk_assessment",
                "Educational Visit Risk Assessment",
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
                "ofsted_framework_guide",
                "Ofsted Framework Guide",
                ItemType::Operational,
                "Regulatory",
            ),
            ComplianceItemTemplate::required(
                "prevent_duty_policy",
                "Prevent Duty Policy",
                ItemType::Policy,
                "Safeguarding",
            ),
            ComplianceItemTemplate::required(
                "behaviour_policy",
                "Behaviour Policy",
                ItemType::Policy,
                "Regulatory",
            ),
        ],
        vec![
            RequirementTemplate::mandatory(
                "dbs",
                "Enhanced DBS Check",
                "Enhanced DBS with children's barred list",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "right_to_work",
                "Right to Work",
                "Proof of eligibility to work in the UK",
                None,
            ),
            RequirementTemplate::mandatory(
                "qts",
                "Qualified Teacher Status",
                "QTS or equivalent qualification",
                None,
            ),
            RequirementTemplate::mandatory(
                "safeguarding",
                "Safeguarding Training",
                "KCSIE compliant training",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "prevent",
                "Prevent Training",
                "Counter-terrorism duty training",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "first_aid",
                "First Aid Certificate",
                "First aid at work",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "fire_safety",
                "Fire Safety Training",
                "Fire warden training",
                Some(12),
            ),
        ],
    )
}
