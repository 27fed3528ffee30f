//! Retail Shop Compliance Profile
//!
//! Trading Standards and Consumer Rights Act 2015 obligations alongside the
//! general premises baseline.

use shared_types::{
    ComplianceItemTemplate, IndustryProfile, ItemType, RequirementTemplate, Sector,
};

pub fn profile() -> IndustryProfile {
    IndustryProfile::new(
        Sector::Retail,
        vec![
            ComplianceItemTemplate::required(
                "health_safety_policy",
                "Retail Health & Safety Policy",
                ItemType::Policy,
                "Health & Safety",
            ),
            ComplianceItemTemplate::required(
                "gdpr_privacy_notice",
                "Customer Data Protection Policy",
                ItemType::Policy,
                "GDPR & Data Protection",
            ),
            ComplianceItemTemplate::required(
                "equality_accessibility_policy",
                "Equality & Accessibility Policy",
                ItemType::Policy,
                "Equality & Diversity",
            ),
            ComplianceItemTemplate::required(
                "complaints_procedure",
                "Customer Complaints Policy",
                ItemType::Procedure,
                "Complaints",
            ),
            ComplianceItemTemplate::required(
                "store_risk_assessment",
                "Store Risk Assessment",
                ItemType::RiskAssessment,
                "Risk Assessments",
            ),
            ComplianceItemTemplate::required(
                "staff_handbook",
                "Retail Staff Handbook",
                ItemType::Policy,
                "Staff Management",
            ),
            ComplianceItemTemplate::required(
                "trading_standards_guide",
                "Trading Standards Guide",
                ItemType::Operational,
                "Regulatory",
            ),
            ComplianceItemTemplate::required(
                "fire_safety_policy",
                "Fire Safety Policy",
                ItemType::Policy,
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
                "first_aid",
                "First Aid Certificate",
                "Emergency first aid",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "fire_safety",
                "Fire Safety Training",
                "Fire awareness",
                Some(12),
            ),
            RequirementTemplate::mandatory(
                "manual_handling",
                "Manual Handling",
                "Safe lifting",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "health_safety",
                "Health & Safety",
                "General H&S awareness",
                Some(36),
            ),
        ],
    )
}
