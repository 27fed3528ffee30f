//! Nursery / Childcare Compliance Profile
//!
//! Ofsted-registered early years settings: EYFS delivery, safeguarding per
//! Working Together and KCSIE, the Prevent duty, and paediatric first aid.

use shared_types::{
    ComplianceItemTemplate, IndustryProfile, ItemType, RequirementTemplate, Sector,
};

pub fn profile() -> IndustryProfile {
    IndustryProfile::new(
        Sector::Nursery,
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
                "equality_inclusion_policy",
                "Equality & Inclusion Policy",
                ItemType::Policy,
                "Equality & Diversity",
            ),
            ComplianceItemTemplate::required(
                "safeguarding_policy",
                "Child Safeguarding Policy",
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
                "daily_risk_assessments",
                "Daily Risk Assessments",
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
                "ofsted_requirements_guide",
                "Ofsted Requirements Guide",
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
                "food_safety_policy",
                "Food Safety Policy",
                ItemType::Policy,
                "Food Safety",
            ),
            ComplianceItemTemplate::required(
                "eyfs_curriculum_policy",
                "EYFS Curriculum Policy",
                ItemType::Policy,
                "Regulatory",
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
                "childcare_qualification",
                "Childcare Qualification",
                "Level 2/3 childcare qualification",
                None,
            ),
            RequirementTemplate::mandatory(
                "safeguarding",
                "Child Safeguarding Training",
                "Keeping Children Safe training",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "paediatric_first_aid",
                "Paediatric First Aid",
                "12-hour paediatric first aid certificate",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "food_hygiene",
                "Food Hygiene Certificate",
                "Level 2 food safety",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "prevent",
                "Prevent Training",
                "Counter-terrorism awareness",
                Some(36),
            ),
            RequirementTemplate::mandatory(
                "health_safety",
                "Health & Safety Training",
                "Workplace H&S awareness",
                Some(24),
            ),
        ],
    )
}
