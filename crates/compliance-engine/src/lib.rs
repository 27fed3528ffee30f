pub mod catalogue;
pub mod checklist;
pub mod error;
pub mod industries;
pub mod items;
pub mod scoring;
pub mod workforce;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use shared_types::{
    Business, ComplianceItem, ComplianceScore, ComplianceSummary, Employee, EmployeeRequirement,
    IndustryProfile, OverviewReport, RequirementState,
};

pub use catalogue::Catalogue;
pub use checklist::ChecklistDelta;
pub use error::EngineError;

/// ComplianceEngine entry point. Holds the catalogue and delegates to the
/// pure functions in the operation modules; all state lives in the caller's
/// storage layer.
pub struct ComplianceEngine {
    catalogue: Catalogue,
}

impl ComplianceEngine {
    pub fn new(catalogue: Catalogue) -> Self {
        ComplianceEngine { catalogue }
    }

    pub fn with_builtin_catalogue() -> Self {
        Self::new(Catalogue::builtin())
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn profile_for(&self, business: &Business) -> IndustryProfile {
        self.catalogue.profile(business.sector)
    }

    /// Score a business's checklist as of `now`.
    pub fn score(
        &self,
        business_id: Uuid,
        items: &[ComplianceItem],
        now: DateTime<Utc>,
    ) -> Result<ComplianceScore, EngineError> {
        scoring::compute_compliance_score(business_id, items, now)
    }

    /// Diff a business's stored items against its current industry profile.
    pub fn derive_checklist(
        &self,
        business: &Business,
        existing: &[ComplianceItem],
    ) -> Result<ChecklistDelta, EngineError> {
        let profile = self.catalogue.profile(business.sector);
        checklist::derive_checklist(business, &profile, existing)
    }

    /// Seed the requirement records for a new employee of this business.
    pub fn derive_requirements(
        &self,
        business: &Business,
        employee: &Employee,
    ) -> Vec<EmployeeRequirement> {
        let profile = self.catalogue.profile(business.sector);
        checklist::derive_requirements(employee, &profile)
    }

    pub fn classify_requirement(
        &self,
        requirement: &EmployeeRequirement,
        now: DateTime<Utc>,
    ) -> Result<RequirementState, EngineError> {
        workforce::classify(requirement, now)
    }

    pub fn summarize_employee(
        &self,
        employee_id: Uuid,
        requirements: &[EmployeeRequirement],
        now: DateTime<Utc>,
    ) -> Result<ComplianceSummary, EngineError> {
        workforce::summarize_employee(employee_id, requirements, now)
    }

    pub fn organization_overview(
        &self,
        staff: &[(Employee, Vec<EmployeeRequirement>)],
        now: DateTime<Utc>,
    ) -> Result<OverviewReport, EngineError> {
        workforce::build_organization_overview(staff, now)
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::with_builtin_catalogue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use shared_types::{
        BusinessSize, ItemStatus, RequirementStatus, Sector, StatusLabel, SubscriptionStatus,
        UkNation,
    };

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    }

    fn business(sector: Sector) -> Business {
        Business {
            id: Uuid::new_v4(),
            name: "Inkwell Studio".to_string(),
            sector,
            size: BusinessSize::Micro,
            nation: UkNation::England,
            subscription_status: SubscriptionStatus::Active,
        }
    }

    fn items_with_statuses(business_id: Uuid, statuses: &[ItemStatus]) -> Vec<ComplianceItem> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                let tpl = shared_types::ComplianceItemTemplate::required(
                    &format!("item_{i}"),
                    &format!("Item {i}"),
                    shared_types::ItemType::Policy,
                    "Health & Safety",
                );
                let mut item = ComplianceItem::from_template(business_id, &tpl);
                item.status = *status;
                item
            })
            .collect()
    }

    #[test]
    fn test_six_of_ten_completed_scores_sixty() {
        let engine = ComplianceEngine::with_builtin_catalogue();
        let business_id = Uuid::new_v4();
        let items = items_with_statuses(
            business_id,
            &[
                ItemStatus::Approved,
                ItemStatus::Approved,
                ItemStatus::Uploaded,
                ItemStatus::Uploaded,
                ItemStatus::Acknowledged,
                ItemStatus::Acknowledged,
                ItemStatus::Missing,
                ItemStatus::Missing,
                ItemStatus::Missing,
                ItemStatus::Draft,
            ],
        );
        let score = engine.score(business_id, &items, fixed_now()).unwrap();

        assert_eq!(score.score_percent, 60);
        assert_eq!(score.required_total, 10);
        assert_eq!(score.completed_total, 6);
        assert_eq!(score.missing_count, 3);
        assert_eq!(score.status_label, StatusLabel::NeedsAttention);
    }

    #[test]
    fn test_review_due_yesterday_flags_overdue() {
        let engine = ComplianceEngine::with_builtin_catalogue();
        let business_id = Uuid::new_v4();
        let mut items = items_with_statuses(business_id, &[ItemStatus::Approved]);
        items[0].next_review_due = Some(fixed_now().date_naive() - Duration::days(1));
        let score = engine.score(business_id, &items, fixed_now()).unwrap();

        assert_eq!(score.overdue_count, 1);
        assert_eq!(score.status_label, StatusLabel::Overdue);
    }

    #[test]
    fn test_certificate_expiring_in_fifteen_days() {
        let engine = ComplianceEngine::with_builtin_catalogue();
        let requirement = EmployeeRequirement {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            requirement_type: "first_aid".to_string(),
            title: "First Aid Certificate".to_string(),
            issue_date: None,
            expiry_date: Some(fixed_now().date_naive() + Duration::days(15)),
            reference_number: None,
        };
        let state = engine.classify_requirement(&requirement, fixed_now()).unwrap();

        assert_eq!(state.status, RequirementStatus::ExpiringSoon);
        assert_eq!(state.days_until_expiry, Some(15));
    }

    #[test]
    fn test_business_with_no_items_is_on_track() {
        let engine = ComplianceEngine::with_builtin_catalogue();
        let business_id = Uuid::new_v4();
        let score = engine.score(business_id, &[], fixed_now()).unwrap();

        assert_eq!(score.score_percent, 100);
        assert_eq!(score.status_label, StatusLabel::OnTrack);
    }

    #[test]
    fn test_fresh_checklist_scores_zero() {
        let engine = ComplianceEngine::with_builtin_catalogue();
        let business = business(Sector::TattooStudio);
        let delta = engine.derive_checklist(&business, &[]).unwrap();
        assert!(delta.to_retire.is_empty());

        let required_count = engine
            .profile_for(&business)
            .item_templates
            .iter()
            .filter(|t| t.is_required)
            .count() as u32;
        let score = engine
            .score(business.id, &delta.to_create, fixed_now())
            .unwrap();

        assert_eq!(score.score_percent, 0);
        assert_eq!(score.required_total, required_count);
        assert_eq!(score.missing_count, required_count);
        assert_eq!(score.status_label, StatusLabel::NeedsAttention);
    }

    #[test]
    fn test_new_employee_requirements_start_pending_or_dated() {
        let engine = ComplianceEngine::with_builtin_catalogue();
        let business = business(Sector::Dental);
        let employee = Employee {
            id: Uuid::new_v4(),
            business_id: business.id,
            first_name: "Priya".to_string(),
            last_name: "Shah".to_string(),
            job_title: "Dental Nurse".to_string(),
            start_date: Some(fixed_now().date_naive()),
            is_active: true,
        };
        let requirements = engine.derive_requirements(&business, &employee);
        assert!(!requirements.is_empty());

        let summary = engine
            .summarize_employee(employee.id, &requirements, fixed_now())
            .unwrap();
        // Nothing recorded yet, so every requirement is pending
        assert_eq!(summary.pending_count, summary.total_requirements);
        assert_eq!(summary.valid_count, 0);
    }
}
