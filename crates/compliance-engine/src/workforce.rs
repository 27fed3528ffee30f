//! Employee requirement classification and aggregation
//!
//! Classification is a pure function of `(expiry_date, now)`; the reference
//! instant is always injected so callers and tests get reproducible output.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use shared_types::{
    ComplianceSummary, Employee, EmployeeRequirement, ExpiringEntry, OverdueEntry, OverviewReport,
    RequirementState, RequirementStatus,
};

use crate::error::EngineError;
use crate::scoring::percent_round_half_up;

/// Days before expiry at which a requirement starts counting as expiring soon.
/// Inclusive at both ends: expiring today and expiring in exactly 30 days both
/// qualify.
const EXPIRY_WINDOW_DAYS: i64 = 30;

/// Classify one requirement's lifecycle state.
///
/// No expiry date means the requirement is tracked but never lapses
/// (`pending`). An issue date after the expiry date is a data-integrity
/// fault surfaced as an error rather than silently misclassified.
pub fn classify(
    requirement: &EmployeeRequirement,
    now: DateTime<Utc>,
) -> Result<RequirementState, EngineError> {
    if let (Some(issue), Some(expiry)) = (requirement.issue_date, requirement.expiry_date) {
        if issue > expiry {
            return Err(EngineError::InvertedDates {
                requirement_id: requirement.id,
                issue_date: issue,
                expiry_date: expiry,
            });
        }
    }

    let expiry = match requirement.expiry_date {
        Some(expiry) => expiry,
        None => {
            return Ok(RequirementState {
                status: RequirementStatus::Pending,
                days_until_expiry: None,
            })
        }
    };

    let days_until_expiry = (expiry - now.date_naive()).num_days();
    let status = if days_until_expiry < 0 {
        RequirementStatus::Expired
    } else if days_until_expiry <= EXPIRY_WINDOW_DAYS {
        RequirementStatus::ExpiringSoon
    } else {
        RequirementStatus::Valid
    };

    Ok(RequirementState {
        status,
        days_until_expiry: Some(days_until_expiry),
    })
}

/// Count one employee's requirements per status. An employee with nothing to
/// track rates 100, matching the scoring engine's empty-set convention.
pub fn summarize_employee(
    employee_id: Uuid,
    requirements: &[EmployeeRequirement],
    now: DateTime<Utc>,
) -> Result<ComplianceSummary, EngineError> {
    let mut valid_count = 0u32;
    let mut expiring_soon_count = 0u32;
    let mut expired_count = 0u32;
    let mut pending_count = 0u32;

    for requirement in requirements {
        match classify(requirement, now)?.status {
            RequirementStatus::Valid => valid_count += 1,
            RequirementStatus::ExpiringSoon => expiring_soon_count += 1,
            RequirementStatus::Expired => expired_count += 1,
            RequirementStatus::Pending => pending_count += 1,
        }
    }

    let total_requirements = requirements.len() as u32;
    Ok(ComplianceSummary {
        employee_id,
        total_requirements,
        valid_count,
        expiring_soon_count,
        expired_count,
        pending_count,
        compliance_rate: percent_round_half_up(valid_count, total_requirements),
    })
}

/// Aggregate the whole workforce into one report with ranked overdue and
/// expiring lists. Both lists are sorted with a stable tie-break on employee
/// name then requirement title so identical inputs produce identical output.
pub fn build_organization_overview(
    staff: &[(Employee, Vec<EmployeeRequirement>)],
    now: DateTime<Utc>,
) -> Result<OverviewReport, EngineError> {
    let mut total_requirements = 0u32;
    let mut valid_requirements = 0u32;
    let mut expired_requirements = 0u32;
    let mut expiring_soon_requirements = 0u32;
    let mut pending_requirements = 0u32;
    let mut overdue_items = Vec::new();
    let mut expiring_soon_items = Vec::new();

    for (employee, requirements) in staff {
        for requirement in requirements {
            total_requirements += 1;
            let state = classify(requirement, now)?;
            match state.status {
                RequirementStatus::Valid => valid_requirements += 1,
                RequirementStatus::Pending => pending_requirements += 1,
                RequirementStatus::Expired => {
                    expired_requirements += 1;
                    // Classification guarantees an expiry date and negative days here
                    let days = state.days_until_expiry.unwrap_or(0);
                    overdue_items.push(OverdueEntry {
                        employee_id: employee.id,
                        employee_name: employee.full_name(),
                        requirement_id: requirement.id,
                        requirement_title: requirement.title.clone(),
                        expiry_date: requirement.expiry_date.unwrap_or(now.date_naive()),
                        days_overdue: -days,
                    });
                }
                RequirementStatus::ExpiringSoon => {
                    expiring_soon_requirements += 1;
                    let days = state.days_until_expiry.unwrap_or(0);
                    expiring_soon_items.push(ExpiringEntry {
                        employee_id: employee.id,
                        employee_name: employee.full_name(),
                        requirement_id: requirement.id,
                        requirement_title: requirement.title.clone(),
                        expiry_date: requirement.expiry_date.unwrap_or(now.date_naive()),
                        days_until_expiry: days,
                    });
                }
            }
        }
    }

    overdue_items.sort_by(|a, b| {
        b.days_overdue
            .cmp(&a.days_overdue)
            .then_with(|| a.employee_name.cmp(&b.employee_name))
            .then_with(|| a.requirement_title.cmp(&b.requirement_title))
    });
    expiring_soon_items.sort_by(|a, b| {
        a.days_until_expiry
            .cmp(&b.days_until_expiry)
            .then_with(|| a.employee_name.cmp(&b.employee_name))
            .then_with(|| a.requirement_title.cmp(&b.requirement_title))
    });

    Ok(OverviewReport {
        total_employees: staff.len() as u32,
        total_requirements,
        valid_requirements,
        expired_requirements,
        expiring_soon_requirements,
        pending_requirements,
        overall_compliance_rate: percent_round_half_up(valid_requirements, total_requirements),
        overdue_items,
        expiring_soon_items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone};
    use pretty_assertions::assert_eq;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    }

    fn requirement(title: &str, expiry: Option<NaiveDate>) -> EmployeeRequirement {
        EmployeeRequirement {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            requirement_type: "first_aid".to_string(),
            title: title.to_string(),
            issue_date: None,
            expiry_date: expiry,
            reference_number: None,
        }
    }

    fn employee(first: &str, last: &str) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            business_id: Uuid::new_v4(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            job_title: "Chef".to_string(),
            start_date: None,
            is_active: true,
        }
    }

    #[test]
    fn test_no_expiry_is_pending() {
        let state = classify(&requirement("Right to Work", None), fixed_now()).unwrap();
        assert_eq!(state.status, RequirementStatus::Pending);
        assert_eq!(state.days_until_expiry, None);
    }

    #[test]
    fn test_window_boundaries_are_inclusive() {
        let today = fixed_now().date_naive();
        let cases = [
            (today - Duration::days(1), RequirementStatus::Expired, -1),
            (today, RequirementStatus::ExpiringSoon, 0),
            (today + Duration::days(30), RequirementStatus::ExpiringSoon, 30),
            (today + Duration::days(31), RequirementStatus::Valid, 31),
        ];
        for (expiry, expected_status, expected_days) in cases {
            let state = classify(&requirement("First Aid", Some(expiry)), fixed_now()).unwrap();
            assert_eq!(state.status, expected_status, "expiry {expiry}");
            assert_eq!(state.days_until_expiry, Some(expected_days));
        }
    }

    #[test]
    fn test_inverted_dates_are_rejected() {
        let mut bad = requirement("DBS Check", Some(fixed_now().date_naive()));
        bad.issue_date = Some(fixed_now().date_naive() + Duration::days(5));
        let err = classify(&bad, fixed_now()).unwrap_err();
        assert!(matches!(err, EngineError::InvertedDates { .. }));
    }

    #[test]
    fn test_summary_counts_and_rate() {
        let today = fixed_now().date_naive();
        let employee_id = Uuid::new_v4();
        let requirements = vec![
            requirement("A", Some(today + Duration::days(90))),
            requirement("B", Some(today + Duration::days(200))),
            requirement("C", Some(today + Duration::days(10))),
            requirement("D", Some(today - Duration::days(3))),
            requirement("E", None),
        ];
        let summary = summarize_employee(employee_id, &requirements, fixed_now()).unwrap();

        assert_eq!(summary.employee_id, employee_id);
        assert_eq!(summary.total_requirements, 5);
        assert_eq!(summary.valid_count, 2);
        assert_eq!(summary.expiring_soon_count, 1);
        assert_eq!(summary.expired_count, 1);
        assert_eq!(summary.pending_count, 1);
        assert_eq!(summary.compliance_rate, 40);
    }

    #[test]
    fn test_empty_summary_rates_100() {
        let summary = summarize_employee(Uuid::new_v4(), &[], fixed_now()).unwrap();
        assert_eq!(summary.compliance_rate, 100);
    }

    #[test]
    fn test_overview_ranks_most_overdue_first() {
        let today = fixed_now().date_naive();
        let alice = employee("Alice", "Hart");
        let bob = employee("Bob", "Njoku");
        let staff = vec![
            (
                alice.clone(),
                vec![requirement("Fire Safety Training", Some(today - Duration::days(5)))],
            ),
            (
                bob.clone(),
                vec![requirement("Food Hygiene Certificate", Some(today - Duration::days(10)))],
            ),
        ];
        let report = build_organization_overview(&staff, fixed_now()).unwrap();

        assert_eq!(report.expired_requirements, 2);
        assert_eq!(report.overdue_items.len(), 2);
        assert_eq!(report.overdue_items[0].days_overdue, 10);
        assert_eq!(report.overdue_items[0].employee_name, "Bob Njoku");
        assert_eq!(report.overdue_items[1].days_overdue, 5);
    }

    #[test]
    fn test_overview_tie_breaks_on_name_then_title() {
        let today = fixed_now().date_naive();
        let zara = employee("Zara", "Ali");
        let amy = employee("Amy", "Price");
        let staff = vec![
            (
                zara,
                vec![requirement("B Cert", Some(today - Duration::days(7)))],
            ),
            (
                amy.clone(),
                vec![
                    requirement("B Cert", Some(today - Duration::days(7))),
                    requirement("A Cert", Some(today - Duration::days(7))),
                ],
            ),
        ];
        let report = build_organization_overview(&staff, fixed_now()).unwrap();

        let order: Vec<_> = report
            .overdue_items
            .iter()
            .map(|entry| (entry.employee_name.as_str(), entry.requirement_title.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Amy Price", "A Cert"),
                ("Amy Price", "B Cert"),
                ("Zara Ali", "B Cert"),
            ]
        );
    }

    #[test]
    fn test_overview_expiring_list_soonest_first() {
        let today = fixed_now().date_naive();
        let staff = vec![(
            employee("Dee", "Okafor"),
            vec![
                requirement("Later", Some(today + Duration::days(25))),
                requirement("Sooner", Some(today + Duration::days(3))),
            ],
        )];
        let report = build_organization_overview(&staff, fixed_now()).unwrap();

        assert_eq!(report.expiring_soon_items[0].requirement_title, "Sooner");
        assert_eq!(report.expiring_soon_items[0].days_until_expiry, 3);
        assert_eq!(report.expiring_soon_items[1].days_until_expiry, 25);
    }

    #[test]
    fn test_empty_overview() {
        let report = build_organization_overview(&[], fixed_now()).unwrap();
        assert_eq!(report.total_employees, 0);
        assert_eq!(report.overall_compliance_rate, 100);
        assert!(report.overdue_items.is_empty());
        assert!(report.expiring_soon_items.is_empty());
    }
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    }

    proptest! {
        /// Property: classification over any day offset matches the window
        /// definition exactly
        #[test]
        fn classification_matches_window(offset in -2000i64..2000) {
            let expiry = fixed_now().date_naive() + Duration::days(offset);
            let requirement = EmployeeRequirement {
                id: Uuid::new_v4(),
                employee_id: Uuid::new_v4(),
                requirement_type: "cpd".to_string(),
                title: "CPD Record".to_string(),
                issue_date: None,
                expiry_date: Some(expiry),
                reference_number: None,
            };
            let state = classify(&requirement, fixed_now()).unwrap();

            prop_assert_eq!(state.days_until_expiry, Some(offset));
            let expected = if offset < 0 {
                RequirementStatus::Expired
            } else if offset <= 30 {
                RequirementStatus::ExpiringSoon
            } else {
                RequirementStatus::Valid
            };
            prop_assert_eq!(state.status, expected);
        }

        /// Property: summary counts always add up to the total and the rate
        /// stays in [0, 100]
        #[test]
        fn summary_counts_are_consistent(offsets in prop::collection::vec(prop::option::of(-100i64..400), 0..25)) {
            let employee_id = Uuid::new_v4();
            let requirements: Vec<_> = offsets
                .iter()
                .map(|offset| EmployeeRequirement {
                    id: Uuid::new_v4(),
                    employee_id,
                    requirement_type: "training".to_string(),
                    title: "Training".to_string(),
                    issue_date: None,
                    expiry_date: offset.map(|d| fixed_now().date_naive() + Duration::days(d)),
                    reference_number: None,
                })
                .collect();
            let summary = summarize_employee(employee_id, &requirements, fixed_now()).unwrap();

            let sum = summary.valid_count
                + summary.expiring_soon_count
                + summary.expired_count
                + summary.pending_count;
            prop_assert_eq!(sum, summary.total_requirements);
            prop_assert!(summary.compliance_rate <= 100);
        }
    }
}
