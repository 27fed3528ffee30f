//! Compliance readiness scoring
//!
//! Pure computation over a business's already-loaded compliance items. Only
//! required items drive the percentage; the status label is a priority
//! cascade where overdue reviews dominate regardless of score.

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;
use uuid::Uuid;

use shared_types::{CategoryBreakdown, ComplianceItem, ComplianceScore, ItemStatus, StatusLabel};

use crate::error::EngineError;

/// Score threshold below which a business needs attention
const ATTENTION_THRESHOLD: u8 = 80;

/// Compute the readiness score for one business.
///
/// Every item must belong to `business_id`. Empty input is valid: a business
/// with no required items has nothing outstanding and scores 100.
pub fn compute_compliance_score(
    business_id: Uuid,
    items: &[ComplianceItem],
    now: DateTime<Utc>,
) -> Result<ComplianceScore, EngineError> {
    for item in items {
        if item.business_id != business_id {
            return Err(EngineError::ForeignItem {
                item_id: item.id,
                expected: business_id,
                found: item.business_id,
            });
        }
    }

    let today = now.date_naive();

    let mut required_total = 0u32;
    let mut completed_total = 0u32;
    let mut missing_count = 0u32;
    let mut needs_review_count = 0u32;
    let mut overdue_count = 0u32;
    let mut breakdown: BTreeMap<String, CategoryBreakdown> = BTreeMap::new();

    for item in items {
        // Counted over all items, required or not
        if item.status == ItemStatus::NeedsReview {
            needs_review_count += 1;
        }
        if is_overdue(item, today) {
            overdue_count += 1;
        }

        if !item.is_required {
            continue;
        }
        required_total += 1;
        let entry = breakdown.entry(item.category.clone()).or_default();
        entry.required_total += 1;
        if item.status.is_complete() {
            completed_total += 1;
            entry.required_completed += 1;
        }
        if item.status == ItemStatus::Missing {
            missing_count += 1;
        }
    }

    let score_percent = percent_round_half_up(completed_total, required_total);

    let status_label = if overdue_count > 0 {
        StatusLabel::Overdue
    } else if score_percent < ATTENTION_THRESHOLD || missing_count > 0 {
        StatusLabel::NeedsAttention
    } else {
        StatusLabel::OnTrack
    };

    Ok(ComplianceScore {
        business_id,
        score_percent,
        required_total,
        completed_total,
        missing_count,
        needs_review_count,
        overdue_count,
        breakdown,
        status_label,
    })
}

/// An item is overdue when its review date has passed and its status shows it
/// was once complete (missing/draft items never were), or when it already
/// carries the overdue status.
fn is_overdue(item: &ComplianceItem, today: NaiveDate) -> bool {
    if item.status == ItemStatus::Overdue {
        return true;
    }
    match item.next_review_due {
        Some(due) => due < today && !matches!(item.status, ItemStatus::Missing | ItemStatus::Draft),
        None => false,
    }
}

/// Percentage with round-half-up, in integer arithmetic so boundary fixtures
/// are exact (1/3 -> 33, 1/8 -> 13). A zero denominator yields 100: the
/// vacuous-completeness convention shared with the workforce summaries.
pub(crate) fn percent_round_half_up(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 100;
    }
    // u64 intermediate keeps the multiply exact for any u32 input
    ((200 * u64::from(part) + u64::from(whole)) / (2 * u64::from(whole))) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use shared_types::{ComplianceItemTemplate, ItemType};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    }

    fn item(
        business_id: Uuid,
        key: &str,
        category: &str,
        required: bool,
        status: ItemStatus,
    ) -> ComplianceItem {
        let template = if required {
            ComplianceItemTemplate::required(key, key, ItemType::Policy, category)
        } else {
            ComplianceItemTemplate::optional(key, key, ItemType::Policy, category)
        };
        let mut item = ComplianceItem::from_template(business_id, &template);
        item.status = status;
        item
    }

    #[test]
    fn test_empty_input_is_vacuously_complete() {
        let business_id = Uuid::new_v4();
        let score = compute_compliance_score(business_id, &[], fixed_now()).unwrap();
        assert_eq!(score.score_percent, 100);
        assert_eq!(score.required_total, 0);
        assert_eq!(score.status_label, StatusLabel::OnTrack);
        assert!(score.breakdown.is_empty());
    }

    #[test]
    fn test_only_required_items_drive_percentage() {
        let business_id = Uuid::new_v4();
        let items = vec![
            item(business_id, "a", "Health & Safety", true, ItemStatus::Approved),
            item(business_id, "b", "Health & Safety", true, ItemStatus::Missing),
            // Optional, incomplete; must not dilute the score
            item(business_id, "c", "Extras", false, ItemStatus::Missing),
        ];
        let score = compute_compliance_score(business_id, &items, fixed_now()).unwrap();
        assert_eq!(score.required_total, 2);
        assert_eq!(score.completed_total, 1);
        assert_eq!(score.score_percent, 50);
    }

    #[test]
    fn test_rounding_is_half_up() {
        assert_eq!(percent_round_half_up(1, 3), 33);
        assert_eq!(percent_round_half_up(2, 3), 67);
        assert_eq!(percent_round_half_up(1, 8), 13); // 12.5 rounds up
        assert_eq!(percent_round_half_up(0, 7), 0);
        assert_eq!(percent_round_half_up(7, 7), 100);
    }

    #[test]
    fn test_rounding_is_exact_at_u32_extremes() {
        assert_eq!(percent_round_half_up(u32::MAX, u32::MAX), 100);
        assert_eq!(percent_round_half_up(u32::MAX / 2, u32::MAX), 50);
        assert_eq!(percent_round_half_up(30_000_000, 60_000_000), 50);
    }

    #[test]
    fn test_breakdown_omits_categories_without_required_items() {
        let business_id = Uuid::new_v4();
        let items = vec![
            item(business_id, "a", "Fire Safety", true, ItemStatus::Uploaded),
            item(business_id, "b", "Extras", false, ItemStatus::Uploaded),
        ];
        let score = compute_compliance_score(business_id, &items, fixed_now()).unwrap();
        assert!(score.breakdown.contains_key("Fire Safety"));
        assert!(!score.breakdown.contains_key("Extras"));
        assert_eq!(score.breakdown["Fire Safety"].required_completed, 1);
    }

    #[test]
    fn test_needs_review_counts_optional_items_too() {
        let business_id = Uuid::new_v4();
        let items = vec![
            item(business_id, "a", "Extras", false, ItemStatus::NeedsReview),
            item(business_id, "b", "Fire Safety", true, ItemStatus::Approved),
        ];
        let score = compute_compliance_score(business_id, &items, fixed_now()).unwrap();
        assert_eq!(score.needs_review_count, 1);
    }

    #[test]
    fn test_past_review_date_on_missing_item_is_not_overdue() {
        let business_id = Uuid::new_v4();
        let mut stale = item(business_id, "a", "Fire Safety", true, ItemStatus::Missing);
        stale.next_review_due = Some(fixed_now().date_naive() - Duration::days(10));
        let score = compute_compliance_score(business_id, &[stale], fixed_now()).unwrap();
        assert_eq!(score.overdue_count, 0);
        // Still flagged, but through the missing path
        assert_eq!(score.missing_count, 1);
        assert_eq!(score.status_label, StatusLabel::NeedsAttention);
    }

    #[test]
    fn test_overdue_label_dominates_score() {
        let business_id = Uuid::new_v4();
        let mut items: Vec<_> = (0..9)
            .map(|i| {
                item(
                    business_id,
                    &format!("k{i}"),
                    "Health & Safety",
                    true,
                    ItemStatus::Approved,
                )
            })
            .collect();
        items[0].next_review_due = Some(fixed_now().date_naive() - Duration::days(1));
        let score = compute_compliance_score(business_id, &items, fixed_now()).unwrap();
        assert_eq!(score.score_percent, 100);
        assert_eq!(score.overdue_count, 1);
        assert_eq!(score.status_label, StatusLabel::Overdue);
    }

    #[test]
    fn test_review_due_today_is_not_yet_overdue() {
        let business_id = Uuid::new_v4();
        let mut fresh = item(business_id, "a", "Fire Safety", true, ItemStatus::Approved);
        fresh.next_review_due = Some(fixed_now().date_naive());
        let score = compute_compliance_score(business_id, &[fresh], fixed_now()).unwrap();
        assert_eq!(score.overdue_count, 0);
        assert_eq!(score.status_label, StatusLabel::OnTrack);
    }

    #[test]
    fn test_missing_required_item_needs_attention_even_at_high_score() {
        let business_id = Uuid::new_v4();
        let mut items: Vec<_> = (0..9)
            .map(|i| {
                item(
                    business_id,
                    &format!("k{i}"),
                    "Health & Safety",
                    true,
                    ItemStatus::Approved,
                )
            })
            .collect();
        items.push(item(
            business_id,
            "k9",
            "Health & Safety",
            true,
            ItemStatus::Missing,
        ));
        let score = compute_compliance_score(business_id, &items, fixed_now()).unwrap();
        assert_eq!(score.score_percent, 90);
        assert_eq!(score.status_label, StatusLabel::NeedsAttention);
    }

    #[test]
    fn test_foreign_item_is_rejected() {
        let business_id = Uuid::new_v4();
        let foreign = item(Uuid::new_v4(), "a", "Fire Safety", true, ItemStatus::Missing);
        let err = compute_compliance_score(business_id, &[foreign.clone()], fixed_now())
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::ForeignItem {
                item_id: foreign.id,
                expected: business_id,
                found: foreign.business_id,
            }
        );
    }
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use shared_types::{ComplianceItemTemplate, ItemType};

    fn arb_status() -> impl Strategy<Value = ItemStatus> {
        prop_oneof![
            Just(ItemStatus::Missing),
            Just(ItemStatus::Draft),
            Just(ItemStatus::Uploaded),
            Just(ItemStatus::Acknowledged),
            Just(ItemStatus::Approved),
            Just(ItemStatus::NeedsReview),
            Just(ItemStatus::Overdue),
        ]
    }

    fn build_items(
        business_id: Uuid,
        cases: Vec<(bool, ItemStatus, u8)>,
    ) -> Vec<ComplianceItem> {
        cases
            .into_iter()
            .enumerate()
            .map(|(i, (required, status, cat))| {
                let category = format!("Category {}", cat % 4);
                let key = format!("item_{i}");
                let template = if required {
                    ComplianceItemTemplate::required(&key, &key, ItemType::Policy, &category)
                } else {
                    ComplianceItemTemplate::optional(&key, &key, ItemType::Policy, &category)
                };
                let mut item = ComplianceItem::from_template(business_id, &template);
                item.status = status;
                item
            })
            .collect()
    }

    proptest! {
        /// Property: the score is always within [0, 100] and exactly 100 when
        /// nothing is required
        #[test]
        fn score_is_bounded(cases in prop::collection::vec((any::<bool>(), arb_status(), any::<u8>()), 0..40)) {
            let business_id = Uuid::new_v4();
            let items = build_items(business_id, cases);
            let now = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
            let score = compute_compliance_score(business_id, &items, now).unwrap();

            prop_assert!(score.score_percent <= 100);
            if score.required_total == 0 {
                prop_assert_eq!(score.score_percent, 100);
            }
        }

        /// Property: completed never exceeds required, overall and per category
        #[test]
        fn completed_never_exceeds_required(cases in prop::collection::vec((any::<bool>(), arb_status(), any::<u8>()), 0..40)) {
            let business_id = Uuid::new_v4();
            let items = build_items(business_id, cases);
            let now = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
            let score = compute_compliance_score(business_id, &items, now).unwrap();

            prop_assert!(score.completed_total <= score.required_total);
            for counts in score.breakdown.values() {
                prop_assert!(counts.required_completed <= counts.required_total);
                prop_assert!(counts.required_total >= 1);
            }
        }

        /// Property: the status cascade is consistent with the counters
        #[test]
        fn label_cascade_matches_counters(cases in prop::collection::vec((any::<bool>(), arb_status(), any::<u8>()), 0..40)) {
            let business_id = Uuid::new_v4();
            let items = build_items(business_id, cases);
            let now = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
            let score = compute_compliance_score(business_id, &items, now).unwrap();

            match score.status_label {
                StatusLabel::Overdue => prop_assert!(score.overdue_count > 0),
                StatusLabel::NeedsAttention => {
                    prop_assert_eq!(score.overdue_count, 0);
                    prop_assert!(score.score_percent < 80 || score.missing_count > 0);
                }
                StatusLabel::OnTrack => {
                    prop_assert_eq!(score.overdue_count, 0);
                    prop_assert!(score.score_percent >= 80);
                    prop_assert_eq!(score.missing_count, 0);
                }
            }
        }
    }
}
