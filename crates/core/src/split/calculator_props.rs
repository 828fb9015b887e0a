//! Property-based tests for split computation.

use divvy_shared::types::{Amount, UserId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculator::compute_splits;
use super::error::SplitError;
use super::policy::SplitPolicy;

/// Strategy to generate positive expense totals (0.01 to 100,000.00).
fn positive_total() -> impl Strategy<Value = Amount> {
    (1i64..10_000_000i64).prop_map(Amount::from_minor_units)
}

/// Strategy to generate distinct participant lists (1 to 12 users).
fn participants() -> impl Strategy<Value = Vec<UserId>> {
    (1u64..=12).prop_map(|n| (1..=n).map(UserId::from_index).collect())
}

/// Strategy to generate integer percentage vectors summing to exactly 100.
fn percentages() -> impl Strategy<Value = Vec<Decimal>> {
    (0usize..6).prop_flat_map(|cut_count| {
        prop::collection::vec(0u32..=100, cut_count).prop_map(|mut cuts| {
            cuts.sort_unstable();
            let mut parts = Vec::with_capacity(cuts.len() + 1);
            let mut last = 0;
            for cut in cuts {
                parts.push(Decimal::from(cut - last));
                last = cut;
            }
            parts.push(Decimal::from(100 - last));
            parts
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Equal splits conserve the total exactly, keep shares within one
    /// minor unit of each other, and put the larger shares first.
    #[test]
    fn prop_equal_split_conserves_total(total in positive_total(), members in participants()) {
        let splits = compute_splits(total, &members, &SplitPolicy::Equal).unwrap();

        prop_assert_eq!(splits.len(), members.len());

        let sum: Amount = splits.iter().map(|split| split.amount).sum();
        prop_assert_eq!(sum, total);

        let minor: Vec<i64> = splits.iter().map(|split| split.amount.minor_units()).collect();
        let largest = minor.iter().copied().max().unwrap();
        let smallest = minor.iter().copied().min().unwrap();
        prop_assert!(largest - smallest <= 1);
        prop_assert!(minor.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    /// Percentage splits conserve the total exactly and never produce a
    /// negative share.
    #[test]
    fn prop_percentage_split_conserves_total(
        total in positive_total(),
        percentages in percentages(),
    ) {
        let members: Vec<UserId> = (1..=percentages.len())
            .map(|i| UserId::from_index(u64::try_from(i).unwrap()))
            .collect();
        let splits = compute_splits(total, &members, &SplitPolicy::Percentage(percentages))
            .unwrap();

        prop_assert_eq!(splits.len(), members.len());

        let sum: Amount = splits.iter().map(|split| split.amount).sum();
        prop_assert_eq!(sum, total);
        prop_assert!(splits.iter().all(|split| !split.amount.is_negative()));
    }

    /// Exact policies accept any share vector that conserves the total and
    /// hand it back unchanged.
    #[test]
    fn prop_exact_accepts_conserving_shares(total in positive_total(), members in participants()) {
        let shares: Vec<Amount> = compute_splits(total, &members, &SplitPolicy::Equal)
            .unwrap()
            .into_iter()
            .map(|split| split.amount)
            .collect();

        let splits = compute_splits(total, &members, &SplitPolicy::Exact(shares.clone()))
            .unwrap();
        let returned: Vec<Amount> = splits.into_iter().map(|split| split.amount).collect();
        prop_assert_eq!(returned, shares);
    }

    /// Zero and negative totals are rejected before any policy runs.
    #[test]
    fn prop_non_positive_totals_rejected(minor in -10_000i64..=0, members in participants()) {
        let total = Amount::from_minor_units(minor);
        let result = compute_splits(total, &members, &SplitPolicy::Equal);
        prop_assert_eq!(result, Err(SplitError::NonPositiveTotal(total)));
    }
}
