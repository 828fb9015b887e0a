//! Property-based tests for the balance ledger.

use divvy_shared::types::{Amount, UserId};
use proptest::prelude::*;

use super::balance::BalanceLedger;
use crate::split::{SplitPolicy, compute_splits};

const MEMBER_COUNT: u64 = 4;

fn members() -> Vec<UserId> {
    (1..=MEMBER_COUNT).map(UserId::from_index).collect()
}

/// Strategy to generate one of the fixed members.
fn member() -> impl Strategy<Value = UserId> {
    (1u64..=MEMBER_COUNT).prop_map(UserId::from_index)
}

/// One ledger mutation: an equal-split expense or a direct payment.
#[derive(Debug, Clone)]
enum Op {
    Expense { payer: UserId, total: Amount },
    Settle { from: UserId, to: UserId, amount: Amount },
}

/// Strategy to generate a valid mutation.
fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (member(), 1i64..100_000).prop_map(|(payer, minor)| Op::Expense {
            payer,
            total: Amount::from_minor_units(minor),
        }),
        (member(), member(), 1i64..50_000)
            .prop_filter("settlement needs two distinct members", |(from, to, _)| {
                from != to
            })
            .prop_map(|(from, to, minor)| Op::Settle {
                from,
                to,
                amount: Amount::from_minor_units(minor),
            }),
    ]
}

fn apply(ledger: &mut BalanceLedger, op: &Op) {
    match op {
        Op::Expense { payer, total } => {
            let splits = compute_splits(*total, &members(), &SplitPolicy::Equal).unwrap();
            ledger.apply_expense(*payer, &splits);
        }
        Op::Settle { from, to, amount } => {
            ledger.apply_settlement(*from, *to, *amount).unwrap();
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The two directed views of any pair are exact mirror images after an
    /// arbitrary sequence of mutations.
    #[test]
    fn prop_views_stay_antisymmetric(ops in prop::collection::vec(op(), 0..40)) {
        let mut ledger = BalanceLedger::new();
        for op in &ops {
            apply(&mut ledger, op);
        }

        for a in members() {
            for b in members() {
                prop_assert_eq!(ledger.net_balance(a, b), -ledger.net_balance(b, a));
            }
        }
    }

    /// Money never appears or vanishes: summing the signed balance over
    /// every ordered member pair always gives zero.
    #[test]
    fn prop_ordered_pairs_sum_to_zero(ops in prop::collection::vec(op(), 0..40)) {
        let mut ledger = BalanceLedger::new();
        for op in &ops {
            apply(&mut ledger, op);
        }

        let mut total = Amount::ZERO;
        for a in members() {
            for b in members() {
                total += ledger.net_balance(a, b);
            }
        }
        prop_assert_eq!(total, Amount::ZERO);
    }

    /// Per-member listings agree with pairwise lookups and never contain a
    /// zero entry (settled pairs are pruned, not stored as zero).
    #[test]
    fn prop_listings_agree_with_lookups(ops in prop::collection::vec(op(), 0..40)) {
        let mut ledger = BalanceLedger::new();
        for op in &ops {
            apply(&mut ledger, op);
        }

        for member in members() {
            for (counterparty, amount) in ledger.balances_for(member) {
                prop_assert!(!amount.is_zero());
                prop_assert_eq!(ledger.net_balance(member, counterparty), amount);
            }
        }
    }

    /// Settling every debt at its exact amount leaves an empty ledger.
    #[test]
    fn prop_exact_settlement_empties_ledger(ops in prop::collection::vec(op(), 1..40)) {
        let mut ledger = BalanceLedger::new();
        for op in &ops {
            apply(&mut ledger, op);
        }

        for a in members() {
            for (b, amount) in ledger.balances_for(a) {
                if amount.is_positive() {
                    // b owes a; pay it back in full
                    ledger.apply_settlement(b, a, amount).unwrap();
                }
            }
        }

        prop_assert!(ledger.is_empty());
    }

    /// Expenses commute: the same expenses in reverse order produce the
    /// same ledger.
    #[test]
    fn prop_expense_order_is_irrelevant(
        expenses in prop::collection::vec((member(), 1i64..100_000), 0..20),
    ) {
        let all = members();

        let mut forward = BalanceLedger::new();
        for (payer, minor) in &expenses {
            let splits =
                compute_splits(Amount::from_minor_units(*minor), &all, &SplitPolicy::Equal)
                    .unwrap();
            forward.apply_expense(*payer, &splits);
        }

        let mut reversed = BalanceLedger::new();
        for (payer, minor) in expenses.iter().rev() {
            let splits =
                compute_splits(Amount::from_minor_units(*minor), &all, &SplitPolicy::Equal)
                    .unwrap();
            reversed.apply_expense(*payer, &splits);
        }

        prop_assert_eq!(forward, reversed);
    }
}
