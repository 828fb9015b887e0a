//! Divvy walkthrough binary.
//!
//! Runs a scripted month of shared household expenses against an in-memory
//! directory and prints the balance report as it evolves: one expense per
//! split policy, a cash advance between two members, and a settlement that
//! clears a pair completely.
//!
//! Usage: cargo run --bin divvy-demo

use anyhow::Result;
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use divvy_core::{Directory, SplitPolicy};
use divvy_shared::types::Amount;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "divvy_core=info,divvy_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut directory = Directory::new();

    // Register the household
    let aditya = directory.create_user("Aditya");
    let rohit = directory.create_user("Rohit");
    let manish = directory.create_user("Manish");
    let saurav = directory.create_user("Saurav");
    let everyone = [aditya, rohit, manish, saurav];

    let group = directory.create_group("Hostel Expenses");
    for user in everyone {
        directory.add_member_to_group(user, group)?;
    }

    // Aditya fronts lunch for the whole group, split evenly
    directory.add_expense(
        group,
        "Lunch",
        Amount::from_major_units(800),
        aditya,
        &everyone,
        &SplitPolicy::Equal,
    )?;

    // Manish fronts dinner for three of them with explicit shares; his own
    // 300.00 share never becomes a debt, and the 200.00 he owed Aditya from
    // lunch cancels against Aditya's dinner share, so their pair drops out
    directory.add_expense(
        group,
        "Dinner",
        Amount::from_major_units(700),
        manish,
        &[aditya, manish, saurav],
        &SplitPolicy::Exact(vec![
            Amount::from_major_units(200),
            Amount::from_major_units(300),
            Amount::from_major_units(200),
        ]),
    )?;

    println!("{}", directory.group_balances(group)?);

    // Rohit hands Manish 200.00 in cash even though nothing is owed between
    // them; the ledger records it as an advance in Rohit's favor
    directory.settle_payment(group, rohit, manish, Amount::from_major_units(200))?;

    println!("{}", directory.group_balances(group)?);

    // Rohit pays the utilities bill, weighted by room size
    directory.add_expense(
        group,
        "Utilities",
        Amount::try_from_decimal(dec!(120.40))?,
        rohit,
        &everyone,
        &SplitPolicy::Percentage(vec![dec!(40), dec!(30), dec!(20), dec!(10)]),
    )?;

    // Rohit squares up with Aditya for exactly what is left between them
    // after his utilities credit, so their pair drops out of the ledger
    let outstanding = directory.group(group)?.net_balance(aditya, rohit);
    directory.settle_payment(group, rohit, aditya, outstanding)?;
    info!(amount = %outstanding, "Debt between Rohit and Aditya cleared");

    let report = directory.group_balances(group)?;
    println!("{report}");
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
