use crate::{
    timezone::DEFAULT_TIMEZONE,
    transaction::{Transaction, TransactionStore},
};

/// Two March sales and one April sale spread across the price ranges.
pub(crate) fn scenario_transactions() -> Vec<Transaction> {
    vec![
        Transaction::build(1, "Backpack", 50.0, "2024-03-05")
            .sold(true)
            .finalize(),
        Transaction::build(2, "Monitor", 700.0, "2024-03-20")
            .sold(false)
            .finalize(),
        Transaction::build(3, "Laptop", 1500.0, "2024-04-01")
            .sold(true)
            .finalize(),
    ]
}

#[track_caller]
pub(crate) fn scenario_store() -> TransactionStore {
    TransactionStore::new(scenario_transactions(), DEFAULT_TIMEZONE)
        .expect("Could not create transaction store")
}
