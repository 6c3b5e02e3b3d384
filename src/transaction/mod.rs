//! Transactions and the store that holds them.
//!
//! This module contains:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The immutable `TransactionStore` and its month query
//! - The JSON API handler for querying transactions by month

mod core;
mod list_endpoint;
mod store;

#[cfg(test)]
pub(crate) mod test_utils;

pub use core::{Transaction, TransactionBuilder, TransactionId};
pub use list_endpoint::get_transactions_endpoint;
pub use store::{DatedTransaction, TransactionStore};
