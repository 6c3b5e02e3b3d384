//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use crate::transaction::TransactionStore;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The transactions to serve, shared read-only between requests.
    pub transaction_store: Arc<TransactionStore>,
}

impl AppState {
    /// Create a new [AppState] that serves the transactions in `transaction_store`.
    pub fn new(transaction_store: TransactionStore) -> Self {
        Self {
            transaction_store: Arc::new(transaction_store),
        }
    }
}
