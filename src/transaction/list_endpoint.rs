//! The JSON API for querying transactions by the month they were sold in.

use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};

use crate::{AppState, month::MonthQuery, transaction::TransactionStore};

/// The state needed to query transactions.
#[derive(Debug, Clone)]
pub struct TransactionQueryState {
    /// The store to query.
    pub transaction_store: Arc<TransactionStore>,
}

impl FromRef<AppState> for TransactionQueryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// Get the transactions sold in the month given by the `month` query parameter.
///
/// Responds with a JSON array of transactions in store order. The array is
/// empty if no transactions match, or if `month` is missing or is not a
/// number from 1 to 12.
pub async fn get_transactions_endpoint(
    State(state): State<TransactionQueryState>,
    Query(query): Query<MonthQuery>,
) -> Response {
    let month = query.selector();

    let transactions: Vec<_> = state
        .transaction_store
        .in_month(month)
        .into_iter()
        .map(|dated| &dated.transaction)
        .collect();

    tracing::debug!(
        "found {} transactions for month {:?}",
        transactions.len(),
        query.month
    );

    Json(transactions).into_response()
}
