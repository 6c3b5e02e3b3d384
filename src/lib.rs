//! A dashboard for browsing product sales by calendar month.
//!
//! The library loads a fixed set of transaction records into an immutable
//! in-memory store and serves them two ways: a JSON API that filters the
//! records by the month they were sold in, and an HTML dashboard that shows
//! the month's transactions next to sales statistics and a price range chart.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod dashboard;
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod month;
mod not_found;
mod routing;
mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use dashboard::{MonthlySummary, PriceHistogram, PriceRange, SaleStatistics};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use month::MonthSelector;
pub use routing::build_router;
pub use timezone::DEFAULT_TIMEZONE;
pub use transaction::{
    DatedTransaction, Transaction, TransactionBuilder, TransactionId, TransactionStore,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
///
/// All of these happen while loading the transaction store at startup. Once
/// the store is loaded, serving requests cannot fail.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The transaction data file could not be read.
    ///
    /// Callers should pass in the path of the file and the underlying error as
    /// a string.
    #[error("could not read the transaction data file \"{0}\": {1}")]
    DataFileError(String, String),

    /// The transaction data is not a JSON array of transaction records.
    #[error("could not parse the transaction data: {0}")]
    InvalidJson(String),

    /// A transaction has a date of sale that is not an RFC 3339 timestamp,
    /// a date and time without an offset, or a plain calendar date.
    #[error("transaction {id} has an invalid date of sale \"{date_of_sale}\"")]
    InvalidSaleDate {
        /// The ID of the offending transaction.
        id: TransactionId,
        /// The date of sale exactly as it appeared in the data.
        date_of_sale: String,
    },

    /// A transaction has a negative or non-finite price.
    #[error("transaction {id} has an invalid price {price}, prices must be zero or greater")]
    InvalidPrice {
        /// The ID of the offending transaction.
        id: TransactionId,
        /// The offending price.
        price: f64,
    },

    /// Two or more transactions share the same ID.
    #[error("the transaction ID {0} is used by more than one transaction")]
    DuplicateTransactionId(TransactionId),

    /// The configured timezone is not a canonical timezone name.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}
