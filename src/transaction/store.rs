//! The read-only, in-memory store of transactions.

use std::{collections::HashSet, fs, path::Path};

use time::Date;

use crate::{
    Error,
    month::MonthSelector,
    timezone::{calendar_date_in, get_timezone},
    transaction::core::{Transaction, TransactionId},
};

/// The sample data set compiled into the binary.
const BUNDLED_TRANSACTIONS: &str = include_str!("../../data/product_transaction.json");

/// A transaction paired with the calendar date it was sold on.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedTransaction {
    /// The transaction as it was loaded.
    pub transaction: Transaction,
    /// The date of sale, normalized to the store's timezone when it was loaded.
    pub sale_date: Date,
}

/// An immutable collection of transactions, loaded once at startup.
///
/// Every transaction's date of sale is converted to a calendar date in the
/// store's timezone when the store is created, so month queries never depend
/// on the timezone of the request or of the host.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    transactions: Vec<DatedTransaction>,
    timezone: String,
}

impl TransactionStore {
    /// Create a store from `transactions`, keeping their order.
    ///
    /// `timezone` should be a valid, canonical timezone name, e.g. "Etc/UTC".
    ///
    /// # Errors
    /// Returns an error if:
    /// - `timezone` is not a known timezone,
    /// - two transactions have the same ID,
    /// - a price is negative or not finite,
    /// - or a date of sale cannot be parsed.
    pub fn new(transactions: Vec<Transaction>, timezone: &str) -> Result<Self, Error> {
        let tz = get_timezone(timezone)
            .ok_or_else(|| Error::InvalidTimezoneError(timezone.to_owned()))?;

        let mut seen_ids: HashSet<TransactionId> = HashSet::with_capacity(transactions.len());
        let mut dated_transactions = Vec::with_capacity(transactions.len());

        for transaction in transactions {
            if !seen_ids.insert(transaction.id) {
                return Err(Error::DuplicateTransactionId(transaction.id));
            }

            if !transaction.price.is_finite() || transaction.price < 0.0 {
                return Err(Error::InvalidPrice {
                    id: transaction.id,
                    price: transaction.price,
                });
            }

            let sale_date = calendar_date_in(&transaction.date_of_sale, tz).ok_or_else(|| {
                Error::InvalidSaleDate {
                    id: transaction.id,
                    date_of_sale: transaction.date_of_sale.clone(),
                }
            })?;

            dated_transactions.push(DatedTransaction {
                transaction,
                sale_date,
            });
        }

        Ok(Self {
            transactions: dated_transactions,
            timezone: timezone.to_owned(),
        })
    }

    /// Create a store from a JSON array of transactions.
    ///
    /// # Errors
    /// Returns [Error::InvalidJson] if `json` is not an array of transactions,
    /// otherwise the same errors as [TransactionStore::new].
    pub fn from_json(json: &str, timezone: &str) -> Result<Self, Error> {
        let transactions: Vec<Transaction> =
            serde_json::from_str(json).map_err(|error| Error::InvalidJson(error.to_string()))?;

        Self::new(transactions, timezone)
    }

    /// Load the store from the JSON file at `path`.
    ///
    /// # Errors
    /// Returns [Error::DataFileError] if the file cannot be read, otherwise
    /// the same errors as [TransactionStore::from_json].
    pub fn load(path: &Path, timezone: &str) -> Result<Self, Error> {
        let json = fs::read_to_string(path)
            .map_err(|error| Error::DataFileError(path.display().to_string(), error.to_string()))?;

        Self::from_json(&json, timezone)
    }

    /// Load the sample data set that ships with the application.
    ///
    /// # Errors
    /// Returns an error if `timezone` is invalid.
    pub fn bundled(timezone: &str) -> Result<Self, Error> {
        Self::from_json(BUNDLED_TRANSACTIONS, timezone)
    }

    /// Get the transactions sold in `month`, in store order.
    ///
    /// Returns an empty list if `month` is `None`, i.e. the client did not
    /// select a valid month.
    pub fn in_month(&self, month: Option<MonthSelector>) -> Vec<&DatedTransaction> {
        let Some(month) = month else {
            return Vec::new();
        };

        self.transactions
            .iter()
            .filter(|transaction| transaction.sale_date.month() == month.month())
            .collect()
    }

    /// All transactions in store order.
    pub fn transactions(&self) -> &[DatedTransaction] {
        &self.transactions
    }

    /// The number of transactions in the store.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store has no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The canonical name of the timezone sale dates were normalized to.
    pub fn timezone(&self) -> &str {
        &self.timezone
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use time::Month;

    use crate::{
        Error,
        month::MonthSelector,
        timezone::DEFAULT_TIMEZONE,
        transaction::{core::Transaction, test_utils::scenario_store},
    };

    use super::TransactionStore;

    fn month(month: Month) -> Option<MonthSelector> {
        Some(MonthSelector::from(month))
    }

    fn ids(transactions: &[&super::DatedTransaction]) -> Vec<i64> {
        transactions
            .iter()
            .map(|transaction| transaction.transaction.id)
            .collect()
    }

    #[test]
    fn in_month_returns_matching_transactions_in_store_order() {
        let store = scenario_store();

        let got = store.in_month(month(Month::March));

        assert_eq!(ids(&got), vec![1, 2]);
    }

    #[test]
    fn in_month_returns_nothing_without_a_month() {
        let store = scenario_store();

        assert!(store.in_month(None).is_empty());
        assert!(store.in_month(MonthSelector::parse("13")).is_empty());
        assert!(store.in_month(MonthSelector::parse("abc")).is_empty());
    }

    #[test]
    fn in_month_returns_nothing_for_month_without_sales() {
        let store = scenario_store();

        assert!(store.in_month(month(Month::December)).is_empty());
    }

    #[test]
    fn every_transaction_is_in_exactly_one_month() {
        let store = TransactionStore::bundled(DEFAULT_TIMEZONE).unwrap();

        let mut total = 0;
        for selector in MonthSelector::all() {
            let transactions = store.in_month(Some(selector));
            assert!(
                transactions
                    .iter()
                    .all(|transaction| transaction.sale_date.month() == selector.month())
            );
            total += transactions.len();
        }

        assert_eq!(total, store.len());
    }

    #[test]
    fn month_ignores_year() {
        let store = TransactionStore::new(
            vec![
                Transaction::build(1, "A", 1.0, "2021-07-01").finalize(),
                Transaction::build(2, "B", 2.0, "2022-08-01").finalize(),
                Transaction::build(3, "C", 3.0, "2023-07-31").finalize(),
            ],
            DEFAULT_TIMEZONE,
        )
        .unwrap();

        assert_eq!(ids(&store.in_month(month(Month::July))), vec![1, 3]);
    }

    #[test]
    fn sale_month_depends_on_store_timezone() {
        let transactions =
            vec![Transaction::build(1, "A", 1.0, "2021-11-01T02:00:00+05:30").finalize()];

        let utc_store = TransactionStore::new(transactions.clone(), "Etc/UTC").unwrap();
        let india_store = TransactionStore::new(transactions, "Asia/Kolkata").unwrap();

        assert_eq!(ids(&utc_store.in_month(month(Month::October))), vec![1]);
        assert_eq!(ids(&india_store.in_month(month(Month::November))), vec![1]);
        assert_eq!(india_store.timezone(), "Asia/Kolkata");
    }

    #[test]
    fn rejects_invalid_timezone() {
        let result = TransactionStore::new(Vec::new(), "Not/AZone");

        assert_eq!(
            result.unwrap_err(),
            Error::InvalidTimezoneError("Not/AZone".to_owned())
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = TransactionStore::new(
            vec![
                Transaction::build(1, "A", 1.0, "2024-01-01").finalize(),
                Transaction::build(1, "B", 2.0, "2024-01-02").finalize(),
            ],
            DEFAULT_TIMEZONE,
        );

        assert_eq!(result.unwrap_err(), Error::DuplicateTransactionId(1));
    }

    #[test]
    fn rejects_negative_price() {
        let result = TransactionStore::new(
            vec![Transaction::build(4, "A", -0.01, "2024-01-01").finalize()],
            DEFAULT_TIMEZONE,
        );

        assert_eq!(
            result.unwrap_err(),
            Error::InvalidPrice {
                id: 4,
                price: -0.01
            }
        );
    }

    #[test]
    fn rejects_invalid_sale_date() {
        let result = TransactionStore::new(
            vec![Transaction::build(9, "A", 1.0, "last tuesday").finalize()],
            DEFAULT_TIMEZONE,
        );

        assert_eq!(
            result.unwrap_err(),
            Error::InvalidSaleDate {
                id: 9,
                date_of_sale: "last tuesday".to_owned()
            }
        );
    }

    #[test]
    fn from_json_rejects_malformed_json() {
        let result = TransactionStore::from_json(r#"{"id": 1}"#, DEFAULT_TIMEZONE);

        assert!(matches!(result, Err(Error::InvalidJson(_))));
    }

    #[test]
    fn from_json_accepts_empty_array() {
        let store = TransactionStore::from_json("[]", DEFAULT_TIMEZONE).unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn load_reports_missing_file() {
        let path = Path::new("this/file/does/not/exist.json");

        let result = TransactionStore::load(path, DEFAULT_TIMEZONE);

        assert!(matches!(
            result,
            Err(Error::DataFileError(ref got, _)) if got == &path.display().to_string()
        ));
    }

    #[test]
    fn bundled_data_loads() {
        let store = TransactionStore::bundled(DEFAULT_TIMEZONE).unwrap();

        assert!(!store.is_empty());
        assert_eq!(store.transactions().len(), store.len());
    }

    #[test]
    fn bundled_new_year_sale_moves_with_timezone() {
        let utc_store = TransactionStore::bundled(DEFAULT_TIMEZONE).unwrap();
        let india_store = TransactionStore::bundled("Asia/Kolkata").unwrap();

        assert!(ids(&utc_store.in_month(month(Month::December))).contains(&6));
        assert!(ids(&india_store.in_month(month(Month::January))).contains(&6));
    }
}
