//! Sales statistics and the price histogram for a month of transactions.
//!
//! Both are derived in a single pass over the transactions returned by a
//! month query, and are recomputed from scratch for every query.

use crate::transaction::Transaction;

/// The price ranges used to group transactions in the price histogram.
///
/// A price falls in the first range whose upper bound it does not exceed,
/// so every non-negative price is in exactly one range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRange {
    /// Prices up to and including $100.
    UpTo100,
    /// Prices over $100 up to and including $500.
    UpTo500,
    /// Prices over $500 up to and including $1000.
    UpTo1000,
    /// Prices over $1000.
    Over1000,
}

impl PriceRange {
    /// All price ranges in increasing order of price.
    pub const ALL: [PriceRange; 4] = [
        PriceRange::UpTo100,
        PriceRange::UpTo500,
        PriceRange::UpTo1000,
        PriceRange::Over1000,
    ];

    /// Get the price range that `price` falls in.
    pub fn for_price(price: f64) -> Self {
        if price <= 100.0 {
            PriceRange::UpTo100
        } else if price <= 500.0 {
            PriceRange::UpTo500
        } else if price <= 1000.0 {
            PriceRange::UpTo1000
        } else {
            PriceRange::Over1000
        }
    }

    /// The label shown on the chart axis, e.g. "101-500".
    pub fn label(self) -> &'static str {
        match self {
            PriceRange::UpTo100 => "0-100",
            PriceRange::UpTo500 => "101-500",
            PriceRange::UpTo1000 => "501-1000",
            PriceRange::Over1000 => "1000+",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// The number of transactions in each [PriceRange].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceHistogram {
    counts: [usize; 4],
}

impl PriceHistogram {
    /// The number of transactions counted in `range`.
    pub fn count(&self, range: PriceRange) -> usize {
        self.counts[range.index()]
    }

    /// The total number of transactions counted across all ranges.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Each price range paired with its count, in increasing order of price.
    pub fn buckets(&self) -> impl Iterator<Item = (PriceRange, usize)> + '_ {
        PriceRange::ALL
            .into_iter()
            .map(|range| (range, self.count(range)))
    }

    fn add(&mut self, price: f64) {
        self.counts[PriceRange::for_price(price).index()] += 1;
    }
}

/// Totals for sold and unsold transactions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaleStatistics {
    /// The sum of the prices of the sold transactions.
    pub total_sales: f64,
    /// The number of sold transactions.
    pub total_sold: usize,
    /// The number of unsold transactions.
    pub total_not_sold: usize,
}

/// The statistics and price histogram for one month of transactions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySummary {
    /// Sales totals.
    pub statistics: SaleStatistics,
    /// Transaction counts by price range.
    pub histogram: PriceHistogram,
}

impl MonthlySummary {
    /// Summarize `transactions` in a single pass.
    ///
    /// An empty list gives all-zero statistics and an all-zero histogram.
    pub fn from_transactions<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut summary = MonthlySummary::default();

        for transaction in transactions {
            let statistics = &mut summary.statistics;

            if transaction.sold {
                statistics.total_sold += 1;
                statistics.total_sales += transaction.price;
            } else {
                statistics.total_not_sold += 1;
            }

            summary.histogram.add(transaction.price);
        }

        summary
    }

    /// The number of transactions that were summarized.
    pub fn transaction_count(&self) -> usize {
        self.statistics.total_sold + self.statistics.total_not_sold
    }
}
