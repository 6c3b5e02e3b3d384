//! The table listing a month's transactions.

use maud::{Markup, html};

use crate::{
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency},
    transaction::DatedTransaction,
};

const TITLE_CELL_STYLE: &str = "text-gray-900 dark:text-white";

/// Renders a table with one row per transaction, in the order given.
///
/// The date column shows the normalized sale date rather than the raw
/// timestamp, so it always agrees with the month the row was filtered by.
pub(super) fn transaction_table(transactions: &[&DatedTransaction]) -> Markup {
    html! {
        div class="overflow-x-auto rounded-lg shadow"
        {
            table
                id="transaction-table"
                class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "ID" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Title" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Price" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Sold" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date of Sale" }
                    }
                }

                tbody
                {
                    @for dated in transactions {
                        @let transaction = &dated.transaction;
                        @let sold = if transaction.sold { "Yes" } else { "No" };

                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE) { (transaction.id) }
                            th
                                scope="row"
                                class={(TABLE_CELL_STYLE) " font-medium " (TITLE_CELL_STYLE)}
                            {
                                (transaction.title)
                            }
                            td class=(TABLE_CELL_STYLE) { (format_currency(transaction.price)) }
                            td class=(TABLE_CELL_STYLE) { (sold) }
                            td class=(TABLE_CELL_STYLE) { (dated.sale_date) }
                        }
                    }
                }
            }
        }
    }
}
