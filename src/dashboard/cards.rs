//! Card components for the dashboard sections.

use maud::{Markup, html};

use crate::{dashboard::aggregation::SaleStatistics, html::format_currency};

const CARD_STYLE: &str = "w-full p-4 mb-4 bg-white rounded-lg shadow dark:bg-gray-800";
const CARD_TITLE_STYLE: &str = "text-xl font-semibold mb-4";

/// Wraps `content` in a card with a heading.
pub(super) fn card(id: &str, title: &str, content: Markup) -> Markup {
    html!(
        section id=(id) class=(CARD_STYLE)
        {
            h2 class=(CARD_TITLE_STYLE) { (title) }

            (content)
        }
    )
}

/// Renders the sales totals side by side.
pub(super) fn statistics_view(statistics: &SaleStatistics) -> Markup {
    html!(
        dl class="flex flex-col md:flex-row justify-around gap-4 mt-2"
        {
            div class="flex gap-2"
            {
                dt { "Total Sales:" }
                dd id="total-sales" { (format_currency(statistics.total_sales)) }
            }

            div class="flex gap-2"
            {
                dt { "Total Sold Items:" }
                dd id="total-sold" { (statistics.total_sold) }
            }

            div class="flex gap-2"
            {
                dt { "Total Not Sold Items:" }
                dd id="total-not-sold" { (statistics.total_not_sold) }
            }
        }
    )
}
