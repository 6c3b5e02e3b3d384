//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for displaying the dashboard
//! - HTML view functions for the month form and the dashboard content
//! - State types used by the handler

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    http::header::VARY,
    response::{IntoResponse, Response},
};
use axum_htmx::{HxHistoryRestoreRequest, HxRequest};
use maud::{Markup, html};

use crate::{
    AppState, endpoints,
    dashboard::{
        aggregation::MonthlySummary,
        cards::{card, statistics_view},
        charts::{chart_view, price_range_chart},
        tables::transaction_table,
    },
    html::{BUTTON_PRIMARY_STYLE, FORM_SELECT_STYLE, HeadElement, PAGE_CONTAINER_STYLE, base},
    month::{MonthQuery, MonthSelector},
    transaction::{DatedTransaction, TransactionStore},
};

/// The ID of the element whose contents are replaced on each month query.
const DASHBOARD_CONTENT_ID: &str = "dashboard-content";

/// The message shown in place of the chart when no transactions match.
pub(super) const NO_DATA_MESSAGE: &str = "No data available for the selected month";

const ECHARTS_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The store to query for the selected month.
    pub transaction_store: Arc<TransactionStore>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// Display the transactions, statistics and price chart for the month in
/// the `month` query parameter.
///
/// Requests made by htmx get just the dashboard content so that it can be
/// swapped into the existing page in one go. All other requests, including
/// htmx history restores, get the full page.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    HxRequest(is_htmx_request): HxRequest,
    HxHistoryRestoreRequest(is_history_restore): HxHistoryRestoreRequest,
    Query(query): Query<MonthQuery>,
) -> Response {
    let selected_month = query.selector();
    let transactions = state.transaction_store.in_month(selected_month);
    let summary =
        MonthlySummary::from_transactions(transactions.iter().map(|dated| &dated.transaction));

    tracing::debug!(
        "rendering dashboard for month {:?}: {} transactions",
        query.month,
        summary.transaction_count()
    );

    let content = dashboard_content(&transactions, &summary);

    let body = if is_htmx_request && !is_history_restore {
        content
    } else {
        dashboard_view(selected_month, &content)
    };

    // The same URL serves both the full page and the fragment.
    ([(VARY, "HX-Request")], body).into_response()
}

/// Renders the full dashboard page around `content`.
fn dashboard_view(selected_month: Option<MonthSelector>, content: &Markup) -> Markup {
    let page = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="mb-6 text-3xl font-bold text-center" { "Transaction Management" }

            (month_form(selected_month))

            div
                id=(DASHBOARD_CONTENT_ID)
                class="w-full max-w-screen-xl"
            {
                (content)
            }
        }
    );

    let scripts = [HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned())];

    base("Dashboard", &scripts, &page)
}

/// Renders the month selector and search button.
///
/// Changing the month or pressing "Search" sends exactly one query for the
/// dashboard content. `hx-sync="this:replace"` aborts any query still in
/// flight when a new one starts, so an older response can never overwrite a
/// newer one. Without JavaScript the form falls back to loading the full page.
fn month_form(selected_month: Option<MonthSelector>) -> Markup {
    let dashboard_endpoint = endpoints::DASHBOARD_VIEW;

    html!(
        form
            id="month-form"
            action=(dashboard_endpoint)
            method="get"
            hx-get=(dashboard_endpoint)
            hx-trigger="change, submit"
            hx-target={"#" (DASHBOARD_CONTENT_ID)}
            hx-swap="innerHTML"
            hx-sync="this:replace"
            hx-push-url="true"
            class="flex flex-row justify-center items-center gap-4 mb-6"
        {
            label for="month" class="sr-only" { "Month" }

            select
                id="month"
                name="month"
                class=(FORM_SELECT_STYLE)
            {
                option value="" selected[selected_month.is_none()] { "Select Month" }

                @for month in MonthSelector::all() {
                    option
                        value=(month.number())
                        selected[selected_month == Some(month)]
                    {
                        (month.name())
                    }
                }
            }

            button type="submit" class={(BUTTON_PRIMARY_STYLE) " max-w-32"} { "Search" }
        }
    )
}

/// Renders the transaction table, statistics and price chart for one month.
///
/// Everything is derived from the same query result, so the three sections
/// always agree with each other.
fn dashboard_content(transactions: &[&DatedTransaction], summary: &MonthlySummary) -> Markup {
    let chart = if transactions.is_empty() {
        html!(p id="no-chart-data" { (NO_DATA_MESSAGE) })
    } else {
        chart_view(&price_range_chart(&summary.histogram))
    };

    html!(
        (card("transaction-list", "Transaction List", transaction_table(transactions)))
        (card(
            "transaction-statistics",
            "Transaction Statistics",
            statistics_view(&summary.statistics),
        ))
        (card("price-range-bar-chart", "Price Range Bar Chart", chart))
    )
}
