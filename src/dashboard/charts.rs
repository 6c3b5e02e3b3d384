//! The price range bar chart.
//!
//! The chart is generated as JSON configuration for the ECharts library and
//! rendered as an HTML container followed by the script that initializes it.
//! The script sits inline next to its container so that it also runs when
//! htmx swaps in new dashboard content.

use charming::{
    Chart,
    component::{Axis, Grid, Legend},
    element::{AxisPointer, AxisPointerType, AxisType, ItemStyle, Tooltip, Trigger},
    series::bar,
};
use maud::{Markup, PreEscaped, html};

use crate::dashboard::aggregation::PriceHistogram;

/// The HTML element ID of the chart container.
pub(super) const PRICE_RANGE_CHART_ID: &str = "price-range-chart";

const BAR_COLOR: &str = "rgba(75, 192, 192, 0.6)";

/// Build the ECharts options for a bar chart of `histogram`.
pub(super) fn price_range_chart(histogram: &PriceHistogram) -> Chart {
    let (labels, counts): (Vec<String>, Vec<f64>) = histogram
        .buckets()
        .map(|(range, count)| (range.label().to_owned(), count as f64))
        .unzip();

    Chart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .legend(Legend::new())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(
            bar::Bar::new()
                .name("Number of Items")
                .item_style(ItemStyle::new().color(BAR_COLOR))
                .data(counts),
        )
}

/// Renders the chart container and the script that draws `chart` in it.
pub(super) fn chart_view(chart: &Chart) -> Markup {
    let script = format!(
        r#"(function() {{
            const chartDom = document.getElementById("{PRICE_RANGE_CHART_ID}");
            const chart = echarts.init(chartDom);
            const option = {chart};
            chart.setOption(option);

            window.addEventListener('resize', chart.resize);

            const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
            const updateTheme = () => {{
                chart.setTheme(darkModeMediaQuery.matches ? 'dark' : 'default');
            }};
            darkModeMediaQuery.addEventListener('change', updateTheme);
            updateTheme();
        }})();"#
    );

    html!(
        div
            id=(PRICE_RANGE_CHART_ID)
            class="min-h-[380px] w-full rounded dark:bg-gray-100"
        {}

        script { (PreEscaped(script)) }
    )
}
