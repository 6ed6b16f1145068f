use crate::domain::model::{Airline, CountTable};
use crate::ui::app::{ChartKind, DashboardApp};
use crate::ui::{theme, widgets};
use ratatui::layout::Rect;
use ratatui::Frame;

const TITLE: &str = "Total number of tweets for each airline";

fn shorten(label: &str) -> String {
    Airline::ALL
        .iter()
        .find(|airline| airline.label() == label)
        .map(|airline| airline.short_label().to_string())
        .unwrap_or_else(|| label.to_string())
}

pub(super) fn draw(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let table = app.analytics.airline_counts();
    let max = table.max();

    match app.airline_chart {
        ChartKind::Bar => {
            // short labels so the names survive the bar width
            let bars = CountTable::ordered(
                table.dimension,
                table
                    .iter()
                    .map(|(label, count)| (shorten(label), count))
                    .collect(),
            );
            let chart = widgets::count_bar_chart(TITLE.to_string(), &bars, |_, count| {
                theme::count_ramp(count, max)
            });
            f.render_widget(chart, area);
        }
        ChartKind::Pie => {
            widgets::render_share(f, area, TITLE.to_string(), &table, |_, count| {
                theme::count_ramp(count, max)
            });
        }
    }
}
