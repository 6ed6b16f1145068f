use crate::domain::model::Airline;
use crate::ui::app::{ChartKind, DashboardApp};
use crate::ui::{theme, widgets};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub(super) fn draw(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let chosen = app.chosen_airlines();
    if chosen.is_empty() {
        draw_picker_hint(f, area);
        return;
    }

    // side-by-side small multiples, one per chosen airline
    let constraints: Vec<Constraint> = chosen
        .iter()
        .map(|_| Constraint::Ratio(1, chosen.len() as u32))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (slot, airline) in slots.iter().zip(chosen.iter()) {
        let table = app.analytics.sentiment_breakdown(*airline);
        match app.breakdown_chart {
            ChartKind::Bar => {
                let chart =
                    widgets::count_bar_chart(airline.label().to_string(), &table, |label, _| {
                        theme::sentiment_color_by_label(label)
                    });
                f.render_widget(chart, *slot);
            }
            ChartKind::Pie => {
                widgets::render_share(f, *slot, airline.label().to_string(), &table, |label, _| {
                    theme::sentiment_color_by_label(label)
                });
            }
        }
    }
}

fn draw_picker_hint(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Pick airlines to compare:",
            theme::title_style(),
        )),
        Line::raw(""),
    ];
    for (index, airline) in Airline::ALL.iter().enumerate() {
        lines.push(Line::from(format!("  {}  {}", index + 1, airline.label())));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "  a toggles all, b/p switches the chart kind",
        theme::hint_style(),
    )));

    let hint = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                "Breakdown airline by sentiment".to_string(),
                theme::title_style(),
            )),
    );
    f.render_widget(hint, area);
}
