use crate::ui::app::DashboardApp;
use crate::ui::theme;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};
use ratatui::widgets::{Block, Borders, Row, Sparkline, Table};
use ratatui::Frame;

pub(super) fn draw(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    draw_hour_histogram(f, app, chunks[0]);
    if app.show_raw {
        draw_raw_rows(f, app, chunks[1]);
    } else {
        draw_world_map(f, app, chunks[1]);
    }
}

fn caption(app: &DashboardApp) -> String {
    let in_hour = app.analytics.at_hour(app.hour).len();
    format!(
        "{} tweets between {}:00 and {}:00",
        in_hour,
        app.hour,
        (app.hour + 1) % 24
    )
}

fn draw_hour_histogram(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let histogram = app.analytics.hour_histogram();
    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(caption(app), theme::title_style())),
        )
        .data(&histogram.0)
        .style(Style::default().fg(theme::ACCENT));
    f.render_widget(sparkline, area);
}

fn draw_world_map(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let located = app.analytics.located_at_hour(app.hour);
    let points: Vec<(f64, f64)> = located
        .iter()
        .filter_map(|t| t.coord)
        .map(|c| (c.longitude, c.latitude))
        .collect();

    let title = format!("Tweet locations based on time of day ({} located)", points.len());
    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, theme::title_style())),
        )
        .marker(Marker::Braille)
        .x_bounds([-180.0, 180.0])
        .y_bounds([-90.0, 90.0])
        .paint(|ctx| {
            ctx.draw(&Map {
                color: theme::MAP_LAND,
                resolution: MapResolution::High,
            });
            ctx.draw(&Points {
                coords: &points,
                color: theme::MAP_POINT,
            });
        });
    f.render_widget(canvas, area);
}

fn draw_raw_rows(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let located = app.analytics.located_at_hour(app.hour);
    let rows: Vec<Row> = located
        .iter()
        .filter_map(|tweet| {
            let coord = tweet.coord?;
            Some(Row::new(vec![
                tweet.created_at.format("%m-%d %H:%M").to_string(),
                tweet.airline.label().to_string(),
                tweet.sentiment.label().to_string(),
                format!("{:.3}", coord.latitude),
                format!("{:.3}", coord.longitude),
                tweet.text.clone(),
            ]))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(11),
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Min(20),
        ],
    )
    .header(
        Row::new(vec!["created", "airline", "sentiment", "lat", "lon", "text"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Raw rows".to_string(), theme::title_style())),
    );
    f.render_widget(table, area);
}
