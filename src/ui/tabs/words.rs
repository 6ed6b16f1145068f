use crate::ui::app::DashboardApp;
use crate::ui::{theme, widgets};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub(super) fn draw(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let freq = app
        .analytics
        .word_frequencies(app.cloud_sentiment, app.word_limit);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(area);

    let cloud = widgets::word_cloud(
        format!("Word cloud for {} sentiment", app.cloud_sentiment),
        &freq,
    );
    f.render_widget(cloud, chunks[0]);

    draw_top_words(f, app, chunks[1], &freq);
}

fn draw_top_words(
    f: &mut Frame,
    app: &DashboardApp,
    area: Rect,
    freq: &crate::domain::model::WordFrequencies,
) {
    let max = freq.max().max(1);
    let lines: Vec<Line> = freq
        .rows
        .iter()
        .take(15)
        .map(|(word, count)| {
            let cells = ((*count as f64 / max as f64) * 12.0).round().max(1.0) as usize;
            Line::from(vec![
                Span::styled(format!("{count:>6}  "), theme::hint_style()),
                Span::styled(
                    word.clone(),
                    Style::default().fg(theme::sentiment_color(app.cloud_sentiment)),
                ),
                Span::raw(" "),
                Span::styled("▁".repeat(cells), Style::default().fg(theme::ACCENT)),
            ])
        })
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Top words".to_string(), theme::title_style())),
    );
    f.render_widget(panel, area);
}
