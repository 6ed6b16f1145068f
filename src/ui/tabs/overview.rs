use crate::ui::app::{ChartKind, DashboardApp};
use crate::ui::{theme, widgets};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const TITLE: &str = "Number of tweets by sentiment";

pub(super) fn draw(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    let table = app.analytics.sentiment_counts();
    match app.sentiment_chart {
        ChartKind::Bar => {
            let chart = widgets::count_bar_chart(TITLE.to_string(), &table, |label, _| {
                theme::sentiment_color_by_label(label)
            });
            f.render_widget(chart, chunks[0]);
        }
        ChartKind::Pie => {
            widgets::render_share(f, chunks[0], TITLE.to_string(), &table, |label, _| {
                theme::sentiment_color_by_label(label)
            });
        }
    }

    draw_random_tweet(f, app, chunks[1]);
}

fn draw_random_tweet(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::sentiment_color(app.random_sentiment)))
        .title(Span::styled(
            format!("Random {} tweet", app.random_sentiment),
            theme::title_style(),
        ));

    let lines = match &app.random_tweet {
        Some(tweet) => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(
                        tweet.airline.label(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        tweet.created_at.format("%Y-%m-%d %H:%M").to_string(),
                        theme::hint_style(),
                    ),
                ]),
                Line::raw(""),
                Line::from(tweet.text.clone()),
                Line::raw(""),
            ];
            if let Some(author) = &tweet.author {
                lines.push(Line::from(Span::styled(
                    format!("@{author}, {} retweets", tweet.retweet_count),
                    theme::hint_style(),
                )));
            }
            lines
        }
        None => vec![Line::from(Span::styled(
            format!("no {} tweets in the dataset", app.random_sentiment),
            theme::hint_style(),
        ))],
    };

    let panel = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(panel, area);
}
