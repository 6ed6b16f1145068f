mod airlines;
mod breakdown;
mod map;
mod overview;
mod words;

use crate::ui::app::{DashboardApp, Tab};
use crate::ui::theme;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

pub fn draw(f: &mut Frame, app: &mut DashboardApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(f.size());

    draw_header(f, app, chunks[0]);
    match app.tab {
        Tab::Overview => overview::draw(f, app, chunks[1]),
        Tab::Map => map::draw(f, app, chunks[1]),
        Tab::Airlines => airlines::draw(f, app, chunks[1]),
        Tab::Breakdown => breakdown::draw(f, app, chunks[1]),
        Tab::Words => words::draw(f, app, chunks[1]),
    }
    draw_footer(f, app, chunks[2]);
}

fn draw_header(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.title())).collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .highlight_style(
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("airmood ({} tweets)", app.analytics.len())),
        );
    f.render_widget(tabs, area);
}

fn hints(tab: Tab) -> &'static str {
    use Tab::*;

    match tab {
        Overview => " q quit | Tab switch | b/p chart kind | s sentiment | r resample",
        Map => " q quit | Tab switch | Left/Right hour | t raw rows",
        Airlines => " q quit | Tab switch | b/p chart kind",
        Breakdown => " q quit | Tab switch | 1-6 pick airlines | a all/none | b/p chart kind",
        Words => " q quit | Tab switch | s sentiment",
    }
}

fn draw_footer(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let footer = Paragraph::new(hints(app.tab)).style(theme::hint_style());
    f.render_widget(footer, area);
}
