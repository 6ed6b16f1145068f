//! Chart builders shared by the dashboard tabs. Rendering stays with
//! ratatui's widgets; these helpers only shape `CountTable`s into them.

use crate::domain::model::{CountTable, WordFrequencies};
use crate::ui::theme;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

/// Vertical bar chart of a count table. `color_of` picks the bar color per
/// row, so the sentiment charts can use the sentiment palette while the
/// volume charts use the count ramp.
pub fn count_bar_chart<'a>(
    title: String,
    table: &CountTable,
    color_of: impl Fn(&str, u64) -> Color,
) -> BarChart<'a> {
    let bars: Vec<Bar> = table
        .iter()
        .map(|(label, count)| {
            Bar::default()
                .value(count)
                .label(Line::from(label.to_string()))
                .style(Style::default().fg(color_of(label, count)))
                .value_style(Style::default().add_modifier(Modifier::BOLD))
        })
        .collect();

    BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, theme::title_style())),
        )
        .bar_width(9)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bars))
}

/// The "pie chart" rendering: one gauge per row, sized by its share of the
/// table total.
pub fn render_share(
    f: &mut Frame,
    area: Rect,
    title: String,
    table: &CountTable,
    color_of: impl Fn(&str, u64) -> Color,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, theme::title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if table.is_empty() {
        let hint = Paragraph::new(Span::styled("no rows", theme::hint_style()));
        f.render_widget(hint, inner);
        return;
    }

    let constraints: Vec<Constraint> = table
        .iter()
        .map(|_| Constraint::Length(2))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);
    for (index, gauge) in share_gauges(table, color_of).into_iter().enumerate() {
        f.render_widget(gauge, slots[index]);
    }
}

fn share_gauges<'a>(
    table: &CountTable,
    color_of: impl Fn(&str, u64) -> Color,
) -> Vec<Gauge<'a>> {
    let total = table.total().max(1) as f64;
    table
        .iter()
        .map(|(label, count)| {
            let share = count as f64 / total;
            Gauge::default()
                .ratio(share)
                .label(format!("{label}  {:.1}%  ({count})", share * 100.0))
                .gauge_style(Style::default().fg(color_of(label, count)))
        })
        .collect()
}

/// The word cloud: words wrapped into the available space, styled by
/// frequency tier instead of font size.
pub fn word_cloud<'a>(title: String, freq: &WordFrequencies) -> Paragraph<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, theme::title_style()));

    if freq.is_empty() {
        return Paragraph::new(Line::from(Span::styled(
            "no words to show",
            theme::hint_style(),
        )))
        .block(block);
    }

    let max = freq.max() as f64;
    let mut spans: Vec<Span> = Vec::with_capacity(freq.rows.len() * 2);
    for (word, count) in &freq.rows {
        let weight = *count as f64 / max;
        let style = if weight > 0.6 {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else if weight > 0.3 {
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
        } else if weight > 0.12 {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(word.clone(), style));
        spans.push(Span::raw("   "));
    }

    Paragraph::new(Line::from(spans))
        .block(block)
        .wrap(Wrap { trim: true })
}
