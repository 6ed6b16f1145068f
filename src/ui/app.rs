use crate::domain::model::{Airline, Sentiment, Tweet};
use crate::domain::service::Analytics;
use crate::settings::Dashboard as DashboardOptions;
use crossterm::event::{KeyCode, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Map,
    Airlines,
    Breakdown,
    Words,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Overview, Tab::Map, Tab::Airlines, Tab::Breakdown, Tab::Words];

    pub fn title(&self) -> &'static str {
        use Tab::*;

        match self {
            Overview => "Overview",
            Map => "Map",
            Airlines => "Airlines",
            Breakdown => "Breakdown",
            Words => "Words",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
}

/// All dashboard state. Key handling mutates this; drawing reads it and
/// recomputes every projection from the analytics view.
pub struct DashboardApp {
    pub analytics: Analytics,
    pub word_limit: usize,

    pub tab: Tab,
    pub sentiment_chart: ChartKind,
    pub airline_chart: ChartKind,
    pub breakdown_chart: ChartKind,
    pub random_sentiment: Sentiment,
    pub random_tweet: Option<Tweet>,
    pub hour: u32,
    pub show_raw: bool,
    pub cloud_sentiment: Sentiment,
    pub selected_airlines: [bool; 6],
}

impl DashboardApp {
    pub fn new(analytics: Analytics, options: &DashboardOptions) -> Self {
        let mut app = DashboardApp {
            analytics,
            word_limit: options.word_limit,
            tab: Tab::Overview,
            sentiment_chart: ChartKind::Bar,
            airline_chart: ChartKind::Bar,
            breakdown_chart: ChartKind::Pie,
            random_sentiment: Sentiment::Positive,
            random_tweet: None,
            hour: 0,
            show_raw: false,
            cloud_sentiment: Sentiment::Negative,
            selected_airlines: [false; 6],
        };
        app.resample();
        app
    }

    pub fn chosen_airlines(&self) -> Vec<Airline> {
        Airline::ALL
            .iter()
            .zip(self.selected_airlines.iter())
            .filter(|(_, on)| **on)
            .map(|(airline, _)| *airline)
            .collect()
    }

    fn resample(&mut self) {
        self.random_tweet = self
            .analytics
            .random_by_sentiment(self.random_sentiment)
            .ok()
            .cloned();
    }

    /// Returns true when the dashboard should close.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::BackTab => self.tab = self.tab.prev(),
            KeyCode::Char('b') => self.set_chart_kind(ChartKind::Bar),
            KeyCode::Char('p') => self.set_chart_kind(ChartKind::Pie),
            KeyCode::Char('s') => self.cycle_sentiment(),
            KeyCode::Char('r') if self.tab == Tab::Overview => self.resample(),
            KeyCode::Char('t') if self.tab == Tab::Map => self.show_raw = !self.show_raw,
            KeyCode::Left | KeyCode::Char('h') if self.tab == Tab::Map => {
                self.hour = (self.hour + 23) % 24;
            }
            KeyCode::Right | KeyCode::Char('l') if self.tab == Tab::Map => {
                self.hour = (self.hour + 1) % 24;
            }
            KeyCode::Char('a') if self.tab == Tab::Breakdown => {
                let all_on = self.selected_airlines.iter().all(|on| *on);
                self.selected_airlines = [!all_on; 6];
            }
            KeyCode::Char(digit @ '1'..='6') if self.tab == Tab::Breakdown => {
                let index = digit as usize - '1' as usize;
                self.selected_airlines[index] = !self.selected_airlines[index];
            }
            _ => {}
        }

        false
    }

    fn set_chart_kind(&mut self, kind: ChartKind) {
        match self.tab {
            Tab::Overview => self.sentiment_chart = kind,
            Tab::Airlines => self.airline_chart = kind,
            Tab::Breakdown => self.breakdown_chart = kind,
            _ => {}
        }
    }

    fn cycle_sentiment(&mut self) {
        match self.tab {
            Tab::Overview => {
                self.random_sentiment = self.random_sentiment.next();
                self.resample();
            }
            Tab::Words => self.cloud_sentiment = self.cloud_sentiment.next(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Coord, TweetId};
    use chrono::DateTime;
    use std::sync::Arc;

    fn app() -> DashboardApp {
        use Airline::*;
        use Sentiment::*;

        let mk = |id: &str, sentiment, airline, text: &str| {
            Tweet::new(
                TweetId(id.to_string()),
                text.to_string(),
                sentiment,
                airline,
                DateTime::parse_from_str("2015-02-24 11:35:52 -0800", "%Y-%m-%d %H:%M:%S %z")
                    .unwrap(),
                Some(Coord {
                    latitude: 40.6,
                    longitude: -73.8,
                }),
                None,
                0,
                None,
                None,
            )
        };
        let analytics = Analytics::new(Arc::new(vec![
            mk("1", Negative, United, "delayed"),
            mk("2", Positive, Delta, "great crew"),
        ]));
        DashboardApp::new(analytics, &DashboardOptions::default())
    }

    #[test]
    fn quit_keys_close_the_dashboard() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.handle_key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.handle_key(KeyCode::Char('x'), KeyModifiers::NONE));
    }

    #[test]
    fn tab_cycles_forward_and_back() {
        let mut app = app();
        app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.tab, Tab::Map);
        app.handle_key(KeyCode::BackTab, KeyModifiers::NONE);
        assert_eq!(app.tab, Tab::Overview);
        app.handle_key(KeyCode::BackTab, KeyModifiers::NONE);
        assert_eq!(app.tab, Tab::Words);
    }

    #[test]
    fn hour_slider_wraps_at_midnight() {
        let mut app = app();
        app.tab = Tab::Map;
        app.handle_key(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(app.hour, 23);
        app.handle_key(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.hour, 0);
    }

    #[test]
    fn hour_keys_only_apply_on_the_map_tab() {
        let mut app = app();
        app.handle_key(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(app.hour, 0);
    }

    #[test]
    fn chart_kind_toggle_targets_the_active_tab() {
        let mut app = app();
        app.handle_key(KeyCode::Char('p'), KeyModifiers::NONE);
        assert_eq!(app.sentiment_chart, ChartKind::Pie);
        assert_eq!(app.airline_chart, ChartKind::Bar);

        app.tab = Tab::Airlines;
        app.handle_key(KeyCode::Char('p'), KeyModifiers::NONE);
        assert_eq!(app.airline_chart, ChartKind::Pie);
    }

    #[test]
    fn airline_digits_toggle_selection_on_breakdown() {
        let mut app = app();
        app.tab = Tab::Breakdown;
        app.handle_key(KeyCode::Char('2'), KeyModifiers::NONE);
        assert_eq!(app.chosen_airlines(), vec![Airline::United]);
        app.handle_key(KeyCode::Char('2'), KeyModifiers::NONE);
        assert!(app.chosen_airlines().is_empty());

        app.handle_key(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(app.chosen_airlines().len(), 6);
    }

    #[test]
    fn sentiment_cycle_resamples_the_random_tweet() {
        let mut app = app();
        assert_eq!(app.random_sentiment, Sentiment::Positive);
        app.handle_key(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(app.random_sentiment, Sentiment::Neutral);
        // fixture has no neutral tweets; the panel goes empty instead of failing
        assert!(app.random_tweet.is_none());
        app.handle_key(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(app.random_sentiment, Sentiment::Negative);
        assert!(app.random_tweet.is_some());
    }
}
