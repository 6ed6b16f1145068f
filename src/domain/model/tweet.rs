use crate::domain::model::{Airline, Sentiment, TweetId};
use chrono::{DateTime, FixedOffset, Timelike};
use serde::*;

/// Latitude/longitude pair as recorded in the dataset. Some rows carry a
/// `[0.0, 0.0]` pair; it is kept verbatim, not treated as missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coord {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tweet {
    pub id: TweetId,
    pub text: String,
    pub sentiment: Sentiment,
    pub airline: Airline,
    pub created_at: DateTime<FixedOffset>,
    pub coord: Option<Coord>,
    pub author: Option<String>,
    pub retweet_count: u32,
    pub negative_reason: Option<String>,
    pub location: Option<String>,
}

impl Tweet {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: TweetId,
        text: String,
        sentiment: Sentiment,
        airline: Airline,
        created_at: DateTime<FixedOffset>,
        coord: Option<Coord>,
        author: Option<String>,
        retweet_count: u32,
        negative_reason: Option<String>,
        location: Option<String>,
    ) -> Self {
        Tweet {
            id,
            text,
            sentiment,
            airline,
            created_at,
            coord,
            author,
            retweet_count,
            negative_reason,
            location,
        }
    }

    /// Hour of day in the tweet's own UTC offset, 0..=23.
    pub fn hour(&self) -> u32 {
        self.created_at.hour()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tweet_at(created: &str) -> Tweet {
        Tweet::new(
            TweetId("1".into()),
            "on time, nice crew".into(),
            Sentiment::Positive,
            Airline::Delta,
            DateTime::parse_from_str(created, "%Y-%m-%d %H:%M:%S %z").unwrap(),
            None,
            None,
            0,
            None,
            None,
        )
    }

    #[test]
    fn hour_uses_the_recorded_offset() {
        // 23:35 -0800 is 07:35 UTC the next day; the dataset semantics are
        // the local hour as written.
        assert_eq!(tweet_at("2015-02-24 23:35:52 -0800").hour(), 23);
        assert_eq!(tweet_at("2015-02-24 00:12:01 -0800").hour(), 0);
    }
}
