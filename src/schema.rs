//! Column layout of the tweet dataset CSV.
//!
//! The loader validates the header row against `REQUIRED_COLUMNS` before
//! deserializing anything, so a wrong or truncated file fails up front with
//! the column names spelled out instead of as a row-level serde error.

pub mod tweets_csv {
    pub const TWEET_ID: &str = "tweet_id";
    pub const AIRLINE_SENTIMENT: &str = "airline_sentiment";
    pub const AIRLINE: &str = "airline";
    pub const NAME: &str = "name";
    pub const NEGATIVE_REASON: &str = "negativereason";
    pub const RETWEET_COUNT: &str = "retweet_count";
    pub const TEXT: &str = "text";
    pub const TWEET_COORD: &str = "tweet_coord";
    pub const TWEET_CREATED: &str = "tweet_created";
    pub const TWEET_LOCATION: &str = "tweet_location";

    /// Columns the loader refuses to run without. The Kaggle export carries
    /// more (confidence scores, gold labels, user_timezone); those are
    /// ignored rather than required.
    pub const REQUIRED_COLUMNS: [&str; 6] = [
        TWEET_ID,
        AIRLINE_SENTIMENT,
        AIRLINE,
        TEXT,
        TWEET_COORD,
        TWEET_CREATED,
    ];

    /// Columns that enrich the display when present but may be absent.
    pub const OPTIONAL_COLUMNS: [&str; 4] =
        [NAME, NEGATIVE_REASON, RETWEET_COUNT, TWEET_LOCATION];
}

/// Returns the required columns missing from a header row, in declaration
/// order. Empty means the header is acceptable.
pub fn missing_columns(headers: &[&str]) -> Vec<&'static str> {
    tweets_csv::REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.contains(*required))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_header() {
        let headers = vec![
            "tweet_id",
            "airline_sentiment",
            "airline",
            "name",
            "retweet_count",
            "text",
            "tweet_coord",
            "tweet_created",
            "tweet_location",
            "user_timezone",
        ];
        assert!(missing_columns(&headers).is_empty());
    }

    #[test]
    fn reports_missing_columns_in_order() {
        let headers = vec!["tweet_id", "text", "tweet_created"];
        assert_eq!(
            missing_columns(&headers),
            vec!["airline_sentiment", "airline", "tweet_coord"]
        );
    }
}
