use crate::domain::interface::*;
use crate::domain::model::*;
use crate::error::*;
use crate::infra::{DatasetCache, LoadFailure};
use crate::schema;
use anyhow::anyhow;
use async_trait::async_trait;
use chrono::DateTime;
use regex::Regex;
use serde::*;
use std::sync::{Arc, LazyLock};

/// `tweet_created` as the dataset writes it: `2015-02-24 11:35:52 -0800`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// The bracketed pair the dataset uses for `tweet_coord`. Deliberately as
/// loose as the original extraction; anything the captures can't hold as a
/// float degrades to "no coordinate".
static COORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*), (.*)\]").unwrap());

/// One raw CSV row. Empty cells come through as `None`; all validation
/// happens in `to_model`.
#[derive(Debug, Clone, Deserialize)]
pub struct TweetRecord {
    #[serde(rename = "tweet_id")]
    id: String,
    airline_sentiment: String,
    airline: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    negativereason: Option<String>,
    #[serde(default)]
    retweet_count: Option<u32>,
    text: String,
    #[serde(default)]
    tweet_coord: Option<String>,
    tweet_created: String,
    #[serde(default)]
    tweet_location: Option<String>,
}

impl TweetRecord {
    pub fn to_model(self) -> Result<Tweet> {
        let sentiment = self
            .airline_sentiment
            .parse::<Sentiment>()
            .map_err(|e| ServiceError::new(RepositoryError::InvalidRecord, e))?;
        let airline = self
            .airline
            .parse::<Airline>()
            .map_err(|e| ServiceError::new(RepositoryError::InvalidRecord, e))?;
        let created_at = DateTime::parse_from_str(&self.tweet_created, TIMESTAMP_FORMAT)
            .map_err(|e| {
                ServiceError::new(
                    RepositoryError::InvalidRecord,
                    anyhow!("unparseable tweet_created {:?}: {e}", self.tweet_created),
                )
            })?;
        let coord = self.tweet_coord.as_deref().and_then(parse_coord);

        Ok(Tweet::new(
            TweetId(self.id),
            self.text,
            sentiment,
            airline,
            created_at,
            coord,
            self.name,
            self.retweet_count.unwrap_or(0),
            self.negativereason,
            self.tweet_location,
        ))
    }
}

/// Extract a coordinate pair, or nothing. This is the one place malformed
/// input is dropped instead of failing the load.
fn parse_coord(raw: &str) -> Option<Coord> {
    let caps = COORD_PATTERN.captures(raw)?;
    let latitude = caps.get(1)?.as_str().trim().parse().ok()?;
    let longitude = caps.get(2)?.as_str().trim().parse().ok()?;
    Some(Coord {
        latitude,
        longitude,
    })
}

pub struct TweetRepository {
    cache: DatasetCache,
}

impl TweetRepository {
    pub fn new(source: Arc<dyn IDatasetSource + Send + Sync>) -> Self {
        let cache = DatasetCache::new(move || {
            load_dataset(source.as_ref()).map_err(LoadFailure::from)
        });
        Self { cache }
    }

    /// The parsed dataset, loading it on first use. Parsing is blocking
    /// work, so it runs on tokio's blocking pool.
    async fn cached(&self) -> Result<Arc<Vec<Tweet>>> {
        let cache = self.cache.clone();
        tokio::task::spawn_blocking(move || cache.get_or_load()).await?
    }
}

#[async_trait]
impl ITweetRepository for TweetRepository {
    async fn load_all(&self) -> Result<Arc<Vec<Tweet>>> {
        self.cached().await
    }

    async fn find_by_id(&self, id: &TweetId) -> Result<Tweet> {
        let tweets = self.cached().await?;
        tweets
            .iter()
            .find(|t| &t.id == id)
            .cloned()
            .ok_or_else(|| {
                ServiceError::new(
                    RepositoryError::RecordNotFound,
                    anyhow!("no tweet with id {id}"),
                )
            })
    }

    async fn by_sentiment(&self, sentiment: Sentiment) -> Result<Vec<Tweet>> {
        let tweets = self.cached().await?;
        Ok(tweets
            .iter()
            .filter(|t| t.sentiment == sentiment)
            .cloned()
            .collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Tweet>> {
        let tweets = self.cached().await?;
        let needle = query.to_lowercase();
        Ok(tweets
            .iter()
            .filter(|t| t.text.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

/// Fetch and parse the whole dataset. Strict: the header must carry the
/// expected columns and every row must parse, except coordinates.
fn load_dataset(source: &dyn IDatasetSource) -> Result<Arc<Vec<Tweet>>> {
    let raw = source.fetch_raw()?;
    let mut reader = csv::Reader::from_reader(raw.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ServiceError::new(RepositoryError::InvalidSchema, e))?
        .clone();
    let header_fields: Vec<&str> = headers.iter().collect();
    let missing = schema::missing_columns(&header_fields);
    if !missing.is_empty() {
        return Err(ServiceError::new(
            RepositoryError::InvalidSchema,
            anyhow!(
                "{} is missing required columns: {}",
                source.describe(),
                missing.join(", ")
            ),
        ));
    }
    let optional_present = schema::tweets_csv::OPTIONAL_COLUMNS
        .iter()
        .filter(|column| header_fields.contains(*column))
        .count();
    tracing::debug!(optional_present, "header validated");

    let mut tweets = Vec::new();
    for (index, result) in reader.deserialize::<TweetRecord>().enumerate() {
        // +2: header line plus 1-based numbering
        let line = index + 2;
        let record = result.map_err(|e| {
            ServiceError::new(
                RepositoryError::InvalidRecord,
                anyhow::Error::new(e).context(format!("line {line}")),
            )
        })?;
        let tweet = record.to_model().map_err(|e| {
            ServiceError::new(
                RepositoryError::InvalidRecord,
                e.into_inner().context(format!("line {line}")),
            )
        })?;
        tweets.push(tweet);
    }

    let with_coords = tweets.iter().filter(|t| t.coord.is_some()).count();
    tracing::info!(
        rows = tweets.len(),
        with_coords,
        source = %source.describe(),
        "tweet dataset loaded"
    );

    Ok(Arc::new(tweets))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticSource(&'static str);

    impl IDatasetSource for StaticSource {
        fn describe(&self) -> String {
            "static test data".to_string()
        }

        fn probe(&self) -> Result<()> {
            Ok(())
        }

        fn fetch_raw(&self) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    const GOOD_CSV: &str = "\
tweet_id,airline_sentiment,airline,name,negativereason,retweet_count,text,tweet_coord,tweet_created,tweet_location
1,negative,United,jo,Late Flight,0,@united delayed again,\"[40.64, -73.78]\",2015-02-24 11:35:52 -0800,NYC
2,positive,Delta,amy,,1,great crew!,,2015-02-24 09:10:00 -0800,
3,neutral,Virgin America,,,0,gate change,\"[0.0, 0.0]\",2015-02-23 23:05:00 -0800,
";

    fn load(raw: &'static str) -> Result<Arc<Vec<Tweet>>> {
        load_dataset(&StaticSource(raw))
    }

    #[test]
    fn loads_well_formed_rows() {
        let tweets = load(GOOD_CSV).unwrap();
        assert_eq!(tweets.len(), 3);

        let first = &tweets[0];
        assert_eq!(first.sentiment, Sentiment::Negative);
        assert_eq!(first.airline, Airline::United);
        assert_eq!(first.hour(), 11);
        assert_eq!(first.negative_reason.as_deref(), Some("Late Flight"));
        let coord = first.coord.unwrap();
        assert!((coord.latitude - 40.64).abs() < 1e-9);
        assert!((coord.longitude + 73.78).abs() < 1e-9);

        // empty cells become None, not errors
        let second = &tweets[1];
        assert!(second.coord.is_none());
        assert!(second.negative_reason.is_none());
        assert_eq!(second.retweet_count, 1);

        // the dataset's [0.0, 0.0] pairs are kept verbatim
        let third = &tweets[2];
        assert_eq!(
            third.coord,
            Some(Coord {
                latitude: 0.0,
                longitude: 0.0
            })
        );
    }

    #[test]
    fn rejects_missing_columns_up_front() {
        let err = load("tweet_id,text\n1,hello\n").unwrap_err();
        assert!(err.is_error_of(RepositoryError::InvalidSchema));
        let detail = format!("{err}");
        assert!(detail.contains("airline_sentiment"));
    }

    #[test]
    fn rejects_unknown_sentiment_with_line_context() {
        let bad = "\
tweet_id,airline_sentiment,airline,text,tweet_coord,tweet_created
1,meh,United,hello,,2015-02-24 11:35:52 -0800
";
        let err = load(bad).unwrap_err();
        assert!(err.is_error_of(RepositoryError::InvalidRecord));
        assert!(format!("{err}").contains("line 2"));
    }

    #[test]
    fn rejects_unparseable_timestamps() {
        let bad = "\
tweet_id,airline_sentiment,airline,text,tweet_coord,tweet_created
1,neutral,United,hello,,yesterday at noon
";
        let err = load(bad).unwrap_err();
        assert!(err.is_error_of(RepositoryError::InvalidRecord));
    }

    #[test]
    fn malformed_coordinates_degrade_to_none() {
        assert!(parse_coord("not brackets").is_none());
        assert!(parse_coord("[alpha, beta]").is_none());
        assert!(parse_coord("[1.0]").is_none());
        assert_eq!(
            parse_coord("[35.17, -101.9]"),
            Some(Coord {
                latitude: 35.17,
                longitude: -101.9
            })
        );
    }

    #[tokio::test]
    async fn repository_queries_share_one_cached_load() {
        let repo = TweetRepository::new(Arc::new(StaticSource(GOOD_CSV)));

        let all = repo.load_all().await.unwrap();
        let again = repo.load_all().await.unwrap();
        assert!(Arc::ptr_eq(&all, &again));

        let negative = repo.by_sentiment(Sentiment::Negative).await.unwrap();
        assert_eq!(negative.len(), 1);

        let found = repo.find_by_id(&TweetId("2".into())).await.unwrap();
        assert_eq!(found.airline, Airline::Delta);

        let miss = repo.find_by_id(&TweetId("99".into())).await.unwrap_err();
        assert!(miss.is_error_of(RepositoryError::RecordNotFound));

        let hits = repo.search("DELAYED").await.unwrap();
        assert_eq!(hits.len(), 1);
    }
}
