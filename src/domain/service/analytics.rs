use crate::domain::model::*;
use crate::domain::service::tokenizer::Tokenizer;
use crate::error::*;
use anyhow::anyhow;
use indexmap::IndexMap;
use rand::seq::SliceRandom;
use std::sync::Arc;

/// Read-only aggregation view over the cached dataset. Every method
/// recomputes its projection from scratch; nothing is memoized, so the view
/// can be queried in any order from the UI without invalidation logic.
#[derive(Clone)]
pub struct Analytics {
    tweets: Arc<Vec<Tweet>>,
    tokenizer: Arc<Tokenizer>,
}

impl Analytics {
    pub fn new(tweets: Arc<Vec<Tweet>>) -> Self {
        Self {
            tweets,
            tokenizer: Arc::new(Tokenizer::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.tweets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweets.is_empty()
    }

    /// Tweets per sentiment, descending. Labels with zero tweets are left
    /// out, like a value-count over the column.
    pub fn sentiment_counts(&self) -> CountTable {
        let mut counts: IndexMap<String, u64> = Sentiment::ALL
            .iter()
            .map(|s| (s.label().to_string(), 0))
            .collect();
        for tweet in self.tweets.iter() {
            *counts.entry(tweet.sentiment.label().to_string()).or_insert(0) += 1;
        }
        counts.retain(|_, count| *count > 0);
        CountTable::sorted_desc("Sentiment", counts)
    }

    /// Tweets per airline, descending.
    pub fn airline_counts(&self) -> CountTable {
        let mut counts: IndexMap<String, u64> = Airline::ALL
            .iter()
            .map(|a| (a.label().to_string(), 0))
            .collect();
        for tweet in self.tweets.iter() {
            *counts.entry(tweet.airline.label().to_string()).or_insert(0) += 1;
        }
        counts.retain(|_, count| *count > 0);
        CountTable::sorted_desc("Airline", counts)
    }

    /// Sentiment counts within one airline, descending.
    pub fn sentiment_breakdown(&self, airline: Airline) -> CountTable {
        let mut counts: IndexMap<String, u64> = Sentiment::ALL
            .iter()
            .map(|s| (s.label().to_string(), 0))
            .collect();
        for tweet in self.tweets.iter().filter(|t| t.airline == airline) {
            *counts.entry(tweet.sentiment.label().to_string()).or_insert(0) += 1;
        }
        counts.retain(|_, count| *count > 0);
        CountTable::sorted_desc("Sentiment", counts)
    }

    /// Non-empty negative reasons, descending.
    pub fn negative_reason_counts(&self) -> CountTable {
        let mut counts: IndexMap<String, u64> = IndexMap::new();
        for tweet in self.tweets.iter() {
            if let Some(reason) = &tweet.negative_reason {
                *counts.entry(reason.clone()).or_insert(0) += 1;
            }
        }
        CountTable::sorted_desc("Reason", counts)
    }

    pub fn hour_histogram(&self) -> HourHistogram {
        let mut buckets = [0u64; 24];
        for tweet in self.tweets.iter() {
            buckets[tweet.hour() as usize % 24] += 1;
        }
        HourHistogram(buckets)
    }

    /// Tweets whose offset-local hour matches.
    pub fn at_hour(&self, hour: u32) -> Vec<&Tweet> {
        self.tweets.iter().filter(|t| t.hour() == hour).collect()
    }

    /// Tweets in the hour that carry a coordinate pair; the rest are
    /// silently dropped, as the original map did.
    pub fn located_at_hour(&self, hour: u32) -> Vec<&Tweet> {
        self.tweets
            .iter()
            .filter(|t| t.hour() == hour && t.coord.is_some())
            .collect()
    }

    pub fn by_sentiment(&self, sentiment: Sentiment) -> Vec<&Tweet> {
        self.tweets
            .iter()
            .filter(|t| t.sentiment == sentiment)
            .collect()
    }

    /// One uniformly random tweet of the given sentiment.
    pub fn random_by_sentiment(&self, sentiment: Sentiment) -> Result<&Tweet> {
        let pool = self.by_sentiment(sentiment);
        pool.choose(&mut rand::thread_rng())
            .copied()
            .ok_or_else(|| {
                ServiceError::new(
                    RepositoryError::RecordNotFound,
                    anyhow!("no {sentiment} tweets to sample from"),
                )
            })
    }

    /// Top words across all tweet bodies of one sentiment.
    pub fn word_frequencies(&self, sentiment: Sentiment, top: usize) -> WordFrequencies {
        self.tokenizer.frequencies(
            self.tweets
                .iter()
                .filter(|t| t.sentiment == sentiment)
                .map(|t| t.text.as_str()),
            top,
        )
    }
}
