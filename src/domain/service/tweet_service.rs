use crate::domain::interface::*;
use crate::domain::model::*;
use crate::domain::service::analytics::Analytics;
use crate::error::*;
use anyhow::anyhow;
use rand::seq::SliceRandom;
use std::sync::Arc;

#[derive(Clone)]
pub struct TweetService {
    tweet_repo: Arc<dyn ITweetRepository + Send + Sync>,
}

impl TweetService {
    pub fn new(tweet_repo: Arc<dyn ITweetRepository + Send + Sync>) -> Self {
        Self { tweet_repo }
    }

    /// The aggregation view the dashboard and report commands run on.
    /// Loading happens (once) behind the repository; the view itself is a
    /// cheap handle.
    pub async fn analytics(&self) -> Result<Analytics> {
        let tweets = self.tweet_repo.load_all().await?;
        Ok(Analytics::new(tweets))
    }

    pub async fn find_by_id(&self, id: &TweetId) -> Result<Tweet> {
        self.tweet_repo.find_by_id(id).await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Tweet>> {
        let tweets = self.tweet_repo.search(query).await?;
        Ok(tweets)
    }

    /// Up to `count` distinct random tweets of one sentiment. Errors when
    /// the sentiment has no tweets at all.
    pub async fn sample(&self, sentiment: Sentiment, count: usize) -> Result<Vec<Tweet>> {
        let pool = self.tweet_repo.by_sentiment(sentiment).await?;
        if pool.is_empty() {
            return Err(ServiceError::new(
                RepositoryError::RecordNotFound,
                anyhow!("no {sentiment} tweets to sample from"),
            ));
        }
        let picked = pool
            .choose_multiple(&mut rand::thread_rng(), count)
            .cloned()
            .collect();
        Ok(picked)
    }
}
