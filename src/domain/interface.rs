use crate::domain::model::*;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait ITweetRepository {
    /// The full dataset, loaded and cached on first call. Later calls are
    /// cheap clones of the shared vector.
    async fn load_all(&self) -> Result<Arc<Vec<Tweet>>>;
    async fn find_by_id(&self, id: &TweetId) -> Result<Tweet>;
    async fn by_sentiment(&self, sentiment: Sentiment) -> Result<Vec<Tweet>>;
    async fn search(&self, query: &str) -> Result<Vec<Tweet>>;
}

/// Where the raw dataset bytes come from. The repository owns parsing; a
/// source only hands over text and answers a cheap existence probe.
pub trait IDatasetSource {
    fn describe(&self) -> String;
    fn probe(&self) -> Result<()>;
    fn fetch_raw(&self) -> Result<String>;
}
