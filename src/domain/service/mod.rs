mod analytics;
mod tokenizer;
mod tweet_service;

pub use analytics::Analytics;
pub use tokenizer::Tokenizer;
pub use tweet_service::TweetService;
