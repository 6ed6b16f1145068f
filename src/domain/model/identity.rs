use serde::*;
use std::hash::Hash;

#[derive(Clone, Debug, PartialEq, Default, Eq, Hash)]
pub struct TweetId(pub String);

derive_newtype_serde!(TweetId, String);
derive_newtype_display!(TweetId);

// TweetId to String
impl From<TweetId> for String {
    fn from(tweet_id: TweetId) -> Self {
        tweet_id.0
    }
}

// String to TweetId
impl From<String> for TweetId {
    fn from(tweet_id: String) -> Self {
        TweetId(tweet_id)
    }
}
