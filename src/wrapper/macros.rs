/// Derive serde instances for a newtype struct so it (de)serializes as its
/// inner value instead of as a one-field struct.
///
/// example:
/// ```ignore
/// pub struct TweetId(pub String);
///
/// derive_newtype_serde!(TweetId, String);
/// ```
#[macro_export]
macro_rules! derive_newtype_serde {
    ($t1:tt, $t2:ty) => {
        impl Serialize for $t1 {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $t1 {
            fn deserialize<D>(deserializer: D) -> std::result::Result<$t1, D::Error>
            where
                D: Deserializer<'de>,
            {
                Ok($t1(<$t2>::deserialize(deserializer)?))
            }
        }
    };
}

/// Derive a `Display` that forwards to the inner value of a newtype struct.
#[macro_export]
macro_rules! derive_newtype_display {
    ($t1:ty) => {
        impl std::fmt::Display for $t1 {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}
