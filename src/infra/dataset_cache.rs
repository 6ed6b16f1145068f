use crate::domain::model::Tweet;
use crate::error::*;
use lazy_init::LazyTransform;
use std::sync::Arc;

/// Outcome of the one-shot dataset load. Cheap to clone, so every later
/// access re-yields the same vector or the same frozen failure.
pub type LoadOutcome = std::result::Result<Arc<Vec<Tweet>>, LoadFailure>;

type Loader = Box<dyn Fn() -> LoadOutcome + Send + Sync>;

/// A load error frozen into the cache. Re-materialized as a `ServiceError`
/// on each access so callers keep the original taxonomy and exit code.
#[derive(Debug, Clone)]
pub struct LoadFailure {
    error_type: String,
    exit_code: u8,
    message: String,
}

impl From<ServiceError> for LoadFailure {
    fn from(err: ServiceError) -> Self {
        LoadFailure {
            error_type: err.error_type(),
            exit_code: err.exit_code(),
            message: format!("{:#}", err.into_inner()),
        }
    }
}

impl IServiceError for LoadFailure {
    fn error_type(&self) -> String {
        self.error_type.clone()
    }

    fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

/// Lazily populated, process-wide copy of the dataset, read-only after the
/// first load. Fills the same role the lazily-built connection pool fills
/// for a database-backed app.
#[derive(Clone)]
pub struct DatasetCache(Arc<LazyTransform<Loader, LoadOutcome>>);

impl DatasetCache {
    pub fn new(loader: impl Fn() -> LoadOutcome + Send + Sync + 'static) -> DatasetCache {
        DatasetCache(Arc::new(LazyTransform::new(Box::new(loader))))
    }

    pub fn ensure_loaded(&self) -> Result<()> {
        self.get_or_load().map(|_| ())
    }

    pub fn get_or_load(&self) -> Result<Arc<Vec<Tweet>>> {
        match self.0.get_or_create(|load| load()) {
            Ok(tweets) => Ok(tweets.clone()),
            Err(failure) => {
                let message = failure.message.clone();
                Err(ServiceError::new(failure.clone(), anyhow::anyhow!(message)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn loader_runs_exactly_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = calls.clone();
        let cache = DatasetCache::new(move || {
            counted.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(vec![]))
        });

        cache.ensure_loaded().unwrap();
        let first = cache.get_or_load().unwrap();
        let second = cache.get_or_load().unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn failures_are_frozen_and_re_yielded() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = calls.clone();
        let cache = DatasetCache::new(move || {
            counted.fetch_add(1, Ordering::SeqCst);
            Err(LoadFailure {
                error_type: "invalid_schema".to_string(),
                exit_code: exit_code::DATA_ERR,
                message: "missing columns".to_string(),
            })
        });

        let first = cache.get_or_load().unwrap_err();
        let second = cache.get_or_load().unwrap_err();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(first.error_type(), "invalid_schema");
        assert_eq!(second.exit_code(), exit_code::DATA_ERR);
        assert!(format!("{second}").contains("missing columns"));
    }
}
