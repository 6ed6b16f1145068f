use crate::domain::interface::IDatasetSource;
use crate::error::*;
use anyhow::anyhow;
use std::path::PathBuf;

/// File-backed dataset source. Parsing belongs to the repository; this type
/// only hands over the raw text.
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: PathBuf) -> CsvSource {
        CsvSource { path }
    }
}

impl IDatasetSource for CsvSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn probe(&self) -> Result<()> {
        if self.path.is_file() {
            Ok(())
        } else {
            Err(ServiceError::new(
                RepositoryError::DatasetNotFound,
                anyhow!("dataset file {} does not exist", self.path.display()),
            ))
        }
    }

    fn fetch_raw(&self) -> Result<String> {
        self.probe()?;
        tracing::debug!(path = %self.path.display(), "reading dataset file");
        std::fs::read_to_string(&self.path).map_err(|e| {
            GeneralError::io_error(
                anyhow::Error::new(e).context(format!("reading {}", self.path.display())),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interface::ITweetRepository;
    use crate::domain::model::Sentiment;
    use crate::repository::TweetRepository;
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::tempdir;

    const CSV: &str = "\
tweet_id,airline_sentiment,airline,text,tweet_coord,tweet_created
10,negative,US Airways,on hold for two hours,,2015-02-24 11:35:52 -0800
11,positive,Southwest,quick boarding,\"[32.89, -97.04]\",2015-02-24 12:01:00 -0800
";

    #[test]
    fn fetch_raw_round_trips_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tweets.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(CSV.as_bytes()).unwrap();

        let source = CsvSource::new(path);
        source.probe().unwrap();
        assert_eq!(source.fetch_raw().unwrap(), CSV);
    }

    #[test]
    fn probe_reports_a_missing_dataset() {
        let source = CsvSource::new(PathBuf::from("/definitely/not/here.csv"));
        let err = source.probe().unwrap_err();
        assert!(err.is_error_of(RepositoryError::DatasetNotFound));
        assert_eq!(err.exit_code(), exit_code::NO_INPUT);
    }

    #[tokio::test]
    async fn repository_loads_through_a_file_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tweets.csv");
        std::fs::write(&path, CSV).unwrap();

        let repo = TweetRepository::new(Arc::new(CsvSource::new(path)));
        let tweets = repo.load_all().await.unwrap();
        assert_eq!(tweets.len(), 2);

        let positive = repo.by_sentiment(Sentiment::Positive).await.unwrap();
        assert_eq!(positive.len(), 1);
        assert!(positive[0].coord.is_some());
    }
}
