use crate::domain::interface::IDatasetSource;
use crate::domain::service;
use crate::error::Result;
use crate::infra;
use crate::repository;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct Config {
    pub data_path: PathBuf,
}

#[derive(Clone)]
pub struct Infras {
    pub dataset: Arc<infra::CsvSource>,
}

impl Infras {
    /// Fail fast on a missing dataset file, before any command runs.
    pub async fn ensure_initialized(&self) -> Result<()> {
        let dataset = self.dataset.clone();
        tokio::task::spawn_blocking(move || dataset.probe()).await?
    }
}

pub async fn infras(config: &Config) -> Infras {
    let dataset = Arc::new(infra::CsvSource::new(config.data_path.clone()));
    Infras { dataset }
}

#[derive(Clone)]
pub struct Repository {
    pub tweet: Arc<repository::TweetRepository>,
}

pub fn repository(infras: &Infras) -> Repository {
    let tweet = Arc::new(repository::TweetRepository::new(infras.dataset.clone()));
    Repository { tweet }
}

#[derive(Clone)]
pub struct Services {
    pub tweet: service::TweetService,
}

#[derive(Clone)]
pub struct AppContext {
    pub infras: Infras,
    pub repository: Repository,
    pub services: Services,
}

pub async fn new(config: Config) -> AppContext {
    let infras = infras(&config).await;
    let repository = repository(&infras);
    let services = Services {
        tweet: service::TweetService::new(repository.tweet.clone()),
    };
    AppContext {
        infras,
        repository,
        services,
    }
}
