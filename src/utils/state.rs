use std::sync::Arc;

use crate::config::Config;
use crate::storage::ObjectStore;
use crate::storage::driver::s3::S3Storage;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn ObjectStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> Self {
        let storage = Arc::new(S3Storage::new(&config).await);
        AppState {
            storage,
            config: Arc::new(config),
        }
    }

    #[cfg(test)]
    pub fn with_storage(config: Config, storage: Arc<dyn ObjectStore>) -> Self {
        AppState {
            storage,
            config: Arc::new(config),
        }
    }
}
