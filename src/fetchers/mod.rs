mod request;

pub use request::RequestFetcher;

use crate::error::ImportError;
use async_trait::async_trait;

/// Source of raw page markup for a URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ImportError>;
}
