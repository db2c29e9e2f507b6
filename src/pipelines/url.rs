use crate::error::ImportError;
use crate::fetchers::PageFetcher;
use crate::model::Extraction;
use log::{debug, warn};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Fetch one page and run it through the extractor.
///
/// A page that is fetched fine but holds no recipe is `Ok(Extraction::NotARecipe)`.
pub async fn process(fetcher: &dyn PageFetcher, url: &str) -> Result<Extraction, ImportError> {
    let html = fetcher.fetch(url).await?;
    crate::extract_recipe(&html, Some(url))
}

/// Import many pages concurrently, at most `max_concurrent` in flight.
///
/// Results come back in the order of `urls`; one failing page does not
/// affect the others.
pub async fn process_many(
    fetcher: Arc<dyn PageFetcher>,
    urls: Vec<String>,
    max_concurrent: usize,
) -> Vec<Result<Extraction, ImportError>> {
    let permits = Arc::new(Semaphore::new(max_concurrent.max(1)));
    let mut tasks = JoinSet::new();

    for (index, url) in urls.iter().cloned().enumerate() {
        let fetcher = Arc::clone(&fetcher);
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            let result = match permits.acquire_owned().await {
                Ok(_permit) => process(fetcher.as_ref(), &url).await,
                Err(e) => Err(ImportError::TaskError(e.to_string())),
            };
            (index, result)
        });
    }

    let mut results: Vec<Option<Result<Extraction, ImportError>>> =
        urls.iter().map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, result)) => {
                if let Err(e) = &result {
                    debug!("Import of {} failed: {}", urls[index], e);
                }
                results[index] = Some(result);
            }
            Err(e) => warn!("Import task did not complete: {}", e),
        }
    }

    results
        .into_iter()
        .map(|result| {
            result.unwrap_or_else(|| Err(ImportError::TaskError("task was cancelled".to_string())))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct StaticFetcher {
        pages: HashMap<String, String>,
    }

    #[async_trait]
    impl PageFetcher for StaticFetcher {
        async fn fetch(&self, url: &str) -> Result<String, ImportError> {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| ImportError::HttpStatus {
                    url: url.to_string(),
                    status: 404,
                })
        }
    }

    fn fetcher() -> StaticFetcher {
        let recipe = r#"<h1>Pannenkoeken</h1>
            <div id="ingredients"><ul><li>250 g bloem</li></ul></div>
            <div id="preparation"><ol><li>Meng alles.</li></ol></div>"#;
        let mut pages = HashMap::new();
        pages.insert("/recipe".to_string(), recipe.to_string());
        pages.insert("/about".to_string(), "<h1>Over ons</h1>".to_string());
        StaticFetcher { pages }
    }

    #[tokio::test]
    async fn test_process_returns_recipe() {
        let extraction = process(&fetcher(), "/recipe").await.unwrap();
        let record = extraction.into_recipe().unwrap();
        assert_eq!(record.metadata.title, "Pannenkoeken");
        assert_eq!(record.metadata.source_url.as_deref(), Some("/recipe"));
    }

    #[tokio::test]
    async fn test_process_many_keeps_input_order() {
        let urls = vec![
            "/about".to_string(),
            "/missing".to_string(),
            "/recipe".to_string(),
        ];
        let results = process_many(Arc::new(fetcher()), urls, 2).await;

        assert_eq!(results.len(), 3);
        assert!(matches!(results[0], Ok(Extraction::NotARecipe(_))));
        assert!(matches!(
            results[1],
            Err(ImportError::HttpStatus { status: 404, .. })
        ));
        assert!(matches!(results[2], Ok(Extraction::Recipe(_))));
    }
}
