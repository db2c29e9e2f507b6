pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod ingredients;
pub mod model;
pub mod pipelines;
pub mod validity;

use log::{debug, info};

use crate::extractors::{PageExtractor, ParsingContext};
use crate::fetchers::RequestFetcher;

pub use config::ImportConfig;
pub use error::ImportError;
pub use ingredients::parse_ingredient_line;
pub use model::{
    Extraction, IngredientLine, InstructionStep, RecipeMetadata, RecipeRecord, RejectReason,
};

/// Extract a recipe from raw page markup.
///
/// Returns `Extraction::NotARecipe` for pages that parse but lack a title,
/// ingredients or steps. Only input that is not markup at all is an error.
pub fn extract_recipe(html: &str, source_url: Option<&str>) -> Result<Extraction, ImportError> {
    let context = ParsingContext::from_html(html, source_url)?;
    let record = PageExtractor.extract(&context);
    debug!("{:#?}", record);

    let extraction = validity::gate(record);
    if let Extraction::Recipe(record) = &extraction {
        info!(
            "Extracted '{}' with {} ingredients and {} steps",
            record.metadata.title,
            record.ingredients.len(),
            record.instructions.len()
        );
    }
    Ok(extraction)
}

/// Fetch a recipe page with default settings and extract it.
pub async fn fetch_recipe(url: &str) -> Result<Extraction, ImportError> {
    fetch_recipe_with_config(url, &ImportConfig::default()).await
}

/// Fetch a recipe page using the given configuration and extract it.
pub async fn fetch_recipe_with_config(
    url: &str,
    config: &ImportConfig,
) -> Result<Extraction, ImportError> {
    let fetcher = RequestFetcher::new(&config.fetch)?;
    pipelines::url::process(&fetcher, url).await
}
