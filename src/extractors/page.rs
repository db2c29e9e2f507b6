use super::{find_first, ListRegion, Lookup, ParsingContext};
use crate::ingredients::parse_ingredient_line;
use crate::model::{InstructionStep, RecipeMetadata, RecipeRecord};
use log::debug;
use scraper::Html;

const TITLE: &[Lookup] = &[
    Lookup::Text("h1.text-center"),
    Lookup::Text("h1"),
    Lookup::Attribute {
        selector: "meta[property='og:title']",
        attr: "content",
    },
];

const DESCRIPTION: &[Lookup] = &[
    Lookup::Text(".recipe-description p"),
    Lookup::Attribute {
        selector: "meta[name='description']",
        attr: "content",
    },
    Lookup::Attribute {
        selector: "meta[property='og:description']",
        attr: "content",
    },
];

const SERVINGS: &[Lookup] = &[
    Lookup::Text(".yield-container .yield"),
    Lookup::Text("span.yield"),
];

const PREP_TIME: &[Lookup] = &[
    Lookup::Text(".duration-container .duration"),
    Lookup::Text("span.duration"),
];

const INGREDIENTS: ListRegion = ListRegion {
    containers: &["div#ingredients", "#ingredients"],
    lists: &["ul", "ol"],
};

const PREPARATION: ListRegion = ListRegion {
    containers: &["div#preparation", "#preparation"],
    lists: &["ol", "ul"],
};

/// Reads the metadata block, ingredient list and preparation list of a recipe page.
///
/// Every lookup degrades to an empty value when the page lacks the node;
/// deciding whether the result is a recipe at all is left to the validity gate.
pub struct PageExtractor;

impl PageExtractor {
    pub fn extract_metadata(&self, document: &Html) -> RecipeMetadata {
        debug!("Extracting recipe metadata");
        let root = document.root_element();
        let field = |name: &str, lookups: &[Lookup]| {
            let value = find_first(root, lookups).unwrap_or_default();
            debug!("Extracted {}: '{}'", name, value);
            value
        };

        RecipeMetadata {
            title: field("title", TITLE),
            description: field("description", DESCRIPTION),
            servings: field("servings", SERVINGS),
            prep_time: field("prep_time", PREP_TIME),
            source_url: None,
        }
    }

    pub fn extract_ingredient_lines(&self, document: &Html) -> Vec<String> {
        let lines = INGREDIENTS.items(document.root_element());
        debug!("Found {} ingredient lines", lines.len());
        lines
    }

    pub fn extract_instruction_steps(&self, document: &Html) -> Vec<InstructionStep> {
        let steps: Vec<InstructionStep> = PREPARATION
            .items(document.root_element())
            .into_iter()
            .zip(1..)
            .map(|(instruction, step_number)| InstructionStep {
                step_number,
                instruction,
            })
            .collect();
        debug!("Found {} instruction steps", steps.len());
        steps
    }

    /// Assemble a record from the page, parsing every ingredient line.
    pub fn extract(&self, context: &ParsingContext) -> RecipeRecord {
        debug!("Extracting recipe from {:?}", context.url);

        let mut metadata = self.extract_metadata(&context.document);
        metadata.source_url = context.url.clone();

        let ingredients = self
            .extract_ingredient_lines(&context.document)
            .iter()
            .map(|line| parse_ingredient_line(line))
            .collect();

        RecipeRecord {
            metadata,
            ingredients,
            instructions: self.extract_instruction_steps(&context.document),
        }
    }
}
