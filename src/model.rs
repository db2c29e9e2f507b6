use serde::{Deserialize, Serialize};
use std::fmt;

/// One ingredient line split into amount, unit and name.
///
/// `raw_text` always holds the line as it appeared on the page. The other
/// fields are independently optional: a line without a leading quantity has
/// no `amount`, a line consisting of a bare number has no `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub raw_text: String,
    pub amount: Option<String>,
    pub unit: Option<String>,
    pub name: Option<String>,
}

/// Recipe-level metadata. Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeMetadata {
    pub title: String,
    pub description: String,
    pub servings: String,
    pub prep_time: String,
    /// Supplied by the caller, never read from the page.
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionStep {
    /// 1-based position in the instruction list.
    pub step_number: u32,
    pub instruction: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub metadata: RecipeMetadata,
    pub ingredients: Vec<IngredientLine>,
    pub instructions: Vec<InstructionStep>,
}

impl RecipeRecord {
    /// Render the record as front matter followed by ingredients and steps.
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str("---\n");
        output.push_str(&format!("title: {}\n", self.metadata.title));
        for (key, value) in [
            ("description", &self.metadata.description),
            ("servings", &self.metadata.servings),
            ("prep_time", &self.metadata.prep_time),
        ] {
            if !value.is_empty() {
                output.push_str(&format!("{key}: {value}\n"));
            }
        }
        if let Some(url) = &self.metadata.source_url {
            output.push_str(&format!("source: {url}\n"));
        }
        output.push_str("---\n\n");

        for ingredient in &self.ingredients {
            output.push_str(&format!("- {ingredient}\n"));
        }
        output.push('\n');

        for step in &self.instructions {
            output.push_str(&format!("{}. {}\n", step.step_number, step.instruction));
        }

        output
    }
}

impl fmt::Display for IngredientLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [&self.amount, &self.unit, &self.name]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect();

        if parts.is_empty() {
            write!(f, "{}", self.raw_text)
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

/// Why an assembled record was not accepted as a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    MissingTitle,
    NoIngredients,
    NoInstructions,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::MissingTitle => write!(f, "page has no recipe title"),
            RejectReason::NoIngredients => write!(f, "page has no ingredient list"),
            RejectReason::NoInstructions => write!(f, "page has no preparation steps"),
        }
    }
}

/// Outcome of extracting a page: either a valid recipe or a "no recipe" signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Extraction {
    Recipe(RecipeRecord),
    NotARecipe(RejectReason),
}

impl Extraction {
    pub fn is_recipe(&self) -> bool {
        matches!(self, Extraction::Recipe(_))
    }

    pub fn into_recipe(self) -> Option<RecipeRecord> {
        match self {
            Extraction::Recipe(record) => Some(record),
            Extraction::NotARecipe(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> RecipeRecord {
        RecipeRecord {
            metadata: RecipeMetadata {
                title: "Stoofvlees".to_string(),
                description: String::new(),
                servings: "4 personen".to_string(),
                prep_time: "2u 30min".to_string(),
                source_url: Some("https://15gram.be/recepten/stoofvlees".to_string()),
            },
            ingredients: vec![IngredientLine {
                raw_text: "1 kg rundvlees".to_string(),
                amount: Some("1".to_string()),
                unit: Some("kg".to_string()),
                name: Some("rundvlees".to_string()),
            }],
            instructions: vec![InstructionStep {
                step_number: 1,
                instruction: "Snij het vlees in blokjes.".to_string(),
            }],
        }
    }

    #[test]
    fn test_to_text_skips_empty_metadata() {
        let text = sample_record().to_text();

        assert!(text.starts_with("---\ntitle: Stoofvlees\n"));
        assert!(!text.contains("description:"));
        assert!(text.contains("servings: 4 personen\n"));
        assert!(text.contains("source: https://15gram.be/recepten/stoofvlees\n"));
        assert!(text.contains("- 1 kg rundvlees\n"));
        assert!(text.ends_with("1. Snij het vlees in blokjes.\n"));
    }

    #[test]
    fn test_ingredient_display_falls_back_to_raw_text() {
        let line = IngredientLine {
            raw_text: "   ".to_string(),
            amount: None,
            unit: None,
            name: None,
        };
        assert_eq!(line.to_string(), "   ");
    }

    #[test]
    fn test_extraction_serializes_as_json() {
        let json = serde_json::to_value(Extraction::NotARecipe(RejectReason::NoIngredients))
            .unwrap();
        assert_eq!(json, serde_json::json!({ "NotARecipe": "NoIngredients" }));
    }
}
