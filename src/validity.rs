use crate::model::{Extraction, RecipeRecord, RejectReason};
use log::debug;

/// Decide whether an assembled record is a recipe.
///
/// A recipe needs a title, at least one ingredient and at least one step.
/// The first rule that fails is reported as the reason.
pub fn check(record: &RecipeRecord) -> Result<(), RejectReason> {
    if record.metadata.title.trim().is_empty() {
        return Err(RejectReason::MissingTitle);
    }
    if record.ingredients.is_empty() {
        return Err(RejectReason::NoIngredients);
    }
    if record.instructions.is_empty() {
        return Err(RejectReason::NoInstructions);
    }
    Ok(())
}

/// Gate a record: keep it if it is a recipe, discard it otherwise.
pub fn gate(record: RecipeRecord) -> Extraction {
    match check(&record) {
        Ok(()) => Extraction::Recipe(record),
        Err(reason) => {
            debug!("Rejecting page: {}", reason);
            Extraction::NotARecipe(reason)
        }
    }
}
