mod parser;
pub mod vocabulary;

pub use parser::parse_ingredient_line;
pub use vocabulary::{canonical_unit, fraction_to_decimal};
