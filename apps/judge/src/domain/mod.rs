//! Domain layer: pure battle logic types and helpers.

pub mod catalog;
pub mod hand_parsing;
pub mod hand_serde;
pub mod hand_types;
pub mod outcome;
pub mod tally;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_outcome;
#[cfg(test)]
mod tests_props_outcome;

// Re-exports for ergonomics
pub use catalog::{Catalog, EnCatalog, JaCatalog, Locale};
pub use hand_parsing::parse_submission;
pub use hand_types::Hand;
pub use outcome::{judge, winner_when_absent, Outcome};
pub use tally::{DuplicatePolicy, HandSubmission, Tally};
