// Typo generation module
//
// Produces typosquatting candidates for a domain label by applying single
// edit operations at every position.
//
// Architecture:
//   - `generators`: one generator per `Method` (TypoGenerator trait)
//   - `status`: candidate accumulator with deduplication and filtering
//   - `strategy`: composes generators for an enabled `MethodSet`

pub mod generators;
pub mod status;
pub mod strategy;

pub use generators::TypoGenerator;
pub use status::CandidateStatus;
pub use strategy::{TypoStrategy, generate_label_typos, generator_for};
