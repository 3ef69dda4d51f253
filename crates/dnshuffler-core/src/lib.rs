// dnshuffler-core: shared tables and types for typo-domain generation.
//
// - `keyboard`: adjacency, similarity and homoglyph tables
// - `method`: the mutation methods and `MethodSet`
// - `label`: candidate and DNS label validity rules
// - `domain`: splitting input domains into label and extension

pub mod domain;
pub mod keyboard;
pub mod label;
pub mod method;

pub use domain::{DomainError, DomainParts, MalformedReason, SplitMode};
pub use method::{Method, MethodSet, UnknownMethod};
