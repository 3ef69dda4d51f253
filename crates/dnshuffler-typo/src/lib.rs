// dnshuffler-typo: typosquatting candidate generation.
//
// Architecture:
//   - `generator`: per-method typo generators, candidate accumulation, strategy
//   - `encode`: IDNA ToASCII with DNS length checks
//   - `result`: ordered domain → candidates mapping
//   - `handle`: `Shuffler`, the batch entry point

pub mod encode;
pub mod generator;
pub mod handle;
pub mod result;

pub use dnshuffler_core::{DomainError, Method, MethodSet, SplitMode};
pub use encode::{EncodingError, decode_domain, encode_domain};
pub use generator::generate_label_typos;
pub use handle::{Shuffler, ShufflerOptions, TypoReport, generate_domain_typos};
pub use result::TypoMap;
