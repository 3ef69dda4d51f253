// Typo strategy: composes the generators for an enabled method set.

use dnshuffler_core::method::{Method, MethodSet};

use super::generators::*;
use super::status::CandidateStatus;

/// An ordered list of generators built from a [`MethodSet`].
///
/// Generators run in [`Method::ALL`] order regardless of the order methods
/// were requested in, so output order depends only on the set.
pub struct TypoStrategy {
    generators: Vec<Box<dyn TypoGenerator>>,
}

impl TypoStrategy {
    /// Build the strategy for `methods`.
    pub fn new(methods: MethodSet) -> Self {
        Self {
            generators: methods.iter().map(generator_for).collect(),
        }
    }

    /// Run every generator against the label tracked by `status`.
    pub fn generate(&self, status: &mut CandidateStatus<'_>) {
        for generator in &self.generators {
            generator.generate(status);
        }
    }

    /// Generate the filtered candidate labels for `label`.
    ///
    /// The result may contain `label` itself (e.g. swapping a doubled
    /// letter); callers that must not see it remove it.
    pub fn label_candidates(&self, label: &str) -> Vec<String> {
        let chars: Vec<char> = label.chars().collect();
        let mut status = CandidateStatus::new(&chars);
        self.generate(&mut status);
        tracing::trace!(
            label,
            raw = status.candidate_count(),
            neighbor = status.emitted(Method::Neighbor),
            similar = status.emitted(Method::Similar),
            omit = status.emitted(Method::Omit),
            duplicate = status.emitted(Method::Duplicate),
            neighbor_duplicate = status.emitted(Method::NeighborDuplicate),
            homoglyph = status.emitted(Method::Homoglyph),
            swap = status.emitted(Method::Swap),
            "label candidates generated"
        );
        status.into_candidates()
    }
}

impl Default for TypoStrategy {
    fn default() -> Self {
        Self::new(MethodSet::DEFAULT)
    }
}

/// Create the generator implementing `method`.
pub fn generator_for(method: Method) -> Box<dyn TypoGenerator> {
    match method {
        Method::Neighbor => Box::new(Neighbor),
        Method::Similar => Box::new(Similar),
        Method::Omit => Box::new(Omit),
        Method::Duplicate => Box::new(Duplicate),
        Method::Swap => Box::new(Swap),
        Method::NeighborDuplicate => Box::new(NeighborDuplicate),
        Method::Homoglyph => Box::new(Homoglyph),
    }
}

/// Generate the filtered candidate set for `label` with the given methods.
///
/// Candidates are unique, in discovery order, and never empty, hyphen-edged
/// or contain `--`. The label itself is not removed.
pub fn generate_label_typos(label: &str, methods: MethodSet) -> Vec<String> {
    TypoStrategy::new(methods).label_candidates(label)
}

// =========================================================================
// Tests
// =========================================================================
