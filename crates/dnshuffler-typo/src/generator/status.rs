// Candidate accumulation: deduplication, discovery order, final filtering.

use dnshuffler_core::label::is_valid_candidate;
use dnshuffler_core::method::Method;
use hashbrown::HashSet;

/// Collects the raw candidates emitted by generators for one label.
///
/// Candidates are deduplicated on exact string equality and kept in the
/// order they were first emitted, so a fixed method set and table version
/// always yields the same output order. Invalid labels are kept in the raw
/// set and only removed by [`CandidateStatus::into_candidates`].
pub struct CandidateStatus<'a> {
    /// The label being mutated.
    label: &'a [char],
    /// Unique raw candidates in discovery order.
    candidates: Vec<String>,
    /// Set of already-seen candidates for deduplication.
    seen: HashSet<String>,
    /// Emissions per method (duplicates included), indexed by `Method as usize`.
    emitted: [usize; Method::COUNT],
}

impl<'a> CandidateStatus<'a> {
    pub fn new(label: &'a [char]) -> Self {
        Self {
            label,
            candidates: Vec::new(),
            seen: HashSet::new(),
            emitted: [0; Method::COUNT],
        }
    }

    /// The label being mutated.
    pub fn label(&self) -> &'a [char] {
        self.label
    }

    /// Record a candidate produced by `method`.
    ///
    /// Returns `false` if the same string was already recorded by any method.
    pub fn add_candidate(&mut self, method: Method, candidate: String) -> bool {
        self.emitted[method as usize] += 1;
        if !self.seen.insert(candidate.clone()) {
            return false;
        }
        self.candidates.push(candidate);
        true
    }

    /// Record the contents of a generator's working buffer.
    pub fn add_buffer(&mut self, method: Method, buffer: &[char]) -> bool {
        self.add_candidate(method, buffer.iter().collect())
    }

    /// Number of times `method` emitted a candidate, duplicates included.
    pub fn emitted(&self, method: Method) -> usize {
        self.emitted[method as usize]
    }

    /// Number of unique raw candidates recorded so far.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Unique raw candidates, before filtering.
    pub fn raw_candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Consume the status and return the candidates that pass
    /// [`is_valid_candidate`], in discovery order.
    pub fn into_candidates(self) -> Vec<String> {
        self.candidates
            .into_iter()
            .filter(|c| is_valid_candidate(c))
            .collect()
    }
}
