// Shuffler: top-level entry point for batch typo-domain generation.
//
// Owns the typo strategy built from the enabled method set together with
// the run options, and turns a list of input domains into a `TypoMap`.
//
// Per-domain failures (malformed input) are collected in the report rather
// than returned, so one bad line never loses the rest of the batch. Callers
// that want batch-fail semantics use `Shuffler::generate_strict`.

use dnshuffler_core::domain::{DomainError, DomainParts, SplitMode};
use dnshuffler_core::method::MethodSet;
use hashbrown::HashSet;

use crate::encode::encode_domain;
use crate::generator::TypoStrategy;
use crate::result::TypoMap;

/// Options for a [`Shuffler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShufflerOptions {
    /// Enabled mutation methods. Default: [`MethodSet::DEFAULT`] (all but
    /// homoglyphs).
    pub methods: MethodSet,
    /// How input domains are split. Default: [`SplitMode::SingleDot`].
    pub split_mode: SplitMode,
    /// Maximum number of candidates kept per domain. Default: unlimited.
    pub max_candidates: Option<usize>,
}

impl Default for ShufflerOptions {
    fn default() -> Self {
        Self {
            methods: MethodSet::DEFAULT,
            split_mode: SplitMode::SingleDot,
            max_candidates: None,
        }
    }
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default)]
pub struct TypoReport {
    /// Candidates per successfully processed domain.
    pub typos: TypoMap,
    /// Domains that could not be split, in input order.
    pub skipped: Vec<DomainError>,
    /// Number of candidates dropped because they failed IDNA encoding.
    pub dropped: usize,
}

impl TypoReport {
    /// Returns `true` if every input domain was processed.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Candidates for one domain plus the count of encoding failures.
struct DomainTypos {
    candidates: Vec<String>,
    dropped: usize,
}

/// Generates typosquatting candidates for batches of domains.
pub struct Shuffler {
    strategy: TypoStrategy,
    options: ShufflerOptions,
}

impl Shuffler {
    pub fn new(options: ShufflerOptions) -> Self {
        Self {
            strategy: TypoStrategy::new(options.methods),
            options,
        }
    }

    /// Shorthand for a shuffler with default options and the given methods.
    pub fn with_methods(methods: MethodSet) -> Self {
        Self::new(ShufflerOptions {
            methods,
            ..ShufflerOptions::default()
        })
    }

    pub fn options(&self) -> &ShufflerOptions {
        &self.options
    }

    /// Filtered candidate labels for `label`, with `label` itself removed.
    pub fn label_typos(&self, label: &str) -> Vec<String> {
        let mut candidates = self.strategy.label_candidates(label);
        candidates.retain(|c| c != label);
        candidates
    }

    /// Encoded candidate domains for a single `label.extension` domain.
    pub fn domain_typos(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        self.process_domain(domain).map(|d| d.candidates)
    }

    fn process_domain(&self, domain: &str) -> Result<DomainTypos, DomainError> {
        let parts = DomainParts::split(domain, self.options.split_mode)?;
        // Candidates that only differ from the input by case or IDNA mapping
        // encode to the input itself.
        let original = encode_domain(domain).ok();
        let limit = self.options.max_candidates.unwrap_or(usize::MAX);

        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        let mut dropped = 0;
        for label in self.label_typos(parts.label) {
            if candidates.len() >= limit {
                break;
            }
            let full = parts.with_label(&label);
            match encode_domain(&full) {
                Ok(ascii) => {
                    if original.as_deref() == Some(ascii.as_str()) {
                        continue;
                    }
                    if seen.insert(ascii.clone()) {
                        candidates.push(ascii);
                    }
                }
                Err(e) => {
                    tracing::debug!(candidate = %full, error = %e, "dropping candidate");
                    dropped += 1;
                }
            }
        }

        tracing::debug!(
            domain,
            candidates = candidates.len(),
            dropped,
            "generated typos"
        );
        Ok(DomainTypos {
            candidates,
            dropped,
        })
    }

    /// Process every domain, skipping (and reporting) malformed ones.
    pub fn generate<I, S>(&self, domains: I) -> TypoReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = TypoReport::default();
        for domain in domains {
            let domain = domain.as_ref();
            match self.process_domain(domain) {
                Ok(result) => {
                    report.dropped += result.dropped;
                    report.typos.insert(domain.to_string(), result.candidates);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping domain");
                    report.skipped.push(e);
                }
            }
        }
        report
    }

    /// Process every domain, failing on the first malformed one.
    ///
    /// On success [`TypoReport::skipped`] is always empty.
    pub fn generate_strict<I, S>(&self, domains: I) -> Result<TypoReport, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = TypoReport::default();
        for domain in domains {
            let domain = domain.as_ref();
            let result = self.process_domain(domain)?;
            report.dropped += result.dropped;
            report.typos.insert(domain.to_string(), result.candidates);
        }
        Ok(report)
    }
}

impl Default for Shuffler {
    fn default() -> Self {
        Self::new(ShufflerOptions::default())
    }
}

/// Generate encoded candidate domains for each of `domains` using `methods`.
///
/// Malformed domains are skipped and listed in [`TypoReport::skipped`].
pub fn generate_domain_typos<I, S>(domains: I, methods: MethodSet) -> TypoReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Shuffler::with_methods(methods).generate(domains)
}
