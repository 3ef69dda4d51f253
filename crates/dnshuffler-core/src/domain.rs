// Splitting an input domain into the mutable label and its extension.

use std::fmt;

/// How an input domain is split into label and extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// Require exactly one dot (`label.extension`). Anything else is
    /// malformed, so `sub.example.co.uk` is rejected rather than guessed at.
    #[default]
    SingleDot,
    /// Split on the first dot and treat the remainder as the extension, so
    /// `example.co.uk` mutates `example` and keeps `co.uk`.
    FirstDot,
}

/// Why a domain could not be split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// No `.` in the input.
    NoDot,
    /// More than one `.` while [`SplitMode::SingleDot`] is in effect.
    TooManyDots,
    /// Nothing before the first dot.
    EmptyLabel,
    /// Nothing after the dot, or an empty label inside the extension.
    EmptyExtension,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MalformedReason::NoDot => "no dot separating label and extension",
            MalformedReason::TooManyDots => "more than one dot (multi-label domains need --split-first-dot)",
            MalformedReason::EmptyLabel => "empty label",
            MalformedReason::EmptyExtension => "empty extension",
        })
    }
}

/// Error type for domain parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// The input is not of the form `label.extension`.
    #[error("malformed domain `{domain}`: {reason}")]
    Malformed {
        domain: String,
        reason: MalformedReason,
    },
}

impl DomainError {
    fn malformed(domain: &str, reason: MalformedReason) -> Self {
        DomainError::Malformed {
            domain: domain.to_string(),
            reason,
        }
    }
}

/// A domain split into its mutable label and the untouched extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainParts<'a> {
    pub label: &'a str,
    pub extension: &'a str,
}

impl<'a> DomainParts<'a> {
    /// Split `domain` according to `mode`.
    ///
    /// The input is used as given; callers trim surrounding whitespace.
    pub fn split(domain: &'a str, mode: SplitMode) -> Result<Self, DomainError> {
        let Some((label, extension)) = domain.split_once('.') else {
            return Err(DomainError::malformed(domain, MalformedReason::NoDot));
        };
        if mode == SplitMode::SingleDot && extension.contains('.') {
            return Err(DomainError::malformed(domain, MalformedReason::TooManyDots));
        }
        if label.is_empty() {
            return Err(DomainError::malformed(domain, MalformedReason::EmptyLabel));
        }
        if extension.is_empty() || extension.split('.').any(str::is_empty) {
            return Err(DomainError::malformed(domain, MalformedReason::EmptyExtension));
        }
        Ok(DomainParts { label, extension })
    }

    /// Join a replacement label with this domain's extension.
    pub fn with_label(&self, label: &str) -> String {
        let mut out = String::with_capacity(label.len() + 1 + self.extension.len());
        out.push_str(label);
        out.push('.');
        out.push_str(self.extension);
        out
    }
}
