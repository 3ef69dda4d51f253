// Individual typo generators: each applies one class of single edit to the
// label at every position and records the results in a `CandidateStatus`.

use dnshuffler_core::keyboard::{homoglyphs, keyboard_neighbors, similar_char};
use dnshuffler_core::method::Method;

use super::status::CandidateStatus;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Trait for individual typo generators.
///
/// Each generator mutates the label tracked by `status` using one
/// [`Method`] and records every result, valid or not. Filtering happens once
/// all generators have run.
pub trait TypoGenerator {
    /// The method this generator implements.
    fn method(&self) -> Method;

    /// Emit every candidate for the label tracked by `status`.
    fn generate(&self, status: &mut CandidateStatus<'_>);
}

/// Replace each position in turn with every character from `table` and
/// record the results. Shared by the substitution generators.
fn substitute_each(
    method: Method,
    status: &mut CandidateStatus<'_>,
    table: impl Fn(char) -> &'static [char],
) {
    let label = status.label();
    let mut buffer = label.to_vec();
    for (i, &c) in label.iter().enumerate() {
        for &replacement in table(c) {
            buffer[i] = replacement;
            status.add_buffer(method, &buffer);
        }
        buffer[i] = c;
    }
}

// =========================================================================
// Individual generators
// =========================================================================

// ---------------------------------------------------------------------------
// Neighbor
// ---------------------------------------------------------------------------

/// Replace a character with each adjacent QWERTY key.
///
/// `google` → `foogle`, `toogle`, `yoogle`, ...
pub struct Neighbor;

impl TypoGenerator for Neighbor {
    fn method(&self) -> Method {
        Method::Neighbor
    }

    fn generate(&self, status: &mut CandidateStatus<'_>) {
        substitute_each(Method::Neighbor, status, keyboard_neighbors);
    }
}

// ---------------------------------------------------------------------------
// Similar
// ---------------------------------------------------------------------------

/// Replace a character with its confusable twin (`o` ↔ `0`, `l` ↔ `1`, ...).
pub struct Similar;

impl TypoGenerator for Similar {
    fn method(&self) -> Method {
        Method::Similar
    }

    fn generate(&self, status: &mut CandidateStatus<'_>) {
        let label = status.label();
        let mut buffer = label.to_vec();
        for (i, &c) in label.iter().enumerate() {
            let Some(twin) = similar_char(c) else {
                continue;
            };
            buffer[i] = twin;
            status.add_buffer(Method::Similar, &buffer);
            buffer[i] = c;
        }
    }
}

// ---------------------------------------------------------------------------
// Omit
// ---------------------------------------------------------------------------

/// Delete one character at each position.
///
/// Single-character labels are left alone: omitting their only character
/// would produce the empty string.
pub struct Omit;

impl TypoGenerator for Omit {
    fn method(&self) -> Method {
        Method::Omit
    }

    fn generate(&self, status: &mut CandidateStatus<'_>) {
        let label = status.label();
        if label.len() < 2 {
            return;
        }
        let mut buffer = Vec::with_capacity(label.len() - 1);
        for i in 0..label.len() {
            buffer.clear();
            buffer.extend_from_slice(&label[..i]);
            buffer.extend_from_slice(&label[i + 1..]);
            status.add_buffer(Method::Omit, &buffer);
        }
    }
}

// ---------------------------------------------------------------------------
// Duplicate
// ---------------------------------------------------------------------------

/// Type a character twice.
///
/// Doubling either character of an existing pair gives the same string, so
/// `oo` yields only `ooo`; the status deduplicates.
pub struct Duplicate;

impl TypoGenerator for Duplicate {
    fn method(&self) -> Method {
        Method::Duplicate
    }

    fn generate(&self, status: &mut CandidateStatus<'_>) {
        let label = status.label();
        let mut buffer = Vec::with_capacity(label.len() + 1);
        for i in 0..label.len() {
            buffer.clear();
            buffer.extend_from_slice(&label[..=i]);
            buffer.extend_from_slice(&label[i..]);
            status.add_buffer(Method::Duplicate, &buffer);
        }
    }
}

// ---------------------------------------------------------------------------
// NeighborDuplicate
// ---------------------------------------------------------------------------

/// Keep a character and insert an adjacent key right after it, as when a
/// finger brushes a second key.
///
/// `mail` → `mnail`, `mjail`, `mkail`, ...
pub struct NeighborDuplicate;

impl TypoGenerator for NeighborDuplicate {
    fn method(&self) -> Method {
        Method::NeighborDuplicate
    }

    fn generate(&self, status: &mut CandidateStatus<'_>) {
        let label = status.label();
        let mut buffer = Vec::with_capacity(label.len() + 1);
        for (i, &c) in label.iter().enumerate() {
            for &neighbor in keyboard_neighbors(c) {
                buffer.clear();
                buffer.extend_from_slice(&label[..=i]);
                buffer.push(neighbor);
                buffer.extend_from_slice(&label[i + 1..]);
                status.add_buffer(Method::NeighborDuplicate, &buffer);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Homoglyph
// ---------------------------------------------------------------------------

/// Replace a Latin letter with each look-alike Cyrillic or Greek letter.
///
/// Results are Unicode; they only become usable domains after IDNA encoding.
pub struct Homoglyph;

impl TypoGenerator for Homoglyph {
    fn method(&self) -> Method {
        Method::Homoglyph
    }

    fn generate(&self, status: &mut CandidateStatus<'_>) {
        substitute_each(Method::Homoglyph, status, homoglyphs);
    }
}

// ---------------------------------------------------------------------------
// Swap
// ---------------------------------------------------------------------------

/// Exchange each pair of adjacent characters.
///
/// Emits exactly `len - 1` raw candidates. Swapping two identical characters
/// reproduces the label itself, which the caller discards.
pub struct Swap;

impl TypoGenerator for Swap {
    fn method(&self) -> Method {
        Method::Swap
    }

    fn generate(&self, status: &mut CandidateStatus<'_>) {
        let label = status.label();
        if label.len() < 2 {
            return;
        }
        let mut buffer = label.to_vec();
        for i in 0..label.len() - 1 {
            buffer.swap(i, i + 1);
            status.add_buffer(Method::Swap, &buffer);
            buffer.swap(i, i + 1);
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn run(generator: &dyn TypoGenerator, label: &str) -> Vec<String> {
        let label = chars(label);
        let mut status = CandidateStatus::new(&label);
        generator.generate(&mut status);
        status.raw_candidates().to_vec()
    }

    // --- Neighbor ---

    #[test]
    fn neighbor_replaces_each_position() {
        let out = run(&Neighbor, "ab");
        // a: q w s z, b: v g h n
        assert_eq!(
            out,
            vec!["qb", "wb", "sb", "zb", "av", "ag", "ah", "an"]
        );
    }

    #[test]
    fn neighbor_skips_unknown_characters() {
        assert!(run(&Neighbor, "A_").is_empty());
    }

    // --- Similar ---

    #[test]
    fn similar_single_char() {
        assert_eq!(run(&Similar, "o"), vec!["0"]);
    }

    #[test]
    fn similar_each_position_independently() {
        assert_eq!(run(&Similar, "cool"), vec!["kool", "c0ol", "co0l", "coo1"]);
    }

    // --- Omit ---

    #[test]
    fn omit_two_chars() {
        assert_eq!(run(&Omit, "ab"), vec!["b", "a"]);
    }

    #[test]
    fn omit_single_char_noop() {
        assert!(run(&Omit, "a").is_empty());
    }

    #[test]
    fn omit_repeated_chars_deduplicated() {
        assert_eq!(run(&Omit, "aab"), vec!["ab", "aa"]);
    }

    // --- Duplicate ---

    #[test]
    fn duplicate_double_letter() {
        assert_eq!(run(&Duplicate, "oo"), vec!["ooo"]);
    }

    #[test]
    fn duplicate_each_position() {
        assert_eq!(run(&Duplicate, "ab"), vec!["aab", "abb"]);
    }

    // --- NeighborDuplicate ---

    #[test]
    fn neighbor_duplicate_inserts_after_char() {
        // l: k o p
        assert_eq!(run(&NeighborDuplicate, "l"), vec!["lk", "lo", "lp"]);
    }

    #[test]
    fn neighbor_duplicate_keeps_suffix() {
        let out = run(&NeighborDuplicate, "ml");
        assert!(out.contains(&"mnl".to_string()));
        assert!(out.contains(&"mlk".to_string()));
        assert_eq!(out.len(), 3 + 3);
    }

    // --- Homoglyph ---

    #[test]
    fn homoglyph_substitutes_cyrillic_and_greek() {
        assert_eq!(run(&Homoglyph, "o"), vec!["\u{043E}", "\u{03BF}"]);
    }

    #[test]
    fn homoglyph_leaves_unmapped_letters() {
        assert!(run(&Homoglyph, "bfg").is_empty());
    }

    // --- Swap ---

    #[test]
    fn swap_adjacent_pairs() {
        assert_eq!(run(&Swap, "abc"), vec!["bac", "acb"]);
    }

    #[test]
    fn swap_short_label_noop() {
        assert!(run(&Swap, "a").is_empty());
        assert!(run(&Swap, "").is_empty());
    }

    #[test]
    fn swap_identical_pair_reproduces_label() {
        assert_eq!(run(&Swap, "aa"), vec!["aa"]);
    }

    // --- Common ---

    #[test]
    fn generators_report_their_method() {
        let all: [&dyn TypoGenerator; 7] = [
            &Neighbor,
            &Similar,
            &Omit,
            &Duplicate,
            &NeighborDuplicate,
            &Homoglyph,
            &Swap,
        ];
        let methods: Vec<Method> = all.iter().map(|g| g.method()).collect();
        assert_eq!(methods, Method::ALL.to_vec());
    }

    #[test]
    fn generators_handle_empty_label() {
        let all: [&dyn TypoGenerator; 6] =
            [&Neighbor, &Similar, &Omit, &Duplicate, &NeighborDuplicate, &Homoglyph];
        for generator in all {
            assert!(run(generator, "").is_empty(), "{} on empty label", generator.method());
        }
    }
}
