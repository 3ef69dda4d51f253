// Character-class tables: keyboard adjacency, confusable pairs and homoglyphs.
//
// All tables are compile-time constants keyed on lowercase characters.
// Lookups for characters outside a table return an empty slice (or `None`),
// so callers never need to special-case unknown input.

// ---------------------------------------------------------------------------
// QWERTY adjacency
// ---------------------------------------------------------------------------

/// Characters reachable by a one-key movement on a US QWERTY layout.
///
/// The number row also reaches `-`, and `-` itself is treated as a key so
/// that labels containing hyphens can be mutated like any other character.
/// The order inside each entry is significant: generators emit candidates in
/// this order, which fixes the order of the final output.
pub fn keyboard_neighbors(c: char) -> &'static [char] {
    match c {
        '1' => &['2', 'q'],
        '2' => &['1', 'q', 'w', '3'],
        '3' => &['2', 'w', 'e', '4'],
        '4' => &['3', 'e', 'r', '5'],
        '5' => &['4', 'r', 't', '6'],
        '6' => &['5', 't', 'y', '7'],
        '7' => &['6', 'y', 'u', '8'],
        '8' => &['7', 'u', 'i', '9'],
        '9' => &['8', 'i', 'o', '0'],
        '0' => &['9', 'o', 'p', '-'],
        '-' => &['0', 'p'],
        'q' => &['1', '2', 'w', 'a'],
        'w' => &['q', '2', '3', 'e', 's', 'a'],
        'e' => &['w', '3', '4', 'r', 's', 'd'],
        'r' => &['e', '4', '5', 't', 'd', 'f'],
        't' => &['r', '5', '6', 'y', 'f', 'g'],
        'y' => &['t', '6', '7', 'u', 'g', 'h'],
        'u' => &['y', '7', '8', 'i', 'h', 'j'],
        'i' => &['u', '8', '9', 'o', 'k', 'j'],
        'o' => &['i', '9', '0', 'p', 'l', 'k'],
        'p' => &['o', '-', 'l'],
        'a' => &['q', 'w', 's', 'z'],
        's' => &['a', 'w', 'e', 'd', 'x', 'z'],
        'd' => &['s', 'e', 'r', 'f', 'c', 'x'],
        'f' => &['d', 'r', 't', 'g', 'v', 'c'],
        'g' => &['f', 't', 'y', 'h', 'b', 'v'],
        'h' => &['g', 'y', 'u', 'j', 'n', 'b'],
        'j' => &['h', 'u', 'i', 'k', 'm', 'n'],
        'k' => &['j', 'i', 'o', 'l', 'm'],
        'l' => &['k', 'o', 'p'],
        'z' => &['a', 's', 'x'],
        'x' => &['z', 's', 'd', 'c'],
        'c' => &['x', 'd', 'f', 'v'],
        'v' => &['c', 'f', 'g', 'b'],
        'b' => &['v', 'g', 'h', 'n'],
        'n' => &['b', 'h', 'j', 'm'],
        'm' => &['n', 'j', 'k'],
        _ => &[],
    }
}

// ---------------------------------------------------------------------------
// Visually / phonetically similar characters
// ---------------------------------------------------------------------------

/// Symmetric confusable pairs. Each pair is listed once here and looked up
/// in both directions by [`similar_char`].
const SIMILAR_PAIRS: &[(char, char)] = &[('c', 'k'), ('s', 'z'), ('o', '0'), ('1', 'l')];

/// Return the single character commonly confused with `c`, if any.
pub fn similar_char(c: char) -> Option<char> {
    SIMILAR_PAIRS.iter().find_map(|&(a, b)| {
        if c == a {
            Some(b)
        } else if c == b {
            Some(a)
        } else {
            None
        }
    })
}

// ---------------------------------------------------------------------------
// Homoglyphs
// ---------------------------------------------------------------------------

/// Cyrillic and Greek lowercase letters that render identically (or nearly
/// so) to a Latin lowercase letter in common fonts.
///
/// Only code points that survive IDNA mapping unchanged are listed, so every
/// substitution still encodes to a distinct `xn--` label.
pub fn homoglyphs(c: char) -> &'static [char] {
    match c {
        'a' => &['\u{0430}', '\u{03B1}'], // а α
        'c' => &['\u{0441}'],             // с
        'd' => &['\u{0501}'],             // ԁ
        'e' => &['\u{0435}'],             // е
        'h' => &['\u{04BB}'],             // һ
        'i' => &['\u{0456}', '\u{03B9}'], // і ι
        'j' => &['\u{0458}'],             // ј
        'k' => &['\u{03BA}'],             // κ
        'l' => &['\u{04CF}'],             // ӏ
        'o' => &['\u{043E}', '\u{03BF}'], // о ο
        'p' => &['\u{0440}', '\u{03C1}'], // р ρ
        'q' => &['\u{051B}'],             // ԛ
        's' => &['\u{0455}'],             // ѕ
        'u' => &['\u{03C5}'],             // υ
        'v' => &['\u{03BD}', '\u{0475}'], // ν ѵ
        'w' => &['\u{051D}'],             // ԝ
        'x' => &['\u{0445}'],             // х
        'y' => &['\u{0443}'],             // у
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_letter_and_digit_has_neighbors() {
        for c in ('a'..='z').chain('0'..='9') {
            assert!(!keyboard_neighbors(c).is_empty(), "no neighbors for {c:?}");
        }
    }

    #[test]
    fn neighbors_are_case_sensitive() {
        assert!(keyboard_neighbors('A').is_empty());
        assert!(keyboard_neighbors('.').is_empty());
    }

    #[test]
    fn neighbor_order_is_preserved() {
        assert_eq!(keyboard_neighbors('w'), &['q', '2', '3', 'e', 's', 'a']);
        assert_eq!(keyboard_neighbors('p'), &['o', '-', 'l']);
    }

    #[test]
    fn neighbors_never_contain_self() {
        for c in ('a'..='z').chain('0'..='9').chain(['-']) {
            assert!(!keyboard_neighbors(c).contains(&c));
        }
    }

    #[test]
    fn similar_pairs_are_symmetric() {
        for &(a, b) in SIMILAR_PAIRS {
            assert_eq!(similar_char(a), Some(b));
            assert_eq!(similar_char(b), Some(a));
        }
        assert_eq!(similar_char('o'), Some('0'));
        assert_eq!(similar_char('x'), None);
    }

    #[test]
    fn homoglyphs_are_non_ascii() {
        for c in 'a'..='z' {
            for &g in homoglyphs(c) {
                assert!(!g.is_ascii(), "{c:?} maps to ASCII {g:?}");
                assert!(g.is_lowercase(), "{g:?} is not lowercase");
            }
        }
    }

    #[test]
    fn homoglyphs_missing_for_unmapped_letters() {
        assert!(homoglyphs('b').is_empty());
        assert!(homoglyphs('0').is_empty());
    }
}
