// IDNA encoding of candidate domains with DNS length verification.

use dnshuffler_core::label::{MAX_DOMAIN_LEN, MAX_LABEL_LEN, fits_dns_label};

/// Error type for candidates that cannot become an ASCII domain name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// IDNA processing rejected the name (disallowed code point, bidi
    /// rule violation, invalid punycode, ...).
    #[error("`{domain}` is not a valid internationalized domain: {reason}")]
    Idna { domain: String, reason: String },

    /// A label is empty or longer than 63 bytes once encoded.
    #[error("`{domain}` has a label of {len} bytes once encoded (allowed: 1..={max})", max = MAX_LABEL_LEN)]
    LabelLength { domain: String, len: usize },

    /// The encoded name is longer than 253 bytes.
    #[error("`{domain}` is {len} bytes once encoded (limit {max})", max = MAX_DOMAIN_LEN)]
    DomainLength { domain: String, len: usize },
}

/// Encode `domain` to its ASCII-compatible form (`xn--` labels for any
/// non-ASCII label, everything lowercased).
///
/// ASCII outside letters, digits and `-` is rejected (STD3 rules), and DNS
/// length limits are enforced so every returned name can actually be
/// registered or queried.
pub fn encode_domain(domain: &str) -> Result<String, EncodingError> {
    let ascii = idna::domain_to_ascii_cow(domain.as_bytes(), idna::AsciiDenyList::STD3)
        .map_err(|e| EncodingError::Idna {
            domain: domain.to_string(),
            reason: e.to_string(),
        })?
        .into_owned();

    if let Some(label) = ascii.split('.').find(|label| !fits_dns_label(label)) {
        return Err(EncodingError::LabelLength {
            domain: domain.to_string(),
            len: label.len(),
        });
    }
    if ascii.len() > MAX_DOMAIN_LEN {
        return Err(EncodingError::DomainLength {
            domain: domain.to_string(),
            len: ascii.len(),
        });
    }
    Ok(ascii)
}

/// Decode an ASCII-compatible domain back to Unicode.
pub fn decode_domain(ascii: &str) -> Result<String, EncodingError> {
    let (unicode, result) = idna::domain_to_unicode(ascii);
    result.map_err(|e| EncodingError::Idna {
        domain: ascii.to_string(),
        reason: e.to_string(),
    })?;
    Ok(unicode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through_lowercased() {
        assert_eq!(encode_domain("Example.COM").unwrap(), "example.com");
        assert_eq!(encode_domain("g00gle.com").unwrap(), "g00gle.com");
    }

    #[test]
    fn cyrillic_label_becomes_punycode() {
        // "аpple" with a Cyrillic 'а'
        let ascii = encode_domain("\u{0430}pple.com").unwrap();
        assert!(ascii.starts_with("xn--"), "{ascii}");
        assert!(ascii.ends_with(".com"));
        assert!(ascii.is_ascii());
    }

    #[test]
    fn decode_reverses_encode() {
        let original = "\u{0430}pple.com";
        let ascii = encode_domain(original).unwrap();
        assert_eq!(decode_domain(&ascii).unwrap(), original);
    }

    #[test]
    fn overlong_label_is_rejected() {
        let domain = format!("{}.com", "a".repeat(64));
        assert!(matches!(
            encode_domain(&domain),
            Err(EncodingError::LabelLength { len: 64, .. })
        ));
    }

    #[test]
    fn max_label_is_accepted() {
        let domain = format!("{}.com", "a".repeat(63));
        assert!(encode_domain(&domain).is_ok());
    }

    #[test]
    fn overlong_domain_is_rejected() {
        let label = "a".repeat(60);
        let domain = [label.as_str(); 5].join(".");
        assert!(matches!(
            encode_domain(&domain),
            Err(EncodingError::DomainLength { len: 304, .. })
        ));
    }

    #[test]
    fn forbidden_code_point_is_rejected() {
        assert!(matches!(
            encode_domain("exa mple.com"),
            Err(EncodingError::Idna { .. })
        ));
    }

    #[test]
    fn non_ldh_ascii_is_rejected() {
        for domain in ["a!b.com", "under_score.com", "semi;colon.com", "a b.com"] {
            assert!(
                matches!(encode_domain(domain), Err(EncodingError::Idna { .. })),
                "{domain} was accepted"
            );
        }
        assert!(encode_domain("in-ner.com").is_ok());
    }

    #[test]
    fn label_emptied_by_mapping_is_rejected() {
        // U+00AD SOFT HYPHEN is ignored by IDNA mapping, leaving an empty label.
        assert!(encode_domain("\u{00AD}.com").is_err());
    }
}
