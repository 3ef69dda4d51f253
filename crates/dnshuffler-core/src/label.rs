// Label validity rules shared by the generator and the encoder.

/// Maximum length of a single DNS label in its ASCII form (RFC 1035).
pub const MAX_LABEL_LEN: usize = 63;

/// Maximum length of a full domain name in its ASCII form, without the
/// trailing root dot.
pub const MAX_DOMAIN_LEN: usize = 253;

/// Returns `true` if `label` may appear in generator output.
///
/// A candidate is rejected when it is empty, starts or ends with `-`, or
/// contains `--`. The last rule also keeps generated labels from colliding
/// with the reserved `xn--` prefix.
pub fn is_valid_candidate(label: &str) -> bool {
    !label.is_empty() && !label.starts_with('-') && !label.ends_with('-') && !label.contains("--")
}

/// Returns `true` if an ASCII label fits in a DNS label.
pub fn fits_dns_label(ascii_label: &str) -> bool {
    !ascii_label.is_empty() && ascii_label.len() <= MAX_LABEL_LEN
}
