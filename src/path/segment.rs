//! Path segment classification.

/// Classifies a segment as a sequence index.
///
/// Only unsigned base-10 digit runs qualify; a sign prefix, whitespace, or
/// any other non-digit makes the segment a key. Leading zeros are accepted
/// (`"01"` is index 1). Returns `None` for segments that are not indices,
/// including digit runs too large for `usize`.
///
/// # Example
///
/// ```
/// use yamldig::path::segment::as_index;
///
/// assert_eq!(as_index("2"), Some(2));
/// assert_eq!(as_index("007"), Some(7));
/// assert_eq!(as_index("-1"), None);
/// assert_eq!(as_index("two"), None);
/// ```
pub fn as_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
