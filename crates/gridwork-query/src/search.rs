//! Case-insensitive substring search used by the global filter.

/// Returns `true` if `needle` occurs in `haystack`, ignoring case.
///
/// An empty needle matches everything. Case folding uses Unicode lowercase
/// mapping on both sides, so `"ÉCOLE"` contains `"éc"`.
///
/// ```
/// use gridwork_query::contains_ignore_case;
///
/// assert!(contains_ignore_case("Ada Lovelace", "LOVE"));
/// assert!(!contains_ignore_case("Ada", "bob"));
/// ```
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if haystack.is_ascii() && needle.is_ascii() {
        let needle = needle.as_bytes();
        return haystack
            .as_bytes()
            .windows(needle.len())
            .any(|w| w.eq_ignore_ascii_case(needle));
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
