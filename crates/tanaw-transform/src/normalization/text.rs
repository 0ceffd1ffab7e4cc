//! Free-text normalization for school names and addresses.

use tanaw_model::{NO_DATA_PLACEHOLDERS, UNKNOWN_SENTINEL, collapse_whitespace};

use crate::rules::RuleSet;

/// Strips a leading `#` and then one leading `-` or `:` marker.
///
/// Whitespace around the markers is trimmed.
pub fn strip_leading_markers(raw: &str) -> &str {
    let value = raw.trim();
    let value = value.strip_prefix('#').unwrap_or(value).trim_start();
    value.strip_prefix(['-', ':']).unwrap_or(value).trim()
}

/// Normalizes a school name or address cell.
///
/// Leading markers are stripped, the text is upper-cased, the rule set is
/// applied in order and whitespace is collapsed. Normalized values are fixed
/// points unless they still begin with a `-` or `:`, which happens when the
/// raw value stacked more than one such marker; each pass strips one.
///
/// # Examples
///
/// ```
/// use tanaw_transform::normalization::normalize_text;
/// use tanaw_transform::rules::RuleSet;
///
/// let rules = RuleSet::school_text().unwrap();
/// assert_eq!(normalize_text("Sto. Nino ES", &rules), "STO. NINO ELEMENTARY SCHOOL");
/// assert_eq!(normalize_text("# 123 - Purok 2", &rules), "123 - PRK. 2");
/// ```
pub fn normalize_text(raw: &str, rules: &RuleSet) -> String {
    let upper = strip_leading_markers(raw).to_uppercase();
    collapse_whitespace(&rules.apply(&upper))
}

/// Returns true for blank, placeholder or punctuation-only values.
pub fn is_no_data(value: &str) -> bool {
    let trimmed = value.trim();
    NO_DATA_PLACEHOLDERS
        .iter()
        .any(|placeholder| trimmed.eq_ignore_ascii_case(placeholder))
        || trimmed.chars().all(|ch| !ch.is_alphanumeric())
}

/// Replaces "no data" values with [`UNKNOWN_SENTINEL`].
pub fn replace_no_data(value: &str) -> String {
    if is_no_data(value) {
        UNKNOWN_SENTINEL.to_string()
    } else {
        value.to_string()
    }
}
