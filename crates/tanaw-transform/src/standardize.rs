//! Column-name standardization into one canonical vocabulary.

use std::collections::HashMap;

use tanaw_model::collapse_whitespace;

use crate::rules::RuleSet;

/// Canonical form of one column name.
///
/// # Examples
///
/// ```
/// use tanaw_transform::rules::RuleSet;
/// use tanaw_transform::standardize::standardize_column_name;
///
/// let rules = RuleSet::column_names().unwrap();
/// assert_eq!(standardize_column_name("G11 (STEM) Male", &rules), "Grade 11 STEM Male");
/// assert_eq!(standardize_column_name("Female G3", &rules), "Grade 3 Female");
/// ```
pub fn standardize_column_name(name: &str, rules: &RuleSet) -> String {
    collapse_whitespace(&rules.apply(&collapse_whitespace(name)))
}

/// Standardizes every name, suffixing repeats with `_2`, `_3`, ...
pub fn standardize_columns(headers: &[String], rules: &RuleSet) -> Vec<String> {
    let canonical: Vec<String> = headers
        .iter()
        .map(|name| standardize_column_name(name, rules))
        .collect();
    make_unique(canonical)
}

fn make_unique(names: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut taken: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let count = seen.entry(name.clone()).or_insert(0);
        *count += 1;
        let mut candidate = if *count == 1 {
            name.clone()
        } else {
            format!("{name}_{count}")
        };
        // A generated suffix may collide with a literal name seen earlier.
        while taken.contains(&candidate) {
            *count += 1;
            candidate = format!("{name}_{count}");
        }
        taken.push(candidate);
    }
    taken
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleSet {
        RuleSet::column_names().unwrap()
    }

    #[test]
    fn grade_and_gender_names() {
        let rules = rules();
        assert_eq!(standardize_column_name("G1 Male", &rules), "Grade 1 Male");
        assert_eq!(standardize_column_name("K Female", &rules), "Kindergarten Female");
        assert_eq!(standardize_column_name("Female K", &rules), "Kindergarten Female");
        assert_eq!(standardize_column_name("kinder male", &rules), "Kindergarten Male");
        assert_eq!(standardize_column_name("G12  FEMALE", &rules), "Grade 12 Female");
    }

    #[test]
    fn identifier_names_pass_through() {
        let rules = rules();
        for name in ["Region", "BEIS School ID", "School Name", "Modified COC", "Kindergarten Male"] {
            assert_eq!(standardize_column_name(name, &rules), name);
        }
    }

    #[test]
    fn duplicates_are_suffixed() {
        let headers: Vec<String> = ["G1 Male", "Grade 1 Male", "G1 Male", "Grade 1 Male_2"]
            .iter()
            .map(|name| (*name).to_string())
            .collect();
        assert_eq!(
            standardize_columns(&headers, &rules()),
            vec!["Grade 1 Male", "Grade 1 Male_2", "Grade 1 Male_3", "Grade 1 Male_2_2"]
        );
    }
}
