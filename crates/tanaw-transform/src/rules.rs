//! Ordered special-case replacement rules.
//!
//! A [`RuleSet`] is applied left to right: each rule sees the output of the
//! rules before it, so abbreviation expansions run before the comma and
//! whitespace rules that tidy their output. Rule sets are plain values built
//! once per cleaning run and passed to the functions that need them.

use std::borrow::Cow;

use regex::{NoExpand, Regex};

use tanaw_model::{CleanError, Result};

/// How a rule's pattern is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Matches the text verbatim; the replacement is inserted verbatim.
    Literal,
    /// Regular expression; the replacement may use `${n}` capture groups.
    Pattern,
}

/// Declarative form of a rule, usable in `const` tables.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub kind: RuleKind,
    pub pattern: &'static str,
    pub replacement: &'static str,
}

impl RuleSpec {
    pub const fn literal(pattern: &'static str, replacement: &'static str) -> Self {
        Self {
            kind: RuleKind::Literal,
            pattern,
            replacement,
        }
    }

    pub const fn pattern(pattern: &'static str, replacement: &'static str) -> Self {
        Self {
            kind: RuleKind::Pattern,
            pattern,
            replacement,
        }
    }
}

/// One compiled (pattern, replacement) pair.
#[derive(Debug, Clone)]
pub struct SpecialCaseRule {
    kind: RuleKind,
    regex: Regex,
    replacement: String,
}

impl SpecialCaseRule {
    /// Rule matching `text` literally.
    pub fn literal(text: &str, replacement: &str) -> Result<Self> {
        Self::compile(RuleKind::Literal, &regex::escape(text), text, replacement)
    }

    /// Rule matching a regular expression (word boundaries allowed).
    pub fn pattern(pattern: &str, replacement: &str) -> Result<Self> {
        Self::compile(RuleKind::Pattern, pattern, pattern, replacement)
    }

    fn compile(kind: RuleKind, source: &str, display: &str, replacement: &str) -> Result<Self> {
        let regex = Regex::new(source).map_err(|e| CleanError::InvalidRule {
            pattern: display.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            kind,
            regex,
            replacement: replacement.to_string(),
        })
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Replaces every match in `text`.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.kind {
            RuleKind::Literal => self
                .regex
                .replace_all(text, NoExpand(self.replacement.as_str())),
            RuleKind::Pattern => self.regex.replace_all(text, self.replacement.as_str()),
        }
    }
}

/// An ordered list of rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<SpecialCaseRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<SpecialCaseRule>) -> Self {
        Self { rules }
    }

    /// Compiles rules from their declarative form, preserving order.
    pub fn from_specs(specs: &[RuleSpec]) -> Result<Self> {
        let rules = specs
            .iter()
            .map(|spec| match spec.kind {
                RuleKind::Literal => SpecialCaseRule::literal(spec.pattern, spec.replacement),
                RuleKind::Pattern => SpecialCaseRule::pattern(spec.pattern, spec.replacement),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Abbreviation expansion for school names and addresses.
    pub fn school_text() -> Result<Self> {
        Self::from_specs(SCHOOL_TEXT_RULES)
    }

    /// Canonical column-name vocabulary.
    pub fn column_names() -> Result<Self> {
        Self::from_specs(COLUMN_NAME_RULES)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies every rule in order.
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in &self.rules {
            let replaced = match rule.apply(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(replaced) => replaced,
            };
            current = replaced;
        }
        current
    }
}

/// The rule sets a cleaning run needs.
#[derive(Debug, Clone)]
pub struct CleaningRules {
    /// Applied to school names and address fields.
    pub school_text: RuleSet,
    /// Applied to every column name as the final step.
    pub column_names: RuleSet,
}

impl CleaningRules {
    /// The built-in rule sets.
    pub fn standard() -> Result<Self> {
        Ok(Self {
            school_text: RuleSet::school_text()?,
            column_names: RuleSet::column_names()?,
        })
    }
}

/// School name and address abbreviations, applied to upper-cased text.
pub const SCHOOL_TEXT_RULES: &[RuleSpec] = &[
    RuleSpec::pattern(r"\bES\b", "ELEMENTARY SCHOOL"),
    RuleSpec::literal("E/S", "ELEMENTARY SCHOOL"),
    RuleSpec::pattern(r"\bELEM\.", "ELEMENTARY SCHOOL"),
    RuleSpec::pattern(r"\bNHS\b", "NATIONAL HIGH SCHOOL"),
    RuleSpec::pattern(r"\bHS\b", "HIGH SCHOOL"),
    RuleSpec::pattern(r"\bCES\b", "CENTRAL ELEMENTARY SCHOOL"),
    RuleSpec::pattern(r"\bSCH\.", "SCHOOL"),
    RuleSpec::pattern(r"\bINCORPORATED\b", "INC."),
    RuleSpec::pattern(r"\bMEM\.", "MEMORIAL"),
    RuleSpec::pattern(r"\bCS\b", "CENTRAL SCHOOL"),
    RuleSpec::pattern(r"\bPS\b", "PRIMARY SCHOOL"),
    RuleSpec::literal("P/S", "PRIMARY SCHOOL"),
    RuleSpec::pattern(r"\bLC\b", "LEARNING CENTER"),
    RuleSpec::literal("BARANGAY", "BRGY. "),
    RuleSpec::literal("POBLACION", "POB. "),
    RuleSpec::literal("STREET", "ST. "),
    RuleSpec::literal("BUILDING", "BLDG. "),
    RuleSpec::literal("BLOCK", "BLK. "),
    RuleSpec::literal("PUROK", "PRK. "),
    RuleSpec::literal("AVENUE", "AVE. "),
    RuleSpec::literal("ROAD", "RD. "),
    RuleSpec::literal("PACKAGE", "PKG. "),
    RuleSpec::literal("PHASE", "PH. "),
    RuleSpec::pattern(r"\s*,\s*", ", "),
    RuleSpec::pattern(r"\s{2,}", " "),
];

/// Column-name canonicalization.
pub const COLUMN_NAME_RULES: &[RuleSpec] = &[
    RuleSpec::pattern(r"(?i)\bkinder(?:garten)?\b", "Kindergarten"),
    RuleSpec::pattern(r"(?i)\bK\s+(male|female)\b", "Kindergarten ${1}"),
    RuleSpec::pattern(r"(?i)\b(male|female)\s+K\b", "${1} Kindergarten"),
    RuleSpec::pattern(r"(?i)\bG(1[0-2]|[1-9])\b", "Grade ${1}"),
    RuleSpec::pattern(r"(?i)\bgrade\b", "Grade"),
    RuleSpec::pattern(r"(?i)\bfemale\b", "Female"),
    RuleSpec::pattern(r"(?i)\bmale\b", "Male"),
    RuleSpec::pattern(r"^\s*(Male|Female)\s+(.+?)\s*$", "${2} ${1}"),
    RuleSpec::pattern(r"^(.+?)\s+(Male|Female)\s+(\(.*\))\s*$", "${1} ${3} ${2}"),
    RuleSpec::pattern(r"\(\s*([^()]*?)\s*\)", " ${1} "),
    RuleSpec::pattern(r"\s{2,}", " "),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_rules_compile() {
        let rules = CleaningRules::standard().unwrap();
        assert_eq!(rules.school_text.len(), SCHOOL_TEXT_RULES.len());
        assert_eq!(rules.column_names.len(), COLUMN_NAME_RULES.len());
    }

    #[test]
    fn later_rules_see_earlier_output() {
        let rules = RuleSet::new(vec![
            SpecialCaseRule::literal("STREET", "ST. ").unwrap(),
            SpecialCaseRule::pattern(r"\s{2,}", " ").unwrap(),
        ]);
        assert_eq!(rules.apply("MAIN STREET  1"), "MAIN ST. 1");
    }

    #[test]
    fn literal_rules_do_not_expand_dollars() {
        let rule = SpecialCaseRule::literal("PESO", "$1").unwrap();
        assert_eq!(rule.apply("PESO"), "$1");
        assert_eq!(rule.kind(), RuleKind::Literal);
    }

    #[test]
    fn literal_rules_escape_metacharacters() {
        let rule = SpecialCaseRule::literal("E/S.", "X").unwrap();
        assert_eq!(rule.apply("E/S. E/SX"), "X E/SX");
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = SpecialCaseRule::pattern(r"(\bES", "X").unwrap_err();
        assert!(matches!(err, CleanError::InvalidRule { .. }));
    }

    #[test]
    fn word_boundary_rules_skip_longer_words() {
        let rules = RuleSet::school_text().unwrap();
        assert_eq!(rules.apply("CES"), "CENTRAL ELEMENTARY SCHOOL");
        assert_eq!(rules.apply("NHS"), "NATIONAL HIGH SCHOOL");
        assert_eq!(rules.apply("ESTRELLA"), "ESTRELLA");
        assert_eq!(rules.apply("PSALM"), "PSALM");
    }
}
