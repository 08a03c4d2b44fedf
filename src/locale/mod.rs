//! Locale rule sets: the per-language tables and patterns that drive
//! template rendering and entry slicing.
//!
//! A rule set is built once per locale, lives for the whole process, and is
//! handed to every rendering call by shared reference. Nothing in it is
//! mutable after construction, so rule sets can be shared freely across
//! threads.

pub mod de;

use crate::style::{italic, number};
use crate::template::TemplateInvocation;
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};

/// Rendering rule for template names that need more than a straight table
/// lookup. Interpreted by [`MultiRule::apply`] over the invocation's parts
/// (index 0 is the name, negatives count from the end).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiRule {
    /// A fixed replacement string.
    Literal(&'static str),
    /// A fixed replacement string, italicized.
    ItalicLiteral(&'static str),
    /// The invocation part at the given index.
    Select(isize),
    /// The invocation part at the given index, italicized.
    ItalicSelect(isize),
}

impl MultiRule {
    /// Applies the rule to one invocation. Never fails; an out-of-range
    /// selection renders as the empty string.
    pub fn apply(&self, inv: &TemplateInvocation) -> String {
        match self {
            MultiRule::Literal(text) => (*text).to_string(),
            MultiRule::ItalicLiteral(text) => italic(text),
            MultiRule::Select(index) => inv.part(*index).to_string(),
            MultiRule::ItalicSelect(index) => italic(inv.part(*index)),
        }
    }
}

/// Everything the renderer and the content helpers need to know about one
/// language edition of Wiktionary.
pub struct LocaleRuleSet {
    /// Locale code ("de", ...).
    pub code: &'static str,

    /// Language adjectives: {{fr.}} -> "französisch".
    pub lang_adjectives: FxHashMap<&'static str, &'static str>,

    /// Language display names keyed by code: {{fr}} -> "Französisch".
    pub lang_names: FxHashMap<&'static str, &'static str>,

    /// Usage labels, always rendered in italics: {{ugs.}} -> "umgangssprachlich".
    pub usage_labels: FxHashMap<&'static str, &'static str>,

    /// Rules for multi-argument templates: {{Ü|pl|dzień}} and friends.
    pub multi: FxHashMap<&'static str, MultiRule>,

    /// Parameterless templates with a fixed replacement: {{Gen.}} -> "Genitiv:".
    pub simple: FxHashMap<&'static str, &'static str>,

    /// Templates whose whole span is dropped from the surrounding text.
    pub ignored: FxHashSet<&'static str>,

    /// Decimal separator for numbers formatted in this locale.
    pub float_separator: char,
    /// Thousands separator for numbers formatted in this locale.
    pub thousands_separator: char,

    /// Pattern extracting the pronunciation from an entry.
    pub pronunciation: Regex,
    /// Pattern extracting the grammatical gender after the headword line.
    pub gender: Regex,

    /// Markers opening the language section this locale extracts from.
    pub head_sections: &'static [&'static str],
    /// Markers opening the etymology section.
    pub etymology_sections: &'static [&'static str],
    /// Markers opening the meanings section.
    pub meaning_sections: &'static [&'static str],
}

impl LocaleRuleSet {
    /// Formats a number with this locale's separators.
    pub fn format_number(&self, value: f64) -> String {
        number(value, self.float_separator, self.thousands_separator)
    }
}

static DE: Lazy<LocaleRuleSet> = Lazy::new(de::ruleset);

/// Looks up the shared rule set for a locale code.
pub fn get(code: &str) -> Option<&'static LocaleRuleSet> {
    match code {
        "de" => Some(&DE),
        _ => None,
    }
}

/// Locale codes a rule set exists for.
pub fn supported() -> &'static [&'static str] {
    &["de"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_literal() {
        let inv = TemplateInvocation::parse("whatever");
        assert_eq!(MultiRule::Literal("Plural:").apply(&inv), "Plural:");
    }

    #[test]
    fn apply_italic_literal() {
        let inv = TemplateInvocation::parse("f");
        assert_eq!(MultiRule::ItalicLiteral("f").apply(&inv), "<i>f</i>");
    }

    #[test]
    fn apply_select() {
        let inv = TemplateInvocation::parse("L|at||en");
        assert_eq!(MultiRule::Select(1).apply(&inv), "at");
    }

    #[test]
    fn apply_select_negative() {
        let inv = TemplateInvocation::parse("lang|fr|-ose");
        assert_eq!(MultiRule::Select(-1).apply(&inv), "-ose");
    }

    #[test]
    fn apply_italic_select() {
        let inv = TemplateInvocation::parse("Ü|pl|dzień");
        assert_eq!(MultiRule::ItalicSelect(-1).apply(&inv), "<i>dzień</i>");
    }

    #[test]
    fn apply_select_out_of_range() {
        let inv = TemplateInvocation::parse("f");
        assert_eq!(MultiRule::Select(7).apply(&inv), "");
    }

    #[test]
    fn get_known_locale() {
        let rules = get("de").unwrap();
        assert_eq!(rules.code, "de");
    }

    #[test]
    fn get_unknown_locale() {
        assert!(get("tlh").is_none());
    }

    #[test]
    fn get_returns_shared_reference() {
        let a = get("de").unwrap() as *const LocaleRuleSet;
        let b = get("de").unwrap() as *const LocaleRuleSet;
        assert_eq!(a, b);
    }

    #[test]
    fn format_number_uses_locale_separators() {
        let rules = get("de").unwrap();
        assert_eq!(rules.format_number(1_234_567.89), "1.234.567,89");
    }

    #[test]
    fn supported_lists_de() {
        assert!(supported().contains(&"de"));
    }
}
