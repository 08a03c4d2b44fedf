//! Extraction helpers over an entry's raw wikitext: pronunciation,
//! grammatical gender, and the section markers that delimit the parts worth
//! reading. All of them are driven by the locale's rule set, so the same
//! code serves every language edition.

use crate::locale::LocaleRuleSet;
use memchr::memmem;

/// First pronunciation noted in the entry, per the locale's notation.
pub fn pronunciation(text: &str, rules: &LocaleRuleSet) -> Option<String> {
    rules
        .pronunciation
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// Grammatical gender following the headword line, if marked.
pub fn gender(text: &str, rules: &LocaleRuleSet) -> Option<String> {
    rules.gender.captures(text).map(|caps| caps[1].to_string())
}

/// Byte offset of the marker opening this locale's language section.
pub fn head_section_start(text: &str, rules: &LocaleRuleSet) -> Option<usize> {
    first_marker(text, rules.head_sections)
}

/// Byte offset of the etymology marker.
pub fn etymology_start(text: &str, rules: &LocaleRuleSet) -> Option<usize> {
    first_marker(text, rules.etymology_sections)
}

/// Byte offset of the meanings marker.
pub fn meanings_start(text: &str, rules: &LocaleRuleSet) -> Option<usize> {
    first_marker(text, rules.meaning_sections)
}

/// The markup from the language-section marker onward. `None` when the
/// entry has no section for this locale at all.
pub fn relevant_text<'a>(text: &'a str, rules: &LocaleRuleSet) -> Option<&'a str> {
    head_section_start(text, rules).map(|start| &text[start..])
}

fn first_marker(text: &str, markers: &[&str]) -> Option<usize> {
    markers
        .iter()
        .filter_map(|marker| memmem::find(text.as_bytes(), marker.as_bytes()))
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale;

    const ENTRY: &str = "\
{{Siehe auch|wasser}}
== Wasser ({{Sprache|Deutsch}}) ==
=== {{Wortart|Substantiv|Deutsch}}, {{n}} ===
{{Worttrennung}}
:Was·ser, {{n}}
{{Aussprache}}
:{{IPA}} {{Lautschrift|ˈvasɐ}}
{{Bedeutungen}}
:[1] chemische Verbindung aus Wasserstoff und Sauerstoff
{{Herkunft}}
:von {{lat.}} ''aqua''
";

    fn de() -> &'static locale::LocaleRuleSet {
        locale::get("de").unwrap()
    }

    #[test]
    fn pronunciation_found() {
        assert_eq!(pronunciation(ENTRY, de()), Some("ˈvasɐ".to_string()));
    }

    #[test]
    fn pronunciation_absent() {
        assert_eq!(pronunciation("kein Eintrag", de()), None);
    }

    #[test]
    fn pronunciation_takes_first() {
        let text = "{{Lautschrift|a}} {{Lautschrift|b}}";
        assert_eq!(pronunciation(text, de()), Some("a".to_string()));
    }

    #[test]
    fn gender_found() {
        assert_eq!(gender(ENTRY, de()), Some("n".to_string()));
    }

    #[test]
    fn gender_absent() {
        assert_eq!(gender("laufen", de()), None);
    }

    #[test]
    fn head_section_found() {
        let start = head_section_start(ENTRY, de()).unwrap();
        assert!(ENTRY[start..].starts_with("{{Sprache|Deutsch}}"));
    }

    #[test]
    fn head_section_matches_lowercase_variant() {
        let text = "== wasser ({{sprache|deutsch}}) ==";
        assert!(head_section_start(text, de()).is_some());
    }

    #[test]
    fn head_section_absent_for_foreign_entry() {
        let text = "== water ({{Sprache|Englisch}}) ==";
        assert_eq!(head_section_start(text, de()), None);
    }

    #[test]
    fn meanings_marker_found() {
        assert!(meanings_start("{{Bedeutungen}}", de()).is_some());
        assert!(meanings_start("{{Bedeutung}}", de()).is_none());
    }

    #[test]
    fn etymology_found() {
        let start = etymology_start(ENTRY, de()).unwrap();
        assert!(ENTRY[start..].starts_with("{{Herkunft}}"));
    }

    #[test]
    fn relevant_text_slices_from_head() {
        let relevant = relevant_text(ENTRY, de()).unwrap();
        assert!(relevant.starts_with("{{Sprache|Deutsch}}"));
        assert!(relevant.contains("{{Bedeutungen}}"));
        assert!(!relevant.contains("{{Siehe auch"));
    }

    #[test]
    fn relevant_text_none_without_head() {
        assert_eq!(relevant_text("nur Text", de()), None);
    }

    #[test]
    fn earliest_marker_wins() {
        let text = "{{sprache|deutsch}} dann {{Sprache|Deutsch}}";
        assert_eq!(head_section_start(text, de()), Some(0));
    }
}
