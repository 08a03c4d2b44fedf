//! German rule set (de.wiktionary.org).
//!
//! Table contents mirror the conventions of the German Wiktionary: the
//! abbreviated language adjectives used in derivation notes, the language
//! codes used by linking templates, the usage labels that precede meanings,
//! and the handful of templates that need a rule of their own.

use super::{LocaleRuleSet, MultiRule};
use regex::Regex;

/// Builds a fresh German rule set. Callers normally go through
/// [`super::get`], which hands out one shared instance.
pub fn ruleset() -> LocaleRuleSet {
    LocaleRuleSet {
        code: "de",

        lang_adjectives: [
            ("ahd.", "althochdeutsch"),
            ("altgr.", "altgriechisch"),
            ("arab.", "arabisch"),
            ("chin.", "chinesisch"),
            ("dän.", "dänisch"),
            ("engl.", "englisch"),
            ("finn.", "finnisch"),
            ("fr.", "französisch"),
            ("frz.", "französisch"),
            ("griech.", "griechisch"),
            ("hebr.", "hebräisch"),
            ("ital.", "italienisch"),
            ("jap.", "japanisch"),
            ("lat.", "lateinisch"),
            ("mhd.", "mittelhochdeutsch"),
            ("niederl.", "niederländisch"),
            ("norw.", "norwegisch"),
            ("poln.", "polnisch"),
            ("port.", "portugiesisch"),
            ("russ.", "russisch"),
            ("schwed.", "schwedisch"),
            ("span.", "spanisch"),
            ("tschech.", "tschechisch"),
            ("türk.", "türkisch"),
            ("ung.", "ungarisch"),
        ]
        .into_iter()
        .collect(),

        lang_names: [
            ("ar", "Arabisch"),
            ("bg", "Bulgarisch"),
            ("cs", "Tschechisch"),
            ("da", "Dänisch"),
            ("de", "Deutsch"),
            ("el", "Griechisch"),
            ("en", "Englisch"),
            ("eo", "Esperanto"),
            ("es", "Spanisch"),
            ("fa", "Persisch"),
            ("fi", "Finnisch"),
            ("fr", "Französisch"),
            ("grc", "Altgriechisch"),
            ("he", "Hebräisch"),
            ("hi", "Hindi"),
            ("hu", "Ungarisch"),
            ("it", "Italienisch"),
            ("ja", "Japanisch"),
            ("ko", "Koreanisch"),
            ("la", "Latein"),
            ("nl", "Niederländisch"),
            ("no", "Norwegisch"),
            ("pl", "Polnisch"),
            ("pt", "Portugiesisch"),
            ("ro", "Rumänisch"),
            ("ru", "Russisch"),
            ("sv", "Schwedisch"),
            ("tr", "Türkisch"),
            ("uk", "Ukrainisch"),
            ("zh", "Chinesisch"),
        ]
        .into_iter()
        .collect(),

        usage_labels: [
            ("abw.", "abwertend"),
            ("adv.", "adverbial"),
            ("Dativ", "mit Dativ"),
            ("fachspr.", "fachsprachlich"),
            ("fam.", "familiär"),
            ("fDu.", "f Du."),
            ("fig.", "figurativ"),
            ("fPl.", "f Pl."),
            ("geh.", "gehoben"),
            ("Genitiv", "mit Genitiv"),
            ("hist.", "historisch"),
            ("indekl.", "indeklinabel"),
            ("intrans.", "intransitiv"),
            ("kPl.", "kein Plural"),
            ("kSg.", "kein Singular"),
            ("kSt.", "keine Steigerung"),
            ("landsch.", "landschaftlich"),
            ("mDu.", "m Du."),
            ("meton.", "metonymisch"),
            ("mPl.", "m Pl."),
            ("nPl.", "n Pl."),
            ("refl.", "reflexiv"),
            ("reg.", "regional"),
            ("scherzh.", "scherzhaft"),
            ("trans.", "transitiv"),
            ("übertr.", "übertragen"),
            ("ugs.", "umgangssprachlich"),
            ("unreg.", "unregelmäßig"),
            ("uPl.", "u Pl."),
            ("va.", "veraltet"),
            ("vatd.", "veraltend"),
            ("veraltend", "veraltend"),
            ("veraltet", "veraltet"),
            ("vul.", "vulgär"),
            ("vulg.", "vulgär"),
        ]
        .into_iter()
        .collect(),

        multi: [
            // {{f}} and friends mark grammatical gender on inflection lines.
            ("f", MultiRule::ItalicLiteral("f")),
            ("fm", MultiRule::ItalicLiteral("f, m")),
            ("fn", MultiRule::ItalicLiteral("f, n")),
            ("m", MultiRule::ItalicLiteral("m")),
            ("mf", MultiRule::ItalicLiteral("m, f")),
            ("n", MultiRule::ItalicLiteral("n")),
            // {{L|Ausführung}} and {{L|at||en}} link a word; keep the word.
            ("L", MultiRule::Select(1)),
            // {{lang|fr|-ose}} wraps foreign text; keep the text.
            ("lang", MultiRule::Select(-1)),
            // {{noredlink|diminutiv}}
            ("noredlink", MultiRule::Select(-1)),
            // {{Polytonisch|(...)}} wraps polytonic Greek; keep the text.
            ("Polytonisch", MultiRule::Select(-1)),
            // {{Ü|pl|dzień}} is a translation link; keep the translated word.
            ("Ü", MultiRule::ItalicSelect(-1)),
            ("vgl.", MultiRule::ItalicLiteral("vergleiche:")),
            // {{W|Datenkompression|Datenkompressionen}} links Wikipedia.
            ("W", MultiRule::Select(-1)),
            ("WP", MultiRule::Select(-1)),
        ]
        .into_iter()
        .collect(),

        simple: [
            ("Gen.", "Genitiv:"),
            ("Pl.", "Plural:"),
            ("Pl.1", "Plural 1:"),
            ("Pl.2", "Plural 2:"),
            ("Pl.3", "Plural 3:"),
            ("Pl.4", "Plural 4:"),
        ]
        .into_iter()
        .collect(),

        ignored: [
            "Herkunft unbelegt",
            "QS Bedeutungen",
            "QS_Bedeutungen",
            "QS Herkunft",
            "QS_Herkunft",
        ]
        .into_iter()
        .collect(),

        float_separator: ',',
        thousands_separator: '.',

        pronunciation: Regex::new(r"\{\{Lautschrift\|([^}]+)\}\}").unwrap(),
        gender: Regex::new(r",\s+\{\{([fmnu]+)\}\}").unwrap(),

        head_sections: &["{{Sprache|Deutsch}}", "{{sprache|deutsch}}"],
        etymology_sections: &["{{Herkunft}}"],
        meaning_sections: &["{{Bedeutungen}"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_populated() {
        let rules = ruleset();
        assert_eq!(rules.lang_adjectives.get("fr."), Some(&"französisch"));
        assert_eq!(rules.lang_names.get("fr"), Some(&"Französisch"));
        assert_eq!(rules.usage_labels.get("ugs."), Some(&"umgangssprachlich"));
        assert_eq!(rules.simple.get("Gen."), Some(&"Genitiv:"));
        assert!(rules.ignored.contains("QS Herkunft"));
        assert_eq!(rules.multi.get("Ü"), Some(&MultiRule::ItalicSelect(-1)));
    }

    #[test]
    fn pronunciation_pattern() {
        let rules = ruleset();
        let caps = rules
            .pronunciation
            .captures(":{{IPA}} {{Lautschrift|ˈvasɐ}}")
            .unwrap();
        assert_eq!(&caps[1], "ˈvasɐ");
    }

    #[test]
    fn gender_pattern() {
        let rules = ruleset();
        let caps = rules.gender.captures("Wasser, {{n}}").unwrap();
        assert_eq!(&caps[1], "n");
    }

    #[test]
    fn gender_pattern_requires_leading_comma() {
        let rules = ruleset();
        assert!(rules.gender.captures("Wasser {{n}}").is_none());
    }

    #[test]
    fn german_number_separators() {
        let rules = ruleset();
        assert_eq!(rules.format_number(1000.0), "1.000");
        assert_eq!(rules.format_number(0.5), "0,5");
    }
}
