//! Template resolution: turns `{{...}}` invocations into readable text.
//!
//! One invocation is resolved by walking a fixed chain of lookups against
//! the locale's rule set; [`render_markup`] applies that to every invocation
//! embedded in a markup string, innermost first.

use crate::locale::LocaleRuleSet;
use crate::style::{capitalize, italic, term};
use crate::template::{find_span, TemplateInvocation};

type Resolver = fn(&TemplateInvocation, &LocaleRuleSet) -> Option<String>;

/// Resolution order for one invocation. The same name may appear in more
/// than one table, so the order is part of the rendering contract: language
/// adjectives shadow language names, which shadow usage labels, which shadow
/// the generic registry.
const RESOLVERS: &[Resolver] = &[lang_adjective, lang_name, usage_label, registry];

/// Renders one template invocation against a locale's rule set.
///
/// Total and deterministic: a name no table knows degrades to a placeholder
/// instead of an error, so a stray template never poisons a whole entry.
pub fn render(inv: &TemplateInvocation, rules: &LocaleRuleSet) -> String {
    for resolver in RESOLVERS {
        if let Some(text) = resolver(inv, rules) {
            return text;
        }
    }
    fallback(inv)
}

/// Renders every template invocation embedded in `text`.
///
/// Invocations are resolved innermost first, so nested templates are
/// flattened before the outer invocation is parsed. Rendered output is
/// spliced into the result without being rescanned, which guarantees
/// termination. Unbalanced braces are copied through verbatim from the
/// first unmatched opener onward, and text without any invocation comes
/// back unchanged.
pub fn render_markup(text: &str, rules: &LocaleRuleSet) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some((start, close)) = find_span(text, pos) {
        out.push_str(&text[pos..start]);

        let inner = &text[start + 2..close];
        let flattened;
        let flat = if inner.contains("{{") {
            flattened = render_markup(inner, rules);
            flattened.as_str()
        } else {
            inner
        };

        out.push_str(&render(&TemplateInvocation::parse(flat), rules));
        pos = close + 2;
    }

    out.push_str(&text[pos..]);
    out
}

/// {{fr.}} -> "französisch". A second part is appended verbatim, which is
/// how derivation notes attach a trailing colon: {{fr.|:}} -> "französisch:".
fn lang_adjective(inv: &TemplateInvocation, rules: &LocaleRuleSet) -> Option<String> {
    let adjective = rules.lang_adjectives.get(inv.name)?;
    Some(format!("{}{}", adjective, inv.part(1)))
}

/// {{fr}} -> "Französisch". Parameters are ignored.
fn lang_name(inv: &TemplateInvocation, rules: &LocaleRuleSet) -> Option<String> {
    rules.lang_names.get(inv.name).map(|name| (*name).to_string())
}

/// {{ugs.}} -> "<i>umgangssprachlich</i>". A second part lands inside the
/// italic span: {{ugs.|:}} -> "<i>umgangssprachlich:</i>".
fn usage_label(inv: &TemplateInvocation, rules: &LocaleRuleSet) -> Option<String> {
    let label = rules.usage_labels.get(inv.name)?;
    Some(italic(&format!("{}{}", label, inv.part(1))))
}

/// The generic registry: ignored templates render to nothing and stop the
/// chain right here, then the multi-argument rules, then the fixed
/// replacements.
fn registry(inv: &TemplateInvocation, rules: &LocaleRuleSet) -> Option<String> {
    if rules.ignored.contains(inv.name) {
        return Some(String::new());
    }
    if let Some(rule) = rules.multi.get(inv.name) {
        return Some(rule.apply(inv));
    }
    rules.simple.get(inv.name).map(|text| (*text).to_string())
}

/// Placeholder for a name no table knows: {{default}} -> "<i>(Default)</i>".
fn fallback(inv: &TemplateInvocation) -> String {
    term(&capitalize(inv.name))
}
