//! Template invocation syntax: locating `{{ … }}` spans in wikitext and
//! splitting one span into a name plus ordered parameters.

use memchr::memmem;

/// One template invocation lifted out of wikitext: `{{name|param|param}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInvocation<'a> {
    pub name: &'a str,
    pub params: Vec<&'a str>,
}

impl<'a> TemplateInvocation<'a> {
    pub fn new(name: &'a str, params: &[&'a str]) -> Self {
        Self {
            name,
            params: params.to_vec(),
        }
    }

    /// Splits the text between `{{` and `}}` into name and parameters.
    ///
    /// Pipes are taken literally; nested invocations are expected to have
    /// been rendered away before parsing (see `render::render_markup`).
    pub fn parse(inner: &'a str) -> Self {
        match inner.split_once('|') {
            Some((name, rest)) => Self {
                name,
                params: rest.split('|').collect(),
            },
            None => Self {
                name: inner,
                params: Vec::new(),
            },
        }
    }

    /// Addresses the invocation as one sequence: index 0 is the name,
    /// positive indices are parameters left to right, negative indices count
    /// from the end. Out-of-range indices yield the empty string.
    pub fn part(&self, index: isize) -> &'a str {
        let len = self.params.len() as isize + 1;
        let idx = if index < 0 { len + index } else { index };
        match idx {
            0 => self.name,
            i if i > 0 && i < len => self.params[(i - 1) as usize],
            _ => "",
        }
    }
}

/// Finds the next balanced `{{ … }}` span starting at or after `from`.
///
/// Returns the byte offsets of the opening and the matching closing brace
/// pair, or `None` when no complete span remains.
pub fn find_span(text: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let start = from + memmem::find(&bytes[from..], b"{{")?;
    let close = find_matching_close(bytes, start)?;
    Some((start, close))
}

/// Scans forward from an opening `{{`, tracking nesting depth, and returns
/// the offset of the matching `}}`.
fn find_matching_close(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth: i32 = 0;
    let mut i = start;
    while i + 1 < bytes.len() {
        if bytes[i] == b'{' && bytes[i + 1] == b'{' {
            depth += 1;
            i += 2;
        } else if bytes[i] == b'}' && bytes[i + 1] == b'}' {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
            i += 2;
        } else {
            i += 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_name_only() {
        let inv = TemplateInvocation::parse("f");
        assert_eq!(inv.name, "f");
        assert!(inv.params.is_empty());
    }

    #[test]
    fn parse_with_params() {
        let inv = TemplateInvocation::parse("Ü|pl|dzień");
        assert_eq!(inv.name, "Ü");
        assert_eq!(inv.params, vec!["pl", "dzień"]);
    }

    #[test]
    fn parse_keeps_empty_params() {
        let inv = TemplateInvocation::parse("L|at||en");
        assert_eq!(inv.params, vec!["at", "", "en"]);
    }

    #[test]
    fn parse_empty_invocation() {
        let inv = TemplateInvocation::parse("");
        assert_eq!(inv.name, "");
        assert!(inv.params.is_empty());
    }

    #[test]
    fn part_zero_is_name() {
        let inv = TemplateInvocation::parse("lang|fr|-ose");
        assert_eq!(inv.part(0), "lang");
    }

    #[test]
    fn part_positive_indices() {
        let inv = TemplateInvocation::parse("L|at||en");
        assert_eq!(inv.part(1), "at");
        assert_eq!(inv.part(2), "");
        assert_eq!(inv.part(3), "en");
    }

    #[test]
    fn part_negative_counts_from_end() {
        let inv = TemplateInvocation::parse("Ü|pl|dzień");
        assert_eq!(inv.part(-1), "dzień");
        assert_eq!(inv.part(-2), "pl");
        assert_eq!(inv.part(-3), "Ü");
    }

    #[test]
    fn part_without_params_falls_back_to_name() {
        let inv = TemplateInvocation::parse("lang");
        assert_eq!(inv.part(-1), "lang");
    }

    #[test]
    fn part_out_of_range_is_empty() {
        let inv = TemplateInvocation::parse("f|x");
        assert_eq!(inv.part(5), "");
        assert_eq!(inv.part(-5), "");
    }

    #[test]
    fn find_span_basic() {
        assert_eq!(find_span("ab {{f}} cd", 0), Some((3, 6)));
    }

    #[test]
    fn find_span_nested() {
        let text = "{{outer {{inner}} end}} tail";
        assert_eq!(find_span(text, 0), Some((0, 21)));
    }

    #[test]
    fn find_span_honors_offset() {
        let text = "{{a}} {{b}}";
        assert_eq!(find_span(text, 1), Some((6, 9)));
    }

    #[test]
    fn find_span_unclosed_is_none() {
        assert!(find_span("{{broken", 0).is_none());
    }

    #[test]
    fn find_span_no_templates() {
        assert!(find_span("plain text", 0).is_none());
    }
}
