/// One article extracted from the dump: the headword and its raw wikitext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub markup: String, // unrendered wikitext, templates included
}

impl WordEntry {
    pub fn new(word: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            markup: markup.into(),
        }
    }
}
