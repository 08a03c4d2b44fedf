//! Streaming dump reader: walks a MediaWiki XML export event by event and
//! yields one [`WordEntry`] per surviving article page.
//!
//! The document tree is never materialized. Only the open page's title and
//! text accumulate between events, and both move out as soon as the page's
//! closing tag is classified, so peak memory stays at one page no matter how
//! large the dump is.

use crate::config::IO_BUF_CAPACITY;
use crate::models::WordEntry;
use crate::stats::ParseStats;
use anyhow::{Context, Result};
use bzip2::read::BzDecoder;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Which text-bearing element the cursor is currently inside.
#[derive(Clone, Copy, PartialEq)]
enum Capture {
    None,
    Title,
    Text,
}

/// State accumulated for the page currently being read.
#[derive(Default)]
struct PageState {
    title: String,
    text: String,
    redirect: bool,
    open: bool,
    in_revision: bool,
}

impl PageState {
    fn reset(&mut self) {
        self.title.clear();
        self.text.clear();
        self.redirect = false;
        self.open = true;
        self.in_revision = false;
    }
}

pub struct DumpReader {
    reader: Reader<Box<dyn BufRead>>,
    buf: Vec<u8>,
    page: PageState,
    capture: Capture,
    stats: ParseStats,
}

impl DumpReader {
    /// Opens a dump for streaming. Files ending in `.bz2` are decompressed
    /// on the fly; anything else is read as plain XML.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open dump at: {}", path.display()))?;
        let input: Box<dyn BufRead> = if path.extension().is_some_and(|ext| ext == "bz2") {
            Box::new(BufReader::with_capacity(
                IO_BUF_CAPACITY,
                BzDecoder::new(file),
            ))
        } else {
            Box::new(BufReader::with_capacity(IO_BUF_CAPACITY, file))
        };

        Ok(Self {
            reader: Reader::from_reader(input),
            buf: Vec::new(),
            page: PageState::default(),
            capture: Capture::None,
            stats: ParseStats::new(),
        })
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Consumes the reader, handing back the final counters.
    pub fn into_stats(self) -> ParseStats {
        self.stats
    }

    /// Advances to the next article entry. Returns `Ok(None)` at end of
    /// input. Page-level oddities are counted and skipped; structurally
    /// broken XML is the only mid-stream error.
    pub fn next_entry(&mut self) -> Result<Option<WordEntry>> {
        loop {
            self.buf.clear();
            let event = self
                .reader
                .read_event_into(&mut self.buf)
                .with_context(|| {
                    format!("Malformed XML at byte {}", self.reader.buffer_position())
                })?;

            match event {
                Event::Eof => return Ok(None),

                Event::Start(e) => match e.name().as_ref() {
                    b"page" => {
                        self.page.reset();
                        self.capture = Capture::None;
                    }
                    b"title" if self.page.open && !self.page.in_revision => {
                        self.capture = Capture::Title;
                    }
                    b"revision" if self.page.open => {
                        // A later revision supersedes whatever an earlier one
                        // captured.
                        self.page.in_revision = true;
                        self.page.text.clear();
                    }
                    b"text" if self.page.in_revision && self.page.text.is_empty() => {
                        self.capture = Capture::Text;
                    }
                    b"redirect" if self.page.open => {
                        self.page.redirect = true;
                    }
                    _ => {}
                },

                Event::Empty(e) => {
                    if e.name().as_ref() == b"redirect" && self.page.open {
                        self.page.redirect = true;
                    }
                }

                Event::Text(t) => {
                    if self.capture != Capture::None {
                        let text = t.unescape().with_context(|| {
                            format!(
                                "Invalid text escape at byte {}",
                                self.reader.buffer_position()
                            )
                        })?;
                        match self.capture {
                            Capture::Title => self.page.title.push_str(&text),
                            Capture::Text => self.page.text.push_str(&text),
                            Capture::None => {}
                        }
                    }
                }

                Event::CData(t) => {
                    if self.capture != Capture::None {
                        let raw = t.into_inner();
                        let text = String::from_utf8_lossy(&raw);
                        match self.capture {
                            Capture::Title => self.page.title.push_str(&text),
                            Capture::Text => self.page.text.push_str(&text),
                            Capture::None => {}
                        }
                    }
                }

                Event::End(e) => match e.name().as_ref() {
                    b"title" | b"text" => self.capture = Capture::None,
                    b"revision" => self.page.in_revision = false,
                    b"page" => {
                        self.capture = Capture::None;
                        if let Some(entry) = finish_page(&mut self.page, &self.stats) {
                            return Ok(Some(entry));
                        }
                    }
                    _ => {}
                },

                _ => {}
            }
        }
    }
}

/// Classifies a just-closed page: one entry out, or a counted skip.
fn finish_page(page: &mut PageState, stats: &ParseStats) -> Option<WordEntry> {
    page.open = false;
    stats.inc_pages();

    if page.redirect {
        stats.inc_redirects();
        debug!(title = %page.title, "Skipping redirect");
        return None;
    }
    if page.title.contains(':') {
        stats.inc_namespaced();
        debug!(title = %page.title, "Skipping non-article namespace");
        return None;
    }
    if page.title.is_empty() || page.text.is_empty() {
        stats.inc_unfinished();
        debug!(title = %page.title, "Skipping page without title or text");
        return None;
    }

    stats.inc_words();
    Some(WordEntry {
        word: std::mem::take(&mut page.title),
        markup: std::mem::take(&mut page.text),
    })
}

impl Iterator for DumpReader {
    type Item = Result<WordEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry().transpose()
    }
}
