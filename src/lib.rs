//! Glossa: Wiktionary dump extraction and template rendering pipeline
//!
//! This crate turns a Wiktionary XML dump into per-word lexical data in two
//! passes:
//!
//! 1. **Parsing Pass** -- Stream the dump page by page, keep article pages
//!    that carry real content, and persist a word -> raw-wikitext table
//! 2. **Rendering Pass** -- Replace the `{{...}}` template invocations in
//!    each entry with readable text, driven by a per-locale rule set, and
//!    persist the rendered table alongside the raw one
//!
//! # Architecture
//!
//! - **Streaming XML parsing** -- Never loads the dump into memory; one page
//!   of state at a time, straight off the (optionally bz2-compressed) file
//! - **Skips are not errors** -- Redirects, namespaced pages, and unfinished
//!   pages are counted and dropped; only unreadable input or structurally
//!   broken XML aborts a run
//! - **Locale rule sets** -- All language-specific tables and patterns live
//!   in one immutable value that is passed by reference, so multiple locales
//!   can coexist in a process
//! - **Total rendering** -- Every template invocation renders to something;
//!   unknown names degrade to a placeholder instead of failing an entry
//! - **Deterministic artifacts** -- Tables serialize key-sorted, so the same
//!   dump always produces byte-identical output
//!
//! # Key Modules
//!
//! - [`parser`] -- Streaming XML reader with BZ2 decompression
//! - [`words`] -- The word -> wikitext table built from a dump
//! - [`store`] -- Saved artifacts and dump file-name conventions
//! - [`template`] -- `{{...}}` span scanning and invocation parsing
//! - [`render`] -- Template resolution against a locale rule set
//! - [`locale`] -- Per-language tables, patterns, and separators
//! - [`content`] -- Pronunciation, gender, and section extraction
//! - [`style`] -- HTML-ish text helpers shared by the rendering rules
//! - [`models`] -- Core data types ([`models::WordEntry`])
//! - [`stats`] -- Counters for pages seen, words kept, and skips
//! - [`config`] -- Constants for parsing and artifact naming
//!
//! # Example Usage
//!
//! ```bash
//! # Parse the newest dump under data/de into data/de/words-<date>.json
//! glossa parse --locale de
//!
//! # Render the saved table into data/de/rendered-<date>.json
//! glossa render --locale de --snapshot 20240801
//! ```

pub mod config;
pub mod content;
pub mod locale;
pub mod models;
pub mod parser;
pub mod render;
pub mod stats;
pub mod store;
pub mod style;
pub mod template;
pub mod words;
