/// Progress update interval (tick every N pages)
pub const PROGRESS_INTERVAL: u64 = 1000;

/// Buffer capacity for dump reading and artifact writing
pub const IO_BUF_CAPACITY: usize = 256 * 1024;

/// File-name prefix of the raw word table artifact (words-<snapshot>.json)
pub const WORDS_PREFIX: &str = "words";

/// File-name prefix of the rendered table artifact (rendered-<snapshot>.json)
pub const RENDERED_PREFIX: &str = "rendered";

/// File-name prefix Wiktionary dumps are stored under (pages-<date>.xml[.bz2])
pub const DUMP_PREFIX: &str = "pages-";
