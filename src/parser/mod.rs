pub mod extractor;

pub use extractor::{classify_line, detect_level, process_file, process_reader, REQUEST_MARKER};
