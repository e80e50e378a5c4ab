//! Note blocks and their on-disk text form.
//!
//! A notes file is a sequence of blocks: the note's lines, each ending with the
//! platform line ending, then a separator line. Nothing is escaped, so a note
//! line that reads `---` looks exactly like a separator when viewed.

/// Marker line written after every note block.
pub const SEPARATOR: &str = "---";

/// Platform line ending used when writing notes.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// Platform line ending used when writing notes.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// A single user-entered note of one or more lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    lines: Vec<String>,
}

impl Note {
    /// Build a note from collected input lines.
    ///
    /// Returns `None` when there is nothing to save.
    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Option<Self> {
        if lines.is_empty() {
            None
        } else {
            Some(Self { lines })
        }
    }

    /// The note's lines, without line endings.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render the block exactly as it is appended to the notes file.
    #[must_use]
    pub fn to_block(&self) -> String {
        let mut block = String::new();
        for line in &self.lines {
            block.push_str(line);
            block.push_str(LINE_ENDING);
        }
        block.push_str(SEPARATOR);
        block.push_str(LINE_ENDING);
        block
    }
}

/// Format one line of a notes listing: the 1-based number right-aligned to
/// width 3, a bar, then the raw line.
#[must_use]
pub fn format_numbered_line(number: usize, line: &str) -> String {
    format!("{number:>3} | {line}")
}

/// Decode one raw line, dropping a trailing `\n` or `\r\n`.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
#[must_use]
pub fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_empty_is_none() {
        assert!(Note::from_lines(Vec::new()).is_none());
    }

    #[test]
    fn test_from_lines_keeps_order() {
        let note = Note::from_lines(vec!["first".into(), "second".into()]).unwrap();
        assert_eq!(note.lines(), ["first", "second"]);
    }

    #[test]
    fn test_to_block_single_line() {
        let note = Note::from_lines(vec!["hello".into()]).unwrap();
        assert_eq!(note.to_block(), format!("hello{LINE_ENDING}---{LINE_ENDING}"));
    }

    #[test]
    fn test_to_block_multi_line() {
        let note = Note::from_lines(vec!["hello".into(), "world".into()]).unwrap();
        assert_eq!(
            note.to_block(),
            format!("hello{LINE_ENDING}world{LINE_ENDING}---{LINE_ENDING}")
        );
    }

    #[test]
    fn test_to_block_does_not_escape_separator_lines() {
        let note = Note::from_lines(vec!["---".into()]).unwrap();
        assert_eq!(note.to_block(), format!("---{LINE_ENDING}---{LINE_ENDING}"));
    }

    #[test]
    fn test_whitespace_only_line_is_content() {
        let note = Note::from_lines(vec!["   ".into()]).unwrap();
        assert!(note.to_block().starts_with("   "));
    }

    #[test]
    fn test_format_numbered_line() {
        assert_eq!(format_numbered_line(1, "hello"), "  1 | hello");
        assert_eq!(format_numbered_line(42, ""), " 42 | ");
        assert_eq!(format_numbered_line(1234, "wide"), "1234 | wide");
    }

    #[test]
    fn test_format_numbered_line_unicode() {
        assert_eq!(format_numbered_line(7, "café 日本語"), "  7 | café 日本語");
    }

    #[test]
    fn test_decode_line() {
        assert_eq!(decode_line(b"plain\n"), "plain");
        assert_eq!(decode_line(b"crlf\r\n"), "crlf");
        assert_eq!(decode_line(b"no newline"), "no newline");
        assert_eq!(decode_line(b"\n"), "");
        assert_eq!(decode_line(b"bad\xff\n"), "bad\u{FFFD}");
    }
}
