//! Line classification for the configuration grammar
//!
//! Every trimmed input line is exactly one of: comment, blank, key/value
//! assignment, or section marker. Classification runs in that priority
//! order, so a key/value line that happens to end with a colon is never
//! misread as a section marker.

/// A classified configuration line. Payloads borrow from the trimmed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// `# ...`, ignored
    Comment,
    /// Zero length after trimming, ignored
    Blank,
    /// `key = value`, split on the first `=`
    KeyValue { key: &'a str, value: &'a str },
    /// `name:`, selects (creating if needed) the named section
    Section { name: &'a str },
    /// Anything else; fatal to the whole read
    Unrecognized,
}

/// Classify one pre-trimmed line. First match wins.
pub(crate) fn classify(line: &str) -> Line<'_> {
    if is_comment(line) {
        Line::Comment
    } else if is_blank(line) {
        Line::Blank
    } else if is_key_value(line) {
        let (key, value) = parse_key_value(line);
        Line::KeyValue { key, value }
    } else if is_name(line) {
        Line::Section {
            name: parse_name(line),
        }
    } else {
        Line::Unrecognized
    }
}

/// A comment starts with `#`. The empty string is not a comment.
fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}

fn is_blank(line: &str) -> bool {
    line.is_empty()
}

/// The length guard is deliberately coarse: it rejects `=`, `a=` and `=b`,
/// but a three-byte line with one empty side such as `ab=` still passes.
fn is_key_value(line: &str) -> bool {
    line.contains('=') && line.len() >= 3
}

/// Split on the first `=`. Only the spacing around the separator is
/// trimmed; the key keeps its left edge and the value its right edge.
fn parse_key_value(line: &str) -> (&str, &str) {
    // is_key_value guarantees at least one separator
    let (key, value) = line.split_once('=').unwrap_or((line, ""));
    (key.trim_end(), value.trim_start())
}

/// A section marker ends with `:`. A bare `:` is not a valid marker.
fn is_name(line: &str) -> bool {
    line.ends_with(':') && line.len() >= 2
}

/// Strip every trailing `:` and whitespace character to recover the name.
/// Interior colons survive, so `a:b:` names the section `a:b`.
fn parse_name(line: &str) -> &str {
    line.trim_end_matches(|c: char| c == ':' || c.is_whitespace())
}
