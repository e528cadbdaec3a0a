//! Reading a configuration stream into named sections
//!
//! [`read`] scans newline-delimited text, classifies each trimmed line as a
//! comment, blank, key/value assignment, or section marker, and accumulates
//! assignments into one [`Config`] per section. Pairs seen before the first
//! marker land in the default section, keyed by the empty string, which is
//! always present in the returned map.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::line::{self, Line};

/// Parse one or more named [`Config`]s out of a reader
///
/// The scan is a single pass. Re-entering a section by repeating its marker
/// resumes the existing [`Config`], and assigning a key twice keeps the last
/// value. Any line that fits none of the four line forms fails the whole
/// call with [`Error::Unrecognized`]; stream failures surface as
/// [`Error::Io`].
///
/// # Example
///
/// ```rust
/// use plainconf::read;
///
/// let text = "\
/// ## primary database
/// database:
///     port = 5432
/// ";
/// let sections = read(text.as_bytes()).unwrap();
/// assert_eq!(sections["database"].get_i64("port").unwrap(), 5432);
/// ```
pub fn read<R: Read>(reader: R) -> Result<IndexMap<String, Config>> {
    let mut sections = IndexMap::new();
    sections.insert(String::new(), Config::new());
    let mut current = String::new();

    for (index, text) in BufReader::new(reader).lines().enumerate() {
        let text = text?;
        let trimmed = text.trim();
        match line::classify(trimmed) {
            Line::Comment | Line::Blank => {}
            Line::KeyValue { key, value } => {
                // `current` always names an existing entry: the default
                // section is inserted up front and markers insert before
                // switching
                sections.get_mut(current.as_str()).unwrap().set(key, value);
            }
            Line::Section { name } => {
                if !sections.contains_key(name) {
                    log::trace!("starting section {:?} at line {}", name, index + 1);
                    sections.insert(name.to_string(), Config::new());
                }
                current = name.to_string();
            }
            Line::Unrecognized => {
                return Err(Error::Unrecognized {
                    line: index + 1,
                    text: trimmed.to_string(),
                });
            }
        }
    }

    log::debug!("parsed {} section(s)", sections.len());
    Ok(sections)
}

/// Read a configuration file from disk. See [`read`].
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<IndexMap<String, Config>> {
    let path = path.as_ref();
    log::debug!("reading configuration from {}", path.display());
    read(File::open(path)?)
}
