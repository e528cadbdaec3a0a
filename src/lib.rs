//! plainconf: a reader for plain, line-oriented configuration files
//!
//! The format is deliberately small. A file is a sequence of lines, each
//! one of four things:
//!
//! ```text
//! # a comment
//!
//! key = value
//!
//! section:
//!     key = value
//! ```
//!
//! [`read`] parses a stream into one [`Config`] per section. Assignments
//! appearing before the first `name:` marker collect in the default
//! section, keyed by the empty string. Values stay strings until queried
//! through a typed accessor; each accessor comes in a plain form, which
//! fails with [`Error::KeyNotFound`] or [`Error::ParseValue`], and an `_or`
//! form that substitutes a caller-supplied default on any failure and
//! reports whether it did.
//!
//! A parsed map is inert: reading a [`Config`] takes `&self`, and
//! [`Config::set`] takes `&mut self`, so sharing across threads follows the
//! usual ownership rules with no locking inside the crate.
//!
//! # Example
//!
//! ```rust
//! use plainconf::read;
//!
//! let text = "\
//! retries = 4
//!
//! database:
//!     host = 10.0.0.7
//!     port = 5432
//! ";
//!
//! let sections = read(text.as_bytes()).unwrap();
//! let db = &sections["database"];
//! assert_eq!(db.get_i64("port").unwrap(), 5432);
//! assert_eq!(sections[""].get_i64_or("retries", 1), (4, false));
//! assert_eq!(db.get_string_or("user", "admin"), ("admin".to_string(), true));
//! ```

pub mod error;
pub mod value;

mod config;
mod line;
mod parser;

pub use config::Config;
pub use error::{Error, Result};
pub use parser::{read, read_file};
pub use value::{FromValue, TimeOfDay};
