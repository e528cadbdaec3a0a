//! Main Config type for plainconf
//!
//! A [`Config`] holds one section's key/value pairs. Values stay strings
//! until queried: every typed accessor funnels through [`Config::get`],
//! which distinguishes a missing key ([`Error::KeyNotFound`]) from a value
//! that fails conversion ([`Error::ParseValue`]). The `*_or` variants
//! collapse both failures into a caller-supplied default.

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use indexmap::IndexMap;
use url::Url;

use crate::error::{Error, Result};
use crate::value::{FromValue, TimeOfDay};

/// One section's key/value pairs with typed, lazy access
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    entries: IndexMap<String, String>,
}

impl Config {
    /// Create an empty Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the value stored for `key`. Nothing is validated
    /// here; a value is only interpreted when it is read back.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Borrow the raw string stored for `key`
    pub fn get_raw(&self, key: &str) -> Result<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or(Error::KeyNotFound)
    }

    /// Convert the value stored for `key` into `T`
    ///
    /// Fails with [`Error::KeyNotFound`] when the key is absent and with
    /// [`Error::ParseValue`] when the stored string does not convert.
    pub fn get<T: FromValue>(&self, key: &str) -> Result<T> {
        T::from_value(self.get_raw(key)?)
    }

    /// Convert like [`Config::get`], falling back to `default` on any error
    ///
    /// The flag is true when the default was used. A missing key and a
    /// malformed value are deliberately not distinguished here; callers who
    /// care use [`Config::get`] and match on the error.
    pub fn get_or<T: FromValue>(&self, key: &str, default: T) -> (T, bool) {
        match self.get(key) {
            Ok(value) => (value, false),
            Err(_) => (default, true),
        }
    }

    /// Number of keys in this section
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if this section holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over key/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The value for `key` as an owned string
    pub fn get_string(&self, key: &str) -> Result<String> {
        self.get(key)
    }

    /// The value for `key` as a string, or `default` if the key is absent.
    /// The flag is true when the default was used.
    pub fn get_string_or(&self, key: &str, default: &str) -> (String, bool) {
        match self.get_string(key) {
            Ok(value) => (value, false),
            Err(_) => (default.to_string(), true),
        }
    }

    /// The value for `key` as a bool. Accepts `1 t T TRUE true True` and
    /// `0 f F FALSE false False`, nothing else.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.get(key)
    }

    /// Like [`Config::get_bool`] with a fallback
    pub fn get_bool_or(&self, key: &str, default: bool) -> (bool, bool) {
        self.get_or(key, default)
    }

    /// The value for `key` as an f32, parsed at 64-bit precision and narrowed
    pub fn get_f32(&self, key: &str) -> Result<f32> {
        self.get(key)
    }

    /// Like [`Config::get_f32`] with a fallback
    pub fn get_f32_or(&self, key: &str, default: f32) -> (f32, bool) {
        self.get_or(key, default)
    }

    /// The value for `key` as an f64
    pub fn get_f64(&self, key: &str) -> Result<f64> {
        self.get(key)
    }

    /// Like [`Config::get_f64`] with a fallback
    pub fn get_f64_or(&self, key: &str, default: f64) -> (f64, bool) {
        self.get_or(key, default)
    }

    /// The value for `key` as a pointer-sized signed integer
    pub fn get_isize(&self, key: &str) -> Result<isize> {
        self.get(key)
    }

    /// Like [`Config::get_isize`] with a fallback
    pub fn get_isize_or(&self, key: &str, default: isize) -> (isize, bool) {
        self.get_or(key, default)
    }

    /// The value for `key` as an i32
    pub fn get_i32(&self, key: &str) -> Result<i32> {
        self.get(key)
    }

    /// Like [`Config::get_i32`] with a fallback
    pub fn get_i32_or(&self, key: &str, default: i32) -> (i32, bool) {
        self.get_or(key, default)
    }

    /// The value for `key` as an i64
    pub fn get_i64(&self, key: &str) -> Result<i64> {
        self.get(key)
    }

    /// Like [`Config::get_i64`] with a fallback
    pub fn get_i64_or(&self, key: &str, default: i64) -> (i64, bool) {
        self.get_or(key, default)
    }

    /// The value for `key` as a pointer-sized unsigned integer. A leading
    /// minus sign is a parse error, not a wrap.
    pub fn get_usize(&self, key: &str) -> Result<usize> {
        self.get(key)
    }

    /// Like [`Config::get_usize`] with a fallback
    pub fn get_usize_or(&self, key: &str, default: usize) -> (usize, bool) {
        self.get_or(key, default)
    }

    /// The value for `key` as a u32
    pub fn get_u32(&self, key: &str) -> Result<u32> {
        self.get(key)
    }

    /// Like [`Config::get_u32`] with a fallback
    pub fn get_u32_or(&self, key: &str, default: u32) -> (u32, bool) {
        self.get_or(key, default)
    }

    /// The value for `key` as a u64
    pub fn get_u64(&self, key: &str) -> Result<u64> {
        self.get(key)
    }

    /// Like [`Config::get_u64`] with a fallback
    pub fn get_u64_or(&self, key: &str, default: u64) -> (u64, bool) {
        self.get_or(key, default)
    }

    /// The value for `key` as a duration, written with unit suffixes such
    /// as `250ms`, `90s`, or `16h12m`
    pub fn get_duration(&self, key: &str) -> Result<Duration> {
        self.get(key)
    }

    /// Like [`Config::get_duration`] with a fallback
    pub fn get_duration_or(&self, key: &str, default: Duration) -> (Duration, bool) {
        self.get_or(key, default)
    }

    /// The value for `key` as an absolute URL
    pub fn get_url(&self, key: &str) -> Result<Url> {
        self.get(key)
    }

    /// Like [`Config::get_url`] with a fallback
    pub fn get_url_or(&self, key: &str, default: Url) -> (Url, bool) {
        self.get_or(key, default)
    }

    /// The value for `key` as a lexically cleaned file path. Cleaning never
    /// fails, so only a missing key errors here.
    pub fn get_file_path(&self, key: &str) -> Result<PathBuf> {
        self.get(key)
    }

    /// Like [`Config::get_file_path`] with a fallback. The default is
    /// returned as given, without cleaning.
    pub fn get_file_path_or(&self, key: &str, default: impl Into<PathBuf>) -> (PathBuf, bool) {
        match self.get_file_path(key) {
            Ok(value) => (value, false),
            Err(_) => (default.into(), true),
        }
    }

    /// The value for `key` as an IPv4 or IPv6 address
    pub fn get_ip(&self, key: &str) -> Result<IpAddr> {
        self.get(key)
    }

    /// Like [`Config::get_ip`] with a fallback
    pub fn get_ip_or(&self, key: &str, default: IpAddr) -> (IpAddr, bool) {
        self.get_or(key, default)
    }

    /// The value for `key` as an `HH:MM` time of day
    pub fn get_time_of_day(&self, key: &str) -> Result<TimeOfDay> {
        self.get(key)
    }

    /// Like [`Config::get_time_of_day`] with a fallback
    pub fn get_time_of_day_or(&self, key: &str, default: TimeOfDay) -> (TimeOfDay, bool) {
        self.get_or(key, default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Config {
        let mut config = Config::new();
        config.set("string", "delta");
        config.set("bool", "true");
        config.set("float", "1234.5");
        config.set("huge", "1e300");
        config.set("int", "-1234");
        config.set("uint", "1234");
        config.set("plus", "+7");
        config.set("duration", "3m20s");
        config.set("url", "https://example.com/home.html");
        config.set("path", "/usr/../usr/bin//env");
        config.set("ip", "127.0.0.1");
        config.set("time", "11:26");
        config.set("junk", "???");
        config
    }

    #[test]
    fn test_set_and_get_raw() {
        let mut config = Config::new();
        config.set("alpha", "bravo");
        assert_eq!(config.get_raw("alpha").unwrap(), "bravo");
    }

    #[test]
    fn test_get_raw_missing_key() {
        let config = Config::new();
        let err = config.get_raw("alpha").unwrap_err();
        assert!(err.is_key_not_found());
    }

    #[test]
    fn test_set_overwrites() {
        let mut config = Config::new();
        config.set("key", "first");
        config.set("key", "second");
        assert_eq!(config.get_raw("key").unwrap(), "second");
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn test_empty_key_and_value_are_storable() {
        let mut config = Config::new();
        config.set("", "value");
        config.set("key", "");
        assert_eq!(config.get_raw("").unwrap(), "value");
        assert_eq!(config.get_raw("key").unwrap(), "");
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut config = Config::new();
        assert!(config.is_empty());
        assert_eq!(config.len(), 0);
        config.set("a", "1");
        assert!(!config.is_empty());
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut config = Config::new();
        config.set("zulu", "1");
        config.set("alpha", "2");
        config.set("mike", "3");
        let keys: Vec<&str> = config.keys().collect();
        assert_eq!(keys, vec!["zulu", "alpha", "mike"]);
        let pairs: Vec<(&str, &str)> = config.iter().collect();
        assert_eq!(pairs, vec![("zulu", "1"), ("alpha", "2"), ("mike", "3")]);
    }

    #[test]
    fn test_get_generic() {
        let config = sample();
        assert_eq!(config.get::<i64>("int").unwrap(), -1234);
        assert!(config.get::<i64>("junk").unwrap_err().is_parse_value());
        assert!(config.get::<i64>("absent").unwrap_err().is_key_not_found());
    }

    #[test]
    fn test_get_or_generic() {
        let config = sample();
        assert_eq!(config.get_or("int", 0i64), (-1234, false));
        assert_eq!(config.get_or("junk", 7i64), (7, true));
        assert_eq!(config.get_or("absent", 7i64), (7, true));
    }

    #[test]
    fn test_get_string() {
        let config = sample();
        assert_eq!(config.get_string("string").unwrap(), "delta");
        assert!(config.get_string("absent").unwrap_err().is_key_not_found());
        assert_eq!(config.get_string_or("string", "golf"), ("delta".to_string(), false));
        assert_eq!(config.get_string_or("absent", "golf"), ("golf".to_string(), true));
    }

    #[test]
    fn test_get_bool() {
        let config = sample();
        assert!(config.get_bool("bool").unwrap());
        assert!(config.get_bool("junk").unwrap_err().is_parse_value());
        assert!(config.get_bool("absent").unwrap_err().is_key_not_found());
        assert_eq!(config.get_bool_or("bool", false), (true, false));
        assert_eq!(config.get_bool_or("junk", true), (true, true));
        assert_eq!(config.get_bool_or("absent", false), (false, true));
    }

    #[test]
    fn test_get_floats() {
        let config = sample();
        assert_eq!(config.get_f64("float").unwrap(), 1234.5);
        assert_eq!(config.get_f32("float").unwrap(), 1234.5f32);
        assert!(config.get_f64("junk").unwrap_err().is_parse_value());
        assert_eq!(config.get_f64_or("absent", 0.5), (0.5, true));
        assert_eq!(config.get_f32_or("float", 0.5), (1234.5, false));
        // fits in an f64 but overflows an f32, so the narrow accessor
        // falls back while the wide one succeeds
        assert_eq!(config.get_f64("huge").unwrap(), 1e300);
        assert!(config.get_f32("huge").unwrap_err().is_parse_value());
        assert_eq!(config.get_f32_or("huge", 1.25), (1.25, true));
    }

    #[test]
    fn test_get_signed_integers() {
        let config = sample();
        assert_eq!(config.get_isize("int").unwrap(), -1234);
        assert_eq!(config.get_i32("int").unwrap(), -1234);
        assert_eq!(config.get_i64("int").unwrap(), -1234);
        assert!(config.get_i64("junk").unwrap_err().is_parse_value());
        assert_eq!(config.get_isize_or("absent", 9), (9, true));
        assert_eq!(config.get_i32_or("int", 9), (-1234, false));
        assert_eq!(config.get_i64_or("junk", 9), (9, true));
    }

    #[test]
    fn test_get_unsigned_integers() {
        let config = sample();
        assert_eq!(config.get_usize("uint").unwrap(), 1234);
        assert_eq!(config.get_u32("uint").unwrap(), 1234);
        assert_eq!(config.get_u64("uint").unwrap(), 1234);
        // sign characters are parse errors for the unsigned family
        assert!(config.get_u64("int").unwrap_err().is_parse_value());
        assert!(config.get_u32("plus").unwrap_err().is_parse_value());
        assert_eq!(config.get_i32("plus").unwrap(), 7);
        assert_eq!(config.get_usize_or("uint", 9), (1234, false));
        assert_eq!(config.get_u32_or("int", 9), (9, true));
        assert_eq!(config.get_u64_or("absent", 9), (9, true));
    }

    #[test]
    fn test_get_duration() {
        let config = sample();
        assert_eq!(
            config.get_duration("duration").unwrap(),
            Duration::from_secs(200)
        );
        assert!(config.get_duration("junk").unwrap_err().is_parse_value());
        assert_eq!(
            config.get_duration_or("absent", Duration::from_secs(1)),
            (Duration::from_secs(1), true)
        );
    }

    #[test]
    fn test_get_url() {
        let config = sample();
        let url = config.get_url("url").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
        assert!(config.get_url("junk").unwrap_err().is_parse_value());
        let fallback = Url::parse("https://example.com/other").unwrap();
        let (picked, used) = config.get_url_or("absent", fallback.clone());
        assert_eq!(picked, fallback);
        assert!(used);
    }

    #[test]
    fn test_get_file_path() {
        let config = sample();
        assert_eq!(
            config.get_file_path("path").unwrap(),
            PathBuf::from("/usr/bin/env")
        );
        assert!(config.get_file_path("absent").unwrap_err().is_key_not_found());
        // the fallback is not cleaned
        assert_eq!(
            config.get_file_path_or("absent", "/a/../b"),
            (PathBuf::from("/a/../b"), true)
        );
        assert_eq!(
            config.get_file_path_or("path", "/tmp"),
            (PathBuf::from("/usr/bin/env"), false)
        );
    }

    #[test]
    fn test_get_ip() {
        let config = sample();
        assert_eq!(config.get_ip("ip").unwrap(), IpAddr::from([127, 0, 0, 1]));
        assert!(config.get_ip("junk").unwrap_err().is_parse_value());
        let fallback = IpAddr::from([10, 0, 0, 1]);
        assert_eq!(config.get_ip_or("absent", fallback), (fallback, true));
    }

    #[test]
    fn test_get_time_of_day() {
        let config = sample();
        assert_eq!(
            config.get_time_of_day("time").unwrap(),
            TimeOfDay { hour: 11, minute: 26 }
        );
        assert!(config.get_time_of_day("junk").unwrap_err().is_parse_value());
        let fallback = TimeOfDay { hour: 6, minute: 30 };
        assert_eq!(
            config.get_time_of_day_or("absent", fallback),
            (fallback, true)
        );
    }
}
