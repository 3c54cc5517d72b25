//! Splits a SIE line into fields.

use super::quote::unescape;
use crate::error::{Result, SieError};
use regex::Regex;

/// Fields are separated by whitespace. A field starting with `"` runs to the
/// next unescaped `"`, or to end of line when the quote is never closed.
pub struct Tokenizer {
    re: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        let re = Regex::new(r#""(?P<quoted>(?:[^"\\]|\\.)*\\?)(?:"|$)|(?P<bare>[^\s"]+)"#)
            .map_err(|e| SieError::Parse(e.to_string()))?;
        Ok(Self { re })
    }

    pub fn tokenize(&self, line: &str) -> Vec<String> {
        self.re
            .captures_iter(line)
            .filter_map(|caps| {
                if let Some(q) = caps.name("quoted") {
                    Some(unescape(q.as_str()))
                } else {
                    caps.name("bare").map(|b| b.as_str().to_string())
                }
            })
            .collect()
    }
}
