//! String recipes: null/empty helpers, joining and key/value splitting

use std::fmt::Display;

use itertools::Itertools;
use tracing::debug;

use crate::errors::{CookbookError, CookbookResult};

pub fn is_null_or_empty(s: Option<&str>) -> bool {
    s.map_or(true, str::is_empty)
}

pub fn null_to_empty(s: Option<&str>) -> &str {
    s.unwrap_or("")
}

pub fn empty_to_null(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}

pub fn repeat(s: &str, count: usize) -> String {
    s.repeat(count)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NullPolicy {
    Reject,
    Skip,
    UseFor(String),
}

/// Joins optional parts with a separator.
///
/// Without `skip_nulls` or `use_for_null`, a missing part is an error.
///
/// ```
/// use rscookbook::strings::Joiner;
/// let joined = Joiner::on(", ").skip_nulls().join([Some("a"), Some("b"), None]).unwrap();
/// assert_eq!(joined, "a, b");
/// ```
#[derive(Debug, Clone)]
pub struct Joiner {
    separator: String,
    null_policy: NullPolicy,
}

impl Joiner {
    pub fn on(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            null_policy: NullPolicy::Reject,
        }
    }

    pub fn skip_nulls(mut self) -> Self {
        self.null_policy = NullPolicy::Skip;
        self
    }

    pub fn use_for_null(mut self, text: impl Into<String>) -> Self {
        self.null_policy = NullPolicy::UseFor(text.into());
        self
    }

    pub fn join<I, T>(&self, parts: I) -> CookbookResult<String>
    where
        I: IntoIterator<Item = Option<T>>,
        T: Display,
    {
        let mut rendered = Vec::new();
        for (i, part) in parts.into_iter().enumerate() {
            match (part, &self.null_policy) {
                (Some(p), _) => rendered.push(p.to_string()),
                (None, NullPolicy::Skip) => {}
                (None, NullPolicy::UseFor(text)) => rendered.push(text.clone()),
                (None, NullPolicy::Reject) => return Err(CookbookError::NullElement(i)),
            }
        }
        Ok(rendered.iter().join(&self.separator))
    }
}

/// Splits text on a separator, dropping empty pieces.
#[derive(Debug, Clone)]
pub struct Splitter {
    separator: String,
    trim: bool,
}

impl Splitter {
    /// Fails with `EmptySeparator` for `""`.
    pub fn on(separator: impl Into<String>) -> CookbookResult<Self> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(CookbookError::EmptySeparator);
        }
        Ok(Self {
            separator,
            trim: false,
        })
    }

    pub fn trim_results(mut self) -> Self {
        self.trim = true;
        self
    }

    pub fn split<'a>(&'a self, input: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        input
            .split(self.separator.as_str())
            .map(move |s| if self.trim { s.trim() } else { s })
            .filter(|s| !s.is_empty())
    }

    pub fn with_key_value_separator(
        self,
        separator: impl Into<String>,
    ) -> CookbookResult<MapSplitter> {
        let key_value_separator = separator.into();
        if key_value_separator.is_empty() {
            return Err(CookbookError::EmptySeparator);
        }
        Ok(MapSplitter {
            entries: self,
            key_value_separator,
        })
    }
}

/// Splits `"a:1 b:2"` style input into key/value pairs, keeping input order.
#[derive(Debug, Clone)]
pub struct MapSplitter {
    entries: Splitter,
    key_value_separator: String,
}

impl MapSplitter {
    pub fn split(&self, input: &str) -> CookbookResult<Vec<(String, String)>> {
        let mut pairs: Vec<(String, String)> = Vec::new();
        for entry in self.entries.split(input) {
            let malformed = || CookbookError::MalformedEntry {
                entry: entry.to_string(),
                separator: self.key_value_separator.clone(),
            };
            let (key, value) = entry
                .split_once(self.key_value_separator.as_str())
                .ok_or_else(malformed)?;
            if value.contains(self.key_value_separator.as_str()) {
                return Err(malformed());
            }
            let (key, value) = if self.entries.trim {
                (key.trim(), value.trim())
            } else {
                (key, value)
            };
            if pairs.iter().any(|(k, _)| k == key) {
                return Err(CookbookError::DuplicateKey(key.to_string()));
            }
            pairs.push((key.to_string(), value.to_string()));
        }
        debug!("split {:?} into {} entries", input, pairs.len());
        Ok(pairs)
    }
}
