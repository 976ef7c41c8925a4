//! Navigable-state mirror
//!
//! Reflects the open section into a query parameter of the page location so
//! a restart with the same `--location` reopens the same section. The
//! editing-state machine never reads the location itself; the handlers read
//! it once on mount and write it on each transition.

use std::fmt;

use url::{form_urlencoded, Url};

use profile_core::prelude::*;

/// Query parameter carrying the open section's key
pub const EDITING_SECTION_PARAM: &str = "editing-section";

const BASE_URL: &str = "profed://account/profile";

/// Get/set/delete access to single-valued string parameters.
#[cfg_attr(test, mockall::automock)]
pub trait NavigableState {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn delete(&mut self, key: &str);
}

/// Page location: a path plus ordered query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    params: Vec<(String, String)>,
}

impl Location {
    /// Parse a full URL, an absolute path, or a bare `?query` string.
    ///
    /// Relative input is resolved against `profed://account/profile`.
    pub fn parse(input: &str) -> Result<Self> {
        let base = Url::parse(BASE_URL)
            .map_err(|e| Error::invalid_location(BASE_URL, e.to_string()))?;
        let url = match Url::parse(input) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => base
                .join(input)
                .map_err(|e| Error::invalid_location(input, e.to_string()))?,
            Err(e) => return Err(Error::invalid_location(input, e.to_string())),
        };

        let params = url.query_pairs().into_owned().collect();
        Ok(Self {
            path: url.path().to_string(),
            params,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

impl Default for Location {
    fn default() -> Self {
        Self {
            path: "/profile".to_string(),
            params: Vec::new(),
        }
    }
}

impl NavigableState for Location {
    fn get(&self, key: &str) -> Option<String> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn set(&mut self, key: &str, value: &str) {
        // Replace the first occurrence in place, drop any repeats
        let mut replaced = false;
        self.params.retain_mut(|(k, v)| {
            if k.as_str() != key {
                return true;
            }
            if replaced {
                return false;
            }
            *v = value.to_string();
            replaced = true;
            true
        });
        if !replaced {
            self.params.push((key.to_string(), value.to_string()));
        }
    }

    fn delete(&mut self, key: &str) {
        self.params.retain(|(k, _)| k != key);
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.params.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.params.iter())
                .finish();
            write!(f, "?{}", query)?;
        }
        Ok(())
    }
}
