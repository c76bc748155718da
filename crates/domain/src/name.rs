//! Service names — the routing key of every request.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Name under which a service is registered.
///
/// Names are matched exactly: no trimming, no case folding. The empty name
/// is a valid value (it is what a path ending in `/` resolves to).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    /// Wrap a name as-is.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Resolve the service name from a (decoded) request path.
    ///
    /// The name is the literal last `/`-separated segment, so any prefix
    /// routes to the same service and `/foo/` resolves to the empty name.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let segment = path.rsplit('/').next().unwrap_or_default();
        Self(segment.to_string())
    }

    /// Borrow the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` for the empty name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ServiceName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ServiceName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ServiceName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_take_last_segment_of_path() {
        assert_eq!(ServiceName::from_path("/api/v1/echo").as_str(), "echo");
    }

    #[test]
    fn should_ignore_prefix_depth() {
        assert_eq!(
            ServiceName::from_path("/echo"),
            ServiceName::from_path("/a/b/c/echo")
        );
    }

    #[test]
    fn should_resolve_trailing_slash_to_empty_name() {
        let name = ServiceName::from_path("/api/echo/");
        assert!(name.is_empty());
    }

    #[test]
    fn should_resolve_root_to_empty_name() {
        assert!(ServiceName::from_path("/").is_empty());
    }

    #[test]
    fn should_keep_case_and_whitespace() {
        assert_eq!(ServiceName::from_path("/x/Echo ").as_str(), "Echo ");
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let json = serde_json::to_string(&ServiceName::new("echo")).unwrap();
        assert_eq!(json, "\"echo\"");
    }
}
