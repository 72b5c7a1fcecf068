//! Unified Symbol Resolution identifiers.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A USR string as produced by libclang.
///
/// The content is opaque to this crate; it is never parsed, only passed back
/// into libclang or handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Usr(String);

impl Usr {
    /// Wraps an existing USR, for example one stored by an earlier session.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Usr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Usr {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Usr> for String {
    fn from(value: Usr) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::Usr;

    #[test]
    fn serializes_as_plain_string() {
        let usr = Usr::new("c:objc(cs)Foo");
        let json = serde_json::to_string(&usr).expect("serialize usr");
        assert_eq!(json, "\"c:objc(cs)Foo\"");

        let decoded: Usr = serde_json::from_str(&json).expect("deserialize usr");
        assert_eq!(decoded, usr);
    }

    #[test]
    fn display_matches_raw_text() {
        let usr = Usr::new("c:objc(pl)Proto");
        assert_eq!(usr.to_string(), usr.as_str());
        assert_eq!(String::from(usr), "c:objc(pl)Proto");
    }
}
