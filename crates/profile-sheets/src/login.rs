use core::fmt;
use serde::Deserialize;

/// Opaque account name returned by the directory.
///
/// A `Login` is never interpreted beyond being embedded in a document and used
/// as an output file stem.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct Login(String);

impl Login {
    pub fn new(login: impl Into<String>) -> Self {
        Self(login.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Login {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Login {
    fn from(login: &str) -> Self {
        Self::new(login)
    }
}

impl From<String> for Login {
    fn from(login: String) -> Self {
        Self(login)
    }
}
