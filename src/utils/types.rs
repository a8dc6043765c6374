use serde::{Deserialize, Serialize};
use std::fmt;

/// Login of the account whose sponsors are requested
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(String);

impl User {
    /// Borrow the raw login
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for User {
    fn from(login: &str) -> Self {
        Self(login.to_string())
    }
}

impl From<String> for User {
    fn from(login: String) -> Self {
        Self(login)
    }
}

impl AsRef<str> for User {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Login of a single sponsor, as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sponsor(String);

impl Sponsor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sponsor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Sponsor {
    fn from(login: &str) -> Self {
        Self(login.to_string())
    }
}

impl From<String> for Sponsor {
    fn from(login: String) -> Self {
        Self(login)
    }
}

impl AsRef<str> for Sponsor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
