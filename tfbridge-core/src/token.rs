//! Token - Namespaced identifiers for bridged resources and data sources
//!
//! A token has the string form `package:module:name`. The same string can
//! name two different kinds of things in the generated SDKs: a nominal type
//! (resources become classes) or a callable module member (data sources
//! become functions). The kind is carried by the Rust type, not the string,
//! so it survives all the way to the generation pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Token naming a callable module member (e.g., a data-source function).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleMember(String);

impl ModuleMember {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Token naming a nominal type (e.g., a resource class).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Type(String);

impl Type {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A type token is manufactured from a member token with the same string form.
impl From<ModuleMember> for Type {
    fn from(member: ModuleMember) -> Self {
        Self(member.0)
    }
}
