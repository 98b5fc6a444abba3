//! Token Scope Value Object
//!
//! A token is only valid for the scope it was issued in.

use derive_more::Display;

/// Purpose a token was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TokenScope {
    #[display("authentication")]
    Authentication,
}

impl TokenScope {
    /// Stored representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenScope::Authentication => "authentication",
        }
    }
}
