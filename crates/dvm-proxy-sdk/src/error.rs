//! Error types for the dvm-proxy bridge

use crate::types::ClassId;

/// Result type for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors surfaced while decoding arguments or resolving members.
///
/// None of these are retried inside the bridge. The invocation layer is
/// expected to turn `NoSuchCallable` / `NoSuchField` into its own
/// "method not found" failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// Signature contains a character outside the type-code alphabet
    #[error("Malformed signature {signature:?}: {code:?} at {position}")]
    MalformedSignature {
        /// The signature (or descriptor) being decoded
        signature: String,
        /// Character index of the offending code
        position: usize,
        /// The offending character
        code: char,
    },

    /// Cursor convention cannot represent the requested kind
    #[error("Unsupported argument kind '{kind}' on {cursor} cursor")]
    UnsupportedArgumentKind {
        /// Type code that was requested
        kind: char,
        /// Cursor convention name ("slot" or "byte")
        cursor: &'static str,
    },

    /// Cursor ran out of data before the signature was fully decoded
    #[error("Cursor exhausted at {position}: need {needed}, have {available}")]
    CursorExhausted {
        /// Logical position of the failed read
        position: usize,
        /// Units required by the read (slots or bytes)
        needed: usize,
        /// Units remaining past `position`
        available: usize,
    },

    /// No constructor or method matched
    #[error("No such callable: {class}.{name}{signature}")]
    NoSuchCallable {
        /// Target class name
        class: String,
        /// Requested member name
        name: String,
        /// Decoded argument types, e.g. `[int, null, java.lang.String]`
        signature: String,
    },

    /// No field matched in either visibility tier
    #[error("No such field: {class}.{name}")]
    NoSuchField {
        /// Target class name
        class: String,
        /// Requested field name
        name: String,
    },

    /// Constructor lookup requested with an ordinary method name
    #[error("Not a constructor: {name}")]
    NotAConstructor {
        /// The name that was supplied
        name: String,
    },

    /// Class identity unknown to the host model
    #[error("Unknown class: {0}")]
    UnknownClass(ClassId),

    /// Class name declared again with a different superclass
    #[error("Class {name} already declared with superclass {existing:?}")]
    ClassRedeclared {
        /// Class name
        name: String,
        /// Superclass recorded by the first declaration
        existing: Option<ClassId>,
        /// Superclass requested by the conflicting declaration
        requested: Option<ClassId>,
    },

    /// Every non-null object reference is taken
    #[error("Object references exhausted")]
    ReferencesExhausted,

    /// Failure reported by the invocation layer
    #[error("Invocation failed: {0}")]
    Invocation(String),
}

impl BridgeError {
    /// Whether this error means "member not found" to the invocation layer
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BridgeError::NoSuchCallable { .. } | BridgeError::NoSuchField { .. }
        )
    }
}
