use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value that no longer maps to a variant.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown {kind} value '{value}' stored in database")]
    UnknownEnumValue {
        /// Name of the enum, e.g. `role`
        kind: &'static str,
        /// The stored value
        value: String,
    },

    /// Hashing or parsing a password hash failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}
