//! Type name parsing errors

use thiserror::Error;

/// Errors raised for malformed raw type names.
///
/// Unknown or unregistered type names are never errors; they resolve to
/// [`JointType::Custom`](crate::JointType::Custom). These variants cover
/// input the scanner should never have produced, where guessing would
/// corrupt a generated descriptor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TypeNameError {
    /// Nothing left of the type name once array suffixes are stripped
    #[error("Empty type name: `{input}` has no base name")]
    EmptyBase {
        /// Raw input as supplied by the scanner
        input: String,
    },

    /// Brackets that do not form trailing `[]` pairs
    #[error("Malformed array brackets in type name `{input}`")]
    MalformedBrackets {
        /// Raw input as supplied by the scanner
        input: String,
    },

    /// Whitespace inside the base name
    #[error("Embedded whitespace in type name `{input}`")]
    EmbeddedWhitespace {
        /// Raw input as supplied by the scanner
        input: String,
    },
}
