//! Dovetail type bridging engine
//!
//! Maps source-language type names to canonical joint types and derives
//! the native-call artifacts a bridge emitter consumes: the JNI type
//! keyword, the `JNIEnv` call selector, and the binary descriptor.

#![warn(missing_docs)]

pub mod error;
pub mod joint;
pub mod registry;
pub mod signature;

pub use error::TypeNameError;
pub use joint::{JointType, ParsedType, PrimitiveKind};
pub use registry::TypeRegistry;
pub use signature::{Dispatch, SignatureResolver};
