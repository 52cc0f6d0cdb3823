//! Canonical type registry
//!
//! Holds the fixed bidirectional mapping between source-language type
//! names and joint types, and parses raw type-name strings (base name
//! plus trailing `[]` suffixes) into [`ParsedType`] values.

use crate::error::TypeNameError;
use crate::joint::{JointType, ParsedType, PrimitiveKind};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

static GLOBAL: Lazy<TypeRegistry> = Lazy::new(TypeRegistry::new);

/// Registry of the canonical joint types.
///
/// Tables are built once at construction and never mutated afterwards;
/// a registry can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    /// Forward table: canonical source spelling to joint token
    names: FxHashMap<&'static str, JointType>,
}

impl TypeRegistry {
    /// Build a registry with the canonical table.
    pub fn new() -> Self {
        let mut names = FxHashMap::default();
        for kind in PrimitiveKind::ALL {
            names.insert(kind.java_keyword(), JointType::Primitive(kind));
        }
        names.insert("java.lang.String", JointType::StringType);
        names.insert("java.lang.Object", JointType::Root);
        names.insert("java.lang.Class", JointType::ClassObject);
        TypeRegistry { names }
    }

    /// Shared process-wide registry, built on first use.
    pub fn global() -> &'static TypeRegistry {
        &GLOBAL
    }

    /// Parse a raw type name into a joint type and array dimension.
    ///
    /// Trailing `[]` pairs are stripped and counted; the remaining base
    /// name resolves through the canonical table, or to
    /// [`JointType::Custom`] when absent. An unknown base name is never
    /// an error; malformed input is (see [`TypeNameError`]).
    ///
    /// Whitespace around the whole name and between the base name and
    /// its `[]` suffixes is tolerated.
    pub fn parse_type(&self, raw: &str) -> Result<ParsedType, TypeNameError> {
        let mut base = raw.trim();
        let mut dimension = 0;
        while let Some(stripped) = base.strip_suffix("[]") {
            base = stripped.trim_end();
            dimension += 1;
        }

        if base.is_empty() {
            return Err(TypeNameError::EmptyBase {
                input: raw.to_string(),
            });
        }
        if base.contains(['[', ']']) {
            return Err(TypeNameError::MalformedBrackets {
                input: raw.to_string(),
            });
        }
        if base.contains(char::is_whitespace) {
            return Err(TypeNameError::EmbeddedWhitespace {
                input: raw.to_string(),
            });
        }

        let joint = match self.names.get(base) {
            Some(joint) => joint.clone(),
            None => JointType::Custom(base.to_string()),
        };
        Ok(ParsedType::new(joint, dimension))
    }

    /// Source-language spelling of a joint type.
    ///
    /// Reverse of [`parse_type`](Self::parse_type) over the canonical
    /// set; `Custom` returns its carried name unchanged.
    pub fn java_name<'a>(&self, joint: &'a JointType) -> &'a str {
        joint.java_name()
    }

    /// Check if a source spelling maps to a canonical joint type.
    pub fn is_canonical_name(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// All canonical joint types, in stable registry order.
    pub fn canonical_types(&self) -> [JointType; 12] {
        [
            JointType::Primitive(PrimitiveKind::Byte),
            JointType::Primitive(PrimitiveKind::Short),
            JointType::Primitive(PrimitiveKind::Int),
            JointType::Primitive(PrimitiveKind::Long),
            JointType::Primitive(PrimitiveKind::Float),
            JointType::Primitive(PrimitiveKind::Double),
            JointType::Primitive(PrimitiveKind::Boolean),
            JointType::Primitive(PrimitiveKind::Char),
            JointType::Primitive(PrimitiveKind::Void),
            JointType::StringType,
            JointType::Root,
            JointType::ClassObject,
        ]
    }

    /// The nine primitive joint types, in stable registry order.
    pub fn primitive_types(&self) -> [JointType; 9] {
        PrimitiveKind::ALL.map(JointType::Primitive)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        TypeRegistry::new()
    }
}
