//! Core joint type definitions for the bridging engine

use std::fmt;

/// Primitive kinds shared by both sides of the bridge.
///
/// `Void` is a member: method returns flow through the same tables as
/// parameters, and the original generator treats it as a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// 8-bit signed integer (`byte`)
    Byte,
    /// 16-bit signed integer (`short`)
    Short,
    /// 32-bit signed integer (`int`)
    Int,
    /// 64-bit signed integer (`long`)
    Long,
    /// 32-bit IEEE 754 (`float`)
    Float,
    /// 64-bit IEEE 754 (`double`)
    Double,
    /// `boolean`
    Boolean,
    /// UTF-16 code unit (`char`)
    Char,
    /// `void`, valid for method returns only
    Void,
}

impl PrimitiveKind {
    /// All primitive kinds in declaration order.
    pub const ALL: [PrimitiveKind; 9] = [
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Boolean,
        PrimitiveKind::Char,
        PrimitiveKind::Void,
    ];

    /// Source-language keyword for this kind.
    pub fn java_keyword(&self) -> &'static str {
        match self {
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Void => "void",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveKind::Byte => write!(f, "s8"),
            PrimitiveKind::Short => write!(f, "s16"),
            PrimitiveKind::Int => write!(f, "s32"),
            PrimitiveKind::Long => write!(f, "s64"),
            PrimitiveKind::Float => write!(f, "float"),
            PrimitiveKind::Double => write!(f, "double"),
            PrimitiveKind::Boolean => write!(f, "boolean"),
            PrimitiveKind::Char => write!(f, "char"),
            PrimitiveKind::Void => write!(f, "void"),
        }
    }
}

/// A canonical joint type: the language-neutral token a value's type
/// resolves to before any native-call artifact is derived.
///
/// The canonical set (`Primitive`, `Root`, `ClassObject`, `StringType`) is
/// closed; `Custom` is the only open-ended variant and carries its fully
/// qualified source name through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JointType {
    /// One of the nine primitive kinds
    Primitive(PrimitiveKind),

    /// The universal base type (`java.lang.Object`)
    Root,

    /// The reflective type-of-a-type marker (`java.lang.Class`)
    ClassObject,

    /// The canonical text type (`java.lang.String`)
    StringType,

    /// Any type outside the canonical set, carried through unchanged
    Custom(String),
}

impl JointType {
    /// Source-language spelling of this type.
    ///
    /// Inverse of the registry's forward lookup over the canonical set;
    /// `Custom` returns its carried name unchanged.
    pub fn java_name(&self) -> &str {
        match self {
            JointType::Primitive(kind) => kind.java_keyword(),
            JointType::Root => "java.lang.Object",
            JointType::ClassObject => "java.lang.Class",
            JointType::StringType => "java.lang.String",
            JointType::Custom(name) => name,
        }
    }

    /// Check if this type belongs to the canonical set.
    pub fn is_canonical(&self) -> bool {
        !matches!(self, JointType::Custom(_))
    }

    /// Check if this type is one of the nine primitive kinds.
    ///
    /// `StringType`, `ClassObject`, `Root`, and `Custom` cross the bridge
    /// as object handles, not primitives.
    pub fn is_primitive(&self) -> bool {
        matches!(self, JointType::Primitive(_))
    }

    /// Get the primitive kind if this is a primitive.
    pub fn as_primitive(&self) -> Option<PrimitiveKind> {
        match self {
            JointType::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl fmt::Display for JointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JointType::Primitive(kind) => write!(f, "joint.{}", kind),
            JointType::Root => write!(f, "joint.rootclass"),
            JointType::ClassObject => write!(f, "joint.class"),
            JointType::StringType => write!(f, "joint.string"),
            JointType::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// A parsed type name: joint type plus array dimension.
///
/// Dimension is orthogonal to the token and never folded into it; a
/// `ParsedType` is what the registry hands the resolver per parameter or
/// return slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedType {
    /// Canonical token for the element type
    pub joint: JointType,
    /// Count of trailing `[]` pairs on the raw input
    pub dimension: usize,
}

impl ParsedType {
    /// Create a parsed type from a joint token and array dimension.
    pub fn new(joint: JointType, dimension: usize) -> Self {
        ParsedType { joint, dimension }
    }

    /// Create a non-array parsed type.
    pub fn scalar(joint: JointType) -> Self {
        ParsedType { joint, dimension: 0 }
    }

    /// Check if this type carries at least one array level.
    pub fn is_array(&self) -> bool {
        self.dimension > 0
    }
}

impl fmt::Display for ParsedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joint.java_name())?;
        for _ in 0..self.dimension {
            write!(f, "[]")?;
        }
        Ok(())
    }
}
