//! Signature resolution for the native call layer
//!
//! Derives the three artifacts the emitter needs per method slot: the
//! JNI type keyword, the `JNIEnv` call selector, and the binary
//! descriptor used for method resolution.

use crate::joint::{JointType, ParsedType, PrimitiveKind};
use crate::registry::TypeRegistry;

/// Dispatch mode of the enclosing method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Invoked on an object instance
    Instance,
    /// Invoked on the class itself
    Static,
}

/// Element kind a call dispatches on.
///
/// Only primitives get dedicated selectors; every other joint type and
/// every array dispatches through the object path.
#[derive(Debug, Clone, Copy)]
enum CallKind {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Boolean,
    Char,
    Void,
    Object,
}

/// Derives native-call artifacts from joint types.
///
/// Borrows the registry for source-name resolution; all derivations are
/// total and never fail, falling back to the generic object forms for
/// anything outside the per-kind tables.
#[derive(Debug, Clone)]
pub struct SignatureResolver<'a> {
    /// Registry supplying the canonical name vocabulary
    registry: &'a TypeRegistry,
}

impl<'a> SignatureResolver<'a> {
    /// Create a resolver over the given registry.
    pub fn new(registry: &'a TypeRegistry) -> Self {
        SignatureResolver { registry }
    }

    /// JNI type keyword for a joint type at the given array dimension.
    ///
    /// Dimension 0 uses the per-kind scalar keyword, dimension 1 the
    /// per-kind array keyword, and dimension 2 or more always collapses
    /// to `jobjectArray`: JNI has no per-element type for nested arrays.
    pub fn native_type(&self, joint: &JointType, dimension: usize) -> &'static str {
        match dimension {
            0 => match joint {
                JointType::Primitive(kind) => native_scalar(*kind),
                JointType::StringType => "jstring",
                JointType::Root | JointType::ClassObject | JointType::Custom(_) => "jobject",
            },
            1 => match joint {
                JointType::Primitive(kind) => native_array(*kind).unwrap_or("jobjectArray"),
                JointType::StringType => "jstringArray",
                JointType::Root | JointType::ClassObject | JointType::Custom(_) => "jobjectArray",
            },
            _ => "jobjectArray",
        }
    }

    /// `JNIEnv` selector for calling a method with this return slot.
    ///
    /// Resolved from the (dispatch, element-kind) pair, so the static
    /// form can never be produced by rewriting the instance form.
    pub fn selector(&self, joint: &JointType, dimension: usize, dispatch: Dispatch) -> &'static str {
        match (dispatch, call_kind(joint, dimension)) {
            (Dispatch::Instance, CallKind::Byte) => "CallByteMethod",
            (Dispatch::Static, CallKind::Byte) => "CallStaticByteMethod",
            (Dispatch::Instance, CallKind::Short) => "CallShortMethod",
            (Dispatch::Static, CallKind::Short) => "CallStaticShortMethod",
            (Dispatch::Instance, CallKind::Int) => "CallIntMethod",
            (Dispatch::Static, CallKind::Int) => "CallStaticIntMethod",
            (Dispatch::Instance, CallKind::Long) => "CallLongMethod",
            (Dispatch::Static, CallKind::Long) => "CallStaticLongMethod",
            (Dispatch::Instance, CallKind::Float) => "CallFloatMethod",
            (Dispatch::Static, CallKind::Float) => "CallStaticFloatMethod",
            (Dispatch::Instance, CallKind::Double) => "CallDoubleMethod",
            (Dispatch::Static, CallKind::Double) => "CallStaticDoubleMethod",
            (Dispatch::Instance, CallKind::Boolean) => "CallBooleanMethod",
            (Dispatch::Static, CallKind::Boolean) => "CallStaticBooleanMethod",
            (Dispatch::Instance, CallKind::Char) => "CallCharMethod",
            (Dispatch::Static, CallKind::Char) => "CallStaticCharMethod",
            (Dispatch::Instance, CallKind::Void) => "CallVoidMethod",
            (Dispatch::Static, CallKind::Void) => "CallStaticVoidMethod",
            (Dispatch::Instance, CallKind::Object) => "CallObjectMethod",
            (Dispatch::Static, CallKind::Object) => "CallStaticObjectMethod",
        }
    }

    /// Binary descriptor for a joint type at the given array dimension.
    ///
    /// Unlike [`native_type`](Self::native_type), the descriptor grammar
    /// encodes arbitrary dimension faithfully with one `[` per level.
    /// `Root` has no descriptor symbol of its own and encodes through
    /// its concrete source name.
    pub fn descriptor(&self, joint: &JointType, dimension: usize) -> String {
        let mut out = String::new();
        for _ in 0..dimension {
            out.push('[');
        }
        match joint {
            JointType::Primitive(kind) => out.push(descriptor_code(*kind)),
            JointType::StringType => out.push_str("Ljava/lang/String;"),
            JointType::ClassObject => out.push_str("Ljava/lang/Class;"),
            JointType::Root | JointType::Custom(_) => {
                out.push('L');
                for ch in self.registry.java_name(joint).chars() {
                    out.push(if ch == '.' { '/' } else { ch });
                }
                out.push(';');
            }
        }
        out
    }

    /// Full method descriptor: `(<param descriptors>)<return descriptor>`.
    pub fn method_descriptor(&self, params: &[ParsedType], ret: &ParsedType) -> String {
        let mut out = String::from("(");
        for param in params {
            out.push_str(&self.descriptor(&param.joint, param.dimension));
        }
        out.push(')');
        out.push_str(&self.descriptor(&ret.joint, ret.dimension));
        out
    }
}

/// Scalar JNI keyword per primitive kind.
fn native_scalar(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Byte => "jbyte",
        PrimitiveKind::Short => "jshort",
        PrimitiveKind::Int => "jint",
        PrimitiveKind::Long => "jlong",
        PrimitiveKind::Float => "jfloat",
        PrimitiveKind::Double => "jdouble",
        PrimitiveKind::Boolean => "jboolean",
        PrimitiveKind::Char => "jchar",
        PrimitiveKind::Void => "void",
    }
}

/// Array JNI keyword per primitive kind. `void[]` does not exist.
fn native_array(kind: PrimitiveKind) -> Option<&'static str> {
    match kind {
        PrimitiveKind::Byte => Some("jbyteArray"),
        PrimitiveKind::Short => Some("jshortArray"),
        PrimitiveKind::Int => Some("jintArray"),
        PrimitiveKind::Long => Some("jlongArray"),
        PrimitiveKind::Float => Some("jfloatArray"),
        PrimitiveKind::Double => Some("jdoubleArray"),
        PrimitiveKind::Boolean => Some("jbooleanArray"),
        PrimitiveKind::Char => Some("jcharArray"),
        PrimitiveKind::Void => None,
    }
}

/// One-character descriptor code per primitive kind.
fn descriptor_code(kind: PrimitiveKind) -> char {
    match kind {
        PrimitiveKind::Byte => 'B',
        PrimitiveKind::Short => 'S',
        PrimitiveKind::Int => 'I',
        PrimitiveKind::Long => 'J',
        PrimitiveKind::Float => 'F',
        PrimitiveKind::Double => 'D',
        PrimitiveKind::Boolean => 'Z',
        PrimitiveKind::Char => 'C',
        PrimitiveKind::Void => 'V',
    }
}

/// Element kind a `(joint, dimension)` slot dispatches on.
fn call_kind(joint: &JointType, dimension: usize) -> CallKind {
    // Arrays always dispatch through the object-call path
    if dimension > 0 {
        return CallKind::Object;
    }
    match joint {
        JointType::Primitive(kind) => match kind {
            PrimitiveKind::Byte => CallKind::Byte,
            PrimitiveKind::Short => CallKind::Short,
            PrimitiveKind::Int => CallKind::Int,
            PrimitiveKind::Long => CallKind::Long,
            PrimitiveKind::Float => CallKind::Float,
            PrimitiveKind::Double => CallKind::Double,
            PrimitiveKind::Boolean => CallKind::Boolean,
            PrimitiveKind::Char => CallKind::Char,
            PrimitiveKind::Void => CallKind::Void,
        },
        JointType::Root
        | JointType::ClassObject
        | JointType::StringType
        | JointType::Custom(_) => CallKind::Object,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(name: &str) -> JointType {
        JointType::Custom(name.to_string())
    }

    #[test]
    fn test_native_scalar_keywords() {
        let registry = TypeRegistry::new();
        let resolver = SignatureResolver::new(&registry);

        assert_eq!(resolver.native_type(&JointType::Primitive(PrimitiveKind::Byte), 0), "jbyte");
        assert_eq!(resolver.native_type(&JointType::Primitive(PrimitiveKind::Int), 0), "jint");
        assert_eq!(resolver.native_type(&JointType::Primitive(PrimitiveKind::Void), 0), "void");
        assert_eq!(resolver.native_type(&JointType::StringType, 0), "jstring");
        assert_eq!(resolver.native_type(&JointType::Root, 0), "jobject");
        assert_eq!(resolver.native_type(&JointType::ClassObject, 0), "jobject");
        assert_eq!(resolver.native_type(&custom("com.example.Foo"), 0), "jobject");
    }

    #[test]
    fn test_native_array_keywords() {
        let registry = TypeRegistry::new();
        let resolver = SignatureResolver::new(&registry);

        assert_eq!(resolver.native_type(&JointType::Primitive(PrimitiveKind::Int), 1), "jintArray");
        assert_eq!(
            resolver.native_type(&JointType::Primitive(PrimitiveKind::Boolean), 1),
            "jbooleanArray"
        );
        assert_eq!(resolver.native_type(&JointType::StringType, 1), "jstringArray");
        assert_eq!(resolver.native_type(&JointType::Root, 1), "jobjectArray");
        assert_eq!(resolver.native_type(&JointType::ClassObject, 1), "jobjectArray");
        assert_eq!(resolver.native_type(&custom("com.example.Foo"), 1), "jobjectArray");

        // No array form exists for void
        assert_eq!(
            resolver.native_type(&JointType::Primitive(PrimitiveKind::Void), 1),
            "jobjectArray"
        );
    }

    #[test]
    fn test_native_dimension_collapse() {
        let registry = TypeRegistry::new();
        let resolver = SignatureResolver::new(&registry);

        // Dimension >= 2 has no per-element native type
        assert_eq!(
            resolver.native_type(&JointType::Primitive(PrimitiveKind::Int), 2),
            "jobjectArray"
        );
        assert_eq!(resolver.native_type(&JointType::StringType, 3), "jobjectArray");
        assert_eq!(resolver.native_type(&custom("com.example.Foo"), 2), "jobjectArray");
    }

    #[test]
    fn test_selector_instance() {
        let registry = TypeRegistry::new();
        let resolver = SignatureResolver::new(&registry);

        assert_eq!(
            resolver.selector(&JointType::Primitive(PrimitiveKind::Int), 0, Dispatch::Instance),
            "CallIntMethod"
        );
        assert_eq!(
            resolver.selector(&JointType::Primitive(PrimitiveKind::Void), 0, Dispatch::Instance),
            "CallVoidMethod"
        );
        assert_eq!(
            resolver.selector(&JointType::StringType, 0, Dispatch::Instance),
            "CallObjectMethod"
        );
        assert_eq!(
            resolver.selector(&JointType::Root, 0, Dispatch::Instance),
            "CallObjectMethod"
        );
        assert_eq!(
            resolver.selector(&custom("com.example.Foo"), 0, Dispatch::Instance),
            "CallObjectMethod"
        );
    }

    #[test]
    fn test_selector_static() {
        let registry = TypeRegistry::new();
        let resolver = SignatureResolver::new(&registry);

        assert_eq!(
            resolver.selector(&JointType::Primitive(PrimitiveKind::Int), 0, Dispatch::Static),
            "CallStaticIntMethod"
        );
        assert_eq!(
            resolver.selector(&JointType::Primitive(PrimitiveKind::Double), 0, Dispatch::Static),
            "CallStaticDoubleMethod"
        );
        assert_eq!(
            resolver.selector(&JointType::Primitive(PrimitiveKind::Void), 0, Dispatch::Static),
            "CallStaticVoidMethod"
        );
        assert_eq!(
            resolver.selector(&custom("com.example.Foo"), 0, Dispatch::Static),
            "CallStaticObjectMethod"
        );
    }

    #[test]
    fn test_selector_suffix_stable_across_dispatch() {
        let registry = TypeRegistry::new();
        let resolver = SignatureResolver::new(&registry);

        // Static form differs from the instance form only by its prefix
        for joint in registry.canonical_types() {
            let instance = resolver.selector(&joint, 0, Dispatch::Instance);
            let statics = resolver.selector(&joint, 0, Dispatch::Static);
            let suffix = instance.strip_prefix("Call").unwrap();
            assert_eq!(statics, format!("CallStatic{}", suffix));
        }
    }

    #[test]
    fn test_selector_arrays_dispatch_as_object() {
        let registry = TypeRegistry::new();
        let resolver = SignatureResolver::new(&registry);

        assert_eq!(
            resolver.selector(&JointType::Primitive(PrimitiveKind::Int), 1, Dispatch::Instance),
            "CallObjectMethod"
        );
        assert_eq!(
            resolver.selector(&JointType::Primitive(PrimitiveKind::Int), 2, Dispatch::Static),
            "CallStaticObjectMethod"
        );
        assert_eq!(
            resolver.selector(&JointType::StringType, 1, Dispatch::Instance),
            "CallObjectMethod"
        );
    }

    #[test]
    fn test_descriptor_primitives() {
        let registry = TypeRegistry::new();
        let resolver = SignatureResolver::new(&registry);

        let expected = [
            (PrimitiveKind::Byte, "B"),
            (PrimitiveKind::Short, "S"),
            (PrimitiveKind::Int, "I"),
            (PrimitiveKind::Long, "J"),
            (PrimitiveKind::Float, "F"),
            (PrimitiveKind::Double, "D"),
            (PrimitiveKind::Boolean, "Z"),
            (PrimitiveKind::Char, "C"),
            (PrimitiveKind::Void, "V"),
        ];
        for (kind, code) in expected {
            assert_eq!(resolver.descriptor(&JointType::Primitive(kind), 0), code);
        }
    }

    #[test]
    fn test_descriptor_arrays() {
        let registry = TypeRegistry::new();
        let resolver = SignatureResolver::new(&registry);

        let int = JointType::Primitive(PrimitiveKind::Int);
        assert_eq!(resolver.descriptor(&int, 1), "[I");
        assert_eq!(resolver.descriptor(&int, 2), "[[I");
        assert_eq!(resolver.descriptor(&JointType::StringType, 1), "[Ljava/lang/String;");
    }

    #[test]
    fn test_descriptor_objects() {
        let registry = TypeRegistry::new();
        let resolver = SignatureResolver::new(&registry);

        assert_eq!(resolver.descriptor(&JointType::StringType, 0), "Ljava/lang/String;");
        assert_eq!(resolver.descriptor(&JointType::ClassObject, 0), "Ljava/lang/Class;");
        // Root encodes through its concrete source name
        assert_eq!(resolver.descriptor(&JointType::Root, 0), "Ljava/lang/Object;");
        assert_eq!(
            resolver.descriptor(&custom("com.example.Foo"), 0),
            "Lcom/example/Foo;"
        );
        assert_eq!(
            resolver.descriptor(&custom("com.example.Foo"), 1),
            "[Lcom/example/Foo;"
        );
    }

    #[test]
    fn test_method_descriptor() {
        let registry = TypeRegistry::new();
        let resolver = SignatureResolver::new(&registry);

        let params = [
            ParsedType::scalar(JointType::StringType),
            ParsedType::new(JointType::Primitive(PrimitiveKind::Int), 1),
        ];
        let ret = ParsedType::scalar(JointType::Primitive(PrimitiveKind::Void));
        assert_eq!(
            resolver.method_descriptor(&params, &ret),
            "(Ljava/lang/String;[I)V"
        );

        let no_params: [ParsedType; 0] = [];
        let ret = ParsedType::scalar(JointType::Primitive(PrimitiveKind::Int));
        assert_eq!(resolver.method_descriptor(&no_params, &ret), "()I");
    }
}
