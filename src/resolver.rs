//! Reference resolution for wrapped type descriptors
//!
//! A type reference is a chain of `NON_NULL`/`LIST` wrappers around a named
//! leaf. Both functions here are pure: no state, no mutation, safe to call
//! concurrently from parallel edge-derivation passes.

use crate::introspection::{TypeKind, TypeRef};

/// Whether `descriptor` ultimately refers to the named type `candidate`.
///
/// Recurses through wrapper layers until a concrete named leaf (object,
/// input object, or interface) is reached or the chain is exhausted.
/// Scalar and enum leaves never match: they back no node. An absent
/// descriptor returns false.
pub fn matches(candidate: &str, descriptor: Option<&TypeRef>) -> bool {
    let Some(ty) = descriptor else {
        return false;
    };
    if ty.kind.is_concrete() {
        return ty.name.as_deref() == Some(candidate);
    }
    matches(candidate, ty.of_type.as_deref())
}

/// Human-readable signature of a type reference, e.g. `"[String!]"`.
///
/// `LIST` renders as brackets, `NON_NULL` as a trailing `!` on whatever it
/// wraps. An absent or name-less descriptor renders as an empty string.
pub fn signature(descriptor: Option<&TypeRef>) -> String {
    let Some(ty) = descriptor else {
        return String::new();
    };
    match ty.kind {
        TypeKind::List => format!("[{}]", signature(ty.of_type.as_deref())),
        TypeKind::NonNull => format!("{}!", signature(ty.of_type.as_deref())),
        _ => ty.name.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(kind: TypeKind, name: &str) -> TypeRef {
        TypeRef::named(kind, name)
    }

    #[test]
    fn test_matches_named_leaf() {
        let foo = named(TypeKind::Object, "Foo");
        assert!(matches("Foo", Some(&foo)));
        assert!(!matches("Bar", Some(&foo)));
    }

    #[test]
    fn test_matches_through_wrappers() {
        let ty = TypeRef::wrap(
            TypeKind::NonNull,
            TypeRef::wrap(TypeKind::List, named(TypeKind::Object, "Foo")),
        );
        assert!(matches("Foo", Some(&ty)));
        assert!(!matches("Bar", Some(&ty)));
    }

    #[test]
    fn test_matches_absent_descriptor() {
        assert!(!matches("Foo", None));
    }

    #[test]
    fn test_matches_interface_and_input_leaves() {
        assert!(matches("Node", Some(&named(TypeKind::Interface, "Node"))));
        assert!(matches("UserInput", Some(&named(TypeKind::InputObject, "UserInput"))));
    }

    #[test]
    fn test_scalar_leaf_never_matches() {
        // Scalars back no node, so they resolve to nothing even by name.
        assert!(!matches("String", Some(&named(TypeKind::Scalar, "String"))));
        assert!(!matches("Role", Some(&named(TypeKind::Enum, "Role"))));
    }

    #[test]
    fn test_signature_leaf() {
        assert_eq!(signature(Some(&named(TypeKind::Object, "User"))), "User");
    }

    #[test]
    fn test_signature_wrapped() {
        let ty = TypeRef::wrap(
            TypeKind::List,
            TypeRef::wrap(TypeKind::NonNull, named(TypeKind::Scalar, "String")),
        );
        assert_eq!(signature(Some(&ty)), "[String!]");

        let ty = TypeRef::wrap(
            TypeKind::NonNull,
            TypeRef::wrap(TypeKind::List, named(TypeKind::Object, "User")),
        );
        assert_eq!(signature(Some(&ty)), "[User]!");
    }

    #[test]
    fn test_signature_absent() {
        assert_eq!(signature(None), "");
    }
}
