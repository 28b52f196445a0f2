//! Element definitions.

use crate::TypeRef;

/// Classification of a catalog type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    /// Top-level structured record (a resource such as `Patient`).
    Record,

    /// Primitive datatype (`string`, `boolean`, ...).
    Primitive,

    /// Structured datatype embedded in records (`Quantity`, `Period`, ...).
    Composite,

    /// Datatype that points at another record (`Reference`).
    Reference,
}

/// Definition of a single element type.
///
/// This is what encoders and validators receive when they look a wire name up
/// in a choice slot index.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementDef {
    /// The type this definition describes.
    pub ty: TypeRef,

    /// Datatype name as it appears on the wire (`string`, `Quantity`).
    pub name: String,

    /// Classification of the type.
    pub kind: TypeKind,

    /// The more general datatype this one refines, if any.
    pub profile_of: Option<TypeRef>,
}

impl ElementDef {
    /// Check if this datatype is a profile of another datatype.
    #[inline]
    pub fn is_profile(&self) -> bool {
        self.profile_of.is_some()
    }
}

impl TypeKind {
    /// Check if this is a record.
    #[inline]
    pub fn is_record(self) -> bool {
        matches!(self, Self::Record)
    }

    /// Check if this is a primitive datatype.
    #[inline]
    pub fn is_primitive(self) -> bool {
        matches!(self, Self::Primitive)
    }

    /// Check if this is a reference-like datatype.
    #[inline]
    pub fn is_reference(self) -> bool {
        matches!(self, Self::Reference)
    }
}
