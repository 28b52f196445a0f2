//! Catalog of element types.
//!
//! The `TypeCatalog` stores one [`CatalogEntry`] per registered type, enabling
//! lookup by handle or by simple name.
//!
//! # Design
//!
//! - Entries live in a `Vec` indexed by `TypeRef`, so handle lookup is O(1)
//! - Simple names are indexed in an `FxHashMap` for lookup by name
//! - Registration problems are collected and reported once by `finish()`

use rustc_hash::FxHashMap;

use crate::{ElementDef, TypeKind, TypeRef};

/// A registered type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    /// Simple (declaration) name of the type, e.g. `StringType` or `Patient`.
    pub simple_name: String,

    /// Element definition for the type.
    pub element: ElementDef,
}

impl CatalogEntry {
    /// Handle of this type.
    #[inline]
    pub fn ty(&self) -> TypeRef {
        self.element.ty
    }

    /// Check if this type is a top-level record.
    #[inline]
    pub fn is_record(&self) -> bool {
        self.element.kind.is_record()
    }

    /// Check if this type is a primitive datatype.
    #[inline]
    pub fn is_primitive(&self) -> bool {
        self.element.kind.is_primitive()
    }

    /// Check if this type is a reference-like datatype.
    #[inline]
    pub fn is_reference(&self) -> bool {
        self.element.kind.is_reference()
    }

    /// The more general datatype this type refines, if any.
    #[inline]
    pub fn profile_of(&self) -> Option<TypeRef> {
        self.element.profile_of
    }
}

/// Error produced when a catalog cannot be finished.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two types were registered under the same simple name.
    #[error("type `{name}` registered more than once")]
    DuplicateTypeName { name: String },

    /// A profile names a base type that was never registered.
    #[error("type `{name}` is a profile of unregistered type {base:?}")]
    UnknownProfileBase { name: String, base: TypeRef },

    /// More than one type was declared as the canonical reference type.
    #[error("canonical reference type already set to `{existing}`, cannot set `{new}`")]
    DuplicateCanonicalReference { existing: String, new: String },
}

/// Immutable catalog of element types.
///
/// Built once through [`CatalogBuilder`] and only read afterwards, so it can
/// be shared between threads freely.
#[derive(Clone, Debug, Default)]
pub struct TypeCatalog {
    /// Entries indexed by `TypeRef`.
    entries: Vec<CatalogEntry>,

    /// Simple name -> type.
    by_simple_name: FxHashMap<String, TypeRef>,

    /// Type every record and reference candidate is represented by.
    reference_type: Option<TypeRef>,
}

impl TypeCatalog {
    /// Start building a new empty catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Look up a type by handle.
    #[inline]
    pub fn get(&self, ty: TypeRef) -> Option<&CatalogEntry> {
        self.entries.get(ty.index())
    }

    /// Look up the element definition of a type.
    #[inline]
    pub fn element(&self, ty: TypeRef) -> Option<&ElementDef> {
        self.get(ty).map(|entry| &entry.element)
    }

    /// Look up a type by its simple name.
    #[inline]
    pub fn by_name(&self, simple_name: &str) -> Option<TypeRef> {
        self.by_simple_name.get(simple_name).copied()
    }

    /// The canonical reference type, if one was registered.
    #[inline]
    pub fn reference_type(&self) -> Option<TypeRef> {
        self.reference_type
    }

    /// The element shared by every record candidate of a choice slot.
    ///
    /// All records are carried on the wire through the canonical reference
    /// datatype, so this is that datatype's element definition.
    pub fn record_reference_element(&self) -> Option<&ElementDef> {
        self.element(self.reference_type?)
    }

    /// Iterate over all entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Get the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Mutable builder for a [`TypeCatalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: Vec<CatalogEntry>,
    by_simple_name: FxHashMap<String, TypeRef>,
    reference_type: Option<TypeRef>,

    /// Problems found during registration, reported by `finish()`.
    errors: Vec<CatalogError>,
}

impl CatalogBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type.
    ///
    /// Returns the handle for this type. Handles are dense and follow
    /// registration order.
    pub fn register(
        &mut self,
        simple_name: &str,
        name: &str,
        kind: TypeKind,
        profile_of: Option<TypeRef>,
    ) -> TypeRef {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "catalogs hold a few hundred types"
        )]
        let ty = TypeRef::from_raw(self.entries.len() as u32);

        if let Some(base) = profile_of {
            if base.index() >= self.entries.len() {
                self.errors.push(CatalogError::UnknownProfileBase {
                    name: simple_name.to_owned(),
                    base,
                });
            }
        }

        if self
            .by_simple_name
            .insert(simple_name.to_owned(), ty)
            .is_some()
        {
            self.errors.push(CatalogError::DuplicateTypeName {
                name: simple_name.to_owned(),
            });
        }

        self.entries.push(CatalogEntry {
            simple_name: simple_name.to_owned(),
            element: ElementDef {
                ty,
                name: name.to_owned(),
                kind,
                profile_of,
            },
        });
        ty
    }

    /// Register a primitive datatype.
    pub fn primitive(&mut self, simple_name: &str, name: &str) -> TypeRef {
        self.register(simple_name, name, TypeKind::Primitive, None)
    }

    /// Register a primitive datatype that refines `base`.
    pub fn primitive_profile(&mut self, simple_name: &str, name: &str, base: TypeRef) -> TypeRef {
        self.register(simple_name, name, TypeKind::Primitive, Some(base))
    }

    /// Register a composite datatype.
    pub fn composite(&mut self, simple_name: &str, name: &str) -> TypeRef {
        self.register(simple_name, name, TypeKind::Composite, None)
    }

    /// Register a composite datatype that refines `base`.
    pub fn composite_profile(&mut self, simple_name: &str, name: &str, base: TypeRef) -> TypeRef {
        self.register(simple_name, name, TypeKind::Composite, Some(base))
    }

    /// Register a reference-like datatype.
    pub fn reference(&mut self, simple_name: &str, name: &str) -> TypeRef {
        self.register(simple_name, name, TypeKind::Reference, None)
    }

    /// Register the reference datatype that represents every record and
    /// reference candidate of a choice slot.
    pub fn canonical_reference(&mut self, simple_name: &str, name: &str) -> TypeRef {
        let ty = self.reference(simple_name, name);
        match self.reference_type {
            Some(existing) => {
                let existing = self.entries[existing.index()].simple_name.clone();
                self.errors.push(CatalogError::DuplicateCanonicalReference {
                    existing,
                    new: simple_name.to_owned(),
                });
            }
            None => self.reference_type = Some(ty),
        }
        ty
    }

    /// Register a top-level record. Its wire name is its simple name.
    pub fn record(&mut self, simple_name: &str) -> TypeRef {
        self.register(simple_name, simple_name, TypeKind::Record, None)
    }

    /// Finish building, freezing the catalog.
    ///
    /// Fails with the first problem found during registration.
    pub fn finish(self) -> Result<TypeCatalog, CatalogError> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(error);
        }

        Ok(TypeCatalog {
            entries: self.entries,
            by_simple_name: self.by_simple_name,
            reference_type: self.reference_type,
        })
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Test code uses expect for clarity")]
mod tests;
