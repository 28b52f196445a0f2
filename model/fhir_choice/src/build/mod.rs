//! Choice slot index construction.
//!
//! The builder runs the same per-candidate procedure twice: first over the
//! specialization candidates, which only populate the type tables, then over
//! the regular candidates, which also populate the name table. Both passes
//! share one type -> name table, so a type that resolves to two different
//! names anywhere in the slot is rejected.
//!
//! All tables live in the builder until the last candidate resolved; a failed
//! build drops them, so no partially built index is ever observable.

use std::collections::hash_map::Entry;

use fhir_catalog::{CatalogEntry, ElementDef, TypeCatalog, TypeRef};
use rustc_hash::FxHashMap;

use crate::{ChoiceSlot, ChoiceSlotIndex, ConfigurationError};

/// Build the index for `slot` against `catalog`.
#[tracing::instrument(level = "debug", skip_all, fields(slot = %slot.path()))]
pub fn build_index(
    catalog: &TypeCatalog,
    slot: &ChoiceSlot,
) -> Result<ChoiceSlotIndex, ConfigurationError> {
    ChoiceSlotIndexBuilder::new(catalog, slot).build()
}

/// Which candidate list is being resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Pass {
    Specialization,
    Regular,
}

impl Pass {
    /// Only regular candidates become named alternatives.
    #[inline]
    fn offers_names(self) -> bool {
        matches!(self, Self::Regular)
    }
}

/// How a single candidate resolved.
struct Resolution {
    element_name: String,
    element: ElementDef,

    /// Set for profiled composite datatypes exposed under their base name.
    /// Such a name never displaces an existing entry.
    non_preferred: bool,
}

/// Accumulates the tables of a [`ChoiceSlotIndex`].
pub struct ChoiceSlotIndexBuilder<'a> {
    catalog: &'a TypeCatalog,
    slot: &'a ChoiceSlot,

    name_to_element: FxHashMap<String, ElementDef>,
    type_to_name: FxHashMap<TypeRef, String>,
    type_to_element: FxHashMap<TypeRef, ElementDef>,
    record_types: Vec<TypeRef>,

    /// Looked up from the catalog once per slot, on the first record.
    record_reference: Option<&'a ElementDef>,
}

impl<'a> ChoiceSlotIndexBuilder<'a> {
    /// Create a builder for `slot`.
    pub fn new(catalog: &'a TypeCatalog, slot: &'a ChoiceSlot) -> Self {
        Self {
            catalog,
            slot,
            name_to_element: FxHashMap::default(),
            type_to_name: FxHashMap::default(),
            type_to_element: FxHashMap::default(),
            record_types: Vec::new(),
            record_reference: None,
        }
    }

    /// Resolve every candidate and freeze the result.
    pub fn build(mut self) -> Result<ChoiceSlotIndex, ConfigurationError> {
        let slot = self.slot;
        self.resolve_all(&slot.specializations, Pass::Specialization)?;
        self.resolve_all(&slot.choices, Pass::Regular)?;

        tracing::debug!(
            names = self.name_to_element.len(),
            types = self.type_to_element.len(),
            records = self.record_types.len(),
            "choice slot indexed"
        );

        Ok(ChoiceSlotIndex {
            slot: slot.clone(),
            name_to_element: self.name_to_element,
            type_to_name: self.type_to_name,
            type_to_element: self.type_to_element,
            record_types: self.record_types,
        })
    }

    fn resolve_all(&mut self, candidates: &[TypeRef], pass: Pass) -> Result<(), ConfigurationError> {
        for &next in candidates {
            self.resolve(next, pass)?;
        }
        Ok(())
    }

    fn resolve(&mut self, next: TypeRef, pass: Pass) -> Result<(), ConfigurationError> {
        let catalog = self.catalog;
        let entry = catalog.get(next).ok_or_else(|| self.unknown_type(next))?;
        let is_record = entry.is_record();

        let Resolution {
            element_name,
            element,
            non_preferred,
        } = if is_record {
            self.resolve_record(entry)?
        } else {
            self.resolve_value(entry)?
        };

        tracing::trace!(
            ty = %entry.simple_name,
            element = %element_name,
            ?pass,
            non_preferred,
            "resolved candidate"
        );

        if pass.offers_names() {
            if is_record {
                self.name_to_element
                    .insert(self.slot.reference_name(), element.clone());
                self.name_to_element
                    .insert(self.slot.resource_name(), element.clone());
            }

            if !non_preferred || !self.name_to_element.contains_key(&element_name) {
                self.name_to_element
                    .insert(element_name.clone(), element.clone());
            }
        }

        if is_record {
            self.record_types.push(next);
        }

        // Records and reference datatypes are carried as the canonical reference.
        if pass.offers_names() && (is_record || entry.is_reference()) {
            let reference = catalog
                .reference_type()
                .ok_or_else(|| self.missing_reference())?;
            let reference_name = self.slot.reference_name();
            self.name_to_element
                .insert(reference_name.clone(), element.clone());

            if reference != next {
                self.record_type(next, element_name, element.clone())?;
            }
            return self.record_type(reference, reference_name, element);
        }

        self.record_type(next, element_name, element)
    }

    fn resolve_record(&mut self, entry: &CatalogEntry) -> Result<Resolution, ConfigurationError> {
        let element = self.record_reference()?.clone();
        Ok(Resolution {
            element_name: self.slot.child_name(&entry.simple_name),
            element,
            non_preferred: false,
        })
    }

    fn resolve_value(&self, entry: &CatalogEntry) -> Result<Resolution, ConfigurationError> {
        let element = entry.element.clone();

        // Profiled primitives keep their own name.
        match entry.profile_of() {
            Some(base) if !entry.is_primitive() => {
                let base = self
                    .catalog
                    .element(base)
                    .ok_or_else(|| self.unknown_type(base))?;
                Ok(Resolution {
                    element_name: self.slot.child_name(&base.name),
                    element,
                    non_preferred: true,
                })
            }
            _ => Ok(Resolution {
                element_name: self.slot.child_name(&element.name),
                element,
                non_preferred: false,
            }),
        }
    }

    fn record_reference(&mut self) -> Result<&'a ElementDef, ConfigurationError> {
        if let Some(element) = self.record_reference {
            return Ok(element);
        }
        let catalog = self.catalog;
        let element = catalog
            .record_reference_element()
            .ok_or_else(|| self.missing_reference())?;
        self.record_reference = Some(element);
        Ok(element)
    }

    /// Record the element and canonical name of `ty`.
    ///
    /// The first name recorded for a type wins; a later, different name is a
    /// configuration error.
    fn record_type(
        &mut self,
        ty: TypeRef,
        name: String,
        element: ElementDef,
    ) -> Result<(), ConfigurationError> {
        self.type_to_element.entry(ty).or_insert(element);

        match self.type_to_name.entry(ty) {
            Entry::Occupied(existing) if *existing.get() != name => {
                tracing::debug!(existing = %existing.get(), new = %name, "conflicting element name");
                Err(ConfigurationError::ConflictingElementName {
                    slot: self.slot.path(),
                    type_name: type_name(self.catalog, ty),
                    existing: existing.get().clone(),
                    new: name,
                })
            }
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(vacant) => {
                vacant.insert(name);
                Ok(())
            }
        }
    }

    fn unknown_type(&self, ty: TypeRef) -> ConfigurationError {
        ConfigurationError::UnknownType {
            slot: self.slot.path(),
            ty: format!("{ty:?}"),
        }
    }

    fn missing_reference(&self) -> ConfigurationError {
        ConfigurationError::MissingReferenceType {
            slot: self.slot.path(),
        }
    }
}

fn type_name(catalog: &TypeCatalog, ty: TypeRef) -> String {
    catalog
        .get(ty)
        .map_or_else(|| format!("{ty:?}"), |entry| entry.simple_name.clone())
}
