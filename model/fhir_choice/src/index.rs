//! Frozen choice slot index.

use fhir_catalog::{ElementDef, TypeRef};
use rustc_hash::FxHashMap;

use crate::ChoiceSlot;

/// Name/type index of a sealed choice slot.
///
/// Produced by [`ChoiceSlotIndexBuilder`](crate::ChoiceSlotIndexBuilder) and
/// never modified afterwards. All lookups are total: a name or type that is
/// not part of the slot yields `None`.
#[derive(Clone, Debug)]
pub struct ChoiceSlotIndex {
    pub(crate) slot: ChoiceSlot,

    /// Wire name -> element definition.
    pub(crate) name_to_element: FxHashMap<String, ElementDef>,

    /// Type -> canonical wire name.
    pub(crate) type_to_name: FxHashMap<TypeRef, String>,

    /// Type -> element definition.
    pub(crate) type_to_element: FxHashMap<TypeRef, ElementDef>,

    /// Record candidates, one entry per occurrence in either pass.
    pub(crate) record_types: Vec<TypeRef>,
}

impl ChoiceSlotIndex {
    /// The slot this index was built for.
    #[inline]
    pub fn slot(&self) -> &ChoiceSlot {
        &self.slot
    }

    /// Base element name of the slot.
    #[inline]
    pub fn base_name(&self) -> &str {
        &self.slot.base_name
    }

    /// Candidate types offered as named alternatives.
    #[inline]
    pub fn choices(&self) -> &[TypeRef] {
        &self.slot.choices
    }

    /// Every wire name the slot can appear under.
    pub fn valid_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.name_to_element.keys().map(String::as_str)
    }

    /// Check if `name` is a wire name of this slot.
    #[inline]
    pub fn contains_name(&self, name: &str) -> bool {
        self.name_to_element.contains_key(name)
    }

    /// Look up the element definition for a wire name.
    pub fn lookup_by_name(&self, name: &str) -> Option<&ElementDef> {
        let element = self.name_to_element.get(name);
        if element.is_none() {
            tracing::trace!(slot = %self.slot.path(), child = name, "no child with this name");
        }
        element
    }

    /// Canonical wire name of a type within this slot.
    #[inline]
    pub fn element_name_for_type(&self, ty: TypeRef) -> Option<&str> {
        self.type_to_name.get(&ty).map(String::as_str)
    }

    /// Element definition a type is carried as within this slot.
    #[inline]
    pub fn element_for_type(&self, ty: TypeRef) -> Option<&ElementDef> {
        self.type_to_element.get(&ty)
    }

    /// Record candidates of the slot, repeated as often as they were declared.
    #[inline]
    pub fn record_types(&self) -> &[TypeRef] {
        &self.record_types
    }

    /// Every type the slot accepts.
    pub fn valid_types(&self) -> impl Iterator<Item = TypeRef> + '_ {
        self.type_to_element.keys().copied()
    }

    /// Check if the slot accepts `ty`.
    #[inline]
    pub fn accepts(&self, ty: TypeRef) -> bool {
        self.type_to_element.contains_key(&ty)
    }
}
