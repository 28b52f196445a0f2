//! Choice slot descriptors.

use fhir_catalog::TypeRef;

use crate::naming::element_name;

/// Suffix of the canonical element name for record and reference candidates.
pub const REFERENCE_SUFFIX: &str = "Reference";

/// Suffix of the alias element name for record candidates.
pub const RESOURCE_SUFFIX: &str = "Resource";

/// Declaration of a choice slot, as produced by model loading.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChoiceSlot {
    /// Name of the type declaring the slot, e.g. `Observation`.
    pub owner: String,

    /// Base element name, e.g. `value` for `value[x]`.
    pub base_name: String,

    /// Candidate types offered as named alternatives, in declaration order.
    pub choices: Vec<TypeRef>,

    /// Candidate types accepted by the slot without a name of their own.
    pub specializations: Vec<TypeRef>,
}

impl ChoiceSlot {
    /// Create a slot with no specialization candidates.
    pub fn new(owner: impl Into<String>, base_name: impl Into<String>, choices: Vec<TypeRef>) -> Self {
        Self {
            owner: owner.into(),
            base_name: base_name.into(),
            choices,
            specializations: Vec::new(),
        }
    }

    /// Set the specialization candidates.
    #[must_use]
    pub fn with_specializations(mut self, specializations: Vec<TypeRef>) -> Self {
        self.specializations = specializations;
        self
    }

    /// Candidate types offered as named alternatives.
    #[inline]
    pub fn choices(&self) -> &[TypeRef] {
        &self.choices
    }

    /// Candidate types accepted without a name of their own.
    #[inline]
    pub fn specializations(&self) -> &[TypeRef] {
        &self.specializations
    }

    /// Path used to identify the slot in diagnostics: `Observation.value[x]`.
    pub fn path(&self) -> String {
        format!("{}.{}[x]", self.owner, self.base_name)
    }

    /// Element name for a datatype or record name: `value` + `string` -> `valueString`.
    pub fn child_name(&self, name: &str) -> String {
        element_name(&self.base_name, name)
    }

    /// Canonical element name for references: `valueReference`.
    pub fn reference_name(&self) -> String {
        self.child_name(REFERENCE_SUFFIX)
    }

    /// Alias element name for records: `valueResource`.
    pub fn resource_name(&self) -> String {
        self.child_name(RESOURCE_SUFFIX)
    }
}
