//! Choice slot resolution for the FHIR structure model.
//!
//! A choice slot is a field such as `value[x]` that may hold one of several
//! datatypes. On the wire each alternative appears under its own element name
//! (`valueString`, `valueQuantity`, `valueReference`, ...). This crate turns a
//! slot's candidate types into a frozen [`ChoiceSlotIndex`] that answers both
//! directions: wire name to element definition, and type to wire name.
//!
//! # Naming rules
//!
//! - Datatypes: `<base><Capitalized datatype name>`
//! - Profiled composite datatypes use the name of the datatype they refine,
//!   and never displace a name another candidate already claimed
//! - Profiled primitives keep their own name
//! - Records: `<base>Reference`, with `<base><Record>` and `<base>Resource`
//!   as aliases, all resolving to the catalog's reference element
//!
//! Specialization candidates are valid for the slot but never add a name.

mod build;
mod error;
mod index;
mod naming;
mod slot;

pub use build::{build_index, ChoiceSlotIndexBuilder};
pub use error::ConfigurationError;
pub use index::ChoiceSlotIndex;
pub use naming::capitalize;
pub use slot::{ChoiceSlot, REFERENCE_SUFFIX, RESOURCE_SUFFIX};
