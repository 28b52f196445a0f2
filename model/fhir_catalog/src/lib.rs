//! Type catalog for the FHIR structure model.
//!
//! The catalog classifies every type the model knows about: whether it is a
//! top-level record (a resource), a primitive datatype, a composite datatype,
//! or a reference-like datatype, and which more general datatype it profiles.
//!
//! # Architecture
//!
//! ```text
//! CatalogBuilder (mutable, registration order = TypeRef order)
//!     └── finish() -> TypeCatalog (immutable, shared read-only)
//! ```
//!
//! Choice slot resolution (`fhir_choice`) only ever reads a finished catalog.

mod builtin;
mod catalog;
mod element;
mod type_ref;

pub use catalog::{CatalogBuilder, CatalogEntry, CatalogError, TypeCatalog};
pub use element::{ElementDef, TypeKind};
pub use type_ref::TypeRef;
