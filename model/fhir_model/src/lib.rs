//! Sealing stage of the FHIR structure model.
//!
//! Model loading produces a finished [`TypeCatalog`](fhir_catalog::TypeCatalog)
//! and a list of choice slot declarations. Sealing indexes every slot once and
//! publishes the result as an immutable [`SealedModel`]. Either every slot seals
//! or nothing is published.

mod config;
mod seal;
mod tracing_setup;

pub use config::SealConfig;
pub use seal::{ModelSealer, SealError, SealedModel};
pub use tracing_setup::init_tracing;
