//! Slot configuration errors.

/// A choice slot declaration that cannot be indexed.
///
/// These are model defects found while sealing, never conditions of the data
/// being processed. Model initialization must stop when one is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// The same type resolves to two different element names within a slot.
    #[error("already have element name {existing} for datatype {type_name} in {slot}, cannot add {new}")]
    ConflictingElementName {
        slot: String,
        type_name: String,
        existing: String,
        new: String,
    },

    /// A candidate, or the datatype it profiles, is not in the catalog.
    #[error("type {ty} used by {slot} is not in the catalog")]
    UnknownType { slot: String, ty: String },

    /// A record or reference candidate needs the catalog's reference type,
    /// but the catalog does not declare one.
    #[error("{slot} accepts references but the catalog has no canonical reference type")]
    MissingReferenceType { slot: String },
}
