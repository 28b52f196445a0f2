//! Standard datatypes.
//!
//! Preloads the datatypes most choice slots draw from, so a model only has to
//! register its own records on top.

use crate::CatalogBuilder;

impl CatalogBuilder {
    /// Create a builder preloaded with the standard datatypes and a handful
    /// of common records.
    ///
    /// Profiles: `markdown` and `code` refine `string` (primitive), while
    /// `Age`, `Duration` and `SimpleQuantity` refine `Quantity` (composite).
    pub fn standard() -> Self {
        let mut builder = Self::new();

        // Primitives
        let string = builder.primitive("StringType", "string");
        builder.primitive_profile("MarkdownType", "markdown", string);
        builder.primitive_profile("CodeType", "code", string);
        builder.primitive("BooleanType", "boolean");
        builder.primitive("IntegerType", "integer");
        builder.primitive("DecimalType", "decimal");
        builder.primitive("DateTimeType", "dateTime");

        // Composites
        let quantity = builder.composite("Quantity", "Quantity");
        builder.composite_profile("Age", "Age", quantity);
        builder.composite_profile("Duration", "Duration", quantity);
        builder.composite_profile("SimpleQuantity", "SimpleQuantity", quantity);
        builder.composite("CodeableConcept", "CodeableConcept");
        builder.composite("Period", "Period");

        builder.canonical_reference("Reference", "Reference");

        // Records
        builder.record("Patient");
        builder.record("Practitioner");
        builder.record("Organization");
        builder.record("Observation");

        builder
    }
}
