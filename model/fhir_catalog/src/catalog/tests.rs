use pretty_assertions::assert_eq;

use super::*;

#[test]
fn register_and_lookup() {
    let mut builder = TypeCatalog::builder();
    let string = builder.primitive("StringType", "string");
    let quantity = builder.composite("Quantity", "Quantity");
    let catalog = builder.finish().expect("catalog should finish");

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.by_name("StringType"), Some(string));
    assert_eq!(catalog.by_name("Quantity"), Some(quantity));
    assert_eq!(catalog.by_name("Missing"), None);

    let entry = catalog.get(string).expect("should find by handle");
    assert_eq!(entry.simple_name, "StringType");
    assert_eq!(entry.element.name, "string");
    assert!(entry.is_primitive());
    assert!(!entry.is_record());
    assert_eq!(entry.ty(), string);
}

#[test]
fn handles_follow_registration_order() {
    let mut builder = CatalogBuilder::new();
    let first = builder.primitive("BooleanType", "boolean");
    let second = builder.record("Patient");

    assert_eq!(first.raw(), 0);
    assert_eq!(second.raw(), 1);
}

#[test]
fn profile_is_recorded() {
    let mut builder = CatalogBuilder::new();
    let quantity = builder.composite("Quantity", "Quantity");
    let age = builder.composite_profile("Age", "Age", quantity);
    let catalog = builder.finish().expect("catalog should finish");

    let entry = catalog.get(age).expect("should find Age");
    assert_eq!(entry.profile_of(), Some(quantity));
    assert!(entry.element.is_profile());
    assert!(!catalog.element(quantity).expect("Quantity").is_profile());
}

#[test]
fn record_reference_element_is_canonical_reference() {
    let mut builder = CatalogBuilder::new();
    let reference = builder.canonical_reference("Reference", "Reference");
    builder.record("Patient");
    let catalog = builder.finish().expect("catalog should finish");

    assert_eq!(catalog.reference_type(), Some(reference));
    let element = catalog
        .record_reference_element()
        .expect("reference element");
    assert_eq!(element.ty, reference);
    assert_eq!(element.kind, TypeKind::Reference);
}

#[test]
fn no_reference_type_without_canonical_reference() {
    let mut builder = CatalogBuilder::new();
    builder.reference("Reference", "Reference");
    let catalog = builder.finish().expect("catalog should finish");

    assert_eq!(catalog.reference_type(), None);
    assert_eq!(catalog.record_reference_element(), None);
}

#[test]
fn duplicate_name_fails() {
    let mut builder = CatalogBuilder::new();
    builder.primitive("StringType", "string");
    builder.primitive("StringType", "str");

    assert_eq!(
        builder.finish().map(|catalog| catalog.len()),
        Err(CatalogError::DuplicateTypeName {
            name: "StringType".to_owned()
        })
    );
}

#[test]
fn unknown_profile_base_fails() {
    let mut builder = CatalogBuilder::new();
    let bogus = TypeRef::from_raw(42);
    builder.composite_profile("Age", "Age", bogus);

    assert_eq!(
        builder.finish().map(|catalog| catalog.len()),
        Err(CatalogError::UnknownProfileBase {
            name: "Age".to_owned(),
            base: bogus,
        })
    );
}

#[test]
fn second_canonical_reference_fails() {
    let mut builder = CatalogBuilder::new();
    builder.canonical_reference("Reference", "Reference");
    builder.canonical_reference("ResourceReferenceDt", "ResourceReference");

    assert_eq!(
        builder.finish().map(|catalog| catalog.len()),
        Err(CatalogError::DuplicateCanonicalReference {
            existing: "Reference".to_owned(),
            new: "ResourceReferenceDt".to_owned(),
        })
    );
}

#[test]
fn standard_catalog() {
    let catalog = CatalogBuilder::standard()
        .finish()
        .expect("standard catalog should finish");

    let string = catalog.by_name("StringType").expect("StringType");
    let markdown = catalog.by_name("MarkdownType").expect("MarkdownType");
    let quantity = catalog.by_name("Quantity").expect("Quantity");
    let age = catalog.by_name("Age").expect("Age");
    let patient = catalog.by_name("Patient").expect("Patient");

    assert_eq!(catalog.element(markdown).expect("markdown").profile_of, Some(string));
    assert!(catalog.get(markdown).expect("markdown").is_primitive());
    assert_eq!(catalog.element(age).expect("Age").profile_of, Some(quantity));
    assert!(catalog.get(patient).expect("Patient").is_record());
    assert_eq!(catalog.reference_type(), catalog.by_name("Reference"));
    assert_eq!(catalog.iter().count(), catalog.len());
}
