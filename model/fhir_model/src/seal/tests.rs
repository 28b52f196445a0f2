use fhir_catalog::{CatalogBuilder, TypeRef};
use pretty_assertions::assert_eq;

use super::*;

fn standard() -> TypeCatalog {
    CatalogBuilder::standard()
        .finish()
        .expect("standard catalog should finish")
}

fn slot(catalog: &TypeCatalog, owner: &str, base: &str, choices: &[&str]) -> ChoiceSlot {
    let choices = choices
        .iter()
        .map(|name| catalog.by_name(name).expect("type should be in the catalog"))
        .collect();
    ChoiceSlot::new(owner, base, choices)
}

/// A catalog whose reference datatype name clashes with the reference suffix.
fn legacy_catalog() -> (TypeCatalog, TypeRef, TypeRef) {
    let mut builder = CatalogBuilder::new();
    let reference = builder.canonical_reference("ResourceReferenceDt", "ResourceReference");
    let patient = builder.record("Patient");
    let catalog = builder.finish().expect("catalog should finish");
    (catalog, reference, patient)
}

fn conflicting_slot(owner: &str, reference: TypeRef, patient: TypeRef) -> ChoiceSlot {
    ChoiceSlot::new(owner, "value", vec![patient]).with_specializations(vec![reference])
}

fn sequential() -> SealConfig {
    SealConfig {
        parallel: false,
        collect_all_errors: false,
    }
}

#[test]
fn seals_every_slot() {
    let catalog = standard();
    let observation = slot(&catalog, "Observation", "value", &["StringType", "Quantity", "Patient"]);
    let effective = slot(&catalog, "Observation", "effective", &["DateTimeType", "Period"]);

    let catalog_len = catalog.len();
    let mut sealer = ModelSealer::new(catalog, SealConfig::default());
    sealer.slot(observation).slot(effective);
    assert_eq!(sealer.catalog().len(), catalog_len);
    let model = sealer.seal().expect("model should seal");
    assert_eq!(model.catalog().len(), catalog_len);

    assert_eq!(model.len(), 2);
    assert!(!model.is_empty());

    let value = model.slot("Observation.value[x]").expect("value slot");
    assert!(value.contains_name("valueResource"));

    let effective = model
        .slot_for("Observation", "effective")
        .expect("effective slot");
    assert!(effective.contains_name("effectiveDateTime"));
    assert!(effective.contains_name("effectivePeriod"));

    let bases: Vec<&str> = model.slots().map(ChoiceSlotIndex::base_name).collect();
    assert_eq!(bases, vec!["value", "effective"]);
    assert_eq!(model.slot("Observation.missing[x]").map(|_| ()), None);
}

#[test]
fn parallel_and_sequential_agree() {
    let catalog = standard();
    let slots: Vec<ChoiceSlot> = ["value", "effective", "onset", "deceased"]
        .into_iter()
        .map(|base| slot(&catalog, "Observation", base, &["StringType", "Age", "Patient"]))
        .collect();

    let mut parallel = ModelSealer::new(catalog.clone(), SealConfig::default());
    parallel.slots(slots.clone());
    let mut serial = ModelSealer::new(catalog, sequential());
    serial.slots(slots);

    let parallel = parallel.seal().expect("parallel seal");
    let serial = serial.seal().expect("sequential seal");

    for (left, right) in parallel.slots().zip(serial.slots()) {
        let mut left_names: Vec<&str> = left.valid_names().collect();
        let mut right_names: Vec<&str> = right.valid_names().collect();
        left_names.sort_unstable();
        right_names.sort_unstable();
        assert_eq!(left_names, right_names);
        assert_eq!(left.record_types(), right.record_types());
    }
}

#[test]
fn duplicate_slot_fails() {
    let catalog = standard();
    let first = slot(&catalog, "Observation", "value", &["StringType"]);
    let second = slot(&catalog, "Observation", "value", &["BooleanType"]);

    let mut sealer = ModelSealer::new(catalog, sequential());
    sealer.slot(first).slot(second);

    assert_eq!(
        sealer.seal().map(|model| model.len()),
        Err(SealError::DuplicateSlot {
            path: "Observation.value[x]".to_owned()
        })
    );
}

#[test]
fn first_error_aborts_sealing() {
    let (catalog, reference, patient) = legacy_catalog();
    let mut sealer = ModelSealer::new(catalog, sequential());
    sealer
        .slot(conflicting_slot("Observation", reference, patient))
        .slot(conflicting_slot("Condition", reference, patient));

    let error = sealer.seal().expect_err("slots conflict");
    let errors = error.configuration_errors();
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        ConfigurationError::ConflictingElementName { slot, .. } if slot == "Observation.value[x]"
    ));
}

#[test]
fn collects_every_error_when_configured() {
    let (catalog, reference, patient) = legacy_catalog();
    let config = SealConfig {
        parallel: true,
        collect_all_errors: true,
    };
    let mut sealer = ModelSealer::new(catalog, config);
    sealer
        .slot(conflicting_slot("Observation", reference, patient))
        .slot(ChoiceSlot::new("Observation", "subject", vec![patient]))
        .slot(conflicting_slot("Condition", reference, patient));

    let error = sealer.seal().expect_err("slots conflict");
    let slots: Vec<&str> = error
        .configuration_errors()
        .iter()
        .map(|error| match error {
            ConfigurationError::ConflictingElementName { slot, .. } => slot.as_str(),
            _ => "",
        })
        .collect();
    assert_eq!(slots, vec!["Observation.value[x]", "Condition.value[x]"]);
    assert!(error.to_string().starts_with("2 choice slots failed to seal"));
}

#[test]
fn sealed_model_is_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SealedModel>();

    let catalog = standard();
    let value = slot(&catalog, "Observation", "value", &["StringType", "Quantity", "Patient"]);
    let mut sealer = ModelSealer::new(catalog, SealConfig::default());
    sealer.slot(value);
    let model = sealer.seal().expect("model should seal");

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let index = model.slot("Observation.value[x]").expect("value slot");
                let reference = index.lookup_by_name("valueReference").expect("reference");
                assert_eq!(index.lookup_by_name("valuePatient"), Some(reference));
                assert_eq!(model.catalog().reference_type(), Some(reference.ty));
            });
        }
    });
}
