//! Model sealing.
//!
//! Every choice slot is indexed against the finished catalog. Slots do not
//! depend on each other, so they can be indexed on the rayon pool; results are
//! gathered in declaration order either way. The sealed model is only built
//! once every slot succeeded.

use std::collections::hash_map::Entry;

use fhir_catalog::TypeCatalog;
use fhir_choice::{build_index, ChoiceSlot, ChoiceSlotIndex, ConfigurationError};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::SealConfig;

/// Error produced when a model cannot be sealed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SealError {
    /// Two slots were declared with the same owner and base name.
    #[error("choice slot {path} declared more than once")]
    DuplicateSlot { path: String },

    /// A slot could not be indexed.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Several slots could not be indexed.
    #[error("{} choice slots failed to seal; first: {}", .0.len(), first_message(.0))]
    Multiple(Vec<ConfigurationError>),
}

fn first_message(errors: &[ConfigurationError]) -> String {
    errors.first().map(ToString::to_string).unwrap_or_default()
}

impl SealError {
    /// Every slot error carried by this error.
    pub fn configuration_errors(&self) -> &[ConfigurationError] {
        match self {
            Self::DuplicateSlot { .. } => &[],
            Self::Configuration(error) => std::slice::from_ref(error),
            Self::Multiple(errors) => errors,
        }
    }
}

/// Collects the slots of a model and seals them.
#[derive(Debug)]
pub struct ModelSealer {
    catalog: TypeCatalog,
    config: SealConfig,
    slots: Vec<ChoiceSlot>,
}

impl ModelSealer {
    /// Create a sealer over a finished catalog.
    pub fn new(catalog: TypeCatalog, config: SealConfig) -> Self {
        Self {
            catalog,
            config,
            slots: Vec::new(),
        }
    }

    /// The catalog slots are resolved against.
    #[inline]
    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    /// Add a slot declaration.
    pub fn slot(&mut self, slot: ChoiceSlot) -> &mut Self {
        self.slots.push(slot);
        self
    }

    /// Add several slot declarations.
    pub fn slots(&mut self, slots: impl IntoIterator<Item = ChoiceSlot>) -> &mut Self {
        self.slots.extend(slots);
        self
    }

    /// Index every slot and publish the sealed model.
    pub fn seal(self) -> Result<SealedModel, SealError> {
        let _span = tracing::debug_span!(
            "seal",
            slots = self.slots.len(),
            parallel = self.config.parallel
        )
        .entered();

        let mut by_path = FxHashMap::default();
        for (position, slot) in self.slots.iter().enumerate() {
            match by_path.entry(slot.path()) {
                Entry::Occupied(existing) => {
                    return Err(SealError::DuplicateSlot {
                        path: existing.key().clone(),
                    });
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(position);
                }
            }
        }

        let results = self.index_all();

        let mut indexes = Vec::with_capacity(results.len());
        let mut errors = Vec::new();
        for result in results {
            match result {
                Ok(index) => indexes.push(index),
                Err(error) => errors.push(error),
            }
        }

        if !errors.is_empty() {
            tracing::debug!(failed = errors.len(), "sealing failed");
            return Err(if errors.len() > 1 && self.config.collect_all_errors {
                SealError::Multiple(errors)
            } else {
                SealError::Configuration(errors.swap_remove(0))
            });
        }

        tracing::debug!(slots = indexes.len(), "model sealed");
        Ok(SealedModel {
            catalog: self.catalog,
            indexes,
            by_path,
        })
    }

    fn index_all(&self) -> Vec<Result<ChoiceSlotIndex, ConfigurationError>> {
        let catalog = &self.catalog;
        if self.config.parallel {
            self.slots
                .par_iter()
                .map(|slot| build_index(catalog, slot))
                .collect()
        } else {
            self.slots
                .iter()
                .map(|slot| build_index(catalog, slot))
                .collect()
        }
    }
}

/// A sealed model: the catalog plus the frozen index of every choice slot.
///
/// Nothing in a sealed model changes after construction, so it can be shared
/// across threads and read without locks.
#[derive(Clone, Debug)]
pub struct SealedModel {
    catalog: TypeCatalog,

    /// Slot indexes in declaration order.
    indexes: Vec<ChoiceSlotIndex>,

    /// Slot path -> position in `indexes`.
    by_path: FxHashMap<String, usize>,
}

impl SealedModel {
    /// The catalog the model was sealed against.
    #[inline]
    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    /// Look up a slot by path, e.g. `Observation.value[x]`.
    pub fn slot(&self, path: &str) -> Option<&ChoiceSlotIndex> {
        self.by_path
            .get(path)
            .and_then(|&position| self.indexes.get(position))
    }

    /// Look up a slot by owner and base name.
    pub fn slot_for(&self, owner: &str, base_name: &str) -> Option<&ChoiceSlotIndex> {
        self.slot(&format!("{owner}.{base_name}[x]"))
    }

    /// Iterate over all slot indexes in declaration order.
    pub fn slots(&self) -> impl Iterator<Item = &ChoiceSlotIndex> {
        self.indexes.iter()
    }

    /// Get the number of sealed slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    /// Check if the model has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Test code uses expect for clarity")]
mod tests;
