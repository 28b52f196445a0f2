//! Sealing configuration.

/// Environment variable enabling parallel sealing.
const PARALLEL_VAR: &str = "FHIR_SEAL_PARALLEL";

/// Environment variable enabling collection of every slot error.
const COLLECT_ERRORS_VAR: &str = "FHIR_SEAL_COLLECT_ERRORS";

/// Options for [`ModelSealer`](crate::ModelSealer).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SealConfig {
    /// Seal slots on the rayon thread pool.
    pub parallel: bool,

    /// Report every failing slot instead of stopping at the first.
    pub collect_all_errors: bool,
}

impl Default for SealConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            collect_all_errors: false,
        }
    }
}

impl SealConfig {
    /// Read the configuration from the environment, falling back to defaults
    /// for unset variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            parallel: lookup(PARALLEL_VAR).map_or(defaults.parallel, |v| parse_flag(&v)),
            collect_all_errors: lookup(COLLECT_ERRORS_VAR)
                .map_or(defaults.collect_all_errors, |v| parse_flag(&v)),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
