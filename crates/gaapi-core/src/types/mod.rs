//! Concrete genome annotation records.
//!
//! # Structure
//!
//! - `feature` - Feature data, regions and the feature info result wrapper
//! - `genome` - Genome selectors and request parameters

mod feature;
mod genome;

pub use feature::{FeatureData, GetFeatureInfoHackResult, Region};
pub use genome::{GetFeaturesParams, GetLegacyGenomeParams, LegacyGenomeSelector};

/// Interpret an integer flag: nonzero is enabled, zero or unset is disabled.
pub fn flag_enabled(flag: Option<&i64>) -> bool {
    flag.is_some_and(|value| *value != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_enabled() {
        assert!(!flag_enabled(None));
        assert!(!flag_enabled(Some(&0)));
        assert!(flag_enabled(Some(&1)));
        assert!(flag_enabled(Some(&-3)));
    }
}
