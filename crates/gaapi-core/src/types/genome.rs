//! Genome request records.

use super::flag_enabled;
use crate::record::FieldKind;

record! {
    /// Selects one genome object, optionally through a reference path.
    pub struct LegacyGenomeSelector {
        /// Object reference of the genome.
        reference @ "ref": String => FieldKind::String,
        /// References leading to the genome when it is not directly accessible.
        ref_path_to_genome @ "ref_path_to_genome": Vec<String> => FieldKind::List(&FieldKind::String),
        /// Positions of the features to return.
        included_feature_position_index @ "included_feature_position_index": Vec<i64>
            => FieldKind::List(&FieldKind::Integer),
    }
}

record! {
    /// Batch request for legacy genome data.
    ///
    /// `ignore_errors`, `no_data` and `no_metadata` are integer flags. Unset,
    /// zero and nonzero are kept distinct on the wire.
    pub struct GetLegacyGenomeParams {
        genomes @ "genomes": Vec<LegacyGenomeSelector>
            => FieldKind::List(&FieldKind::Record("LegacyGenomeSelector")),
        /// Top-level genome fields to include.
        included_fields @ "included_fields": Vec<String> => FieldKind::List(&FieldKind::String),
        /// Per-feature fields to include.
        included_feature_fields @ "included_feature_fields": Vec<String>
            => FieldKind::List(&FieldKind::String),
        ignore_errors @ "ignore_errors": i64 => FieldKind::Integer,
        no_data @ "no_data": i64 => FieldKind::Integer,
        no_metadata @ "no_metadata": i64 => FieldKind::Integer,
    }
}

impl GetLegacyGenomeParams {
    /// Whether inaccessible genomes should be skipped instead of failing the batch.
    pub fn ignores_errors(&self) -> bool {
        flag_enabled(self.ignore_errors())
    }

    /// Whether object data should be left out of the response.
    pub fn skips_data(&self) -> bool {
        flag_enabled(self.no_data())
    }

    /// Whether object metadata should be left out of the response.
    pub fn skips_metadata(&self) -> bool {
        flag_enabled(self.no_metadata())
    }
}

record! {
    /// Request for feature data of one genome.
    pub struct GetFeaturesParams {
        reference @ "ref": String => FieldKind::String,
        /// Features to fetch; all features when unset.
        feature_id_list @ "feature_id_list": Vec<String> => FieldKind::List(&FieldKind::String),
        exclude_sequence @ "exclude_sequence": i64 => FieldKind::Integer,
    }
}

impl GetFeaturesParams {
    /// Whether DNA sequences should be omitted from the returned features.
    pub fn excludes_sequence(&self) -> bool {
        flag_enabled(self.exclude_sequence())
    }
}
