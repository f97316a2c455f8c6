//! Feature records: per-feature annotation data and its genomic locations.

use std::collections::BTreeMap;

use crate::record::FieldKind;

record! {
    /// A contiguous stretch of a contig occupied by a feature.
    pub struct Region {
        /// Identifier of the contig holding the region.
        contig_id @ "contig_id": String => FieldKind::String,
        /// Strand, `+` or `-`.
        strand @ "strand": String => FieldKind::String,
        /// Start coordinate on the contig.
        start @ "start": i64 => FieldKind::Integer,
        /// Number of bases covered.
        length @ "length": i64 => FieldKind::Integer,
    }
}

record! {
    /// Annotation data for a single feature of a genome.
    pub struct FeatureData {
        feature_id @ "feature_id": String => FieldKind::String,
        feature_type @ "feature_type": String => FieldKind::String,
        feature_function @ "feature_function": String => FieldKind::String,
        /// Alias source mapped to the aliases it provides.
        feature_aliases @ "feature_aliases": BTreeMap<String, Vec<String>>
            => FieldKind::Map(&FieldKind::List(&FieldKind::String)),
        feature_dna_sequence_length @ "feature_dna_sequence_length": i64 => FieldKind::Integer,
        feature_dna_sequence @ "feature_dna_sequence": String => FieldKind::String,
        feature_md5 @ "feature_md5": String => FieldKind::String,
        feature_locations @ "feature_locations": Vec<Region>
            => FieldKind::List(&FieldKind::Record("Region")),
        feature_publications @ "feature_publications": Vec<String>
            => FieldKind::List(&FieldKind::String),
        feature_quality_warnings @ "feature_quality_warnings": Vec<String>
            => FieldKind::List(&FieldKind::String),
        feature_quality_score @ "feature_quality_score": Vec<String>
            => FieldKind::List(&FieldKind::String),
        feature_notes @ "feature_notes": String => FieldKind::String,
        feature_inference @ "feature_inference": String => FieldKind::String,
    }
}

record! {
    /// Result wrapper holding a list of feature records.
    pub struct GetFeatureInfoHackResult {
        features @ "features": Vec<FeatureData> => FieldKind::List(&FieldKind::Record("FeatureData")),
    }
}
