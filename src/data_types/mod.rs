
/// Equivalence classes of transcripts with their fragment counts
pub mod equivalence_class;
/// The capability set a finished quantification run exposes to the writers
pub mod experiment;
/// Library type descriptions, e.g. "IU"
pub mod library_format;
/// Run options consumed by the writers
pub mod quant_options;
/// Reference transcripts and their abundance state
pub mod transcript;

/// In-memory experiment for writer tests
#[cfg(test)]
pub mod test_experiment;
