
use std::io::Write;

use crate::data_types::equivalence_class::EquivalenceClass;
use crate::data_types::library_format::LibraryFormat;
use crate::data_types::transcript::Transcript;

/// Read direction that the sequence-specific bias models are split on
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    /// 5' end of the fragment
    Forward,
    /// 3' end of the fragment
    ReverseComplement
}

/// A model that knows how to serialize itself.
/// The byte layout is owned by the model, the writers only provide the (compressed) sink.
pub trait BinaryModel {
    /// Writes the model to `out` in its own binary format
    /// # Errors
    /// * if writing to `out` fails
    fn write_binary(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

/// Everything the output writers need from a completed quantification run.
/// Read-mapping and alignment-based runs (single- or paired-end) all provide this same capability set;
/// they mostly differ in how many library formats they report.
pub trait Experiment {
    /// Transcripts in their stable order; the index is the transcript id used by the equivalence classes
    fn transcripts(&self) -> &[Transcript];
    /// Mutable access, used to record the projected counts
    fn transcripts_mut(&mut self) -> &mut [Transcript];
    /// Equivalence classes in their native iteration order
    fn equivalence_classes(&self) -> &[EquivalenceClass];
    /// Fragment length distribution as a log-PMF, index = fragment length
    fn fragment_length_log_pmf(&self) -> &[f64];
    /// The expected sequence-bias values
    fn expected_seq_bias(&self) -> &[f64];
    /// Observed k-mer counts at the read starts for the given direction
    fn read_bias_counts(&self, direction: Direction) -> &[u32];
    /// Observed sequence-bias model for the given direction
    fn read_bias_model_observed(&self, direction: Direction) -> &dyn BinaryModel;
    /// Expected sequence-bias model for the given direction
    fn read_bias_model_expected(&self, direction: Direction) -> &dyn BinaryModel;
    /// Observed fragment GC model
    fn observed_gc(&self) -> &dyn BinaryModel;
    /// Expected fragment GC model
    fn expected_gc(&self) -> &dyn BinaryModel;
    /// Formats of the input libraries; alignment-based runs have exactly one
    fn library_formats(&self) -> Vec<LibraryFormat>;
    /// Number of fragments that were processed
    fn num_observed_fragments(&self) -> u64;
    /// Number of fragments that mapped
    fn num_mapped_fragments(&self) -> u64;
    /// Fraction of the processed fragments that mapped, in [0, 1]
    fn effective_mapping_rate(&self) -> f64;
    /// Upper bound on the number of mapped fragments, the scale for the projected counts
    fn upper_bound_hits(&self) -> f64;
}
