
use derive_builder::Builder;
use serde::Serialize;

/// Default name of the auxiliary output folder
pub const DEFAULT_AUX_DIR: &str = "aux_info";

/// How uncertainty samples were generated, reported as `samp_type`
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SamplingType {
    Bootstrap,
    Gibbs,
    None
}

/// How fragments were assigned to transcripts, reported as `mapping_type`
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MappingType {
    Alignment,
    Mapping
}

/// Source of the `NumReads` column in quant.sf
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CountProjection {
    /// Prior-free mass scaled by the upper bound on mapped fragments
    Scaled,
    /// The shared fragment count of each transcript
    Shared
}

/// Run options that affect what gets written and how
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(default)]
pub struct QuantOptions {
    /// Name of the auxiliary folder, relative to the output folder
    #[builder(setter(into))]
    aux_dir: String,
    /// Number of bootstrap samples requested
    num_bootstraps: u32,
    /// Number of Gibbs samples requested; only reported when there are no bootstraps
    num_gibbs_samples: u32,
    /// Sequence-specific bias correction was enabled
    bias_correct: bool,
    /// Fragment GC bias correction was enabled
    gc_bias_correct: bool,
    /// Input was pre-computed alignments
    aln_mode: bool,
    /// Quasi-mapping was used
    use_quasi: bool,
    /// Orphaned mates were allowed to map
    allow_orphans: bool,
    /// If set, overrides the projection derived from `use_quasi` and `allow_orphans`
    #[builder(setter(strip_option))]
    count_projection_override: Option<CountProjection>
}

impl Default for QuantOptions {
    fn default() -> Self {
        Self {
            aux_dir: DEFAULT_AUX_DIR.to_string(),
            num_bootstraps: 0,
            num_gibbs_samples: 0,
            bias_correct: false,
            gc_bias_correct: false,
            aln_mode: false,
            use_quasi: false,
            allow_orphans: false,
            count_projection_override: None
        }
    }
}

impl QuantOptions {
    // mostly getters
    pub fn aux_dir(&self) -> &str {
        &self.aux_dir
    }

    pub fn num_bootstraps(&self) -> u32 {
        self.num_bootstraps
    }

    pub fn num_gibbs_samples(&self) -> u32 {
        self.num_gibbs_samples
    }

    pub fn bias_correct(&self) -> bool {
        self.bias_correct
    }

    pub fn gc_bias_correct(&self) -> bool {
        self.gc_bias_correct
    }

    pub fn aln_mode(&self) -> bool {
        self.aln_mode
    }

    /// Number of uncertainty samples; bootstraps win over Gibbs samples
    pub fn num_samples(&self) -> u32 {
        if self.num_bootstraps > 0 {
            self.num_bootstraps
        } else {
            self.num_gibbs_samples
        }
    }

    /// The sampling label, consistent with `num_samples()`
    pub fn sampling_type(&self) -> SamplingType {
        if self.num_bootstraps > 0 {
            SamplingType::Bootstrap
        } else if self.num_gibbs_samples > 0 {
            SamplingType::Gibbs
        } else {
            SamplingType::None
        }
    }

    pub fn mapping_type(&self) -> MappingType {
        if self.aln_mode {
            MappingType::Alignment
        } else {
            MappingType::Mapping
        }
    }

    /// Scaled counts are used when neither quasi-mapping nor orphans are enabled, unless overridden.
    pub fn count_projection(&self) -> CountProjection {
        if let Some(projection) = self.count_projection_override {
            projection
        } else if !self.use_quasi && !self.allow_orphans {
            CountProjection::Scaled
        } else {
            CountProjection::Shared
        }
    }
}
