
use std::io::Write;

use crate::data_types::equivalence_class::EquivalenceClass;
use crate::data_types::experiment::{BinaryModel, Direction, Experiment};
use crate::data_types::library_format::{LibraryFormat, ReadOrientation, ReadStrandedness};
use crate::data_types::transcript::Transcript;

/// Model that serializes as a fixed byte payload
#[derive(Clone, Debug, Default)]
pub struct FixedModel {
    pub payload: Vec<u8>
}

impl FixedModel {
    pub fn new(label: &str) -> Self {
        let mut payload = label.as_bytes().to_vec();
        payload.extend_from_slice(&(label.len() as u32).to_ne_bytes());
        Self { payload }
    }
}

impl BinaryModel for FixedModel {
    fn write_binary(&self, out: &mut dyn Write) -> std::io::Result<()> {
        out.write_all(&self.payload)
    }
}

/// In-memory experiment used by the writer tests
#[derive(Clone, Debug)]
pub struct TestExperiment {
    pub transcripts: Vec<Transcript>,
    pub eq_classes: Vec<EquivalenceClass>,
    pub fld_log_pmf: Vec<f64>,
    pub expected_bias: Vec<f64>,
    pub bias_counts_5p: Vec<u32>,
    pub bias_counts_3p: Vec<u32>,
    pub obs5: FixedModel,
    pub obs3: FixedModel,
    pub exp5: FixedModel,
    pub exp3: FixedModel,
    pub obs_gc: FixedModel,
    pub exp_gc: FixedModel,
    pub libraries: Vec<LibraryFormat>,
    pub num_processed: u64,
    pub num_mapped: u64,
    pub upper_bound_hits: f64
}

impl TestExperiment {
    /// Three transcripts A, B, C with lengths 100/200/300, effective lengths 80/180/280, and
    /// 1000 mapped fragments split 100/300/600 both by mass and by shared count.
    pub fn three_transcripts() -> Self {
        let transcripts = vec![
            Transcript::new("A".to_string(), 100, 80.0, 0.1, 100.0),
            Transcript::new("B".to_string(), 200, 180.0, 0.3, 300.0),
            Transcript::new("C".to_string(), 300, 280.0, 0.6, 600.0),
        ];
        let eq_classes = vec![
            EquivalenceClass::new(vec![0], 60),
            EquivalenceClass::new(vec![0, 1], 140),
            EquivalenceClass::new(vec![2, 1, 0], 800),
        ];
        // simple triangular FLD over lengths 0..10
        let weights = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let total: f64 = weights.iter().sum();
        let fld_log_pmf = weights.iter().map(|w| (w / total).ln()).collect();
        Self {
            transcripts,
            eq_classes,
            fld_log_pmf,
            expected_bias: vec![0.25, 0.5, 1.0, 2.0, 4.0],
            bias_counts_5p: vec![1, 2, 3, 4, 5, 6, 7, 8],
            bias_counts_3p: vec![8, 7, 6, 5, 4, 3, 2, 1],
            obs5: FixedModel::new("obs5"),
            obs3: FixedModel::new("obs3"),
            exp5: FixedModel::new("exp5"),
            exp3: FixedModel::new("exp3"),
            obs_gc: FixedModel::new("obs_gc"),
            exp_gc: FixedModel::new("exp_gc"),
            libraries: vec![LibraryFormat::paired_end(ReadOrientation::TowardEachOther, ReadStrandedness::Unstranded)],
            num_processed: 1250,
            num_mapped: 1000,
            upper_bound_hits: 1000.0
        }
    }

    /// Same as above but without any transcripts or classes
    pub fn empty() -> Self {
        Self {
            transcripts: vec![],
            eq_classes: vec![],
            ..Self::three_transcripts()
        }
    }
}

impl Experiment for TestExperiment {
    fn transcripts(&self) -> &[Transcript] {
        &self.transcripts
    }

    fn transcripts_mut(&mut self) -> &mut [Transcript] {
        &mut self.transcripts
    }

    fn equivalence_classes(&self) -> &[EquivalenceClass] {
        &self.eq_classes
    }

    fn fragment_length_log_pmf(&self) -> &[f64] {
        &self.fld_log_pmf
    }

    fn expected_seq_bias(&self) -> &[f64] {
        &self.expected_bias
    }

    fn read_bias_counts(&self, direction: Direction) -> &[u32] {
        match direction {
            Direction::Forward => &self.bias_counts_5p,
            Direction::ReverseComplement => &self.bias_counts_3p
        }
    }

    fn read_bias_model_observed(&self, direction: Direction) -> &dyn BinaryModel {
        match direction {
            Direction::Forward => &self.obs5,
            Direction::ReverseComplement => &self.obs3
        }
    }

    fn read_bias_model_expected(&self, direction: Direction) -> &dyn BinaryModel {
        match direction {
            Direction::Forward => &self.exp5,
            Direction::ReverseComplement => &self.exp3
        }
    }

    fn observed_gc(&self) -> &dyn BinaryModel {
        &self.obs_gc
    }

    fn expected_gc(&self) -> &dyn BinaryModel {
        &self.exp_gc
    }

    fn library_formats(&self) -> Vec<LibraryFormat> {
        self.libraries.clone()
    }

    fn num_observed_fragments(&self) -> u64 {
        self.num_processed
    }

    fn num_mapped_fragments(&self) -> u64 {
        self.num_mapped
    }

    fn effective_mapping_rate(&self) -> f64 {
        self.num_mapped as f64 / self.num_processed as f64
    }

    fn upper_bound_hits(&self) -> f64 {
        self.upper_bound_hits
    }
}
