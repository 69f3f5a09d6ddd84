
use log::{debug, info, warn};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::data_types::experiment::{Direction, Experiment};
use crate::data_types::quant_options::{MappingType, QuantOptions, SamplingType};
use crate::util::distribution::samples_from_log_pmf;
use crate::util::gz_io::{create_gz_writer, finish_gz_writer};
use crate::util::json_io::save_json;
use crate::util::version::FULL_VERSION;
use crate::writers::dump::{write_model_gz, write_vector_gz};
use crate::writers::error::{WriterError, create_folder, open_error, write_error};

/// Number of samples drawn from the fragment length distribution
pub const NUM_FLD_SAMPLES: usize = 10000;

/// Name of the bootstrap sub-folder in the aux folder
pub const BOOTSTRAP_FOLDER: &str = "bootstrap";
/// Transcript names header for the bootstrap stream, in the bootstrap folder
pub const BOOTSTRAP_NAMES_FILENAME: &str = "names.tsv.gz";
/// Run manifest, in the aux folder
pub const META_INFO_FILENAME: &str = "meta_info.json";

// the other aux folder artifacts
pub const FLD_FILENAME: &str = "fld.gz";
pub const EXPECTED_BIAS_FILENAME: &str = "expected_bias.gz";
pub const OBSERVED_BIAS_FILENAME: &str = "observed_bias.gz";
pub const OBSERVED_BIAS_3P_FILENAME: &str = "observed_bias_3p.gz";
pub const OBS5_SEQ_FILENAME: &str = "obs5_seq.gz";
pub const OBS3_SEQ_FILENAME: &str = "obs3_seq.gz";
pub const EXP5_SEQ_FILENAME: &str = "exp5_seq.gz";
pub const EXP3_SEQ_FILENAME: &str = "exp3_seq.gz";
pub const OBS_GC_FILENAME: &str = "obs_gc.gz";
pub const EXP_GC_FILENAME: &str = "exp_gc.gz";

/// The run manifest; field order is the key order in the JSON output
#[derive(Clone, Debug, Serialize)]
pub struct MetaInfo {
    /// Version of the tool that produced the results
    salmon_version: String,
    /// How uncertainty samples were generated
    samp_type: SamplingType,
    /// Number of input libraries
    num_libraries: usize,
    /// Library format codes, one per library
    library_types: Vec<String>,
    /// Number of fragment length samples in fld.gz
    frag_dist_length: usize,
    seq_bias_correct: bool,
    gc_bias_correct: bool,
    /// Number of bins in the observed (5') bias counts
    num_bias_bins: usize,
    mapping_type: MappingType,
    /// Number of transcripts
    num_targets: usize,
    /// Number of bootstrap or Gibbs samples
    num_bootstraps: u32,
    num_processed: u64,
    num_mapped: u64,
    percent_mapped: f64,
    /// Always "quant"
    call: String,
    start_time: String
}

impl MetaInfo {
    /// Gathers the manifest values from the options and experiment
    /// # Arguments
    /// * `opts` - the run options
    /// * `experiment` - the finished experiment
    /// * `frag_dist_length` - number of fragment length samples that were written
    /// * `start_time` - label for when the run started
    pub fn new<E: Experiment + ?Sized>(opts: &QuantOptions, experiment: &E, frag_dist_length: usize, start_time: &str) -> Self {
        let library_types: Vec<String> = experiment.library_formats()
            .iter()
            .map(|lf| lf.to_string())
            .collect();
        Self {
            salmon_version: FULL_VERSION.clone(),
            samp_type: opts.sampling_type(),
            num_libraries: library_types.len(),
            library_types,
            frag_dist_length,
            seq_bias_correct: opts.bias_correct(),
            gc_bias_correct: opts.gc_bias_correct(),
            num_bias_bins: experiment.read_bias_counts(Direction::Forward).len(),
            mapping_type: opts.mapping_type(),
            num_targets: experiment.transcripts().len(),
            num_bootstraps: opts.num_samples(),
            num_processed: experiment.num_observed_fragments(),
            num_mapped: experiment.num_mapped_fragments(),
            percent_mapped: experiment.effective_mapping_rate() * 100.0,
            call: "quant".to_string(),
            start_time: start_time.to_string()
        }
    }
}

/// Writes everything in the aux folder except the equivalence classes, and the bootstrap names header.
/// If `bootstrap_folder` is provided, it is created and the transcript names are written there first;
/// with no transcripts, this stops right after creating the folders.
/// # Arguments
/// * `aux_folder` - the aux folder, created if missing
/// * `bootstrap_folder` - the bootstrap folder, only when samples were requested
/// * `opts` - the run options
/// * `experiment` - the finished experiment
/// * `start_time` - label for when the run started
/// # Errors
/// * if any folder or file cannot be created or written
/// * if the experiment has no transcripts while samples were requested
/// * if the fragment length distribution cannot be sampled
pub fn write_meta<E: Experiment + ?Sized>(
    aux_folder: &Path,
    bootstrap_folder: Option<&Path>,
    opts: &QuantOptions,
    experiment: &E,
    start_time: &str
) -> Result<(), WriterError> {
    create_folder(aux_folder)?;

    if let Some(bs_folder) = bootstrap_folder {
        create_folder(bs_folder)?;
        if experiment.transcripts().is_empty() {
            return Err(WriterError::EmptyExperiment);
        }
        write_bootstrap_names(&bs_folder.join(BOOTSTRAP_NAMES_FILENAME), experiment)?;
    }

    // fragment length samples
    let fld_filename = aux_folder.join(FLD_FILENAME);
    info!("Writing fragment length samples to {fld_filename:?}...");
    let fld_samples = samples_from_log_pmf(experiment.fragment_length_log_pmf(), NUM_FLD_SAMPLES)?;
    write_vector_gz(&fld_filename, &fld_samples)?;

    // sequence bias vectors
    info!("Writing sequence bias vectors to {aux_folder:?}...");
    write_vector_gz(&aux_folder.join(EXPECTED_BIAS_FILENAME), experiment.expected_seq_bias())?;
    let observed_5p = counts_as_i32(experiment.read_bias_counts(Direction::Forward));
    write_vector_gz(&aux_folder.join(OBSERVED_BIAS_FILENAME), &observed_5p)?;
    let observed_3p = counts_as_i32(experiment.read_bias_counts(Direction::ReverseComplement));
    write_vector_gz(&aux_folder.join(OBSERVED_BIAS_3P_FILENAME), &observed_3p)?;

    if opts.bias_correct() {
        info!("Writing sequence bias models to {aux_folder:?}...");
        write_model_gz(&aux_folder.join(OBS5_SEQ_FILENAME), experiment.read_bias_model_observed(Direction::Forward))?;
        write_model_gz(&aux_folder.join(OBS3_SEQ_FILENAME), experiment.read_bias_model_observed(Direction::ReverseComplement))?;
        write_model_gz(&aux_folder.join(EXP5_SEQ_FILENAME), experiment.read_bias_model_expected(Direction::Forward))?;
        write_model_gz(&aux_folder.join(EXP3_SEQ_FILENAME), experiment.read_bias_model_expected(Direction::ReverseComplement))?;
    }

    if opts.gc_bias_correct() {
        info!("Writing GC bias models to {aux_folder:?}...");
        write_model_gz(&aux_folder.join(OBS_GC_FILENAME), experiment.observed_gc())?;
        write_model_gz(&aux_folder.join(EXP_GC_FILENAME), experiment.expected_gc())?;
    }

    let meta_filename = aux_folder.join(META_INFO_FILENAME);
    info!("Writing run manifest to {meta_filename:?}...");
    let meta_info = MetaInfo::new(opts, experiment, fld_samples.len(), start_time);
    save_json(&meta_info, &meta_filename)
        .map_err(WriterError::Manifest)
}

/// Writes all transcript names on a single tab-separated line
fn write_bootstrap_names<E: Experiment + ?Sized>(filename: &Path, experiment: &E) -> Result<(), WriterError> {
    debug!("Writing bootstrap names to {filename:?}");
    let mut writer = create_gz_writer(filename)
        .map_err(open_error(filename))?;
    let names: Vec<&str> = experiment.transcripts()
        .iter()
        .map(|t| t.ref_name.as_str())
        .collect();
    writeln!(writer, "{}", names.join("\t"))
        .and_then(|()| finish_gz_writer(writer))
        .map_err(write_error(filename))
}

/// The bias readers expect 32-bit signed counts; anything above `i32::MAX` is clamped instead of wrapping negative
fn counts_as_i32(counts: &[u32]) -> Vec<i32> {
    let mut num_clamped: usize = 0;
    let converted: Vec<i32> = counts.iter()
        .map(|&c| i32::try_from(c).unwrap_or_else(|_| {
            num_clamped += 1;
            i32::MAX
        }))
        .collect();
    if num_clamped > 0 {
        warn!("Clamped {num_clamped} bias counts to {}", i32::MAX);
    }
    converted
}
