
use log::{info, warn};
use serde::Serialize;
use std::path::Path;

use crate::data_types::experiment::Experiment;
use crate::data_types::quant_options::CountProjection;
use crate::data_types::transcript::Transcript;
use crate::writers::error::{WriterError, table_error};

/// Name of the abundance table in the output folder
pub const QUANT_FILENAME: &str = "quant.sf";

/// One row of quant.sf
#[derive(Serialize)]
struct QuantRow<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Length")]
    length: u32,
    #[serde(rename = "EffectiveLength")]
    effective_length: f64,
    #[serde(rename = "TPM")]
    tpm: f64,
    #[serde(rename = "NumReads")]
    num_reads: f64
}

/// Sets `projected_counts` on every transcript.
/// # Arguments
/// * `projection` - whether to scale the mass or use the shared counts
/// * `transcripts` - the transcripts to update
/// * `num_mapped_frags` - the scale for `CountProjection::Scaled`
pub fn project_counts(projection: CountProjection, transcripts: &mut [Transcript], num_mapped_frags: f64) {
    for transcript in transcripts.iter_mut() {
        transcript.projected_counts = match projection {
            CountProjection::Scaled => transcript.mass() * num_mapped_frags,
            CountProjection::Shared => transcript.shared_count()
        };
    }
}

/// Calculates TPM from the projected counts and effective lengths.
/// Degenerate inputs (no mapped fragments, all-zero counts) are not special-cased and yield NaN.
/// # Arguments
/// * `transcripts` - transcripts with `projected_counts` already set
/// * `num_mapped_frags` - normalizer for the projected counts
pub fn compute_tpm(transcripts: &[Transcript], num_mapped_frags: f64) -> Vec<f64> {
    let rates: Vec<f64> = transcripts.iter()
        .map(|t| (t.projected_counts / num_mapped_frags) / t.effective_length)
        .collect();
    let denom: f64 = rates.iter().sum();
    rates.iter()
        .map(|r| r / denom * 1_000_000.0)
        .collect()
}

/// Projects the counts and writes quant.sf into `output_folder`, one row per transcript in experiment order.
/// # Arguments
/// * `output_folder` - the output root; it must exist
/// * `projection` - how to derive `NumReads`
/// * `experiment` - the finished experiment, whose transcripts get their projected counts set
/// # Errors
/// * if the file cannot be created or written
pub fn write_abundances<E: Experiment + ?Sized>(output_folder: &Path, projection: CountProjection, experiment: &mut E) -> Result<(), WriterError> {
    let num_mapped_frags = experiment.upper_bound_hits();
    if num_mapped_frags <= 0.0 {
        warn!("Upper bound on mapped fragments is {num_mapped_frags}, TPM values will not be finite");
    }

    let transcripts = experiment.transcripts_mut();
    project_counts(projection, transcripts, num_mapped_frags);
    let tpms = compute_tpm(transcripts, num_mapped_frags);

    let quant_filename = output_folder.join(QUANT_FILENAME);
    info!("Writing abundances to {quant_filename:?}...");
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .from_path(&quant_filename)
        .map_err(table_error(&quant_filename))?;

    for (transcript, &tpm) in transcripts.iter().zip(tpms.iter()) {
        let row = QuantRow {
            name: &transcript.ref_name,
            length: transcript.ref_length,
            effective_length: transcript.effective_length,
            tpm,
            num_reads: transcript.projected_counts
        };
        csv_writer.serialize(&row)
            .map_err(table_error(&quant_filename))?;
    }

    // if there are no transcripts, serialize never ran; still emit the header
    if transcripts.is_empty() {
        csv_writer.write_record(["Name", "Length", "EffectiveLength", "TPM", "NumReads"])
            .map_err(table_error(&quant_filename))?;
    }

    csv_writer.flush()
        .map_err(|e| WriterError::Write { path: quant_filename.clone(), source: e })?;
    Ok(())
}
