
use log::{debug, error};
use std::path::{Path, PathBuf};

use crate::data_types::experiment::Experiment;
use crate::data_types::quant_options::QuantOptions;
use crate::util::gz_io::NativeBytes;
use crate::writers::abundances::write_abundances;
use crate::writers::bootstrap::BootstrapStream;
use crate::writers::equiv_counts::write_equiv_counts;
use crate::writers::error::{WriterError, create_folder};
use crate::writers::meta::{BOOTSTRAP_FOLDER, write_meta};

/// Writes all results of a quantification run into a single output folder:
/// * `quant.sf` - the abundance table
/// * `<aux_dir>/eq_classes.txt` - transcripts and equivalence classes
/// * `<aux_dir>/...` - fragment length samples, bias vectors and models, and `meta_info.json`
/// * `<aux_dir>/bootstrap/` - transcript names and the bootstrap stream, only if samples were requested
///
/// The metadata must be written before any bootstraps, since that is what sets up the bootstrap folder.
/// Bootstraps can then be appended from many threads through a shared reference.
/// Any open bootstrap stream is finalized by `close()`, or when the writer is dropped.
pub struct QuantWriter {
    /// Root of all outputs
    output_folder: PathBuf,
    /// Set up by `write_meta` when samples were requested
    bootstrap_stream: Option<BootstrapStream>
}

impl QuantWriter {
    /// Binds a writer to an output folder; nothing is created until something is written.
    /// # Arguments
    /// * `output_folder` - the root output folder
    pub fn new(output_folder: &Path) -> Self {
        Self {
            output_folder: output_folder.to_owned(),
            bootstrap_stream: None
        }
    }

    pub fn output_folder(&self) -> &Path {
        &self.output_folder
    }

    /// The aux folder for the given options
    pub fn aux_folder(&self, opts: &QuantOptions) -> PathBuf {
        self.output_folder.join(opts.aux_dir())
    }

    /// The bootstrap folder, if `write_meta` set one up
    pub fn bootstrap_folder(&self) -> Option<&Path> {
        self.bootstrap_stream.as_ref()
            .and_then(|bs| bs.filename().parent())
    }

    /// Writes the transcript names and equivalence classes into the aux folder.
    /// # Errors
    /// * if the aux folder cannot be created or the file cannot be written
    pub fn write_equiv_counts<E: Experiment + ?Sized>(&self, opts: &QuantOptions, experiment: &E) -> Result<(), WriterError> {
        write_equiv_counts(&self.aux_folder(opts), experiment)
            .inspect_err(|e| error!("Error while writing equivalence classes: {e}"))
    }

    /// Writes the aux folder metadata: bootstrap names (if sampling), fragment length samples, bias vectors and models,
    /// and the run manifest. This also decides where bootstraps will be written.
    /// # Arguments
    /// * `opts` - the run options
    /// * `experiment` - the finished experiment
    /// * `start_time` - label for when the run started, see `util::version::start_time_string()`
    /// # Errors
    /// * if anything fails to write, or if samples were requested for an experiment without transcripts
    pub fn write_meta<E: Experiment + ?Sized>(&mut self, opts: &QuantOptions, experiment: &E, start_time: &str) -> Result<(), WriterError> {
        let aux_folder = self.aux_folder(opts);
        let bootstrap_folder = if opts.num_samples() > 0 {
            let bs_folder = aux_folder.join(BOOTSTRAP_FOLDER);
            self.set_bootstrap_folder(&bs_folder)?;
            Some(bs_folder)
        } else {
            None
        };

        write_meta(&aux_folder, bootstrap_folder.as_deref(), opts, experiment, start_time)
            .inspect_err(|e| error!("Error while writing metadata: {e}"))
    }

    /// Projects the counts onto the transcripts and writes quant.sf into the output folder.
    /// # Errors
    /// * if the output folder cannot be created or the file cannot be written
    pub fn write_abundances<E: Experiment + ?Sized>(&self, opts: &QuantOptions, experiment: &mut E) -> Result<(), WriterError> {
        create_folder(&self.output_folder)
            .and_then(|()| write_abundances(&self.output_folder, opts.count_projection(), experiment))
            .inspect_err(|e| error!("Error while writing abundances: {e}"))
    }

    /// Appends one bootstrap or Gibbs sample to the bootstrap stream; safe to call from many threads.
    /// # Arguments
    /// * `abundances` - one value per transcript, in experiment order
    /// # Errors
    /// * if `write_meta` has not set up a bootstrap folder
    /// * if the stream cannot be opened or written
    pub fn write_bootstrap<T: NativeBytes>(&self, abundances: &[T]) -> Result<(), WriterError> {
        let result = match self.bootstrap_stream.as_ref() {
            Some(bs) => bs.append(abundances),
            None => Err(WriterError::BootstrapFolderUnset)
        };
        result.inspect_err(|e| error!("Error while writing bootstrap: {e}"))
    }

    /// Number of samples appended so far
    pub fn num_bootstraps_written(&self) -> usize {
        self.bootstrap_stream.as_ref()
            .map(|bs| bs.num_written())
            .unwrap_or(0)
    }

    /// Finalizes any open bootstrap stream, reporting errors instead of only logging them.
    /// # Errors
    /// * if the final flush of the bootstrap stream fails
    pub fn close(mut self) -> Result<(), WriterError> {
        self.finish_bootstraps()
    }

    /// Points the bootstrap stream at a new folder, closing out any previous stream
    fn set_bootstrap_folder(&mut self, bootstrap_folder: &Path) -> Result<(), WriterError> {
        if self.bootstrap_folder() == Some(bootstrap_folder) {
            return Ok(());
        }
        self.finish_bootstraps()?;
        debug!("Bootstraps will be written to {bootstrap_folder:?}");
        self.bootstrap_stream = Some(BootstrapStream::new(bootstrap_folder));
        Ok(())
    }

    fn finish_bootstraps(&mut self) -> Result<(), WriterError> {
        match self.bootstrap_stream.as_mut() {
            Some(bs) => bs.finish(),
            None => Ok(())
        }
    }
}

impl Drop for QuantWriter {
    fn drop(&mut self) {
        if let Err(e) = self.finish_bootstraps() {
            error!("Error while finalizing bootstrap stream: {e}");
        }
    }
}
