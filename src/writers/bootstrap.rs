
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::util::gz_io::{GzFileWriter, NativeBytes, create_gz_writer, finish_gz_writer, write_native_bytes};
use crate::writers::error::{WriterError, open_error, write_error};

/// Name of the bootstrap stream in the bootstrap folder
pub const BOOTSTRAPS_FILENAME: &str = "bootstraps.gz";

/// Append-only, gzip-compressed stream of resampled abundance vectors.
/// Appends are serialized by a single lock, so the on-disk order is the lock acquisition order.
/// The stream is opened lazily on the first append.
pub struct BootstrapStream {
    /// Path to bootstraps.gz
    filename: PathBuf,
    /// The open stream, if any append happened yet
    writer: Mutex<Option<GzFileWriter>>,
    /// Number of complete vectors written so far
    num_written: AtomicUsize
}

impl BootstrapStream {
    /// Creates the stream handle; nothing is opened until the first append.
    /// # Arguments
    /// * `bootstrap_folder` - the folder that bootstraps.gz goes into, it must exist by the first append
    pub fn new(bootstrap_folder: &Path) -> Self {
        Self {
            filename: bootstrap_folder.join(BOOTSTRAPS_FILENAME),
            writer: Mutex::new(None),
            num_written: AtomicUsize::new(0)
        }
    }

    /// Appends one vector as raw native-endian bytes.
    /// # Arguments
    /// * `abundances` - one sample of per-transcript abundances
    /// # Errors
    /// * if the stream cannot be opened or written
    pub fn append<T: NativeBytes>(&self, abundances: &[T]) -> Result<(), WriterError> {
        // a panic while holding the lock cannot leave a partial record behind, so the stream is still usable
        let mut guard = self.writer.lock()
            .unwrap_or_else(|e| e.into_inner());

        if guard.is_none() {
            debug!("Opening bootstrap stream at {:?}", self.filename);
            let writer = create_gz_writer(&self.filename)
                .map_err(open_error(&self.filename))?;
            *guard = Some(writer);
        }

        if let Some(writer) = guard.as_mut() {
            write_native_bytes(writer, abundances)
                .map_err(write_error(&self.filename))?;
        }

        // logged while still holding the lock so the log order matches the file order
        info!("wrote {} bootstraps", self.num_written.load(Ordering::SeqCst) + 1);
        self.num_written.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    /// Number of vectors appended so far
    pub fn num_written(&self) -> usize {
        self.num_written.load(Ordering::SeqCst)
    }

    /// Path of the stream on disk
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Flushes and closes the stream if it was ever opened. Calling this again is a no-op.
    /// # Errors
    /// * if the final flush or gzip trailer fails
    pub fn finish(&mut self) -> Result<(), WriterError> {
        let opt_writer = self.writer.get_mut()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(writer) = opt_writer {
            debug!("Finalizing bootstrap stream at {:?}", self.filename);
            finish_gz_writer(writer)
                .map_err(write_error(&self.filename))?;
        }
        Ok(())
    }
}
