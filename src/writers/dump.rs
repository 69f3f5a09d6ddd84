
use log::debug;
use std::path::Path;

use crate::data_types::experiment::BinaryModel;
use crate::util::gz_io::{NativeBytes, create_gz_writer, finish_gz_writer, write_native_bytes};
use crate::writers::error::{WriterError, open_error, write_error};

/// Creates a gzip file whose decompressed content is exactly the raw bytes of `values`.
/// # Arguments
/// * `filename` - the file to create
/// * `values` - the values to dump, in native byte order
/// # Errors
/// * if the file cannot be opened or written
pub fn write_vector_gz<T: NativeBytes>(filename: &Path, values: &[T]) -> Result<(), WriterError> {
    debug!("Writing {} values to {filename:?}", values.len());
    let mut writer = create_gz_writer(filename)
        .map_err(open_error(filename))?;
    write_native_bytes(&mut writer, values)
        .and_then(|()| finish_gz_writer(writer))
        .map_err(write_error(filename))
}

/// Creates a gzip file containing whatever the model writes for itself.
/// # Arguments
/// * `filename` - the file to create
/// * `model` - the model to serialize
/// # Errors
/// * if the file cannot be opened or written
pub fn write_model_gz(filename: &Path, model: &dyn BinaryModel) -> Result<(), WriterError> {
    debug!("Writing model to {filename:?}");
    let mut writer = create_gz_writer(filename)
        .map_err(open_error(filename))?;
    model.write_binary(&mut writer)
        .and_then(|()| finish_gz_writer(writer))
        .map_err(write_error(filename))
}
