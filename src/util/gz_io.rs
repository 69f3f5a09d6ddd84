
use flate2::write::GzEncoder;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// A buffered, gzip-compressed file sink
pub type GzFileWriter = BufWriter<GzEncoder<File>>;

/// Opens a new gzip-compressed file for writing, truncating anything already there.
/// # Arguments
/// * `filename` - the file path to create
/// # Errors
/// * if the file cannot be created
pub fn create_gz_writer(filename: &Path) -> std::io::Result<GzFileWriter> {
    let gzip_writer = GzEncoder::new(
        File::create(filename)?,
        // default compression = 6
        flate2::Compression::default()
    );
    Ok(BufWriter::new(gzip_writer))
}

/// Flushes any buffered data and writes the gzip trailer.
/// # Errors
/// * if flushing or finishing the stream fails
pub fn finish_gz_writer(writer: GzFileWriter) -> std::io::Result<()> {
    let gzip_writer = writer.into_inner()
        .map_err(|e| e.into_error())?;
    let mut file = gzip_writer.finish()?;
    file.flush()
}

/// Plain numeric types that can be dumped as their in-memory (native-endian) bytes
pub trait NativeBytes: Copy {
    /// Appends the native-endian representation of this value
    fn extend_ne_bytes(&self, buffer: &mut Vec<u8>);
}

macro_rules! impl_native_bytes {
    ($($t:ty),*) => {
        $(
            impl NativeBytes for $t {
                fn extend_ne_bytes(&self, buffer: &mut Vec<u8>) {
                    buffer.extend_from_slice(&self.to_ne_bytes());
                }
            }
        )*
    };
}

impl_native_bytes!(i32, u32, i64, u64, f32, f64);

/// Writes the values as a tightly packed, native-endian byte array with no header.
/// The output is exactly `values.len() * size_of::<T>()` bytes.
/// # Arguments
/// * `writer` - the sink to write to
/// * `values` - the contiguous values to dump
/// # Errors
/// * if the underlying write fails
pub fn write_native_bytes<T: NativeBytes, W: Write + ?Sized>(writer: &mut W, values: &[T]) -> std::io::Result<()> {
    let mut buffer: Vec<u8> = Vec::with_capacity(std::mem::size_of_val(values));
    for v in values.iter() {
        v.extend_ne_bytes(&mut buffer);
    }
    writer.write_all(&buffer)
}

/// Decompresses an entire gzip file into memory
#[cfg(test)]
pub fn read_gz_bytes(filename: &Path) -> std::io::Result<Vec<u8>> {
    use std::io::Read;
    let mut decoder = flate2::read::MultiGzDecoder::new(File::open(filename)?);
    let mut buffer = vec![];
    decoder.read_to_end(&mut buffer)?;
    Ok(buffer)
}
