/*!
# Writers module
Contains the logic for writing every output of a quantification run.
*/
/// Generates quant.sf and the TPM / projected count math behind it
pub mod abundances;
/// Concurrent, append-only stream of bootstrap / Gibbs samples
pub mod bootstrap;
/// Gzip dumps of raw vectors and self-serializing models
pub mod dump;
/// Generates the equivalence class file
pub mod equiv_counts;
/// Error types shared by all writers
pub mod error;
/// Generates the aux folder metadata and the run manifest
pub mod meta;
/// Owns the output folder and coordinates all of the above
pub mod quant_writer;
