
/// Sampling from distributions stored in log-space
pub mod distribution;
/// Gzip file sinks and raw vector dumps
pub mod gz_io;
/// Helper functions for read/writing JSON via serde
pub mod json_io;
/// Version string and run start time labels
pub mod version;
/// Log capture for tests
#[cfg(test)]
pub mod test_logger;
