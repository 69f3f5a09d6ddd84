
use lazy_static::lazy_static;

lazy_static! {
    /// Stores the full version string we plan to use, which is generated in build.rs
    /// # Examples
    /// * `0.4.1-6bb9635-dirty` - while on a dirty branch
    /// * `0.4.1-6bb9635` - with a fresh commit
    pub static ref FULL_VERSION: String = format!("{}-{}", env!("CARGO_PKG_VERSION"), env!("VERGEN_GIT_DESCRIBE"));
}

/// Format of the run start time label, e.g. "Sun Oct 18 09:05:12 2026"
pub const START_TIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// The current local time, formatted as a run start time label
pub fn start_time_string() -> String {
    chrono::Local::now().format(START_TIME_FORMAT).to_string()
}
