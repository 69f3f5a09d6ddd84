
use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

/// Forwards records to an `env_logger` test logger and keeps every message at info or above
struct CaptureLogger {
    inner: env_logger::Logger,
    messages: Mutex<Vec<String>>
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info || self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if record.level() <= Level::Info {
            self.messages.lock().unwrap().push(record.args().to_string());
        }
        self.inner.log(record);
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

lazy_static! {
    static ref CAPTURE_LOGGER: CaptureLogger = CaptureLogger {
        inner: env_logger::Builder::from_default_env().is_test(true).build(),
        messages: Mutex::new(vec![])
    };
}

/// Installs the capturing logger; later calls are no-ops
pub fn init_capture_logging() {
    if log::set_logger(&*CAPTURE_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info.max(CAPTURE_LOGGER.inner.filter()));
    }
}

/// Every message captured so far, from all threads and tests in this binary
pub fn captured_messages() -> Vec<String> {
    CAPTURE_LOGGER.messages.lock().unwrap().clone()
}
