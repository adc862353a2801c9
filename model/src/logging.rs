//! Browser console logging.
//!
//! Installs a `tracing-subscriber` fmt subscriber whose writer forwards each
//! formatted event to `console.log`/`warn`/`error` according to its level.
//! Timestamps and ANSI colours are left off; the devtools console adds its own.

use std::io;
use std::str::FromStr;

use tracing::{debug, Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Install the global subscriber. Safe to call more than once; later calls
/// keep the first subscriber.
pub fn init(level: &str) {
    let max_level = LevelFilter::from_str(level).unwrap_or(LevelFilter::INFO);
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(ConsoleMakeWriter)
        .with_target(true)
        .without_time()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        debug!("logging already initialized");
    }
}

/// Route panics through tracing so they land in the console with the rest.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!(target: "seoblog::panic", "{info}");
    }));
}

pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on drop.
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> ConsoleWriter {
        ConsoleWriter {
            level,
            buf: Vec::with_capacity(128),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            emit(self.level, line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        Level::DEBUG | Level::TRACE => console::debug_1(&value),
        _ => console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_writer_buffers_until_drop() {
        let mut writer = ConsoleWriter::new(Level::WARN);
        writer.write_all(b"half ").unwrap();
        writer.write_all(b"line\n").unwrap();
        assert_eq!(writer.buf, b"half line\n");
    }

    #[test]
    fn test_make_writer_defaults_to_info() {
        let writer = ConsoleMakeWriter.make_writer();
        assert_eq!(writer.level, Level::INFO);
        assert!(writer.buf.is_empty());
    }
}
