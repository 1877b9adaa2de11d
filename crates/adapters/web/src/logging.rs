//! Diagnostic channel: `tracing` events written to the browser console.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Install the global subscriber.
///
/// Timestamps are disabled: `wasm32-unknown-unknown` has no system clock and
/// the console stamps messages itself.
///
/// # Errors
///
/// Returns an error if `filter` is not a valid directive or a subscriber is
/// already installed.
pub fn init(filter: &str) -> Result<(), LoggingError> {
    tracing_subscriber::registry()
        .with(parse_filter(filter)?)
        .with(
            fmt::layer()
                .with_writer(ConsoleMakeWriter)
                .with_ansi(false)
                .without_time(),
        )
        .try_init()?;
    Ok(())
}

fn parse_filter(filter: &str) -> Result<EnvFilter, LoggingError> {
    Ok(EnvFilter::try_new(filter)?)
}

/// Logging setup errors.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("a global subscriber is already installed")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Console method receiving events of a given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleMethod {
    Error,
    Warn,
    Log,
    Debug,
}

impl ConsoleMethod {
    fn for_level(level: Level) -> Self {
        match level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO => Self::Log,
            _ => Self::Debug,
        }
    }

    fn emit(self, line: &str) {
        let value = JsValue::from_str(line);
        match self {
            Self::Error => console::error_1(&value),
            Self::Warn => console::warn_1(&value),
            Self::Log => console::log_1(&value),
            Self::Debug => console::debug_1(&value),
        }
    }
}

/// Hands the fmt layer one [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
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

/// Buffers one formatted event and emits it to the console on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            method: ConsoleMethod::for_level(level),
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        self.method.emit(line.trim_end());
    }
}
