//! Structured logging setup for both the browser app and the asset server.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

/// First usable directive among `RUST_LOG`, `LOG_LEVEL` and the default.
pub fn resolve_filter(rust_log: Option<&str>, log_level: Option<&str>) -> String {
    [rust_log, log_level]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .find(|value| EnvFilter::try_new(value).is_ok())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    let rust_log = std::env::var("RUST_LOG").ok();
    let log_level = std::env::var("LOG_LEVEL").ok();
    let directive = resolve_filter(rust_log.as_deref(), log_level.as_deref());

    let _ = tracing_subscriber::fmt()
        .json()
        .with_current_span(false)
        .with_env_filter(EnvFilter::new(directive))
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .json()
        .without_time()
        .with_ansi(false)
        .with_writer(console::ConsoleMakeWriter)
        .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
        .try_init();
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    pub struct ConsoleMakeWriter;

    /// Buffers one formatted event and hands it to `console.log` on drop.
    pub struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter { buffer: Vec::new() }
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
            let line = String::from_utf8_lossy(&self.buffer);
            let line = line.trim_end();
            if !line.is_empty() {
                web_sys::console::log_1(&JsValue::from_str(line));
            }
        }
    }
}
