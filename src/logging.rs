//! Console logging for hosts that do not install their own subscriber.
//!
//! Components log through `tracing`: fallbacks at `debug`, rebuilds at
//! `trace`. [`install`] routes those events to stderr, prefixed with
//! `[markupui]`. When `RUST_LOG` is set it alone decides what prints;
//! otherwise the level from [`set_log_level`] does.

use std::io::{self, Write};
use std::str::FromStr;
use std::sync::{Mutex, Once, OnceLock};

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::writer::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, filter::filter_fn, fmt};

const PREFIX: &str = "[markupui] ";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

static INSTALLED: Once = Once::new();
static LOG_LEVEL: OnceLock<Mutex<LevelFilter>> = OnceLock::new();

fn level_slot() -> &'static Mutex<LevelFilter> {
    LOG_LEVEL.get_or_init(|| Mutex::new(DEFAULT_LOG_LEVEL))
}

/// The level events must reach to be printed.
#[must_use]
pub fn log_level() -> LevelFilter {
    level_slot().lock().map_or(DEFAULT_LOG_LEVEL, |guard| *guard)
}

/// Changes the level at runtime. Unparseable levels reset to `info`.
///
/// Ignored by the installed console while `RUST_LOG` is set.
pub fn set_log_level(level: &str) {
    let parsed = LevelFilter::from_str(level.trim()).unwrap_or_else(|_| {
        tracing::warn!(level, "unknown log level; using info");
        DEFAULT_LOG_LEVEL
    });
    if let Ok(mut guard) = level_slot().lock() {
        *guard = parsed;
    }
}

/// Installs the stderr subscriber. Later calls do nothing, as does the
/// first one if the host already set a global subscriber.
pub fn install() {
    INSTALLED.call_once(|| {
        let console = console_layer(PrefixedWriter, EnvFilter::try_from_default_env().ok());
        if tracing_subscriber::registry().with(console).try_init().is_err() {
            eprintln!("{PREFIX}a global tracing subscriber is already installed");
        }
    });
}

/// The console formatter, gated by `env_filter` when present and by
/// [`log_level`] otherwise.
fn console_layer<S, W>(
    writer: W,
    env_filter: Option<EnvFilter>,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span> + 'static,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .without_time();
    match env_filter {
        Some(filter) => layer.with_filter(filter).boxed(),
        None => layer
            .with_filter(filter_fn(|metadata| *metadata.level() <= log_level()))
            .boxed(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct PrefixedWriter;

impl<'a> MakeWriter<'a> for PrefixedWriter {
    type Writer = Prefixed<io::Stderr>;

    fn make_writer(&'a self) -> Self::Writer {
        Prefixed {
            inner: io::stderr(),
            wrote_prefix: false,
        }
    }
}

/// Writes [`PREFIX`] once before the first chunk of an event.
#[derive(Debug)]
struct Prefixed<W> {
    inner: W,
    wrote_prefix: bool,
}

impl<W: Write> Write for Prefixed<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.wrote_prefix {
            self.inner.write_all(PREFIX.as_bytes())?;
            self.wrote_prefix = true;
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn prefix_is_written_once() {
        let mut out = Prefixed {
            inner: Vec::new(),
            wrote_prefix: false,
        };
        out.write_all(b"DEBUG ").unwrap();
        out.write_all(b"asset enqueued\n").unwrap();
        assert_eq!(
            String::from_utf8(out.inner).unwrap(),
            "[markupui] DEBUG asset enqueued\n"
        );
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn runtime_level_decides_what_prints() {
        let captured = Captured::default();
        let subscriber =
            tracing_subscriber::registry().with(console_layer(captured.clone(), None));

        tracing::subscriber::with_default(subscriber, || {
            set_log_level("debug");
            assert_eq!(log_level(), LevelFilter::DEBUG);
            tracing::debug!("unknown size keyword");
            set_log_level("error");
            tracing::info!("asset enqueued");
            set_log_level("loud");
            assert_eq!(log_level(), LevelFilter::INFO);
            tracing::info!("table rendered");
        });

        let text = captured.text();
        assert!(text.contains("unknown size keyword"));
        assert!(!text.contains("asset enqueued"));
        assert!(text.contains("table rendered"));
    }

    #[test]
    fn env_filter_overrides_runtime_level() {
        let captured = Captured::default();
        let filter = EnvFilter::new("warn");
        let subscriber =
            tracing_subscriber::registry().with(console_layer(captured.clone(), Some(filter)));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("asset enqueued");
            tracing::warn!("rejected configuration");
        });

        let text = captured.text();
        assert!(!text.contains("asset enqueued"));
        assert!(text.contains("rejected configuration"));
    }

    #[test]
    fn install_is_idempotent() {
        install();
        install();
        tracing::info!("logging installed");
    }
}
