//! Logging setup
//!
//! Two layers on a single `tracing` registry:
//! - human readable, coloured lines on stdout (always on)
//! - one-line JSON records in a daily rotated file (only with a log dir)
//!
//! `log` records from dependencies and the HTTP layer are bridged into
//! `tracing` through `tracing-log`.

use log::LevelFilter;
use std::path::Path;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

const DEFAULT_FILTER: &str = "info,dailyclaim=debug";

static LOGGER_READY: OnceLock<()> = OnceLock::new();

/// Initialise the global subscriber
///
/// Safe to call more than once; later calls are no-ops and return `None`.
/// With a log dir, the returned guard must be held until the process ends:
/// dropping it flushes the file writer.
pub fn init_logger(log_dir: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    if LOGGER_READY.get().is_some() {
        return Ok(None);
    }

    let mut file_guard = None;

    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let json_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = rolling::daily(dir, "dailyclaim.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            file_guard = Some(guard);

            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .event_format(JsonFormatter::new())
                    .with_filter(build_filter()),
            )
        }
        None => None,
    };

    let stdout_layer = fmt::layer()
        .with_ansi(true)
        .event_format(HumanReadableFormatter)
        .with_filter(build_filter());

    let subscriber = Registry::default().with(json_layer).with(stdout_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOGGER_READY.set(());

    tracing::debug!(
        target: "dailyclaim::logging",
        log_dir = %log_dir.map(|d| d.display().to_string()).unwrap_or_default(),
        version = env!("CARGO_PKG_VERSION"),
        "Logger initialized"
    );

    Ok(file_guard)
}

/// `RUST_LOG` when set, the default filter otherwise
fn build_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

// ============================================================
// Formatters
// ============================================================

use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// One-line JSON records
struct JsonFormatter {
    pid: u32,
}

impl JsonFormatter {
    fn new() -> Self {
        Self {
            pid: std::process::id(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for JsonFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let timestamp = chrono::Local::now()
            .format("%Y-%m-%dT%H:%M:%S%.3f%:z")
            .to_string();

        let mut json = serde_json::json!({
            "timestamp": timestamp,
            "level": metadata.level().to_string(),
            "pid": self.pid,
            "target": metadata.target(),
            "version": env!("CARGO_PKG_VERSION"),
        });

        let mut visitor = FieldVisitor::new();
        event.record(&mut visitor);

        if let Some(message) = visitor.fields.remove("message") {
            json["message"] = message;
        }
        if !visitor.fields.is_empty() {
            json["fields"] = serde_json::Value::Object(visitor.fields);
        }

        writeln!(
            writer,
            "{}",
            serde_json::to_string(&json).unwrap_or_default()
        )
    }
}

/// Format: `2025-12-09 10:32:15.123 [INFO] (target) account=1 game="gi" — message`
struct HumanReadableFormatter;

impl<S, N> FormatEvent<S, N> for HumanReadableFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let timestamp = chrono::Local::now()
            .format("%Y-%m-%d %H:%M:%S%.3f")
            .to_string();

        let (name, colour) = match *metadata.level() {
            Level::ERROR => ("ERROR", "31"),
            Level::WARN => ("WARN", "33"),
            Level::INFO => ("INFO", "32"),
            Level::DEBUG => ("DEBUG", "36"),
            Level::TRACE => ("TRACE", "35"),
        };
        let level_str = if writer.has_ansi_escapes() {
            format!("\x1b[{}m{}\x1b[0m", colour, name)
        } else {
            name.to_string()
        };

        let mut visitor = FieldVisitor::new();
        event.record(&mut visitor);

        let message = visitor
            .fields
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();

        let fields_str: String = visitor
            .fields
            .iter()
            .filter(|(key, _)| key.as_str() != "message")
            .map(|(key, value)| format!(" {}={}", key, value))
            .collect();

        writeln!(
            writer,
            "{} [{}] ({}){} — {}",
            timestamp,
            level_str,
            metadata.target(),
            fields_str,
            message
        )
    }
}

/// Collects event fields as JSON values
struct FieldVisitor {
    fields: serde_json::Map<String, serde_json::Value>,
}

impl FieldVisitor {
    fn new() -> Self {
        Self {
            fields: serde_json::Map::new(),
        }
    }
}

impl tracing::field::Visit for FieldVisitor {
    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.fields.insert(
            field.name().to_string(),
            serde_json::json!(format!("{:?}", value)),
        );
    }
}
