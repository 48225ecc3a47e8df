//! Tracing subscriber setup: console formatter and initialisation.
use tracing_subscriber::EnvFilter;

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// Format one event the way git prints its own diagnostics.
pub(super) fn format_line(level: tracing::Level, msg: &str) -> String {
    match level {
        tracing::Level::ERROR => format!("\x1b[31merror:\x1b[0m {msg}"),
        tracing::Level::WARN => format!("\x1b[33mwarning:\x1b[0m {msg}"),
        tracing::Level::INFO => msg.to_string(),
        _ => format!("\x1b[2m{msg}\x1b[0m"),
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits git-style console
/// output on stderr.
struct GitStyleFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for GitStyleFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        writeln!(
            writer,
            "{}",
            format_line(*event.metadata().level(), &extractor.message)
        )
    }
}

/// Build the console level filter.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` for this
/// crate and `warn` for everything.
pub(super) fn build_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty())
        && let Ok(filter) = EnvFilter::try_new(directives)
    {
        return filter;
    }
    if verbose {
        EnvFilter::new("warn,gitconfig_cli=debug")
    } else {
        EnvFilter::new("warn")
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// All diagnostics go to stderr so stdout carries only command output.
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(verbose: bool) {
    use tracing_subscriber::{
        Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
    };

    let rust_log = std::env::var("RUST_LOG").ok();
    let console_layer = fmt::layer()
        .event_format(GitStyleFormatter)
        .with_writer(std::io::stderr)
        .with_filter(build_filter(verbose, rust_log.as_deref()));

    tracing_subscriber::registry().with(console_layer).init();
}
