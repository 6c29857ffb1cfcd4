use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Default filter with `--debug`. HTTP client internals stay quiet.
const DEBUG_FILTER: &str = "netdiscover_core=debug,netdiscover_common=debug,netdiscover_cli=debug";
const QUIET_FILTER: &str = "error";

const CRATE_PREFIX: &str = "netdiscover_";

/// One line per event: a colored level marker, the emitting module and the
/// event fields, e.g. `[?] core::http GET url=... headers=1`.
pub struct NetdiscoverFormatter;

impl<S, N> FormatEvent<S, N> for NetdiscoverFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let marker = match *meta.level() {
            Level::ERROR => "[-]".red().bold(),
            Level::WARN => "[*]".yellow().bold(),
            _ => "[?]".blue(),
        };
        let origin = meta.target().strip_prefix(CRATE_PREFIX).unwrap_or(meta.target());

        write!(writer, "{} {} ", marker, origin.dimmed())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn default_filter(debug: bool) -> &'static str {
    if debug { DEBUG_FILTER } else { QUIET_FILTER }
}

/// Installs the stderr subscriber. `RUST_LOG` replaces the default filter.
pub fn init_logging(debug: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(NetdiscoverFormatter)
        .init();
}
