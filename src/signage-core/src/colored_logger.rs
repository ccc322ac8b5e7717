//! Colored logging with component prefixes
//!
//! A tracing formatter that tags every line with the component that emitted
//! it, so server output and CLI diagnostics read apart at a glance.

use owo_colors::{OwoColorize, Style};
use std::fmt;
use std::io;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::{
    format::{FormatEvent, FormatFields, Writer},
    FmtContext, FormattedFields,
};
use tracing_subscriber::registry::LookupSpan;

/// Component identifier for prefixing logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Main,
    Server,
    Check,
}

/// Width of the bracketed prefix column; the longest component name
const PREFIX_WIDTH: usize = 6;

impl Component {
    pub const ALL: [Component; 3] = [Component::Main, Component::Server, Component::Check];

    /// Get the string representation for logging prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Main => "MAIN",
            Component::Server => "SERVER",
            Component::Check => "CHECK",
        }
    }

    /// Get the color style for this component
    pub fn color_style(&self) -> Style {
        match self {
            Component::Main => Style::new().cyan().bold(),
            Component::Server => Style::new().blue().bold(),
            Component::Check => Style::new().yellow().bold(),
        }
    }
}

fn level_style(level: &Level) -> Style {
    match *level {
        Level::ERROR => Style::new().red().bold(),
        Level::WARN => Style::new().yellow().bold(),
        Level::INFO => Style::new().green().bold(),
        Level::DEBUG => Style::new().blue(),
        Level::TRACE => Style::new().dimmed(),
    }
}

/// Custom formatter with component prefixes and colors
///
/// Events from outside this workspace (the HTTP trace layer, mostly) carry
/// their target, and the spans they fire in, so request lines show which
/// request they belong to.
pub struct ColoredFormatter {
    pub component: Component,
}

impl<S, N> FormatEvent<S, N> for ColoredFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        let level = metadata.level();

        write!(writer, "{} ", chrono::Local::now().format("%H:%M:%S").dimmed())?;

        let prefix = format!("[{:<width$}]", self.component.as_str(), width = PREFIX_WIDTH);
        let label = format!("{:<5}", level.as_str());
        write!(
            writer,
            "{} {} ",
            prefix.style(self.component.color_style()),
            label.style(level_style(level))
        )?;

        if !metadata.target().starts_with("signage") {
            write!(writer, "{} ", metadata.target().dimmed())?;
        }

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(writer, "{}", span.name().dimmed())?;
                let extensions = span.extensions();
                if let Some(fields) = extensions.get::<FormattedFields<N>>() {
                    if !fields.is_empty() {
                        write!(writer, "{{{}}}", fields)?;
                    }
                }
                write!(writer, ": ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Initialize colored logging for a component
///
/// `RUST_LOG` directives are honoured; otherwise `info`, or `debug` when
/// verbose. Call once per process.
pub fn init_component_logger(component: Component, verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let default_level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .event_format(ColoredFormatter { component })
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_column_fits_longest_name() {
        let longest = Component::ALL.iter().map(|c| c.as_str().len()).max().unwrap();
        assert_eq!(longest, PREFIX_WIDTH);
    }
}
