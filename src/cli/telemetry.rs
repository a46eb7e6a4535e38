use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Shape of log lines written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

fn env_filter(verbosity_level: Level) -> Result<EnvFilter> {
    // RUST_LOG overrides the default directive
    Ok(EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("tokio=error".parse()?)
        .add_directive("sqlx=warn".parse()?))
}

/// Initialize logging.
///
/// # Errors
///
/// Returns an error if the filter directives are invalid or a global
/// subscriber is already installed
pub fn init(verbosity_level: Option<Level>, format: LogFormat) -> Result<()> {
    let filter = env_filter(verbosity_level.unwrap_or(Level::ERROR))?;

    match format {
        LogFormat::Text => {
            let fmt_layer = fmt::layer()
                .with_file(false)
                .with_line_number(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_target(false);

            let subscriber = Registry::default().with(fmt_layer).with(filter);
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_target(false);

            let subscriber = Registry::default().with(fmt_layer).with(filter);
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_builds() {
        temp_env::with_var("RUST_LOG", None::<&str>, || {
            assert!(env_filter(Level::DEBUG).is_ok());
        });
    }

    #[test]
    fn test_default_log_format_is_text() {
        assert_eq!(LogFormat::default(), LogFormat::Text);
    }
}
