use std::sync::Once;

/// wgpu logs every resource at info; keep it to warnings unless asked.
const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "debug",
/// "fractal_view=trace,wgpu_core=warn"). When unset, `RUST_LOG` is consulted
/// before falling back to the built-in default.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let env = std::env::var("RUST_LOG").ok();
        let filter = resolve_filter(config.env_filter, env);

        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .init();

        log::debug!("logging initialized ({filter})");
    });
}

/// Explicit filter, then `RUST_LOG`, then the default. Blank values are skipped.
fn resolve_filter(explicit: Option<String>, env: Option<String>) -> String {
    let usable = |f: &String| !f.trim().is_empty();
    explicit
        .filter(usable)
        .or_else(|| env.filter(usable))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let f = resolve_filter(Some("debug".into()), Some("warn".into()));
        assert_eq!(f, "debug");
    }

    #[test]
    fn env_used_when_no_explicit_filter() {
        assert_eq!(resolve_filter(None, Some("trace".into())), "trace");
    }

    #[test]
    fn blank_explicit_filter_defers_to_env() {
        assert_eq!(resolve_filter(Some(String::new()), Some("trace".into())), "trace");
        assert_eq!(resolve_filter(Some("   ".into()), Some("warn".into())), "warn");
    }

    #[test]
    fn blank_falls_back_to_default() {
        assert_eq!(resolve_filter(None, Some("  ".into())), DEFAULT_FILTER);
        assert_eq!(resolve_filter(None, None), DEFAULT_FILTER);
    }
}
