use tracing_subscriber::EnvFilter;

use crate::configs::Config;

/// Install the global tracing subscriber. `RUST_LOG` wins over the config
/// file; repeated calls are no-ops so tests can init freely.
pub fn init(config: &Config) {
    let log_level = config
        .logging
        .as_ref()
        .and_then(|l| l.level.as_deref())
        .unwrap_or("info");

    let filters = config
        .logging
        .as_ref()
        .and_then(|l| l.filters.as_deref())
        .unwrap_or("");

    let filter_str = if filters.is_empty() {
        log_level.to_string()
    } else {
        format!("{},{}", log_level, filters)
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::LoggingConfig;

    #[test]
    fn init_is_idempotent() {
        let mut config = Config::default();
        config.logging = Some(LoggingConfig {
            level: Some("debug".to_string()),
            filters: Some("hyper=warn".to_string()),
        });

        init(&config);
        init(&config);
    }
}
