use tracing::Level;
use crate::core::domain::Configuration;

pub fn parse_level(level: &str) -> Level {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

// Logs go to stderr so they never interleave with the menu on stdout.
pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(parse_level(config.log_level.as_str()))
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr);
    // try_init keeps a second call (tests, embedding) from panicking.
    let _ = if config.json_logs {
        builder.with_ansi(false).json().try_init()
    } else {
        builder.compact().try_init()
    };
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use crate::core::domain::Configuration;
    use crate::utils::logs::{parse_level, setup_tracing};

    #[test]
    fn test_should_parse_levels() {
        assert_eq!(Level::DEBUG, parse_level("debug"));
        assert_eq!(Level::WARN, parse_level(" WARN "));
        assert_eq!(Level::INFO, parse_level("nonsense"));
    }

    #[test]
    fn test_should_setup_tracing_twice() {
        let config = Configuration::new("test");
        setup_tracing(&config);
        setup_tracing(&config);
    }
}
