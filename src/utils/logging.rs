use std::str::FromStr;
use tracing::Level;
use crate::core::domain::Configuration;

pub fn log_level(config: &Configuration) -> Level {
    Level::from_str(config.log_level.as_str()).unwrap_or(Level::WARN)
}

// logs go to stderr so they never interleave with the menu on stdout
pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(log_level(config))
        .with_writer(std::io::stderr)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false);
    if config.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use crate::core::domain::Configuration;
    use crate::utils::logging::log_level;

    #[test]
    fn test_should_map_log_level() {
        let mut config = Configuration::new("test");
        assert_eq!(Level::WARN, log_level(&config));
        config.log_level = "debug".to_string();
        assert_eq!(Level::DEBUG, log_level(&config));
        config.log_level = "bogus".to_string();
        assert_eq!(Level::WARN, log_level(&config));
    }
}
