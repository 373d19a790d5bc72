use kata::domain::config::LoggingConfig;
use kata::logger::LoggerError;

#[test]
fn default_logging_config_installs_once() {
    let config = LoggingConfig::default();
    let logger = kata::init_logger("kata-logging", &config).expect("default config installs");
    assert!(logger.guard().is_none(), "no file output without a configured path");

    let quiet = LoggingConfig { level: "warn".to_owned(), ..LoggingConfig::default() };
    let err = kata::init_logger("kata-logging-again", &quiet).expect_err("already installed");
    assert!(matches!(err, LoggerError::Subscriber { .. }));
}
