use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Logger, Root},
    encode::pattern::PatternEncoder,
    init_config, Config,
};

/// The pattern to use when logging
const LOGGING_PATTERN: &str = "[{d} {h({l})} {M}] {m}{n}";

/// Setup function for setting up the Log4rs logging configuring
/// stdout logging for the simulator at the provided level
pub fn setup(logging_level: LevelFilter) {
    if logging_level == LevelFilter::Off {
        // Don't initialize logger at all if logging is disabled
        return;
    }

    let pattern = Box::new(PatternEncoder::new(LOGGING_PATTERN));
    let stdout_appender = ConsoleAppender::builder().encoder(pattern).build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .logger(
            Logger::builder()
                .appender("stdout")
                .additive(false)
                .build("leaderboard_sim", logging_level),
        )
        .build(Root::builder().appender("stdout").build(LevelFilter::Warn))
        .expect("Failed to create logging config");

    init_config(config).expect("Unable to initialize logger");

    // Route panics through the logger
    log_panics::init();
}
