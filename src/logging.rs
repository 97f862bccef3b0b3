//! Logger setup for the `chatstats` binary.

use log::{LevelFilter, debug, info};

use crate::config::AnalysisConfig;
use crate::core::FilterConfig;

/// Picks the log level from the verbosity flags.
///
/// `None` leaves the level to `RUST_LOG`.
pub fn level_for(verbose: bool, quiet: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if verbose {
        Some(LevelFilter::Debug)
    } else if std::env::var_os("RUST_LOG").is_none() {
        Some(LevelFilter::Off)
    } else {
        None
    }
}

/// Initialize the logger with appropriate level based on verbosity.
///
/// Returns `false` if a logger was already installed.
pub fn init_logger(verbose: bool, quiet: bool) -> bool {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level_for(verbose, quiet) {
        builder.filter_level(level);
    }

    let installed = builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init()
        .is_ok();

    debug!("Logger initialized (verbose={verbose}, quiet={quiet})");
    installed
}

/// Log the effective analysis settings.
pub fn log_config_info(config: &AnalysisConfig) {
    info!(
        "Configuration: top_senders={}, top_words={}, top_emojis={}, min_word_len={}",
        config.top_senders, config.top_words, config.top_emojis, config.min_word_len
    );
    debug!(
        "Classification: media={:?}, link={:?}, neutral_band={}, max_cloud_words={}",
        config.media_placeholder, config.link_marker, config.neutral_band, config.max_cloud_words
    );
}

/// Log active filters.
pub fn log_filter_info(filter: &FilterConfig) {
    if !filter.is_active() {
        return;
    }
    info!(
        "Filters: after={:?}, before={:?}, from={:?}",
        filter.after, filter.before, filter.from
    );
}
