// License: MIT OR Apache-2.0
//! This module configures logging for the tool. Progress messages are logged
//! at INFO so they show up by default; `-v` and `-vv` unlock the DEBUG and
//! TRACE details and `-q` silences everything.

use clap_verbosity_flag::{Verbosity, VerbosityFilter};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Maps clap's verbosity level onto the tracing level.
///
/// `clap_verbosity_flag` defaults to `Error`; that default is shifted so
/// * no flag -> INFO
/// * `-v` -> DEBUG
/// * `-vv` or more -> TRACE
/// * `-q` -> OFF
pub fn level_filter(verbosity_level: Verbosity) -> LevelFilter {
    match verbosity_level.filter() {
        VerbosityFilter::Off => LevelFilter::OFF,
        VerbosityFilter::Error => LevelFilter::INFO,
        VerbosityFilter::Warn => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Initializes the tracing subscriber with a filter based on clap's verbosity
/// level.
pub fn init_tracing(verbosity_level: Verbosity) {
    let tracing_filter = EnvFilter::default().add_directive(level_filter(verbosity_level).into());

    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_target(false)
        .with_file(false)
        .with_env_filter(tracing_filter)
        .init();
}
