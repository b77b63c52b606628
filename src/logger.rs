use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs the process-wide logger. Safe to call more than once.
///
/// Defaults to `Info`; `RUST_LOG` overrides the filter.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // A test harness may have installed a logger already.
        let _ = builder.try_init();
    });
}
