//! Platform logging initialization for spider_chat_app.

use super::config::AppConfig;

/// Installs the global logger described by the configuration.
///
/// Failure to install is reported on stderr and otherwise ignored.
pub fn initialize(config: &AppConfig) {
    let installed = chat_logging::initialize(
        config.log_destination.into(),
        config.level_filter(),
        &config.log_file,
    );
    if !installed {
        eprintln!(
            "Warning: logging disabled (could not use {:?})",
            config.log_file
        );
    }
}
