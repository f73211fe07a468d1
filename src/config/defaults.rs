//! Default values for configuration options.

use std::path::PathBuf;

/// Directory name under the platform config directory.
pub const APP_DIR: &str = "slack-chat";

/// Config file name looked up when `--config` is not given.
pub const CONFIG_FILE: &str = "config.toml";

/// Escape `&`, `<` and `>` in message text unless told otherwise.
pub const ESCAPE_TEXT: bool = crate::chat::params::DEFAULT_MESSAGE_ESCAPE_TEXT;

/// Implicit config file location, e.g. `~/.config/slack-chat/config.toml`.
///
/// `None` when the platform has no config directory.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
