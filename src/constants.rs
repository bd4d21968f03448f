//! Engine constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Quiet period before a typed search query reaches the store
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Upper bound accepted for the search debounce window
pub const MAX_SEARCH_DEBOUNCE_MS: u64 = 10_000;

/// Number of files shown in the Recent section
pub const DEFAULT_RECENT_LIMIT: usize = 8;

/// Path the My Drive section opens at
pub const DEFAULT_HOME_PATH: &[&str] = &["Drive", "Projects", "UI"];

/// Size label given to newly created folders
pub const EMPTY_FOLDER_SIZE: &str = "0 KB";

/// Directory under the user's home holding `config.yaml`
pub const CONFIG_DIR_NAME: &str = ".clouddrive";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Default log file name
pub const DEFAULT_LOG_FILE: &str = "clouddrive.log";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application name
pub const APP_NAME: &str = "CloudDrive";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
