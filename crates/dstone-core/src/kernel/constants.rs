/// Application name
pub const APP_NAME: &str = "DStone";

/// Application version
pub const APP_VERSION: &str = "0.1.0";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Default plugins directory
pub const DEFAULT_PLUGINS_DIR: &str = "plugins";

/// Default assets directory
pub const DEFAULT_ASSETS_DIR: &str = "assets";
