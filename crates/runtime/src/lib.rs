mod config;
pub mod logging;

pub use config::{
    EXCLUDE_EXTENSIONS_ENV, EXCLUDE_PATHS_ENV, PROGRAM_LOG_LEVEL, PROGRAM_NAME,
    default_browse_root, env_list,
};

pub use logging::init;
