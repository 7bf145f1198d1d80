mod app;
mod env_validate;
mod logging;

pub use app::AppConfig;
pub use env_validate::prefs_path;
pub use logging::init_logging;
