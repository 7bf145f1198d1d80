pub mod configs;
pub mod content;
pub mod error;
pub mod storage;
pub mod theme;
pub mod views;
#[cfg(test)]
mod tests;

mod app;

pub use crate::app::App;
pub use crate::configs::{ init_logging, AppConfig };
pub use crate::theme::{ use_theme, Theme, ThemeContext, ThemeStore };
