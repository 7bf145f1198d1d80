use crate::theme::Theme;

/// Fixed knobs of the theme subsystem.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Key under which the preference is persisted.
    pub storage_key: &'static str,
    /// Class placed on the document root while the dark theme is active.
    pub marker_class: &'static str,
    /// Theme used when nothing valid is persisted.
    pub default_theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme",
            marker_class: "dark",
            default_theme: Theme::default(),
        }
    }
}
