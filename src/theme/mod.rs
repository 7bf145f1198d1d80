//! Light/dark theme state.
//!
//! [`ThemeStore`] owns the active [`Theme`], writes it through to a
//! [`KeyValueStorage`](crate::storage::KeyValueStorage) and keeps the root
//! marker class in sync. The view tree reaches it through
//! [`use_theme`], which is provided once at the root by
//! [`use_theme_provider`].

mod context;
mod marker;
mod store;

use std::fmt::{ Display, Formatter };
use std::str::FromStr;

pub use context::{ use_theme, use_theme_provider, ThemeContext };
pub use marker::{ platform_marker, ThemeMarker };
#[cfg(target_arch = "wasm32")]
pub use marker::DocumentRootMarker;
#[cfg(not(target_arch = "wasm32"))]
pub use marker::EvalMarker;
pub use store::ThemeStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted text that is neither `dark` nor `light`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl Display for UnknownTheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown theme: {:?}", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}
