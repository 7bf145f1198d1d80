use std::rc::Rc;

use dioxus::prelude::*;

use super::{ Theme, ThemeStore };

/// What descendants get from [`use_theme`]: the current value and the one
/// mutating action.
#[derive(Clone)]
pub struct ThemeContext {
    store: Rc<ThemeStore>,
    current: Memo<Theme>,
}

impl ThemeContext {
    /// Reads the theme and subscribes the calling component to changes.
    pub fn current(&self) -> Theme {
        (self.current)()
    }

    pub fn is_dark(&self) -> bool {
        self.current().is_dark()
    }

    pub fn toggle(&self) -> Theme {
        self.store.toggle()
    }
}

/// Builds the store once and provides it to every descendant.
///
/// Must be called from the root component; the store then lives as long as
/// the application.
pub fn use_theme_provider(init: impl FnOnce() -> ThemeStore) -> ThemeContext {
    let store = use_hook(|| Rc::new(init()));
    let theme = use_signal(|| store.current());

    let subscription = use_hook({
        let store = store.clone();
        move || store.subscribe(move |next| theme.clone().set(next))
    });
    use_drop({
        let store = store.clone();
        move || {
            store.unsubscribe(subscription);
        }
    });

    // consumers only re-render when the value actually changes
    let current = use_memo(move || theme());

    use_context_provider(|| ThemeContext { store, current })
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}
