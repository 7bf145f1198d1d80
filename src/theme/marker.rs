use std::rc::Rc;

use crate::error::MarkerError;

/// The single class toggle the stylesheet keys off.
pub trait ThemeMarker {
    /// Adds the marker class when `present`, removes it otherwise.
    fn set_marked(&self, present: bool) -> Result<(), MarkerError>;
}

/// Marks `document.documentElement` through its class list.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct DocumentRootMarker {
    class: String,
}

#[cfg(target_arch = "wasm32")]
impl DocumentRootMarker {
    pub fn new(class: impl Into<String>) -> Self {
        Self { class: class.into() }
    }
}

#[cfg(target_arch = "wasm32")]
impl ThemeMarker for DocumentRootMarker {
    fn set_marked(&self, present: bool) -> Result<(), MarkerError> {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or(MarkerError::NoDocument)?;

        let classes = root.class_list();
        let result = if present {
            classes.add_1(&self.class)
        } else {
            classes.remove_1(&self.class)
        };
        result.map_err(|e| MarkerError::Class(format!("{:?}", e)))
    }
}

/// Marks the webview's root element by evaluating a script.
///
/// Used by desktop and mobile builds where `web-sys` has no document.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct EvalMarker {
    class: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl EvalMarker {
    pub fn new(class: impl Into<String>) -> Self {
        Self { class: class.into() }
    }

    pub fn script(&self, present: bool) -> String {
        format!("document.documentElement.classList.toggle({:?}, {});", self.class, present)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ThemeMarker for EvalMarker {
    fn set_marked(&self, present: bool) -> Result<(), MarkerError> {
        if dioxus::dioxus_core::Runtime::current().is_err() {
            return Err(MarkerError::NoDocument);
        }
        // fire and forget, the result of the script is never read
        let _ = dioxus::document::eval(&self.script(present));
        Ok(())
    }
}

pub fn platform_marker(class: &str) -> Rc<dyn ThemeMarker> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(DocumentRootMarker::new(class))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(EvalMarker::new(class))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_eval_marker_script() {
        let marker = EvalMarker::new("dark");
        assert_eq!(
            marker.script(true),
            "document.documentElement.classList.toggle(\"dark\", true);"
        );
        assert_eq!(
            marker.script(false),
            "document.documentElement.classList.toggle(\"dark\", false);"
        );
    }

    #[test]
    fn test_eval_marker_outside_runtime() {
        let marker = EvalMarker::new("dark");
        assert_eq!(marker.set_marked(true), Err(MarkerError::NoDocument));
    }
}
