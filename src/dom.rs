use web_sys::{Document, Element, Window};

use korokoro_core::{Theme, LIGHT_THEME_CLASS};

pub(crate) const MOUNT_ID: &str = "dice-app";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum DomError {
    #[error("window unavailable")]
    MissingWindow,
    #[error("document unavailable")]
    MissingDocument,
    #[error("required element '{0}' not found")]
    MissingElement(&'static str),
    #[error("class '{0}' could not be updated")]
    ClassList(&'static str),
}

pub(crate) fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::MissingWindow)
}

pub(crate) fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::MissingDocument)
}

pub(crate) fn element_by_id(id: &'static str) -> Result<Element, DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or(DomError::MissingElement(id))
}

pub(crate) fn document_root() -> Result<Element, DomError> {
    document()?
        .document_element()
        .ok_or(DomError::MissingElement("html"))
}

/// Puts the theme class on the document root.
pub(crate) fn apply_theme(theme: Theme) -> Result<(), DomError> {
    let root = document_root()?;
    root.class_list()
        .toggle_with_force(LIGHT_THEME_CLASS, theme.is_light())
        .map_err(|_| DomError::ClassList(LIGHT_THEME_CLASS))?;
    Ok(())
}

pub(crate) fn report(context: &str, err: &DomError) {
    gloo::console::error!(context.to_string(), err.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn apply_theme_sets_and_clears_root_class() {
        let root = document_root().expect("document root");
        assert_eq!(apply_theme(Theme::Light), Ok(()));
        assert!(root.class_list().contains(LIGHT_THEME_CLASS));
        assert_eq!(apply_theme(Theme::Dark), Ok(()));
        assert!(!root.class_list().contains(LIGHT_THEME_CLASS));
    }

    #[wasm_bindgen_test]
    fn class_list_error_names_the_class() {
        assert_eq!(
            DomError::ClassList(LIGHT_THEME_CLASS).to_string(),
            "class 'light-theme' could not be updated"
        );
    }
}
