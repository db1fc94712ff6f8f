//! Startup: config, controller, first load, panel.
use crate::a11y;
use crate::dom;
use crate::handlers::{PanelBindings, SharedController};
use crate::mount::DocumentPanelHost;
use crate::root::{DocumentRoot, DomError};
use crate::storage::LocalStorageStore;
use anyhow::{Context, Result};
use prefpanel_core::{
    PanelModel, PanelMount, PreferenceController, PreferenceStore, Preferences, PrefsConfig,
    RootAttributes, create_panel,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

/// Id of the optional `<script type="application/json">` holding [`PrefsConfig`].
pub const CONFIG_ELEMENT_ID: &str = "prefpanel-config";

/// Parse inline config text; absent or malformed input yields the defaults.
#[must_use]
pub fn config_from_text(raw: Option<&str>) -> PrefsConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return PrefsConfig::default();
    };
    PrefsConfig::from_json(raw).unwrap_or_else(|err| {
        log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
        PrefsConfig::default()
    })
}

#[must_use]
pub fn read_config(document: &Document) -> PrefsConfig {
    let text = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    config_from_text(text.as_deref())
}

/// Apply stored preferences to the root. A document failure is logged and the
/// panel starts from the values the controller settled on.
pub fn initial_preferences<S, R>(controller: &mut PreferenceController<S, R>) -> Preferences
where
    S: PreferenceStore,
    R: RootAttributes,
{
    controller.load_preferences().unwrap_or_else(|err| {
        log::error!("applying stored preferences: {err}");
        controller.current()
    })
}

/// Build the controller, apply stored preferences and mount the panel.
///
/// # Errors
/// Returns an error if the document, its root element or its body are missing.
/// Storage problems and attribute write failures are logged, not returned.
pub fn boot() -> Result<SharedController> {
    let document = dom::document().ok_or(DomError::NoDocument)?;
    let config = read_config(&document);

    if let Err(err) = a11y::inject_styles(&document) {
        log::warn!("panel styles not injected: {err}");
    }

    let root = DocumentRoot::from_document(&document)?;
    let controller: SharedController = Rc::new(RefCell::new(PreferenceController::new(
        LocalStorageStore::open(),
        root,
        config,
    )));

    let initial = {
        let mut ctl = controller.borrow_mut();
        initial_preferences(&mut *ctl)
    };

    let model = {
        let ctl = controller.borrow();
        PanelModel::build(&ctl.config().labels(), &ctl.config().ids)
    };
    let mut host = DocumentPanelHost::new(
        document,
        PanelBindings::for_controller(&controller),
        initial,
    );
    if create_panel(&mut host, &model).context("mounting accessibility panel")?
        == PanelMount::AlreadyPresent
    {
        log::info!("accessibility panel already on the page; not mounting another");
    }
    Ok(controller)
}

/// Run `f` once the DOM is parsed: immediately if it already is, otherwise on
/// `DOMContentLoaded`.
///
/// # Errors
/// Returns an error if the document is missing or the listener cannot be registered.
pub fn when_ready(f: impl FnOnce() + 'static) -> Result<()> {
    let document = dom::document().ok_or(DomError::NoDocument)?;
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let listener = Closure::once_into_js(f);
    document
        .add_event_listener_with_callback("DOMContentLoaded", listener.unchecked_ref())
        .map_err(|err| anyhow::anyhow!(dom::js_error_message(&err)))
        .context("registering DOMContentLoaded listener")
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefpanel_core::{MemoryStore, ResetScope, Theme};

    #[derive(Debug, thiserror::Error)]
    #[error("attribute writes refused")]
    struct Refused;

    struct DetachedRoot;

    impl RootAttributes for DetachedRoot {
        type Error = Refused;

        fn set_attribute(&mut self, _name: &str, _value: &str) -> Result<(), Self::Error> {
            Err(Refused)
        }

        fn attribute(&self, _name: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn missing_or_blank_config_uses_defaults() {
        assert_eq!(config_from_text(None), PrefsConfig::default());
        assert_eq!(config_from_text(Some("  \n ")), PrefsConfig::default());
    }

    #[test]
    fn malformed_config_uses_defaults() {
        assert_eq!(config_from_text(Some("{not json")), PrefsConfig::default());
    }

    #[test]
    fn inline_config_is_applied() {
        let cfg = config_from_text(Some(r#"{"locale":"en","resetScope":"entireStore"}"#));
        assert_eq!(cfg.locale, "en");
        assert_eq!(cfg.reset_scope, ResetScope::EntireStore);
    }

    #[test]
    fn attribute_failure_still_yields_initial_preferences() {
        let mut controller = PreferenceController::new(
            MemoryStore::with_entries([("theme", "light")]),
            DetachedRoot,
            PrefsConfig::default(),
        );
        let initial = initial_preferences(&mut controller);
        assert_eq!(initial.theme, Theme::Light);
        assert_eq!(initial, controller.current());
    }
}
