//! Globally reachable entry points for pages that drive the widget from script.
//!
//! The panel itself never goes through these; its buttons hold direct
//! callbacks. They exist so inline `onclick="setTheme('light')"` markup and
//! other scripts keep working.
use crate::handlers::{SharedController, WebController};
use prefpanel_core::{A11yError, PrefKey};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static CONTROLLER: RefCell<Option<SharedController>> = const { RefCell::new(None) };
}

/// Make `controller` the target of the global functions.
pub fn install(controller: SharedController) {
    CONTROLLER.with(|slot| slot.replace(Some(controller)));
}

fn with_controller<T>(
    f: impl FnOnce(&mut WebController) -> Result<T, A11yError>,
) -> Result<T, JsValue> {
    let controller = CONTROLLER
        .with(|slot| slot.borrow().clone())
        .ok_or_else(|| JsValue::from_str("accessibility panel has not started"))?;
    let mut ctl = controller
        .try_borrow_mut()
        .map_err(|_| JsValue::from_str("accessibility controller busy"))?;
    f(&mut ctl).map_err(|err| js_sys::Error::new(&err.to_string()).into())
}

fn set(key: PrefKey, value: &str) -> Result<(), JsValue> {
    with_controller(|ctl| ctl.set_preference_str(key.storage_key(), value)).map(|_| ())
}

/// # Errors
/// Throws if `value` is not `light` or `dark`.
#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(value: &str) -> Result<(), JsValue> {
    set(PrefKey::Theme, value)
}

/// # Errors
/// Throws if `value` is not `small`, `normal` or `large`.
#[wasm_bindgen(js_name = setFontSize)]
pub fn set_font_size(value: &str) -> Result<(), JsValue> {
    set(PrefKey::FontSize, value)
}

/// # Errors
/// Throws if `value` is not `normal` or `high`.
#[wasm_bindgen(js_name = setContrast)]
pub fn set_contrast(value: &str) -> Result<(), JsValue> {
    set(PrefKey::Contrast, value)
}

/// # Errors
/// Throws if the widget has not started.
#[wasm_bindgen(js_name = resetA11y)]
pub fn reset_a11y() -> Result<(), JsValue> {
    with_controller(WebController::reset).map(|_| ())
}

/// Current preferences as `{ theme, fontSize, contrast }`.
///
/// # Errors
/// Throws if the widget has not started.
#[wasm_bindgen(js_name = getA11yPreferences)]
pub fn get_preferences() -> Result<JsValue, JsValue> {
    let prefs = with_controller(|ctl| Ok(ctl.current()))?;
    serde_wasm_bindgen::to_value(&prefs).map_err(Into::into)
}
