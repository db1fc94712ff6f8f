use prefpanel_core::{PanelAction, PanelModel, Preferences};
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Runs an action and returns the preferences that were actually applied,
/// or `None` when nothing changed.
pub type ActionCallback = Callback<PanelAction, Option<Preferences>>;

/// Reads the preferences currently applied to the document.
pub type SnapshotCallback = Callback<(), Option<Preferences>>;

/// Forward the action, then mirror whatever the controller applied in the
/// pressed buttons and the live region.
pub fn activate_handler(
    model: &PanelModel,
    current: UseStateHandle<Preferences>,
    status: UseStateHandle<String>,
    on_action: ActionCallback,
) -> Callback<PanelAction> {
    let model = model.clone();
    Callback::from(move |action: PanelAction| {
        let applied = on_action.emit(action);
        if let Some((prefs, announcement)) = after_action(&model, action, applied) {
            current.set(prefs);
            status.set(announcement);
        }
    })
}

/// Pressed state and announcement once `action` ran; `None` leaves the panel
/// as it was.
pub(super) fn after_action(
    model: &PanelModel,
    action: PanelAction,
    applied: Option<Preferences>,
) -> Option<(Preferences, String)> {
    applied.map(|prefs| (prefs, model.announcement(action)))
}

/// Opening the menu resyncs the pressed buttons, since scripts may have
/// changed preferences through the global entry points.
pub fn toggle_handler(
    open: UseStateHandle<bool>,
    current: UseStateHandle<Preferences>,
    snapshot: SnapshotCallback,
) -> Callback<MouseEvent> {
    Callback::from(move |_| {
        if !*open
            && let Some(prefs) = snapshot.emit(())
        {
            current.set(prefs);
        }
        open.set(!*open);
    })
}

/// Escape closes the menu and hands focus back to the toggle.
pub fn keydown_handler(open: UseStateHandle<bool>, toggle_ref: NodeRef) -> Callback<KeyboardEvent> {
    Callback::from(move |e: KeyboardEvent| {
        if !cfg!(target_arch = "wasm32") {
            let _ = e;
            return;
        }
        if e.key() != "Escape" || !*open {
            return;
        }
        e.prevent_default();
        open.set(false);
        if let Some(toggle) = toggle_ref.cast::<web_sys::HtmlElement>() {
            let _ = toggle.focus();
        }
    })
}
