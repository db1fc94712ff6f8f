use crate::components::a11y_panel::{ActionCallback, SnapshotCallback};
use crate::root::DocumentRoot;
use crate::storage::LocalStorageStore;
use prefpanel_core::{PanelAction, PreferenceController, PreferenceStore, RootAttributes};
use std::cell::RefCell;
use std::rc::Rc;
use yew::Callback;

pub type WebController = PreferenceController<LocalStorageStore, DocumentRoot>;

/// Controller handle shared by the panel callbacks and the global entry points.
pub type SharedController<S = LocalStorageStore, R = DocumentRoot> =
    Rc<RefCell<PreferenceController<S, R>>>;

/// The callbacks a mounted panel uses to reach its controller.
#[derive(Clone, PartialEq)]
pub struct PanelBindings {
    pub on_action: ActionCallback,
    pub snapshot: SnapshotCallback,
}

impl PanelBindings {
    /// Bind both callbacks to `controller`.
    pub fn for_controller<S, R>(controller: &SharedController<S, R>) -> Self
    where
        S: PreferenceStore + 'static,
        R: RootAttributes + 'static,
    {
        Self {
            on_action: build_action_callback(controller.clone()),
            snapshot: build_snapshot_callback(controller.clone()),
        }
    }

    /// Bindings with no controller behind them: actions are never applied.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            on_action: Callback::from(|_: PanelAction| None),
            snapshot: Callback::from(|()| None),
        }
    }
}

/// Panel click target: run the action on the shared controller and report
/// what it applied.
pub fn build_action_callback<S, R>(controller: SharedController<S, R>) -> ActionCallback
where
    S: PreferenceStore + 'static,
    R: RootAttributes + 'static,
{
    Callback::from(move |action: PanelAction| {
        let Ok(mut ctl) = controller.try_borrow_mut() else {
            log::warn!("dropping {action:?}: controller busy");
            return None;
        };
        match ctl.dispatch(action) {
            Ok(prefs) => Some(prefs),
            Err(err) => {
                log::error!("Failed to apply {action:?}: {err}");
                None
            }
        }
    })
}

pub fn build_snapshot_callback<S, R>(controller: SharedController<S, R>) -> SnapshotCallback
where
    S: PreferenceStore + 'static,
    R: RootAttributes + 'static,
{
    Callback::from(move |()| controller.try_borrow().ok().map(|ctl| ctl.current()))
}
