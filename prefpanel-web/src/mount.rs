//! Attaching the panel to `document.body`.
use crate::components::a11y_panel::{A11yPanel, Props};
use crate::handlers::PanelBindings;
use crate::root::DomError;
use prefpanel_core::{PanelHost, PanelModel, Preferences};
use web_sys::Document;
use yew::Renderer;

/// Class on the panel's mount element, matched by the injected stylesheet.
pub const PANEL_CLASS: &str = "a11y-panel";

/// Mounts [`A11yPanel`] into a fresh `<div>` appended to `<body>`.
pub struct DocumentPanelHost {
    document: Document,
    bindings: PanelBindings,
    initial: Preferences,
}

impl DocumentPanelHost {
    #[must_use]
    pub const fn new(document: Document, bindings: PanelBindings, initial: Preferences) -> Self {
        Self {
            document,
            bindings,
            initial,
        }
    }
}

impl PanelHost for DocumentPanelHost {
    type Error = DomError;

    fn contains_panel(&self, panel_id: &str) -> bool {
        self.document.get_element_by_id(panel_id).is_some()
    }

    fn mount_panel(&mut self, model: &PanelModel) -> Result<(), Self::Error> {
        let body = self.document.body().ok_or(DomError::NoBody)?;
        let root = self.document.create_element("div")?;
        root.set_id(&model.ids.panel);
        root.set_class_name(PANEL_CLASS);
        body.append_child(&root)?;

        let props = Props {
            model: model.clone(),
            initial: self.initial,
            on_action: self.bindings.on_action.clone(),
            snapshot: self.bindings.snapshot.clone(),
        };
        Renderer::<A11yPanel>::with_root_and_props(root, props).render();
        log::debug!("panel mounted as #{}", model.ids.panel);
        Ok(())
    }
}
