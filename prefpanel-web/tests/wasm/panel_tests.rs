#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use prefpanel_core::{
    FontSize, PanelIds, PanelLabels, PanelModel, PanelMount, PrefKey, PreferenceController,
    PreferenceStore, Preferences, PrefsConfig, RootAttributes, Theme, create_panel,
};
use prefpanel_web::dom;
use prefpanel_web::handlers::{PanelBindings, SharedController};
use prefpanel_web::mount::DocumentPanelHost;
use prefpanel_web::root::DocumentRoot;
use prefpanel_web::storage::LocalStorageStore;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn clean_store() -> LocalStorageStore {
    assert!(
        LocalStorageStore::open().is_available(),
        "test browser should expose localStorage"
    );
    let mut store = LocalStorageStore::from_storage(dom::local_storage().expect("storage"));
    for key in PrefKey::ALL {
        store.remove(key.storage_key()).expect("remove key");
    }
    store
}

fn document_root() -> DocumentRoot {
    DocumentRoot::from_document(&dom::document().expect("document")).expect("root element")
}

fn ids(prefix: &str) -> PanelIds {
    PanelIds {
        panel: format!("{prefix}-panel"),
        toggle: format!("{prefix}-toggle"),
        menu: format!("{prefix}-menu"),
        status: format!("{prefix}-status"),
    }
}

#[wasm_bindgen_test]
fn local_storage_store_reads_back_writes() {
    let mut store = clean_store();
    store.set("fontSize", "large").expect("set");
    assert_eq!(store.get("fontSize").expect("get").as_deref(), Some("large"));
    store.remove("fontSize").expect("remove");
    assert_eq!(store.get("fontSize").expect("get"), None);
}

#[wasm_bindgen_test]
fn controller_writes_html_attributes_and_storage() {
    let mut ctl = PreferenceController::new(clean_store(), document_root(), PrefsConfig::default());
    assert_eq!(ctl.load_preferences().expect("load"), Preferences::default());

    ctl.set_font_size(FontSize::Large).expect("set font size");
    let html = dom::document()
        .and_then(|d| d.document_element())
        .expect("html element");
    assert_eq!(html.get_attribute("data-font-size").as_deref(), Some("large"));
    assert_eq!(
        dom::local_storage()
            .expect("storage")
            .get_item("fontSize")
            .expect("get_item")
            .as_deref(),
        Some("large")
    );

    ctl.set_theme(Theme::Light).expect("set theme");
    ctl.reset().expect("reset");
    assert_eq!(ctl.root().attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(html.get_attribute("data-font-size").as_deref(), Some("normal"));
}

#[wasm_bindgen_test]
fn create_panel_twice_leaves_one_panel() {
    let doc = dom::document().expect("document");
    let model = PanelModel::build(&PanelLabels::english(), &ids("twice"));
    let mut host =
        DocumentPanelHost::new(doc.clone(), PanelBindings::detached(), Preferences::default());

    assert_eq!(create_panel(&mut host, &model).expect("mount"), PanelMount::Created);
    assert_eq!(
        create_panel(&mut host, &model).expect("mount again"),
        PanelMount::AlreadyPresent
    );
    let found = doc.query_selector_all("#twice-panel").expect("query");
    assert_eq!(found.length(), 1);
}

#[wasm_bindgen_test]
fn clicking_a_panel_button_updates_the_root() {
    let controller: SharedController = Rc::new(RefCell::new(PreferenceController::new(
        clean_store(),
        document_root(),
        PrefsConfig::default(),
    )));
    let initial = controller.borrow_mut().load_preferences().expect("load");
    let doc = dom::document().expect("document");
    let model = PanelModel::build(&PanelLabels::english(), &ids("click"));
    let mut host = DocumentPanelHost::new(
        doc.clone(),
        PanelBindings::for_controller(&controller),
        initial,
    );
    create_panel(&mut host, &model).expect("mount");

    let button: HtmlElement = doc
        .query_selector("#click-panel button[data-action='contrast=high']")
        .expect("query button")
        .expect("contrast button exists")
        .dyn_into()
        .expect("cast to element");
    button.click();

    let html = doc.document_element().expect("html element");
    assert_eq!(html.get_attribute("data-contrast").as_deref(), Some("high"));
    assert_eq!(
        controller.borrow().current().contrast,
        prefpanel_core::Contrast::High
    );

    controller.borrow_mut().reset().expect("reset");
    assert_eq!(html.get_attribute("data-contrast").as_deref(), Some("normal"));
}
