use super::interactions::{
    ActionCallback, SnapshotCallback, activate_handler, keydown_handler, toggle_handler,
};
use super::section::{PanelSectionView, action_tag};
use prefpanel_core::{PanelAction, PanelModel, Preferences};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub model: PanelModel,
    /// Preferences applied when the panel was mounted.
    #[prop_or_default]
    pub initial: Preferences,
    pub on_action: ActionCallback,
    pub snapshot: SnapshotCallback,
}

#[function_component(A11yPanel)]
pub fn a11y_panel(p: &Props) -> Html {
    let open = use_state(|| false);
    let current = use_state(|| p.initial);
    let status = use_state(String::new);
    let toggle_ref = use_node_ref();

    let ids = &p.model.ids;
    let title_id = format!("{}-title", ids.menu);
    let activate = activate_handler(
        &p.model,
        current.clone(),
        status.clone(),
        p.on_action.clone(),
    );
    let on_toggle = toggle_handler(open.clone(), current.clone(), p.snapshot.clone());
    let on_keydown = keydown_handler(open.clone(), toggle_ref.clone());
    let on_reset = {
        let activate = activate.clone();
        Callback::from(move |_: MouseEvent| activate.emit(PanelAction::Reset))
    };

    html! {
      <>
        <button id={ids.toggle.clone()}
                class="a11y-toggle"
                type="button"
                ref={toggle_ref}
                title={p.model.toggle_title.clone()}
                aria-label={p.model.toggle_title.clone()}
                aria-expanded={(*open).to_string()}
                aria-controls={ids.menu.clone()}
                onclick={on_toggle}>
          <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <circle cx="12" cy="12" r="10" />
            <path d="M12 8v4M12 16h.01" />
          </svg>
        </button>
        <div id={ids.menu.clone()}
             class={classes!("a11y-menu", (!*open).then_some("hidden"))}
             role="dialog"
             aria-labelledby={title_id.clone()}
             onkeydown={on_keydown}>
          <h3 id={title_id}>{ p.model.title.clone() }</h3>
          { for p.model.sections.iter().map(|section| html!{
              <PanelSectionView section={section.clone()} current={*current} on_activate={activate.clone()} />
          }) }
          <button type="button"
                  class="a11y-reset"
                  data-action={action_tag(PanelAction::Reset)}
                  onclick={on_reset}>
            { p.model.reset.label.clone() }
          </button>
          <p id={ids.status.clone()} class="sr-only" aria-live="polite">{ (*status).clone() }</p>
        </div>
      </>
    }
}
