use prefpanel_core::{PanelAction, PanelSection, Preferences};
use yew::prelude::*;

/// `data-action` value for a button, e.g. `theme=light` or `reset`.
pub fn action_tag(action: PanelAction) -> String {
    action
        .value()
        .map_or_else(|| "reset".to_string(), |value| value.to_string())
}

#[derive(Properties, PartialEq, Clone)]
pub struct PanelSectionViewProps {
    pub section: PanelSection,
    pub current: Preferences,
    pub on_activate: Callback<PanelAction>,
}

#[function_component(PanelSectionView)]
pub fn panel_section_view(p: &PanelSectionViewProps) -> Html {
    let active = p.current.get(p.section.key);

    html! {
      <div class="a11y-section" data-key={p.section.key.storage_key()}>
        <h4>{ p.section.heading.clone() }</h4>
        <div class="btn-group" role="group" aria-label={p.section.heading.clone()}>
          { for p.section.buttons.iter().map(|button| {
              let action = button.action;
              let pressed = action.value() == Some(active);
              let onclick = {
                  let on = p.on_activate.clone();
                  Callback::from(move |_: MouseEvent| on.emit(action))
              };
              html!{
                <button type="button"
                        data-action={action_tag(action)}
                        aria-pressed={pressed.to_string()}
                        {onclick}>
                  { button.label.clone() }
                </button>
              }
          }) }
        </div>
      </div>
    }
}
