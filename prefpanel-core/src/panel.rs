//! Platform-neutral description of the floating preference panel.
use crate::PanelHost;
use crate::prefs::{Contrast, FontSize, PrefKey, PreferenceValue, Theme};
use serde::{Deserialize, Serialize};

/// What a panel button does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelAction {
    SetTheme(Theme),
    SetFontSize(FontSize),
    SetContrast(Contrast),
    Reset,
}

impl PanelAction {
    /// The preference written by this action; `None` for reset.
    #[must_use]
    pub const fn value(self) -> Option<PreferenceValue> {
        match self {
            Self::SetTheme(v) => Some(PreferenceValue::Theme(v)),
            Self::SetFontSize(v) => Some(PreferenceValue::FontSize(v)),
            Self::SetContrast(v) => Some(PreferenceValue::Contrast(v)),
            Self::Reset => None,
        }
    }
}

impl From<PreferenceValue> for PanelAction {
    fn from(value: PreferenceValue) -> Self {
        match value {
            PreferenceValue::Theme(v) => Self::SetTheme(v),
            PreferenceValue::FontSize(v) => Self::SetFontSize(v),
            PreferenceValue::Contrast(v) => Self::SetContrast(v),
        }
    }
}

/// Element ids used by the injected markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelIds {
    /// Identity marker checked before injecting a second panel.
    pub panel: String,
    pub toggle: String,
    pub menu: String,
    /// Polite live region that announces changes.
    pub status: String,
}

impl Default for PanelIds {
    fn default() -> Self {
        Self {
            panel: "accessibility-panel".to_string(),
            toggle: "a11y-toggle".to_string(),
            menu: "a11y-menu".to_string(),
            status: "a11y-status".to_string(),
        }
    }
}

/// Every visible string on the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelLabels {
    pub title: String,
    pub toggle_title: String,
    pub theme_heading: String,
    pub theme_light: String,
    pub theme_dark: String,
    pub font_size_heading: String,
    pub font_small: String,
    pub font_normal: String,
    pub font_large: String,
    pub contrast_heading: String,
    pub contrast_normal: String,
    pub contrast_high: String,
    pub reset: String,
}

impl Default for PanelLabels {
    fn default() -> Self {
        Self::russian()
    }
}

impl PanelLabels {
    pub const DEFAULT_LOCALE: &'static str = "ru";

    #[must_use]
    pub fn russian() -> Self {
        Self {
            title: "Настройки доступности".to_string(),
            toggle_title: "Accessibility Settings".to_string(),
            theme_heading: "Тема".to_string(),
            theme_light: "🌞 Светлая".to_string(),
            theme_dark: "🌙 Темная".to_string(),
            font_size_heading: "Размер шрифта".to_string(),
            font_small: "A".to_string(),
            font_normal: "A+".to_string(),
            font_large: "A++".to_string(),
            contrast_heading: "Контраст".to_string(),
            contrast_normal: "Обычный".to_string(),
            contrast_high: "Высокий".to_string(),
            reset: "Сбросить".to_string(),
        }
    }

    #[must_use]
    pub fn english() -> Self {
        Self {
            title: "Accessibility settings".to_string(),
            toggle_title: "Accessibility Settings".to_string(),
            theme_heading: "Theme".to_string(),
            theme_light: "🌞 Light".to_string(),
            theme_dark: "🌙 Dark".to_string(),
            font_size_heading: "Font size".to_string(),
            font_small: "A".to_string(),
            font_normal: "A+".to_string(),
            font_large: "A++".to_string(),
            contrast_heading: "Contrast".to_string(),
            contrast_normal: "Normal".to_string(),
            contrast_high: "High".to_string(),
            reset: "Reset".to_string(),
        }
    }

    /// Built-in labels for `code`; unknown codes get the default locale.
    #[must_use]
    pub fn for_locale(code: &str) -> Self {
        match code {
            "en" => Self::english(),
            "ru" => Self::russian(),
            other => {
                log::debug!("no built-in panel labels for locale {other:?}, using ru");
                Self::russian()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelButton {
    pub label: String,
    pub action: PanelAction,
}

/// A heading plus the buttons for one preference key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSection {
    pub key: PrefKey,
    pub heading: String,
    pub buttons: Vec<PanelButton>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelModel {
    pub ids: PanelIds,
    pub title: String,
    pub toggle_title: String,
    pub sections: Vec<PanelSection>,
    pub reset: PanelButton,
}

fn button(label: &str, action: PanelAction) -> PanelButton {
    PanelButton {
        label: label.to_string(),
        action,
    }
}

impl PanelModel {
    #[must_use]
    pub fn build(labels: &PanelLabels, ids: &PanelIds) -> Self {
        let sections = vec![
            PanelSection {
                key: PrefKey::Theme,
                heading: labels.theme_heading.clone(),
                buttons: vec![
                    button(&labels.theme_light, PanelAction::SetTheme(Theme::Light)),
                    button(&labels.theme_dark, PanelAction::SetTheme(Theme::Dark)),
                ],
            },
            PanelSection {
                key: PrefKey::FontSize,
                heading: labels.font_size_heading.clone(),
                buttons: vec![
                    button(&labels.font_small, PanelAction::SetFontSize(FontSize::Small)),
                    button(&labels.font_normal, PanelAction::SetFontSize(FontSize::Normal)),
                    button(&labels.font_large, PanelAction::SetFontSize(FontSize::Large)),
                ],
            },
            PanelSection {
                key: PrefKey::Contrast,
                heading: labels.contrast_heading.clone(),
                buttons: vec![
                    button(&labels.contrast_normal, PanelAction::SetContrast(Contrast::Normal)),
                    button(&labels.contrast_high, PanelAction::SetContrast(Contrast::High)),
                ],
            },
        ];

        Self {
            ids: ids.clone(),
            title: labels.title.clone(),
            toggle_title: labels.toggle_title.clone(),
            sections,
            reset: button(&labels.reset, PanelAction::Reset),
        }
    }

    /// All action buttons, reset last.
    pub fn buttons(&self) -> impl Iterator<Item = &PanelButton> {
        self.sections
            .iter()
            .flat_map(|section| section.buttons.iter())
            .chain(std::iter::once(&self.reset))
    }

    /// Announcement text for `action`, e.g. `"Theme: 🌞 Light"`.
    #[must_use]
    pub fn announcement(&self, action: PanelAction) -> String {
        self.sections
            .iter()
            .find_map(|section| {
                section
                    .buttons
                    .iter()
                    .find(|b| b.action == action)
                    .map(|b| format!("{}: {}", section.heading, b.label))
            })
            .unwrap_or_else(|| self.reset.label.clone())
    }
}

/// Outcome of [`create_panel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMount {
    Created,
    AlreadyPresent,
}

/// Mount `model` on `host` unless a panel with the same id is already there.
///
/// # Errors
///
/// Returns the host's error if mounting fails.
pub fn create_panel<H: PanelHost>(
    host: &mut H,
    model: &PanelModel,
) -> Result<PanelMount, H::Error> {
    if host.contains_panel(&model.ids.panel) {
        log::debug!("panel #{} already present", model.ids.panel);
        return Ok(PanelMount::AlreadyPresent);
    }
    host.mount_panel(model)?;
    Ok(PanelMount::Created)
}
