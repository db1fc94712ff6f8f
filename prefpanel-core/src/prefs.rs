//! Preference keys, their value domains, and the three-value snapshot.
use crate::error::A11yError;
use crate::panel::PanelAction;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Colour scheme applied through `data-theme`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Base text size applied through `data-font-size`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Normal,
    Large,
}

/// Contrast level applied through `data-contrast`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contrast {
    #[default]
    Normal,
    High,
}

impl Theme {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl FontSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Normal, Self::Large];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Normal => "normal",
            Self::Large => "large",
        }
    }
}

impl Contrast {
    pub const ALL: [Self; 2] = [Self::Normal, Self::High];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::High => "high",
        }
    }
}

macro_rules! domain_parse {
    ($ty:ty, $key:expr) => {
        impl FromStr for $ty {
            type Err = A11yError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|candidate| candidate.as_str() == s)
                    .ok_or_else(|| A11yError::InvalidPreference {
                        key: $key,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

domain_parse!(Theme, PrefKey::Theme);
domain_parse!(FontSize, PrefKey::FontSize);
domain_parse!(Contrast, PrefKey::Contrast);

/// One of the three managed preference keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrefKey {
    Theme,
    FontSize,
    Contrast,
}

impl PrefKey {
    pub const ALL: [Self; 3] = [Self::Theme, Self::FontSize, Self::Contrast];

    /// Key under which the value lives in the store (before any prefix).
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::FontSize => "fontSize",
            Self::Contrast => "contrast",
        }
    }

    /// Attribute written on the document root for stylesheets to match on.
    #[must_use]
    pub const fn attribute_name(self) -> &'static str {
        match self {
            Self::Theme => "data-theme",
            Self::FontSize => "data-font-size",
            Self::Contrast => "data-contrast",
        }
    }

    #[must_use]
    pub fn default_value(self) -> PreferenceValue {
        Preferences::default().get(self)
    }
}

impl fmt::Display for PrefKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_key())
    }
}

impl FromStr for PrefKey {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.storage_key() == s)
            .ok_or_else(|| A11yError::UnknownKey(s.to_string()))
    }
}

/// A key paired with a value from that key's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceValue {
    Theme(Theme),
    FontSize(FontSize),
    Contrast(Contrast),
}

impl PreferenceValue {
    /// Parse `raw` against the domain of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`A11yError::InvalidPreference`] when `raw` is not in the domain.
    pub fn parse(key: PrefKey, raw: &str) -> Result<Self, A11yError> {
        Ok(match key {
            PrefKey::Theme => Self::Theme(raw.parse()?),
            PrefKey::FontSize => Self::FontSize(raw.parse()?),
            PrefKey::Contrast => Self::Contrast(raw.parse()?),
        })
    }

    #[must_use]
    pub const fn key(self) -> PrefKey {
        match self {
            Self::Theme(_) => PrefKey::Theme,
            Self::FontSize(_) => PrefKey::FontSize,
            Self::Contrast(_) => PrefKey::Contrast,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Theme(v) => v.as_str(),
            Self::FontSize(v) => v.as_str(),
            Self::Contrast(v) => v.as_str(),
        }
    }
}

impl fmt::Display for PreferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key(), self.as_str())
    }
}

impl From<Theme> for PreferenceValue {
    fn from(value: Theme) -> Self {
        Self::Theme(value)
    }
}

impl From<FontSize> for PreferenceValue {
    fn from(value: FontSize) -> Self {
        Self::FontSize(value)
    }
}

impl From<Contrast> for PreferenceValue {
    fn from(value: Contrast) -> Self {
        Self::Contrast(value)
    }
}

/// Snapshot of all three preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub font_size: FontSize,
    pub contrast: Contrast,
}

impl Preferences {
    #[must_use]
    pub const fn get(&self, key: PrefKey) -> PreferenceValue {
        match key {
            PrefKey::Theme => PreferenceValue::Theme(self.theme),
            PrefKey::FontSize => PreferenceValue::FontSize(self.font_size),
            PrefKey::Contrast => PreferenceValue::Contrast(self.contrast),
        }
    }

    pub const fn set(&mut self, value: PreferenceValue) {
        match value {
            PreferenceValue::Theme(v) => self.theme = v,
            PreferenceValue::FontSize(v) => self.font_size = v,
            PreferenceValue::Contrast(v) => self.contrast = v,
        }
    }

    /// Snapshot that results from running `action` against `self`.
    #[must_use]
    pub fn apply(mut self, action: PanelAction) -> Self {
        match action.value() {
            Some(value) => {
                self.set(value);
                self
            }
            None => Self::default(),
        }
    }

    /// `(attribute, value)` pairs in key order.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        PrefKey::ALL
            .into_iter()
            .map(move |key| (key.attribute_name(), self.get(key).as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.font_size, FontSize::Normal);
        assert_eq!(prefs.contrast, Contrast::Normal);
    }

    #[test]
    fn parse_rejects_values_from_another_domain() {
        let err = PreferenceValue::parse(PrefKey::Theme, "high").unwrap_err();
        assert!(matches!(
            err,
            A11yError::InvalidPreference { key: PrefKey::Theme, ref value } if value == "high"
        ));
        assert_eq!(
            PreferenceValue::parse(PrefKey::Contrast, "high").unwrap(),
            PreferenceValue::Contrast(Contrast::High)
        );
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Dark".parse::<Theme>().is_err());
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
    }

    #[test]
    fn key_names_follow_storage_and_attribute_conventions() {
        assert_eq!("fontSize".parse::<PrefKey>().unwrap(), PrefKey::FontSize);
        assert_eq!(PrefKey::FontSize.attribute_name(), "data-font-size");
        assert!(matches!(
            "font-size".parse::<PrefKey>(),
            Err(A11yError::UnknownKey(_))
        ));
    }

    #[test]
    fn apply_reset_returns_defaults() {
        let prefs = Preferences {
            theme: Theme::Light,
            font_size: FontSize::Large,
            contrast: Contrast::High,
        };
        assert_eq!(prefs.apply(PanelAction::Reset), Preferences::default());
        let next = prefs.apply(PanelAction::SetFontSize(FontSize::Small));
        assert_eq!(next.font_size, FontSize::Small);
        assert_eq!(next.theme, Theme::Light);
    }

    #[test]
    fn serde_uses_wire_strings() {
        let prefs = Preferences {
            theme: Theme::Light,
            font_size: FontSize::Large,
            contrast: Contrast::High,
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(
            json,
            r#"{"theme":"light","fontSize":"large","contrast":"high"}"#
        );
    }

    #[test]
    fn attributes_are_listed_in_key_order() {
        let attrs: Vec<_> = Preferences::default().attributes().collect();
        assert_eq!(
            attrs,
            vec![
                ("data-theme", "dark"),
                ("data-font-size", "normal"),
                ("data-contrast", "normal"),
            ]
        );
    }
}
