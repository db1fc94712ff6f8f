//! Widget configuration, loaded from JSON supplied by the host page.
use crate::error::A11yError;
use crate::panel::{PanelIds, PanelLabels};
use crate::prefs::PrefKey;
use serde::{Deserialize, Serialize};

/// Which stored keys a reset removes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResetScope {
    /// Remove only the three preference keys (with the configured prefix).
    #[default]
    ManagedKeys,
    /// Clear every key in the store, including data owned by other scripts.
    EntireStore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrefsConfig {
    /// Prepended to each storage key; empty keeps the bare `theme`/`fontSize`/`contrast` keys.
    pub key_prefix: String,
    pub reset_scope: ResetScope,
    /// Built-in label set to use when `labels` is absent.
    pub locale: String,
    pub labels: Option<PanelLabels>,
    pub ids: PanelIds,
}

impl Default for PrefsConfig {
    fn default() -> Self {
        Self {
            key_prefix: String::new(),
            reset_scope: ResetScope::default(),
            locale: PanelLabels::DEFAULT_LOCALE.to_string(),
            labels: None,
            ids: PanelIds::default(),
        }
    }
}

impl PrefsConfig {
    /// Parse a configuration document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`A11yError::Config`] if the JSON is malformed or has mistyped fields.
    pub fn from_json(json: &str) -> Result<Self, A11yError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn storage_key(&self, key: PrefKey) -> String {
        format!("{}{}", self.key_prefix, key.storage_key())
    }

    /// Custom labels if configured, otherwise the built-in set for `locale`.
    #[must_use]
    pub fn labels(&self) -> PanelLabels {
        self.labels
            .clone()
            .unwrap_or_else(|| PanelLabels::for_locale(&self.locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = PrefsConfig::from_json("{}").unwrap();
        assert_eq!(cfg, PrefsConfig::default());
        assert_eq!(cfg.storage_key(PrefKey::FontSize), "fontSize");
        assert_eq!(cfg.ids.panel, "accessibility-panel");
    }

    #[test]
    fn prefix_and_scope_are_read() {
        let cfg = PrefsConfig::from_json(
            r#"{"keyPrefix":"site.","resetScope":"entireStore","locale":"en"}"#,
        )
        .unwrap();
        assert_eq!(cfg.storage_key(PrefKey::Theme), "site.theme");
        assert_eq!(cfg.reset_scope, ResetScope::EntireStore);
        assert_eq!(cfg.labels(), PanelLabels::english());
    }

    #[test]
    fn mistyped_field_is_a_config_error() {
        let err = PrefsConfig::from_json(r#"{"resetScope":"everything"}"#).unwrap_err();
        assert!(matches!(err, A11yError::Config(_)));
        assert!(err.to_string().contains("config parsing error"));
    }

    #[test]
    fn partial_ids_keep_remaining_defaults() {
        let cfg = PrefsConfig::from_json(r#"{"ids":{"panel":"prefs"}}"#).unwrap();
        assert_eq!(cfg.ids.panel, "prefs");
        assert_eq!(cfg.ids.menu, "a11y-menu");
    }
}
