//! The preference controller: store in, document attributes out.
use crate::config::{PrefsConfig, ResetScope};
use crate::error::A11yError;
use crate::panel::PanelAction;
use crate::prefs::{Contrast, FontSize, PrefKey, PreferenceValue, Preferences, Theme};
use crate::{PreferenceStore, RootAttributes};

/// Owns the store and the root binding, and keeps the two consistent.
///
/// Every mutation is followed by a full reload so the root attributes always
/// mirror what a fresh [`load_preferences`](Self::load_preferences) would read.
/// If the store fails, the controller switches to session-only values for the
/// rest of its lifetime and keeps working.
pub struct PreferenceController<S, R>
where
    S: PreferenceStore,
    R: RootAttributes,
{
    store: S,
    root: R,
    config: PrefsConfig,
    session: Preferences,
    degraded: bool,
}

impl<S, R> PreferenceController<S, R>
where
    S: PreferenceStore,
    R: RootAttributes,
{
    pub fn new(store: S, root: R, config: PrefsConfig) -> Self {
        Self {
            store,
            root,
            config,
            session: Preferences::default(),
            degraded: false,
        }
    }

    /// Read all three keys and write them to the root element.
    ///
    /// # Errors
    ///
    /// Returns [`A11yError::Document`] if an attribute could not be written.
    /// Store failures are absorbed.
    pub fn load_preferences(&mut self) -> Result<Preferences, A11yError> {
        let prefs = if self.degraded {
            self.session
        } else {
            self.read_store()
        };
        self.session = prefs;
        self.apply(&prefs)?;
        Ok(prefs)
    }

    /// Persist one preference, then reload everything.
    ///
    /// # Errors
    ///
    /// Returns [`A11yError::Document`] if the reload could not update the root.
    pub fn set_preference(
        &mut self,
        value: impl Into<PreferenceValue>,
    ) -> Result<Preferences, A11yError> {
        let value = value.into();
        self.session.set(value);
        if !self.degraded {
            let key = self.config.storage_key(value.key());
            if let Err(err) = self.store.set(&key, value.as_str()) {
                self.degrade("write", &err);
            }
        }
        log::debug!("preference set: {value}");
        self.load_preferences()
    }

    /// String form used by the global JS entry points.
    ///
    /// # Errors
    ///
    /// Returns [`A11yError::UnknownKey`] or [`A11yError::InvalidPreference`]
    /// before touching the store, or a document error from the reload.
    pub fn set_preference_str(&mut self, key: &str, value: &str) -> Result<Preferences, A11yError> {
        let key: PrefKey = key.parse()?;
        let value = PreferenceValue::parse(key, value)?;
        self.set_preference(value)
    }

    /// # Errors
    ///
    /// See [`set_preference`](Self::set_preference).
    pub fn set_theme(&mut self, theme: Theme) -> Result<Preferences, A11yError> {
        self.set_preference(theme)
    }

    /// # Errors
    ///
    /// See [`set_preference`](Self::set_preference).
    pub fn set_font_size(&mut self, size: FontSize) -> Result<Preferences, A11yError> {
        self.set_preference(size)
    }

    /// # Errors
    ///
    /// See [`set_preference`](Self::set_preference).
    pub fn set_contrast(&mut self, contrast: Contrast) -> Result<Preferences, A11yError> {
        self.set_preference(contrast)
    }

    /// Drop stored preferences and fall back to defaults.
    ///
    /// With [`ResetScope::EntireStore`] every key in the store is cleared.
    /// Removal is attempted even in session-only mode: a store that refuses
    /// writes (quota exceeded) usually still accepts removals.
    ///
    /// # Errors
    ///
    /// Returns [`A11yError::Document`] if the reload could not update the root.
    pub fn reset(&mut self) -> Result<Preferences, A11yError> {
        self.session = Preferences::default();
        let outcome = match self.config.reset_scope {
            ResetScope::ManagedKeys => PrefKey::ALL
                .into_iter()
                .try_for_each(|key| self.store.remove(&self.config.storage_key(key))),
            ResetScope::EntireStore => self.store.clear(),
        };
        if let Err(err) = outcome {
            self.degrade("reset", &err);
        }
        log::info!("accessibility preferences reset ({:?})", self.config.reset_scope);
        self.load_preferences()
    }

    /// Run the operation bound to a panel button.
    ///
    /// # Errors
    ///
    /// See [`set_preference`](Self::set_preference) and [`reset`](Self::reset).
    pub fn dispatch(&mut self, action: PanelAction) -> Result<Preferences, A11yError> {
        match action.value() {
            Some(value) => self.set_preference(value),
            None => self.reset(),
        }
    }

    /// Values most recently applied to the root.
    #[must_use]
    pub const fn current(&self) -> Preferences {
        self.session
    }

    /// True once a store failure has switched the controller to session-only values.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }

    #[must_use]
    pub const fn config(&self) -> &PrefsConfig {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn root(&self) -> &R {
        &self.root
    }

    fn read_store(&mut self) -> Preferences {
        let mut prefs = Preferences::default();
        for key in PrefKey::ALL {
            match self.store.get(&self.config.storage_key(key)) {
                Ok(Some(raw)) => match PreferenceValue::parse(key, &raw) {
                    Ok(value) => prefs.set(value),
                    Err(err) => log::warn!("ignoring stored preference: {err}"),
                },
                Ok(None) => {}
                Err(err) => {
                    self.degrade("read", &err);
                    return self.session;
                }
            }
        }
        prefs
    }

    fn degrade(&mut self, op: &str, err: &S::Error) {
        if !self.degraded {
            let err = A11yError::StoreUnavailable(err.to_string());
            log::warn!("{err} during {op}; keeping preferences for this session only");
        }
        self.degraded = true;
    }

    fn apply(&mut self, prefs: &Preferences) -> Result<(), A11yError> {
        let mut first_err = None;
        for (name, value) in prefs.attributes() {
            if let Err(err) = self.root.set_attribute(name, value) {
                log::error!("failed to set {name}={value}: {err}");
                if first_err.is_none() {
                    first_err = Some(A11yError::Document(err.to_string()));
                }
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryRoot, MemoryStore};

    fn controller(store: MemoryStore) -> PreferenceController<MemoryStore, MemoryRoot> {
        PreferenceController::new(store, MemoryRoot::default(), PrefsConfig::default())
    }

    fn root_attr(c: &PreferenceController<MemoryStore, MemoryRoot>, name: &str) -> String {
        c.root().attribute(name).unwrap_or_default()
    }

    #[test]
    fn fresh_session_applies_defaults() {
        let mut c = controller(MemoryStore::new());
        let prefs = c.load_preferences().unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(root_attr(&c, "data-theme"), "dark");
        assert_eq!(root_attr(&c, "data-font-size"), "normal");
        assert_eq!(root_attr(&c, "data-contrast"), "normal");
        assert!(c.store().is_empty(), "loading must not write defaults");
    }

    #[test]
    fn stored_values_are_applied() {
        let mut c = controller(MemoryStore::with_entries([
            ("theme", "light"),
            ("contrast", "high"),
        ]));
        c.load_preferences().unwrap();
        assert_eq!(root_attr(&c, "data-theme"), "light");
        assert_eq!(root_attr(&c, "data-font-size"), "normal");
        assert_eq!(root_attr(&c, "data-contrast"), "high");
    }

    #[test]
    fn garbage_stored_value_falls_back_to_default() {
        let mut c = controller(MemoryStore::with_entries([("fontSize", "huge")]));
        let prefs = c.load_preferences().unwrap();
        assert_eq!(prefs.font_size, FontSize::Normal);
        assert!(!c.is_degraded());
    }

    #[test]
    fn set_font_size_persists_and_applies() {
        let mut c = controller(MemoryStore::new());
        c.load_preferences().unwrap();
        c.set_font_size(FontSize::Large).unwrap();
        assert_eq!(root_attr(&c, "data-font-size"), "large");
        assert_eq!(
            c.store().get("fontSize").unwrap().as_deref(),
            Some("large")
        );
    }

    #[test]
    fn string_entry_point_rejects_out_of_domain_values() {
        let mut c = controller(MemoryStore::new());
        let err = c.set_preference_str("theme", "sepia").unwrap_err();
        assert!(matches!(err, A11yError::InvalidPreference { .. }));
        let err = c.set_preference_str("lineHeight", "tall").unwrap_err();
        assert!(matches!(err, A11yError::UnknownKey(_)));
        assert!(c.store().is_empty());
    }

    #[test]
    fn reset_only_removes_managed_keys_by_default() {
        let mut c = controller(MemoryStore::with_entries([
            ("theme", "light"),
            ("session-token", "abc"),
        ]));
        c.reset().unwrap();
        assert_eq!(root_attr(&c, "data-theme"), "dark");
        assert_eq!(
            c.store().get("session-token").unwrap().as_deref(),
            Some("abc")
        );
        assert_eq!(c.store().len(), 1);
    }

    #[test]
    fn entire_store_reset_clears_unrelated_keys() {
        let config = PrefsConfig {
            reset_scope: ResetScope::EntireStore,
            ..PrefsConfig::default()
        };
        let store = MemoryStore::with_entries([("theme", "light"), ("other", "x")]);
        let mut c = PreferenceController::new(store, MemoryRoot::default(), config);
        c.reset().unwrap();
        assert!(c.store().is_empty());
    }

    #[test]
    fn dispatch_routes_panel_actions() {
        let mut c = controller(MemoryStore::new());
        let prefs = c
            .dispatch(PanelAction::SetContrast(Contrast::High))
            .unwrap();
        assert_eq!(prefs.contrast, Contrast::High);
        let prefs = c.dispatch(PanelAction::Reset).unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn prefixed_keys_are_used_for_storage() {
        let config = PrefsConfig {
            key_prefix: "cyber.".to_string(),
            ..PrefsConfig::default()
        };
        let mut c = PreferenceController::new(MemoryStore::new(), MemoryRoot::default(), config);
        c.set_theme(Theme::Light).unwrap();
        assert_eq!(
            c.store().get("cyber.theme").unwrap().as_deref(),
            Some("light")
        );
        assert_eq!(c.store().get("theme").unwrap(), None);
    }
}
