//! Prefpanel core
//!
//! Platform-agnostic accessibility preferences: the three preference domains,
//! the controller that keeps a key-value store and the document root in sync,
//! and a neutral model of the floating preference panel. Browser bindings live
//! in `prefpanel-web`.

pub mod config;
pub mod controller;
pub mod error;
pub mod memory;
pub mod panel;
pub mod prefs;

pub use config::{PrefsConfig, ResetScope};
pub use controller::PreferenceController;
pub use error::A11yError;
pub use memory::{MemoryPanelHost, MemoryRoot, MemoryStore};
pub use panel::{
    PanelAction, PanelButton, PanelIds, PanelLabels, PanelModel, PanelMount, PanelSection,
    create_panel,
};
pub use prefs::{Contrast, FontSize, PrefKey, PreferenceValue, Preferences, Theme};

/// Trait for abstracting the persistent key-value store
/// Platform-specific implementations should provide this
pub trait PreferenceStore {
    type Error: std::error::Error + 'static;

    /// Read a raw value
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be accessed.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a raw value
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write (quota, disabled storage).
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove a single key
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be accessed.
    fn remove(&mut self, key: &str) -> Result<(), Self::Error>;

    /// Remove every key
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be accessed.
    fn clear(&mut self) -> Result<(), Self::Error>;
}

/// Attribute access on the document root element
pub trait RootAttributes {
    type Error: std::error::Error + 'static;

    /// Set a named attribute
    ///
    /// # Errors
    ///
    /// Returns an error if the attribute cannot be written.
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), Self::Error>;

    /// Current value of a named attribute, `None` when it is absent
    fn attribute(&self, name: &str) -> Option<String>;
}

/// Where the preference panel gets mounted
pub trait PanelHost {
    type Error: std::error::Error + 'static;

    /// Whether an element carrying `panel_id` is already present.
    fn contains_panel(&self, panel_id: &str) -> bool;

    /// Build and attach the panel described by `model`.
    ///
    /// # Errors
    ///
    /// Returns an error if the panel cannot be attached.
    fn mount_panel(&mut self, model: &PanelModel) -> Result<(), Self::Error>;
}
