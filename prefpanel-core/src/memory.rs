//! In-memory implementations of the controller seams.
//!
//! Used for tests and for hosts without a browser document.
use crate::panel::PanelModel;
use crate::{PanelHost, PreferenceStore, RootAttributes};
use std::collections::BTreeMap;
use std::convert::Infallible;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with `entries`, as if written by an earlier session.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), Self::Error> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.entries.clear();
        Ok(())
    }
}

/// Attribute map standing in for `<html>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRoot {
    attributes: BTreeMap<String, String>,
}

impl MemoryRoot {
    #[must_use]
    pub const fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}

impl RootAttributes for MemoryRoot {
    type Error = Infallible;

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        self.attributes.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

/// Records mounted panels instead of touching a document.
#[derive(Debug, Clone, Default)]
pub struct MemoryPanelHost {
    mounted: Vec<PanelModel>,
}

impl MemoryPanelHost {
    #[must_use]
    pub fn mounted(&self) -> &[PanelModel] {
        &self.mounted
    }
}

impl PanelHost for MemoryPanelHost {
    type Error = Infallible;

    fn contains_panel(&self, panel_id: &str) -> bool {
        self.mounted.iter().any(|m| m.ids.panel == panel_id)
    }

    fn mount_panel(&mut self, model: &PanelModel) -> Result<(), Self::Error> {
        self.mounted.push(model.clone());
        Ok(())
    }
}
