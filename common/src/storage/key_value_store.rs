use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, PoisonError};

use crate::config::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider,
    YamlConfigSerializer,
};
use crate::warn;

/// String-keyed persistent store holding string values.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError>;
}

/// Flat YAML mapping of strings, kept behind a content provider.
pub struct YamlKeyValueStore<TConfigContentProvider: ConfigContentProvider> {
    content_provider: TConfigContentProvider,
    serializer: YamlConfigSerializer,
}

impl YamlKeyValueStore<FileContentConfigProvider> {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentConfigProvider::new(file_path.to_string()))
    }
}

impl<TConfigContentProvider: ConfigContentProvider> YamlKeyValueStore<TConfigContentProvider> {
    pub fn new(content_provider: TConfigContentProvider) -> Self {
        Self {
            content_provider,
            serializer: YamlConfigSerializer::new(),
        }
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, ConfigError> {
        match self.content_provider.get_config_content()? {
            Some(content) if !content.trim().is_empty() => self.serializer.deserialize(&content),
            _ => Ok(BTreeMap::new()),
        }
    }
}

impl<TConfigContentProvider: ConfigContentProvider> KeyValueStore
    for YamlKeyValueStore<TConfigContentProvider>
{
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(ConfigError::Deserialize(e)) => {
                warn!("Discarding unreadable store content: {}", e);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };

        entries.insert(key.to_string(), value.to_string());
        let content = self.serializer.serialize(&entries)?;
        self.content_provider.set_config_content(&content)
    }
}

/// Process-local store; clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryContentProvider;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_store_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_yaml_store_round_trip_through_file() {
        let file_path = get_temp_file_path();
        let mut store = YamlKeyValueStore::from_yaml_file(&file_path);
        assert_eq!(store.get("snakeHighScore").unwrap(), None);

        store.set("snakeHighScore", "15").unwrap();
        let reopened = YamlKeyValueStore::from_yaml_file(&file_path);
        assert_eq!(reopened.get("snakeHighScore").unwrap().as_deref(), Some("15"));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_yaml_store_keeps_other_keys() {
        let provider = MemoryContentProvider::with_content("other: value\n");
        let mut store = YamlKeyValueStore::new(provider.clone());
        store.set("snakeHighScore", "3").unwrap();

        let reopened = YamlKeyValueStore::new(provider);
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("value"));
        assert_eq!(reopened.get("snakeHighScore").unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn test_yaml_store_malformed_content() {
        let provider = MemoryContentProvider::with_content("- not\n- a\n- map\n");
        let mut store = YamlKeyValueStore::new(provider);
        assert!(store.get("snakeHighScore").is_err());

        store.set("snakeHighScore", "4").unwrap();
        assert_eq!(store.get("snakeHighScore").unwrap().as_deref(), Some("4"));
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let mut store = MemoryKeyValueStore::new();
        let observer = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(observer.get("k").unwrap().as_deref(), Some("v"));
    }
}
