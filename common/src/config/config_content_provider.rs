use std::io::ErrorKind;
use std::sync::{Arc, Mutex, PoisonError};

use super::ConfigError;

/// Raw text backing for a config document. `None` means nothing was stored yet.
pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError>;
    fn set_config_content(&self, content: &str) -> Result<(), ConfigError>;
}

#[derive(Clone, Debug)]
pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Read {
                path: self.file_path.clone(),
                source,
            }),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        std::fs::write(&self.file_path, content).map_err(|source| ConfigError::Write {
            path: self.file_path.clone(),
            source,
        })
    }
}

/// Shared in-process buffer; clones see the same content.
#[derive(Clone, Debug, Default)]
pub struct MemoryContentProvider {
    content: Arc<Mutex<Option<String>>>,
}

impl MemoryContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        Self {
            content: Arc::new(Mutex::new(Some(content.to_string()))),
        }
    }
}

impl ConfigContentProvider for MemoryContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        Ok(self
            .content
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        *self.content.lock().unwrap_or_else(PoisonError::into_inner) = Some(content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_content_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let provider = FileContentConfigProvider::new(get_temp_file_path());
        let content = provider.get_config_content();
        assert!(matches!(content, Ok(None)));
    }

    #[test]
    fn test_file_content_round_trip() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());

        assert!(provider.set_config_content("snakeHighScore: '7'\n").is_ok());
        let content = provider.get_config_content().unwrap();
        assert_eq!(content.as_deref(), Some("snakeHighScore: '7'\n"));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_memory_provider_clones_share_content() {
        let provider = MemoryContentProvider::new();
        let clone = provider.clone();
        assert!(matches!(clone.get_config_content(), Ok(None)));

        provider.set_config_content("a: b").unwrap();
        assert_eq!(clone.get_config_content().unwrap().as_deref(), Some("a: b"));
    }
}
