use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a config once, validates it and caches it. A missing source yields `TConfig::default()`.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.to_string()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<TConfig>>, String> {
        self.config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.lock()?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let config_data_result = self.config_content_provider.get_config_content()?;
        if let Some(config_data) = config_data_result {
            let config = self.config_serializer.deserialize(&config_data)?;

            config
                .validate()
                .map_err(|e| format!("Config validation error: {}", e))?;

            *current = Some(config.clone());
            return Ok(config);
        }

        Ok(TConfig::default())
    }

    /// Reads the stored config without validating or caching it, for callers that patch it first.
    pub fn read_unvalidated_config(&self) -> Result<TConfig, String> {
        match self.config_content_provider.get_config_content()? {
            Some(config_data) => self.config_serializer.deserialize(&config_data),
            None => Ok(TConfig::default()),
        }
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;

        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self.lock()?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct BoardConfig {
        field_width: u32,
        field_height: u32,
    }

    impl Default for BoardConfig {
        fn default() -> Self {
            Self {
                field_width: 10,
                field_height: 10,
            }
        }
    }

    impl Validate for BoardConfig {
        fn validate(&self) -> Result<(), String> {
            if self.field_width < 2 || self.field_height < 2 {
                return Err("field dimensions must be at least 2x2".to_string());
            }
            Ok(())
        }
    }

    struct MemoryProvider {
        content: RefCell<Option<String>>,
        reads: RefCell<u32>,
    }

    impl MemoryProvider {
        fn new(content: Option<&str>) -> Self {
            Self {
                content: RefCell::new(content.map(str::to_string)),
                reads: RefCell::new(0),
            }
        }
    }

    impl ConfigContentProvider for &MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            *self.reads.borrow_mut() += 1;
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_missing_content_gives_default() {
        let provider = MemoryProvider::new(None);
        let manager: ConfigManager<_, BoardConfig> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), BoardConfig::default());
    }

    #[test]
    fn test_loaded_config_is_cached() {
        let provider = MemoryProvider::new(Some("field_width: 20\nfield_height: 4\n"));
        let manager: ConfigManager<_, BoardConfig> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());

        let first = manager.get_config().unwrap();
        let second = manager.get_config().unwrap();

        assert_eq!(first, BoardConfig { field_width: 20, field_height: 4 });
        assert_eq!(first, second);
        assert_eq!(*provider.reads.borrow(), 1);
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let provider = MemoryProvider::new(Some("field_width: 1\nfield_height: 4\n"));
        let manager: ConfigManager<_, BoardConfig> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());

        let err = manager.get_config().unwrap_err();
        assert!(err.starts_with("Config validation error"));
    }

    #[test]
    fn test_read_unvalidated_config_skips_validation_and_cache() {
        let provider = MemoryProvider::new(Some("field_width: 1\nfield_height: 4\n"));
        let manager: ConfigManager<_, BoardConfig> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());

        let config = manager.read_unvalidated_config().unwrap();
        assert_eq!(config, BoardConfig { field_width: 1, field_height: 4 });
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_set_config_validates_and_writes() {
        let provider = MemoryProvider::new(None);
        let manager: ConfigManager<_, BoardConfig> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());

        assert!(manager.set_config(&BoardConfig { field_width: 0, field_height: 3 }).is_err());
        assert!(provider.content.borrow().is_none());

        let config = BoardConfig { field_width: 6, field_height: 8 };
        manager.set_config(&config).unwrap();
        assert!(provider.content.borrow().as_ref().unwrap().contains("field_width: 6"));
        assert_eq!(manager.get_config().unwrap(), config);
    }
}
