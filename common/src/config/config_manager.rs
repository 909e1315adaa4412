use std::cell::RefCell;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches one config value. A missing source yields `TConfig::default()`.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: RefCell<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
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
            config_serializer,
            config_content_provider,
            config: RefCell::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        if let Some(config) = self.config.borrow().as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Limits {
        max_names: u32,
    }

    impl Validate for Limits {
        fn validate(&self) -> Result<(), String> {
            if self.max_names == 0 {
                return Err("max_names must be positive".to_string());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryProvider {
        content: RefCell<Option<String>>,
        reads: Cell<usize>,
    }

    impl ConfigContentProvider for MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_missing_content_returns_default() {
        let manager: ConfigManager<_, Limits, _> =
            ConfigManager::new(MemoryProvider::default(), YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), Limits::default());
    }

    #[test]
    fn test_loaded_config_is_cached() {
        let provider = MemoryProvider::default();
        *provider.content.borrow_mut() = Some("max_names: 3\n".to_string());
        let manager: ConfigManager<_, Limits, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());

        assert_eq!(manager.get_config().unwrap(), Limits { max_names: 3 });
        assert_eq!(manager.get_config().unwrap(), Limits { max_names: 3 });
        assert_eq!(manager.config_content_provider.reads.get(), 1);
    }

    #[test]
    fn test_invalid_config_is_rejected_on_load_and_save() {
        let provider = MemoryProvider::default();
        *provider.content.borrow_mut() = Some("max_names: 0\n".to_string());
        let manager: ConfigManager<_, Limits, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());

        assert!(manager.get_config().is_err());
        assert!(manager.set_config(&Limits { max_names: 0 }).is_err());
        assert!(manager.set_config(&Limits { max_names: 5 }).is_ok());
        assert_eq!(manager.get_config().unwrap(), Limits { max_names: 5 });
    }
}
