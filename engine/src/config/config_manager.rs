use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config; the first successful load is kept
/// until [`ConfigManager::set_config`] replaces it.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
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
            config: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryContentConfigProvider;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        depth: u32,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self { depth: 9 }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.depth == 0 {
                return Err("depth must be positive".to_string());
            }
            Ok(())
        }
    }

    fn manager(content: Option<&str>) -> ConfigManager<MemoryContentConfigProvider, SampleConfig> {
        ConfigManager::new(
            MemoryContentConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_missing_content_gives_default() {
        assert_eq!(manager(None).get_config(), Ok(SampleConfig::default()));
    }

    #[test]
    fn test_loads_stored_content() {
        assert_eq!(
            manager(Some("depth: 4\n")).get_config(),
            Ok(SampleConfig { depth: 4 })
        );
    }

    #[test]
    fn test_invalid_content_rejected() {
        let result = manager(Some("depth: 0\n")).get_config();
        assert!(matches!(result, Err(ref e) if e.contains("validation")), "{:?}", result);
    }

    #[test]
    fn test_malformed_content_rejected() {
        let result = manager(Some("depth: [not a number")).get_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_set_config_persists_and_caches() {
        let manager = manager(None);
        manager.set_config(&SampleConfig { depth: 2 }).unwrap();

        assert_eq!(manager.get_config(), Ok(SampleConfig { depth: 2 }));
        let stored = manager.config_content_provider.get_config_content().unwrap();
        assert_eq!(stored.as_deref(), Some("depth: 2\n"));
    }

    #[test]
    fn test_set_invalid_config_rejected() {
        let manager = manager(None);
        assert!(manager.set_config(&SampleConfig { depth: 0 }).is_err());
        assert_eq!(manager.get_config(), Ok(SampleConfig::default()));
    }
}
