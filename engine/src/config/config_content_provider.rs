use std::io::ErrorKind;

pub trait ConfigContentProvider {
    /// `Ok(None)` when there is nothing stored yet.
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(self.file_path.as_str()) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("Failed to read config file {}: {}", self.file_path, err)),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(self.file_path.as_str(), content)
            .map_err(|e| format!("Failed to write config file {}: {}", self.file_path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        path.push(format!("snake_engine_provider_{}.yaml", std::process::id()));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_missing_file_is_none() {
        let provider = FileContentConfigProvider::new("/definitely/not/here/config.yaml".to_string());
        assert_eq!(provider.get_config_content(), Ok(None));
    }

    #[test]
    fn test_write_then_read() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider.set_config_content("field_width: 12\n").unwrap();
        assert_eq!(
            provider.get_config_content().unwrap().as_deref(),
            Some("field_width: 12\n")
        );
        std::fs::remove_file(file_path).unwrap();
    }
}
