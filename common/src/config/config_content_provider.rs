use std::io::ErrorKind;
use std::path::PathBuf;

/// Raw storage for a serialized config. `Ok(None)` means nothing has been stored yet.
pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.file_path.display(),
                err
            )),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.file_path, content).map_err(|e| {
            format!(
                "Failed to write config file {}: {}",
                self.file_path.display(),
                e
            )
        })
    }
}
