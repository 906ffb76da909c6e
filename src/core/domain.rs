use std::path::PathBuf;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DATA_FILE: &str = "library_data.txt";

// Configuration abstracts config options for the console library system.
// Values are fixed in the binary; nothing is read from arguments or environment.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub data_file: PathBuf,
    pub clear_screen: bool,
    pub log_level: String,
    pub json_logs: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            clear_screen: true,
            log_level: "warn".to_string(),
            json_logs: false,
        }
    }

    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(PathBuf::from("library_data.txt"), config.data_file);
        assert!(config.clear_screen);
        assert_eq!("warn", config.log_level.as_str());
        assert!(!config.json_logs);
    }

    #[test]
    fn test_should_override_config() {
        let config = Configuration::new("test")
            .with_data_file("/tmp/books.txt")
            .with_clear_screen(false);
        assert_eq!(PathBuf::from("/tmp/books.txt"), config.data_file);
        assert!(!config.clear_screen);
    }
}
