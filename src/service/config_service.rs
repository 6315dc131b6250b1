use crate::config::config::OutputFormat;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::ConversionError;

// 配置服務，負責委派給實際的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> Result<AppConfig, ConversionError> {
        self.config_port.get_config()
    }
}

// 每次呼叫重新建立，避免任何共享可變狀態
pub fn default_extensions() -> Vec<String> {
    vec![".dat".to_string(), ".log".to_string(), ".txt".to_string()]
}

// 預設配置適配器
pub struct DefaultConfigAdapter;

impl DefaultConfigAdapter {
    pub fn new() -> Self {
        DefaultConfigAdapter
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> Result<AppConfig, ConversionError> {
        Ok(AppConfig {
            input_folder: "data".to_string(),
            output_folder: "output".to_string(),
            file_extensions: default_extensions(),
            output_format: OutputFormat::Csv,
            has_headers: false,
            custom_delimiter: None, // 每個檔案各自自動偵測
            no_progress: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_adapter_matches_documented_defaults() {
        let config = DefaultConfigAdapter::new().get_config().unwrap();
        assert_eq!(config.input_folder, "data");
        assert_eq!(config.output_folder, "output");
        assert_eq!(config.file_extensions, default_extensions());
        assert_eq!(config.output_format, OutputFormat::Csv);
        assert!(!config.has_headers);
        assert_eq!(config.custom_delimiter, None);
        assert!(!config.no_progress);
    }

    #[test]
    fn default_extensions_are_fresh_per_call() {
        let mut first = default_extensions();
        first.push(".csv".to_string());
        assert_eq!(default_extensions(), vec![".dat", ".log", ".txt"]);
    }
}
