use crate::config::config::OutputFormat;
use crate::error::ConversionError;
use crate::utils::convert::BatchResult;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input_folder: String,
    pub output_folder: String,
    pub file_extensions: Vec<String>,
    pub output_format: OutputFormat,
    pub has_headers: bool,
    pub custom_delimiter: Option<char>,
    pub no_progress: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> Result<AppConfig, ConversionError>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> Result<BatchResult, ConversionError>;
}
