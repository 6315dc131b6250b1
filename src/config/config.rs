use clap::{Parser, ValueEnum};
use crate::error::ConversionError;

#[derive(Parser, Clone)]
#[command(
    name = "file_to_csv",
    about = "將分隔文字資料檔轉換為標準 CSV 或 Excel 活頁簿",
    long_about = "一個將分隔文字資料檔（未知或不固定分隔符號）轉換為標準 CSV 或 Excel 活頁簿的工具，支援整個資料夾的批次轉換與分隔符號自動偵測。\n不帶任何參數執行時，以全部預設值進行批次轉換（輸入 data、輸出 output、CSV 格式）。\n使用 `--help` 查看詳細用法。"
)]
pub struct Cli {
    #[arg(default_value = "data")]
    pub input: String,
    #[arg(short, long, default_value = "output")]
    pub output: String,
    #[arg(long, default_value = ".dat,.log,.txt", value_delimiter = ',')]
    pub extensions: Vec<String>,
    #[arg(long, default_value = "csv")]
    pub format: OutputFormat,
    #[arg(long, default_value_t = false)]
    pub has_headers: bool,
    #[arg(long)]
    pub delimiter: Option<char>,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "info", value_parser = ["info", "warn", "error"])]
    pub log_level: String,
    #[arg(long, default_value_t = false)]
    pub interactive: bool,
}

#[derive(Clone, Copy, PartialEq, Debug, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Excel,
}

impl OutputFormat {
    // 輸出檔的副檔名（不含點）
    pub fn output_extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Excel => "xlsx",
        }
    }
}

pub fn is_valid_extension(extension: &str) -> bool {
    let invalid_chars = ['/', '\\', ':', '?', '"', '<', '>', '|'];
    extension.len() > 1 && extension.starts_with('.') && !extension.contains(&invalid_chars[..])
}

pub fn validate_extensions(extensions: &[String]) -> Result<(), ConversionError> {
    if extensions.is_empty() {
        return Err(ConversionError::InvalidConfig("副檔名清單不可為空".to_string()));
    }
    for extension in extensions {
        if !is_valid_extension(extension) {
            return Err(ConversionError::InvalidConfig(format!("無效的副檔名：{}", extension)));
        }
    }
    Ok(())
}

// csv 解析器以單一位元組為分隔符號，因此只接受 ASCII 字元
pub fn validate_delimiter(delimiter: Option<char>) -> Result<(), ConversionError> {
    if let Some(delimiter) = delimiter {
        if !delimiter.is_ascii() {
            return Err(ConversionError::InvalidConfig(format!(
                "分隔符號必須為單一 ASCII 字元：{}",
                delimiter
            )));
        }
    }
    Ok(())
}
