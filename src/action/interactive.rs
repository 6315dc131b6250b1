use dialoguer::{Confirm, Input, Select};
use std::io;

use crate::config::config::{validate_extensions, OutputFormat};
use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::ConversionError;
use crate::utils::detect::COMMON_DELIMITERS;

pub fn get_input_folder() -> io::Result<String> {
    Input::new()
        .with_prompt("請輸入資料檔所在資料夾（例如：./data，預設為 data）")
        .default("data".to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_output_folder() -> io::Result<String> {
    Input::new()
        .with_prompt("輸入輸出資料夾（例如：./output，預設為 output）")
        .default("output".to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_output_format() -> io::Result<OutputFormat> {
    let choice = Select::new()
        .with_prompt("選擇輸出格式（使用方向鍵選擇，按 Enter 確認）")
        .items(&[
            "CSV - 以逗號分隔的標準 CSV 檔（預設）",
            "Excel - 單一工作表的 .xlsx 活頁簿",
        ])
        .default(0)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("輸出格式選擇失敗: {}", e)))?;
    Ok(if choice == 1 {
        OutputFormat::Excel
    } else {
        OutputFormat::Csv
    })
}

pub fn get_has_headers() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("檔案第一列是否為欄位名稱？（預設為否）")
        .default(false)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("標頭選項輸入失敗: {}", e)))
}

pub fn get_delimiter_option() -> io::Result<Option<char>> {
    let items = [
        "自動偵測（預設，逐檔取樣猜測）",
        "逗號 ,",
        "Tab 字元",
        "直線 |",
        "分號 ;",
        "空格",
    ];
    let choice = Select::new()
        .with_prompt("選擇輸入分隔符號（使用方向鍵選擇，按 Enter 確認）")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("分隔符號選擇失敗: {}", e)))?;
    Ok(match choice {
        0 => None,
        i => Some(COMMON_DELIMITERS[i - 1]),
    })
}

pub fn get_extensions() -> io::Result<Vec<String>> {
    let extensions = Input::new()
        .with_prompt("輸入要轉換的副檔名（例如：.dat,.log，預設為 .dat,.log,.txt）")
        .default(".dat,.log,.txt".to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("副檔名輸入失敗: {}", e)))?
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<String>>();
    Ok(extensions)
}

pub fn get_no_progress_option() -> io::Result<bool> {
    Ok(false)
}

// 交互配置適配器
pub struct InteractiveConfigAdapter;

impl InteractiveConfigAdapter {
    pub fn new() -> Self {
        InteractiveConfigAdapter
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> Result<AppConfig, ConversionError> {
        println!("=== 歡迎使用互動模式 ===");
        let input_folder = get_input_folder()?;
        let output_folder = get_output_folder()?;
        let output_format = get_output_format()?;
        let has_headers = get_has_headers()?;
        let custom_delimiter = get_delimiter_option()?;
        let file_extensions = get_extensions()?;
        validate_extensions(&file_extensions)?;
        let no_progress = get_no_progress_option()?;

        Ok(AppConfig {
            input_folder,
            output_folder,
            file_extensions,
            output_format,
            has_headers,
            custom_delimiter,
            no_progress,
        })
    }
}
