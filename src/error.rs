use std::io;
use std::path::PathBuf;
use thiserror::Error;

// 單一檔案轉換的錯誤種類；批次邊界會攔截並記錄，不會中斷整個批次
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("找不到輸入檔案：{0}")]
    NotFound(PathBuf),
    #[error("解析分隔資料失敗：{0}")]
    Parse(#[from] csv::Error),
    #[error("輸入檔案沒有可解析的欄位：{0}")]
    EmptyInput(PathBuf),
    #[error("IO 錯誤：{0}")]
    Io(#[from] io::Error),
    #[error("寫入活頁簿失敗：{0}")]
    Workbook(#[from] zip::result::ZipError),
    #[error("無效的設定：{0}")]
    InvalidConfig(String),
}
