use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use log::{error, info};

use crate::config::config::OutputFormat;
use crate::config::ports::{AppConfig, ConversionPort};
use crate::error::ConversionError;
use crate::utils::detect::{detect_delimiter, DEFAULT_SAMPLE_LINES};
use crate::utils::excel::write_workbook;
use crate::utils::file::discover_files;
use crate::utils::utils::create_progress_bar;

// 單一檔案轉換的輸入，一次呼叫內不可變
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub delimiter: Option<char>,
    pub has_headers: bool,
    pub output_format: OutputFormat,
}

// 解析完成後的表格形狀：列數不含標頭列，欄數為欄位數
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableShape {
    pub rows: usize,
    pub columns: usize,
}

// 批次轉換的統計結果，批次結束後不再變動
// 不變量：total_files == successful + failed
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub total_files: usize,
    pub successful: usize,
    pub failed: usize,
    pub failed_files: Vec<PathBuf>,
}

impl BatchResult {
    pub fn new(total_files: usize) -> Self {
        BatchResult {
            total_files,
            successful: 0,
            failed: 0,
            failed_files: Vec::new(),
        }
    }
}

/// 將單一分隔文字資料檔轉換為 CSV 或 Excel 活頁簿。
/// # 參數
/// - request: 轉換輸入，delimiter 為 None 時對該檔案自動偵測分隔符號
/// # 回傳
/// - 成功時返回解析後的表格形狀，失敗時記錄一筆錯誤並返回轉換錯誤
pub fn convert_file(request: &ConversionRequest) -> Result<TableShape, ConversionError> {
    match convert_file_inner(request) {
        Ok(shape) => {
            info!(
                "成功將 '{}' 轉換為 '{}'",
                request.input_path.display(),
                request.output_path.display()
            );
            info!("列數：{}，欄數：{}", shape.rows, shape.columns);
            Ok(shape)
        }
        Err(e) => {
            error!("轉換 {} 時發生錯誤：{}", request.input_path.display(), e);
            Err(e)
        }
    }
}

fn convert_file_inner(request: &ConversionRequest) -> Result<TableShape, ConversionError> {
    if !request.input_path.exists() {
        return Err(ConversionError::NotFound(request.input_path.clone()));
    }

    let delimiter = match request.delimiter {
        Some(delimiter) => delimiter,
        None => {
            let delimiter = detect_delimiter(&request.input_path, DEFAULT_SAMPLE_LINES);
            info!("偵測到分隔符號：'{}'", delimiter);
            delimiter
        }
    };

    let (headers, rows) = read_table(&request.input_path, delimiter, request.has_headers)?;
    let columns = match &headers {
        Some(headers) => headers.len(),
        None => rows.first().map_or(0, Vec::len),
    };
    if columns == 0 {
        return Err(ConversionError::EmptyInput(request.input_path.clone()));
    }

    if let Some(parent) = request.output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    match request.output_format {
        OutputFormat::Csv => write_csv(&request.output_path, headers.as_deref(), &rows)?,
        OutputFormat::Excel => write_workbook(&request.output_path, headers.as_deref(), &rows)?,
    }

    Ok(TableShape {
        rows: rows.len(),
        columns,
    })
}

// 解析為（標頭列, 資料列）；列寬不一致由 csv 解析器回報錯誤
fn read_table(
    path: &Path,
    delimiter: char,
    has_headers: bool,
) -> Result<(Option<Vec<String>>, Vec<Vec<String>>), ConversionError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(has_headers)
        .from_path(path)?;

    let headers = if has_headers {
        Some(reader.headers()?.iter().map(|s| s.to_string()).collect())
    } else {
        None
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }
    Ok((headers, rows))
}

// 輸出一律以逗號分隔，與輸入分隔符號無關
fn write_csv(
    path: &Path,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
) -> Result<(), ConversionError> {
    let file = fs::File::create(path)?;
    let mut writer = csv::Writer::from_writer(io::BufWriter::new(file));
    if let Some(headers) = headers {
        writer.write_record(headers)?;
    }
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// 批次轉換輸入資料夾下所有符合副檔名的檔案。
/// 單一檔案的失敗只會記入統計並繼續處理下一個檔案，批次本身一定會完成。
pub fn batch_convert(config: &AppConfig) -> Result<BatchResult, ConversionError> {
    fs::create_dir_all(&config.output_folder)?;

    let files = discover_files(Path::new(&config.input_folder), &config.file_extensions)?;
    let total_files = files.len();
    info!("共發現 {} 個待轉換檔案", total_files);

    let mut result = BatchResult::new(total_files);
    let output_extension = config.output_format.output_extension();
    let pb = create_progress_bar(total_files as u64, config.no_progress);

    for (i, file_path) in files.iter().enumerate() {
        pb.set_message(format!(
            "處理檔案 {}/{}：{}",
            i + 1,
            total_files,
            file_path.display()
        ));
        info!("處理檔案 {}/{}：{}", i + 1, total_files, file_path.display());

        let stem = file_path
            .file_stem()
            .unwrap_or_else(|| std::ffi::OsStr::new("output"))
            .to_string_lossy();
        let output_path =
            Path::new(&config.output_folder).join(format!("{}.{}", stem, output_extension));

        let request = ConversionRequest {
            input_path: file_path.clone(),
            output_path,
            delimiter: config.custom_delimiter,
            has_headers: config.has_headers,
            output_format: config.output_format,
        };

        match convert_file(&request) {
            Ok(_) => {
                result.successful += 1;
                pb.inc(1);
            }
            Err(e) => {
                error!("處理檔案 {} 失敗：{}", file_path.display(), e);
                result.failed += 1;
                result.failed_files.push(file_path.clone());
            }
        }
    }

    pb.finish_with_message("處理完成");
    info!("轉換完成：{} 成功，{} 失敗", result.successful, result.failed);
    Ok(result)
}

// 轉換執行適配器
pub struct ConversionAdapter;

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> Result<BatchResult, ConversionError> {
        batch_convert(&config)
    }
}
