use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use log::warn;

// 蒐集輸入資料夾第一層中符合副檔名清單的檔案。
// 順序為副檔名清單順序，同一副檔名內依檔名排序，確保跨平台結果一致。
// 資料夾不存在時視為空批次，不算錯誤。
pub fn discover_files(input_folder: &Path, file_extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    if !input_folder.is_dir() {
        warn!("輸入資料夾不存在：{}", input_folder.display());
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(input_folder)? {
        let path = entry?.path();
        if path.is_file() {
            entries.push(path);
        }
    }

    let mut files = Vec::new();
    for extension in file_extensions {
        let mut matched: Vec<PathBuf> = entries
            .iter()
            .filter(|path| matches_extension(path, extension))
            .cloned()
            .collect();
        matched.sort();
        files.extend(matched);
    }
    Ok(files)
}

pub fn matches_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(extension))
        .unwrap_or(false)
}
