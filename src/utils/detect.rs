use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use log::warn;

// 候選分隔符號的固定順序，同分時依此順序取最前者
pub const COMMON_DELIMITERS: [char; 5] = [',', '\t', '|', ';', ' '];

pub const DEFAULT_SAMPLE_LINES: usize = 5;

// 偵測失敗或樣本中完全沒有候選字元時的回退值
pub const FALLBACK_DELIMITER: char = ',';

/// 取樣檔案開頭的數行，猜測最可能的欄位分隔符號。
/// 僅為啟發式：不保證選出的分隔符號能解析整個檔案。
/// 讀取失敗時記錄警告並回傳逗號，偵測錯誤絕不向外傳播。
pub fn detect_delimiter(file_path: &Path, sample_lines: usize) -> char {
    let mut counts = [0usize; COMMON_DELIMITERS.len()];

    let file = match File::open(file_path) {
        Ok(file) => file,
        Err(e) => {
            warn!("分析分隔符號時發生錯誤：{}", e);
            return FALLBACK_DELIMITER;
        }
    };

    for line in BufReader::new(file).lines().take(sample_lines) {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("分析分隔符號時發生錯誤：{}", e);
                return FALLBACK_DELIMITER;
            }
        };
        for (i, delimiter) in COMMON_DELIMITERS.iter().enumerate() {
            counts[i] += line.matches(*delimiter).count();
        }
    }

    // 嚴格大於比較：同分時保留順序較前的候選
    let mut best = 0;
    for i in 1..counts.len() {
        if counts[i] > counts[best] {
            best = i;
        }
    }

    if counts[best] == 0 {
        FALLBACK_DELIMITER
    } else {
        COMMON_DELIMITERS[best]
    }
}
