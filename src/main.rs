mod error;

mod service {
    pub(crate) mod config_service;
}

mod config {
    pub(crate) mod config;
    pub(crate) mod ports;
}

mod action {
    pub(crate) mod cli;
    pub(crate) mod interactive;
}

mod utils {
    pub(crate) mod convert;
    pub(crate) mod detect;
    pub(crate) mod excel;
    pub(crate) mod file;
    pub(crate) mod utils;
}

use crate::action::cli::process_args;
use crate::error::ConversionError;

fn main() -> Result<(), ConversionError> {
    let args: Vec<String> = std::env::args().collect();
    let result = process_args(args)?;
    log::info!(
        "程式執行完成：共 {} 個檔案，成功 {}，失敗 {}",
        result.total_files,
        result.successful,
        result.failed
    );
    println!(
        "轉換完成！成功 {} 個檔案，失敗 {} 個",
        result.successful, result.failed
    );
    for path in &result.failed_files {
        println!("  轉換失敗：{}", path.display());
    }
    Ok(())
}
