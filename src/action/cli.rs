use clap::Parser;
use crate::action::interactive::InteractiveConfigAdapter;
use crate::config::config::{validate_delimiter, validate_extensions, Cli};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::error::ConversionError;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::convert::{BatchResult, ConversionAdapter};
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> Result<BatchResult, ConversionError> {
    if args.len() == 1 {
        // 不帶參數時不解析任何旗標，直接以預設配置執行批次轉換
        setup_logging("info")?;
        log::info!("未提供任何參數，使用預設配置：輸入 data，輸出 output，CSV 格式");
        run_conversion(Box::new(DefaultConfigAdapter::new()))
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> Result<BatchResult, ConversionError> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let config_port: Box<dyn ConfigPort> = if cli.interactive {
        Box::new(InteractiveConfigAdapter::new())
    } else {
        Box::new(CliConfigAdapter::new(cli))
    };
    run_conversion(config_port)
}

fn run_conversion(config_port: Box<dyn ConfigPort>) -> Result<BatchResult, ConversionError> {
    let config_service = ConfigService::new(config_port);
    let config = config_service.get_config()?;
    log::info!(
        "開始批次轉換，輸入資料夾：{}，輸出資料夾：{}，副檔名：{:?}",
        config.input_folder,
        config.output_folder,
        config.file_extensions
    );

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    conversion_port.execute(config)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> Result<AppConfig, ConversionError> {
        validate_extensions(&self.cli.extensions)?;
        validate_delimiter(self.cli.delimiter)?;

        Ok(AppConfig {
            input_folder: self.cli.input.clone(),
            output_folder: self.cli.output.clone(),
            file_extensions: self.cli.extensions.clone(),
            output_format: self.cli.format,
            has_headers: self.cli.has_headers,
            custom_delimiter: self.cli.delimiter,
            no_progress: self.cli.no_progress,
        })
    }
}
