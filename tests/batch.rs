use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use file_to_csv::config::config::OutputFormat;
use file_to_csv::config::ports::{AppConfig, ConversionPort};
use file_to_csv::error::ConversionError;
use file_to_csv::utils::convert::{batch_convert, convert_file, ConversionAdapter, ConversionRequest};

fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

fn config(input: &Path, output: &Path) -> AppConfig {
    AppConfig {
        input_folder: input.to_string_lossy().to_string(),
        output_folder: output.to_string_lossy().to_string(),
        file_extensions: vec![".dat".to_string(), ".log".to_string(), ".txt".to_string()],
        output_format: OutputFormat::Csv,
        has_headers: false,
        custom_delimiter: None,
        no_progress: true,
    }
}

#[test]
fn batch_converts_every_matching_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data");
    let output = dir.path().join("output");
    fs::create_dir(&input).unwrap();
    write_input(&input, "a.dat", "1|2|3\n4|5|6\n");
    write_input(&input, "b.log", "x;y\nz;w\n");
    write_input(&input, "c.txt", "p\tq\nr\ts\n");
    write_input(&input, "ignored.csv", "1,2\n");

    let result = batch_convert(&config(&input, &output)).unwrap();
    assert_eq!(result.total_files, 3);
    assert_eq!(result.successful, 3);
    assert_eq!(result.failed, 0);
    assert!(result.failed_files.is_empty());

    assert_eq!(fs::read_to_string(output.join("a.csv")).unwrap(), "1,2,3\n4,5,6\n");
    assert_eq!(fs::read_to_string(output.join("b.csv")).unwrap(), "x,y\nz,w\n");
    assert_eq!(fs::read_to_string(output.join("c.csv")).unwrap(), "p,q\nr,s\n");
    assert!(!output.join("ignored.csv").exists());
}

#[test]
fn one_malformed_file_never_aborts_the_batch() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data");
    let output = dir.path().join("output");
    fs::create_dir(&input).unwrap();
    write_input(&input, "good1.dat", "1,2\n3,4\n");
    let bad = write_input(&input, "bad.dat", "1,2,3\n4,5\n");
    write_input(&input, "good2.dat", "5,6\n7,8\n");

    let result = batch_convert(&config(&input, &output)).unwrap();
    assert_eq!(result.total_files, 3);
    assert_eq!(result.successful, 2);
    assert_eq!(result.failed, 1);
    assert_eq!(result.failed_files, vec![bad]);
    assert_eq!(result.total_files, result.successful + result.failed);

    assert_eq!(fs::read_to_string(output.join("good1.csv")).unwrap(), "1,2\n3,4\n");
    assert_eq!(fs::read_to_string(output.join("good2.csv")).unwrap(), "5,6\n7,8\n");
}

#[test]
fn custom_delimiter_is_shared_across_the_batch() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data");
    let output = dir.path().join("output");
    fs::create_dir(&input).unwrap();
    // 以逗號解析時這個檔案是單欄表，仍應成功
    write_input(&input, "a.dat", "1|2\n3|4\n");

    let mut cfg = config(&input, &output);
    cfg.custom_delimiter = Some(',');
    let result = batch_convert(&cfg).unwrap();
    assert_eq!(result.successful, 1);
    assert_eq!(fs::read_to_string(output.join("a.csv")).unwrap(), "1|2\n3|4\n");
}

#[test]
fn missing_input_folder_finalizes_with_zero_counts() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("no_such_folder");
    let output = dir.path().join("output");

    let result = batch_convert(&config(&input, &output)).unwrap();
    assert_eq!(result.total_files, 0);
    assert_eq!(result.successful, 0);
    assert_eq!(result.failed, 0);
    assert!(output.is_dir());
}

#[test]
fn conversion_port_adapter_runs_the_batch() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data");
    let output = dir.path().join("output");
    fs::create_dir(&input).unwrap();
    write_input(&input, "a.dat", "1,2\n");

    let port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    let result = port.execute(config(&input, &output)).unwrap();
    assert_eq!(result.successful, 1);
}

#[test]
fn headers_survive_csv_round_trip() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "in.dat", "a,b,c\n1,2,3\n");
    let output = dir.path().join("out.csv");

    let request = ConversionRequest {
        input_path: input,
        output_path: output.clone(),
        delimiter: None,
        has_headers: true,
        output_format: OutputFormat::Csv,
    };
    let shape = convert_file(&request).unwrap();
    assert_eq!(shape.rows, 1);
    assert_eq!(shape.columns, 3);
    assert_eq!(fs::read_to_string(&output).unwrap(), "a,b,c\n1,2,3\n");
}

#[test]
fn csv_round_trip_preserves_the_cell_grid() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "in.dat", "a|b|c\nd|e|f\ng|h|i\n");
    let output = dir.path().join("out.csv");

    let request = ConversionRequest {
        input_path: input,
        output_path: output.clone(),
        delimiter: Some('|'),
        has_headers: false,
        output_format: OutputFormat::Csv,
    };
    convert_file(&request).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(&output)
        .unwrap();
    let grid: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(|s| s.to_string()).collect())
        .collect();
    assert_eq!(
        grid,
        vec![
            vec!["a", "b", "c"],
            vec!["d", "e", "f"],
            vec!["g", "h", "i"],
        ]
    );
}

#[test]
fn excel_batch_writes_xlsx_workbooks() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data");
    let output = dir.path().join("output");
    fs::create_dir(&input).unwrap();
    write_input(&input, "a.dat", "h1,h2\n1,2\n");

    let mut cfg = config(&input, &output);
    cfg.output_format = OutputFormat::Excel;
    cfg.has_headers = true;
    let result = batch_convert(&cfg).unwrap();
    assert_eq!(result.successful, 1);

    let workbook = output.join("a.xlsx");
    assert!(workbook.exists());
    let mut archive = zip::ZipArchive::new(File::open(&workbook).unwrap()).unwrap();
    assert!(archive.by_name("xl/worksheets/sheet1.xml").is_ok());
}

#[test]
fn batch_records_a_missing_file_without_aborting() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("output");
    let missing = dir.path().join("gone.dat");

    let request = ConversionRequest {
        input_path: missing.clone(),
        output_path: output.join("gone.csv"),
        delimiter: None,
        has_headers: false,
        output_format: OutputFormat::Csv,
    };
    assert!(matches!(
        convert_file(&request),
        Err(ConversionError::NotFound(path)) if path == missing
    ));
}

#[test]
fn failed_parse_leaves_stale_output_untouched() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data");
    let output = dir.path().join("output");
    fs::create_dir(&input).unwrap();
    fs::create_dir(&output).unwrap();
    let stale = output.join("bad.csv");
    fs::write(&stale, "previous run\n").unwrap();
    write_input(&input, "bad.dat", "");

    let result = batch_convert(&config(&input, &output)).unwrap();
    assert_eq!(result.failed, 1);
    // 空檔在開啟輸出檔之前就失敗，舊輸出保持原樣
    assert_eq!(fs::read_to_string(&stale).unwrap(), "previous run\n");
}
