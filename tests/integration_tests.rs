use std::fs;
use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use launchday_processor::models::Batch;
use launchday_processor::processors::{rank, summarize_batch, RecordValidator};
use launchday_processor::readers::{ForecastReader, ForecastTable};
use launchday_processor::writers::{LaunchReport, ReportWriter};
use launchday_processor::ProcessingError;

const SAMPLE_FORECAST: &str = "\
Day,1,2,3,4,5
Temperature,20,19,24,28,31
Wind,1,20,5,4,10
Humidity,5,60,80,50,60
Precipitation,0,80,10,0,0
Lightning,No,Yes,No,No,No
Clouds,Clear,Nimbus,Cirrus,Stratus,Cumulus
";

fn write_forecast(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("forecast.csv");
    let mut file = fs::File::create(&path).expect("Failed to create forecast file");
    write!(file, "{}", contents).expect("Failed to write forecast file");
    path
}

fn load_batch(path: &std::path::Path) -> (ForecastTable, Batch) {
    let table = ForecastReader::new().read(path).expect("read failed");
    let batch = RecordValidator::new()
        .validate_batch(&table)
        .expect("validation failed");
    (table, batch)
}

#[test]
fn test_end_to_end_report() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_forecast(&dir, SAMPLE_FORECAST);

    let (table, batch) = load_batch(&input);
    let summary = summarize_batch(&batch).unwrap();
    let ranking = rank(&batch);
    let report = LaunchReport::new(summary, ranking);

    let output = dir.path().join("report.csv");
    ReportWriter::new().write(&table, &report, &output).unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    let expected = concat!(
        "Day,1,2,3,4,5,Average,Min,Max,Median\n",
        "Temperature,20,19,24,28,31,24,19,31,24\n",
        "Wind,1,20,5,4,10,8,1,20,5\n",
        "Humidity,5,60,80,50,60,51,5,80,60\n",
        "Precipitation,0,80,10,0,0,18,0,80,0\n",
        "Lightning,No,Yes,No,No,No, , , , \n",
        "Clouds,Clear,Nimbus,Cirrus,Stratus,Cumulus, , , , \n",
        "Most appropriate launch day,1,4\n",
    );

    assert_eq!(contents, expected);
}

#[test]
fn test_corrupted_forecast_aborts_without_output() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let corrupted = SAMPLE_FORECAST.replace("Humidity,5,60,80,50,60", "Humidity,5,60,101,50,60");
    let input = write_forecast(&dir, &corrupted);

    let table = ForecastReader::new().read(&input).unwrap();
    let result = RecordValidator::new().validate_batch(&table);

    assert!(matches!(result, Err(ProcessingError::DataCorruption(_))));
}

#[test]
fn test_negative_precipitation_aborts() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let corrupted =
        SAMPLE_FORECAST.replace("Precipitation,0,80,10,0,0", "Precipitation,0,80,10,-1,0");
    let input = write_forecast(&dir, &corrupted);

    let table = ForecastReader::new().read(&input).unwrap();
    let result = RecordValidator::new().validate_batch(&table);

    assert!(matches!(result, Err(ProcessingError::DataCorruption(_))));
}

#[test]
fn test_reprocessing_is_idempotent() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_forecast(&dir, SAMPLE_FORECAST);

    let (_table, batch) = load_batch(&input);

    let first_summary = summarize_batch(&batch).unwrap();
    let second_summary = summarize_batch(&batch).unwrap();
    assert_eq!(first_summary, second_summary);

    assert_eq!(rank(&batch), rank(&batch));
}

#[test]
fn test_no_eligible_day_is_a_valid_outcome() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let forecast = "\
Day,1,2
Temperature,1,32
Wind,0,0
Humidity,0,0
Precipitation,0,0
Lightning,No,No
Clouds,Clear,Clear
";
    let input = write_forecast(&dir, forecast);

    let (table, batch) = load_batch(&input);
    let summary = summarize_batch(&batch).unwrap();
    let ranking = rank(&batch);
    assert!(ranking.is_empty());

    let report = LaunchReport::new(summary, ranking);
    let output = dir.path().join("report.csv");
    ReportWriter::new().write(&table, &report, &output).unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    assert!(contents.ends_with("Most appropriate launch day\n"));
}
