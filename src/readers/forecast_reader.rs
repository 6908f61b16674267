use csv::{ReaderBuilder, Trim};
use std::path::Path;

use crate::error::{ProcessingError, Result};
use crate::utils::constants::{
    FORECAST_ROWS, ROW_CLOUDS, ROW_HUMIDITY, ROW_LIGHTNING, ROW_PRECIPITATION, ROW_TEMPERATURE,
    ROW_WIND,
};

/// Raw string fields for one day column, prior to any parsing. Conversion
/// and range checking belong to the record validator, not the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDayColumn {
    pub id: u32,
    pub temperature: String,
    pub wind: String,
    pub humidity: String,
    pub precipitation: String,
    pub lightning: String,
    pub clouds: String,
}

/// The forecast table as read from disk: seven rows (day labels,
/// temperature, wind, humidity, precipitation, lightning, clouds), one
/// column per day plus a leading row-label column.
#[derive(Debug, Clone)]
pub struct ForecastTable {
    rows: Vec<Vec<String>>,
}

impl ForecastTable {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self> {
        if rows.len() != FORECAST_ROWS {
            return Err(ProcessingError::InvalidFormat(format!(
                "expected {} forecast rows, found {}",
                FORECAST_ROWS,
                rows.len()
            )));
        }

        let width = rows[0].len();
        if width < 2 {
            return Err(ProcessingError::InvalidFormat(
                "forecast has no day columns".to_string(),
            ));
        }

        for (index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ProcessingError::InvalidFormat(format!(
                    "row {} has {} columns, expected {}",
                    index + 1,
                    row.len(),
                    width
                )));
            }
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of day columns (the leading cell of each row is its label).
    pub fn day_count(&self) -> usize {
        self.rows[0].len() - 1
    }

    /// Day columns in input order, with 1-based ids matching their column
    /// position.
    pub fn day_columns(&self) -> Vec<RawDayColumn> {
        (1..=self.day_count())
            .map(|column| RawDayColumn {
                id: column as u32,
                temperature: self.rows[ROW_TEMPERATURE][column].clone(),
                wind: self.rows[ROW_WIND][column].clone(),
                humidity: self.rows[ROW_HUMIDITY][column].clone(),
                precipitation: self.rows[ROW_PRECIPITATION][column].clone(),
                lightning: self.rows[ROW_LIGHTNING][column].clone(),
                clouds: self.rows[ROW_CLOUDS][column].clone(),
            })
            .collect()
    }
}

pub struct ForecastReader;

impl ForecastReader {
    pub fn new() -> Self {
        Self
    }

    /// Read a forecast CSV file into a structurally checked table.
    pub fn read(&self, path: &Path) -> Result<ForecastTable> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_path(path)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        ForecastTable::from_rows(rows)
    }
}

impl Default for ForecastReader {
    fn default() -> Self {
        Self::new()
    }
}
