use validator::Validate;

use crate::error::{ProcessingError, Result};
use crate::models::{Batch, CloudCover, DayRecord};
use crate::readers::{ForecastTable, RawDayColumn};
use crate::utils::constants::LIGHTNING_YES;

/// Plausibility bounds for the parsed numeric fields. These are wider than
/// the launch thresholds on purpose: a 45 degree day is real weather that
/// simply disqualifies the launch, while a 500 degree day is corrupt input.
/// Wind carries no upper bound here, mirroring the asymmetry of the
/// original rules.
#[derive(Debug, Validate)]
struct RawDayValues {
    #[validate(range(min = -50, max = 60))]
    temperature: i32,

    #[validate(range(min = 0))]
    wind: i32,

    #[validate(range(min = 0, max = 100))]
    humidity: i32,

    #[validate(range(min = 0, max = 100))]
    precipitation: i32,
}

/// Fail-fast batch validator: the first field that fails to parse or falls
/// outside its plausible range aborts the whole run. No partial batch is
/// ever produced.
pub struct RecordValidator;

impl RecordValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_batch(&self, table: &ForecastTable) -> Result<Batch> {
        let columns = table.day_columns();
        let mut records = Vec::with_capacity(columns.len());

        for column in &columns {
            records.push(self.validate_column(column)?);
        }

        tracing::debug!(days = records.len(), "validated forecast batch");
        Batch::new(records)
    }

    fn validate_column(&self, raw: &RawDayColumn) -> Result<DayRecord> {
        let values = RawDayValues {
            temperature: parse_field(raw.id, "temperature", &raw.temperature)?,
            wind: parse_field(raw.id, "wind", &raw.wind)?,
            humidity: parse_field(raw.id, "humidity", &raw.humidity)?,
            precipitation: parse_field(raw.id, "precipitation", &raw.precipitation)?,
        };

        values.validate().map_err(|errors| {
            ProcessingError::DataCorruption(format!("day {}: {}", raw.id, errors))
        })?;

        let lightning = raw.lightning == LIGHTNING_YES;
        let clouds = CloudCover::parse(&raw.clouds);

        Ok(DayRecord::new(
            raw.id,
            values.temperature,
            values.wind,
            values.humidity,
            values.precipitation,
            lightning,
            clouds,
        ))
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_field(id: u32, name: &str, value: &str) -> Result<i32> {
    value.parse::<i32>().map_err(|_| {
        ProcessingError::DataCorruption(format!(
            "day {}: {} value '{}' is not an integer",
            id, name, value
        ))
    })
}
