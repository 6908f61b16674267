/// Forecast table row indices (row 0 holds the day labels)
pub const ROW_DAYS: usize = 0;
pub const ROW_TEMPERATURE: usize = 1;
pub const ROW_WIND: usize = 2;
pub const ROW_HUMIDITY: usize = 3;
pub const ROW_PRECIPITATION: usize = 4;
pub const ROW_LIGHTNING: usize = 5;
pub const ROW_CLOUDS: usize = 6;
pub const FORECAST_ROWS: usize = 7;

/// Plausibility bounds enforced by the record validator
pub const MIN_VALID_TEMP: i32 = -50;
pub const MAX_VALID_TEMP: i32 = 60;
pub const MAX_VALID_HUMIDITY: i32 = 100;
pub const MAX_VALID_PRECIPITATION: i32 = 100;

/// Launch eligibility thresholds
pub const MIN_LAUNCH_TEMP: i32 = 2;
pub const MAX_LAUNCH_TEMP: i32 = 31;
pub const MAX_LAUNCH_WIND: i32 = 10;
pub const MAX_LAUNCH_HUMIDITY: i32 = 60;

/// Lightning field value that marks a stormy day
pub const LIGHTNING_YES: &str = "Yes";

/// Summary column labels appended to the report header row
pub const SUMMARY_COLUMNS: &str = "Average,Min,Max,Median";

/// Label of the trailing report row that carries the ranking
pub const RANKING_ROW_LABEL: &str = "Most appropriate launch day";
