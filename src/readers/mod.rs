pub mod forecast_reader;

pub use forecast_reader::{ForecastReader, ForecastTable, RawDayColumn};
