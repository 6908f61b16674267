pub mod batch;
pub mod day;

pub use batch::Batch;
pub use day::{CloudCover, DayRecord, Eligibility};
