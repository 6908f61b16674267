pub mod ranker;
pub mod selection;
pub mod statistics;
pub mod validator;

pub use ranker::rank;
pub use selection::{median, select};
pub use statistics::{summarize, summarize_batch, BatchSummary, MetricSummary};
pub use validator::RecordValidator;
