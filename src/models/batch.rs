use serde::Serialize;

use crate::error::{ProcessingError, Result};
use crate::models::DayRecord;

/// One run's worth of validated day records, in input column order
/// (which is chronological day order). Read-only once constructed.
#[derive(Debug, Clone, Serialize)]
pub struct Batch {
    records: Vec<DayRecord>,
}

impl Batch {
    /// A batch must hold at least one record; summary statistics are
    /// undefined over an empty batch, so zero records is rejected up front.
    pub fn new(records: Vec<DayRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(ProcessingError::DataCorruption(
                "forecast contains no day columns".to_string(),
            ));
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn temperatures(&self) -> Vec<i32> {
        self.records.iter().map(|d| d.temperature()).collect()
    }

    pub fn winds(&self) -> Vec<i32> {
        self.records.iter().map(|d| d.wind()).collect()
    }

    pub fn humidities(&self) -> Vec<i32> {
        self.records.iter().map(|d| d.humidity()).collect()
    }

    pub fn precipitations(&self) -> Vec<i32> {
        self.records.iter().map(|d| d.precipitation()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CloudCover;

    #[test]
    fn test_empty_batch_rejected() {
        let result = Batch::new(vec![]);
        assert!(matches!(result, Err(ProcessingError::DataCorruption(_))));
    }

    #[test]
    fn test_metric_columns_follow_input_order() {
        let batch = Batch::new(vec![
            DayRecord::new(1, 20, 3, 40, 0, false, CloudCover::Clear),
            DayRecord::new(2, 25, 8, 55, 0, false, CloudCover::Cirrus),
        ])
        .unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.temperatures(), vec![20, 25]);
        assert_eq!(batch.winds(), vec![3, 8]);
        assert_eq!(batch.humidities(), vec![40, 55]);
        assert_eq!(batch.precipitations(), vec![0, 0]);
    }
}
