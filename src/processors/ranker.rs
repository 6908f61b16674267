use crate::models::{Batch, DayRecord};

/// Ranked ids of the launch-eligible days, best first: ascending wind,
/// with humidity breaking ties. `sort_by` is stable, so days tied on both
/// keys keep their batch order. An empty result means no day meets the
/// criteria; it is not an error.
pub fn rank(batch: &Batch) -> Vec<u32> {
    let mut eligible: Vec<&DayRecord> = batch
        .records()
        .iter()
        .filter(|day| day.is_eligible())
        .collect();

    eligible.sort_by(|a, b| {
        a.wind()
            .cmp(&b.wind())
            .then_with(|| a.humidity().cmp(&b.humidity()))
    });

    eligible.into_iter().map(|day| day.id()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CloudCover;

    fn eligible_day(id: u32, wind: i32, humidity: i32) -> DayRecord {
        DayRecord::new(id, 20, wind, humidity, 0, false, CloudCover::Clear)
    }

    #[test]
    fn test_rank_orders_by_wind_then_humidity() {
        let batch = Batch::new(vec![
            eligible_day(1, 5, 10), // A
            eligible_day(2, 5, 5),  // B
            eligible_day(3, 3, 50), // C
        ])
        .unwrap();

        assert_eq!(rank(&batch), vec![3, 2, 1]);
    }

    #[test]
    fn test_full_ties_keep_batch_order() {
        let batch = Batch::new(vec![
            eligible_day(1, 5, 10),
            eligible_day(2, 5, 10),
            eligible_day(3, 5, 10),
        ])
        .unwrap();

        assert_eq!(rank(&batch), vec![1, 2, 3]);
    }

    #[test]
    fn test_disqualified_days_are_dropped() {
        let batch = Batch::new(vec![
            DayRecord::new(1, 20, 15, 10, 0, false, CloudCover::Clear), // wind too high
            eligible_day(2, 4, 30),
            DayRecord::new(3, 20, 2, 10, 0, false, CloudCover::Cumulus),
        ])
        .unwrap();

        assert_eq!(rank(&batch), vec![2]);
    }

    #[test]
    fn test_all_disqualified_yields_empty_ranking() {
        let batch = Batch::new(vec![
            DayRecord::new(1, 1, 0, 0, 0, false, CloudCover::Clear),
            DayRecord::new(2, 20, 0, 0, 5, false, CloudCover::Clear),
        ])
        .unwrap();

        assert!(rank(&batch).is_empty());
    }

    #[test]
    fn test_rank_is_idempotent() {
        let batch = Batch::new(vec![
            eligible_day(1, 5, 10),
            eligible_day(2, 3, 50),
            eligible_day(3, 5, 5),
        ])
        .unwrap();

        let first = rank(&batch);
        let second = rank(&batch);
        assert_eq!(first, second);
    }
}
